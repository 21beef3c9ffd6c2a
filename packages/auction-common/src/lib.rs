mod errors;
pub mod nft;
pub mod payment;
pub mod query;

pub use crate::errors::AuctionCommonError;
