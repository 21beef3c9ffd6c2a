//! # NFT Auction
//!
//! This CosmWasm smart contract implements an oracle-aware auction for cw721 assets. Sellers escrow an NFT and set a start price in the listing denom; bidders compete in any registered payment unit (a bank denom or a cw20 token), and bids are compared through per-unit price feeds so heterogeneous currencies order consistently. Auction records are permanent: settlement marks them terminal instead of deleting them.
//!
//! ## Messages
//!
//! The contract functionality is implemented in the following executable messages.
//!
//! **CreateAuction**: Allows the owner of an NFT to list it for auction. The caller sets the start price (quoted in the configured listing denom) and the bidding window duration. The NFT must have been approved for transfer beforehand; it is pulled into escrow when the auction is created and the bidding window opens immediately.
//!
//! **PlaceBid**: Allows a participant to bid on an open auction in any payment unit with a registered price feed. The bid's oracle-normalized value must strictly exceed the normalized value of the current leader (or of the start price when no bid exists). Native bids must attach exactly the declared amount; cw20 bids are pulled via a prior allowance. An outbid leader's funds are credited to a pull-based refund escrow rather than pushed back, so a refusing payee can never block the auction.
//!
//! **ClaimRefunds**: Pays out all escrowed refunds owed to the caller, in each refund's original payment unit.
//!
//! **SettleAuction**: Allows anyone to settle an auction once its window has elapsed. With a winning bid the NFT goes to the bidder and the escrowed funds to the seller; with no bids the NFT returns to the seller. The terminal flag is committed before any transfer is dispatched.
//!
//! **RegisterPriceFeed**: Allows the contract owner to register or replace the price feed for a payment unit. Units without a feed are not accepted for bidding.
//!
//! **UpdateConfig / UpdateOwner**: Owner-gated parameter and ownership changes.
//!
//! Upgrades go through the `migrate` entry point: the stored cw2 contract name must match and the version must strictly increase, with versioned storage steps bridging older layouts.

mod error;
pub mod execute;
mod helpers;
pub mod instantiate;
pub mod migrate;
pub mod msg;
pub mod oracle;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
