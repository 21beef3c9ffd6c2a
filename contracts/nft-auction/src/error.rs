use auction_common::AuctionCommonError;
use cosmwasm_std::{Addr, Coin, StdError, Timestamp, Uint128, Uint256};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("{0}")]
    AuctionCommonError(#[from] AuctionCommonError),

    #[error("InvalidInput: {0}")]
    InvalidInput(String),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("AuctionNotFound: {auction_id}")]
    AuctionNotFound { auction_id: u64 },

    #[error("AuctionNotStarted")]
    AuctionNotStarted {},

    #[error("AuctionStillOpen")]
    AuctionStillOpen {},

    #[error("AuctionEnded")]
    AuctionEnded {},

    #[error("AuctionAlreadyEnded")]
    AuctionAlreadyEnded {},

    #[error("SellerShouldNotBid")]
    SellerShouldNotBid {},

    #[error("BidTooLow: normalized bid {bid} must exceed {min}")]
    BidTooLow { bid: Uint256, min: Uint256 },

    #[error("IncorrectPayment: expected {expected}")]
    IncorrectPayment { expected: Coin },

    #[error("UnsupportedUnit: {unit}")]
    UnsupportedUnit { unit: String },

    #[error("StalePrice: feed {feed} last updated at {updated_at}")]
    StalePrice { feed: Addr, updated_at: Timestamp },

    #[error("InvalidPrice: feed {feed} reported {price}")]
    InvalidPrice { feed: Addr, price: Uint128 },

    #[error("ArithmeticOverflow")]
    ArithmeticOverflow {},

    #[error("NothingToClaim")]
    NothingToClaim {},

    #[error("InvalidImplementation: expected {expected}, found {actual}")]
    InvalidImplementation { expected: String, actual: String },

    #[error("WrongVersion: cannot migrate from {current} to {target}")]
    WrongVersion { current: String, target: String },
}
