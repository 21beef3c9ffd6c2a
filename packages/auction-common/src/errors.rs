use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AuctionCommonError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Zero amount payment")]
    ZeroAmountPayment,
}
