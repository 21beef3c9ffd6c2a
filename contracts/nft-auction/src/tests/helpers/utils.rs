use anyhow::Error;
use cosmwasm_std::{Uint256, Uint128};
use cw_multi_test::{App, AppResponse};

use crate::oracle::NORMALIZED_DECIMALS;
use crate::tests::helpers::constants::FEED_DECIMALS;

pub fn assert_error(res: Result<AppResponse, Error>, expected: String) {
    assert_eq!(res.unwrap_err().source().unwrap().to_string(), expected);
}

pub fn advance_time(app: &mut App, seconds: u64) {
    app.update_block(|block| {
        block.time = block.time.plus_seconds(seconds);
        block.height += 1;
    });
}

/// Mirrors the contract's normalization for an 8-decimal feed
pub fn normalized(amount: u128, feed_price: u128) -> Uint256 {
    Uint256::from(Uint128::new(amount))
        * Uint256::from(Uint128::new(feed_price))
        * Uint256::from(10u128).pow((NORMALIZED_DECIMALS - FEED_DECIMALS) as u32)
}
