use cosmwasm_schema::cw_serde;
use cosmwasm_std::{ensure, Deps, Timestamp, Uint128, Uint256};
use cw20::Denom;

use auction_common::payment::denom_key;

use crate::state::{Config, PRICE_FEEDS};
use crate::ContractError;

/// Fixed-point precision that all comparable values are scaled to.
/// Feeds may report fewer decimals; never more.
pub const NORMALIZED_DECIMALS: u8 = 18;

/// Query interface every registered price feed must implement
#[cw_serde]
pub enum PriceFeedQueryMsg {
    LatestPrice {},
}

#[cw_serde]
pub struct LatestPriceResponse {
    /// Price of one base unit of the payment unit, fixed-point with `decimals` decimals
    pub price: Uint128,
    pub decimals: u8,
    /// Time the feed last wrote the price
    pub updated_at: Timestamp,
}

/// Converts an amount in a given payment unit into the common comparison
/// scale via the unit's registered price feed. Feeds are untrusted external
/// data, so the reported price is bounds- and freshness-checked, and all
/// arithmetic is checked.
pub fn normalized_value(
    deps: Deps,
    config: &Config,
    block_time: Timestamp,
    denom: &Denom,
    amount: Uint128,
) -> Result<Uint256, ContractError> {
    let unit = denom_key(denom);
    let feed = PRICE_FEEDS
        .may_load(deps.storage, unit.clone())?
        .ok_or(ContractError::UnsupportedUnit { unit })?;

    let price_response: LatestPriceResponse = deps
        .querier
        .query_wasm_smart(&feed, &PriceFeedQueryMsg::LatestPrice {})?;

    ensure!(
        !price_response.price.is_zero() && price_response.decimals <= NORMALIZED_DECIMALS,
        ContractError::InvalidPrice {
            feed,
            price: price_response.price,
        }
    );
    ensure!(
        price_response.updated_at.plus_seconds(config.max_price_age) >= block_time,
        ContractError::StalePrice {
            feed,
            updated_at: price_response.updated_at,
        }
    );

    let scale = Uint256::from(10u128)
        .checked_pow((NORMALIZED_DECIMALS - price_response.decimals) as u32)
        .map_err(|_| ContractError::ArithmeticOverflow {})?;

    Uint256::from(amount)
        .checked_mul(Uint256::from(price_response.price))
        .and_then(|value| value.checked_mul(scale))
        .map_err(|_| ContractError::ArithmeticOverflow {})
}
