#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use cosmwasm_std::{
    to_binary, Addr, Binary, Deps, Env, Order, StdError, StdResult, Uint128, Uint256,
};
use cw20::Denom;
use cw_storage_plus::Bound;

use auction_common::payment::denom_key;
use auction_common::query::{unpack_query_options, QueryOptions};

use crate::msg::QueryMsg;
use crate::oracle::normalized_value;
use crate::state::{auctions, Auction, Refund, CONFIG, OWNER, PRICE_FEEDS, REFUNDS};

// Query limits
const DEFAULT_QUERY_LIMIT: u32 = 10;
const MAX_QUERY_LIMIT: u32 = 100;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::Owner {} => to_binary(&OWNER.load(deps.storage)?),
        QueryMsg::Auction { auction_id } => to_binary(&query_auction(deps, auction_id)?),
        QueryMsg::Auctions { query_options } => to_binary(&query_auctions(
            deps,
            query_options.unwrap_or_default(),
        )?),
        QueryMsg::AuctionsBySeller {
            seller,
            query_options,
        } => to_binary(&query_auctions_by_seller(
            deps,
            seller,
            query_options.unwrap_or_default(),
        )?),
        QueryMsg::PriceFeed { denom } => {
            to_binary(&PRICE_FEEDS.may_load(deps.storage, denom_key(&denom))?)
        }
        QueryMsg::Refunds { recipient } => to_binary(&query_refunds(deps, recipient)?),
        QueryMsg::NormalizedValue { denom, amount } => {
            to_binary(&query_normalized_value(deps, env, denom, amount)?)
        }
    }
}

pub fn query_auction(deps: Deps, auction_id: u64) -> StdResult<Auction> {
    auctions().load(deps.storage, auction_id)
}

pub fn query_auctions(
    deps: Deps,
    query_options: QueryOptions<u64>,
) -> StdResult<Vec<(u64, Auction)>> {
    let (limit, order, min, max) = unpack_query_options(
        query_options,
        Bound::exclusive,
        DEFAULT_QUERY_LIMIT,
        MAX_QUERY_LIMIT,
    );

    auctions()
        .range(deps.storage, min, max, order)
        .take(limit)
        .collect::<StdResult<_>>()
}

pub fn query_auctions_by_seller(
    deps: Deps,
    seller: String,
    query_options: QueryOptions<u64>,
) -> StdResult<Vec<(u64, Auction)>> {
    deps.api.addr_validate(&seller)?;

    let (limit, order, min, max) = unpack_query_options(
        query_options,
        Bound::exclusive,
        DEFAULT_QUERY_LIMIT,
        MAX_QUERY_LIMIT,
    );

    auctions()
        .idx
        .seller
        .prefix(seller)
        .range(deps.storage, min, max, order)
        .take(limit)
        .collect::<StdResult<_>>()
}

pub fn query_refunds(deps: Deps, recipient: String) -> StdResult<Vec<Refund>> {
    let recipient = deps.api.addr_validate(&recipient)?;

    REFUNDS
        .prefix(recipient)
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, refund)| refund))
        .collect::<StdResult<_>>()
}

pub fn query_normalized_value(
    deps: Deps,
    env: Env,
    denom: Denom,
    amount: Uint128,
) -> StdResult<Uint256> {
    let config = CONFIG.load(deps.storage)?;
    normalized_value(deps, &config, env.block.time, &denom, amount)
        .map_err(|err| StdError::generic_err(err.to_string()))
}
