use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128, Uint256};
use cw20::Denom;

use auction_common::query::QueryOptions;

use crate::state::{Auction, Config, Refund};

#[cw_serde]
pub struct InstantiateMsg {
    /// The denom that auction start prices are quoted in
    pub denom: String,
    /// Maximum age of an oracle price before it is considered stale, in seconds
    pub max_price_age: u64,
    /// Initial price feed registrations. Units not registered here or later
    /// via RegisterPriceFeed are not accepted for bidding.
    pub price_feeds: Vec<PriceFeed>,
}

#[cw_serde]
pub struct PriceFeed {
    pub denom: Denom,
    pub address: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    CreateAuction {
        collection: String,
        token_id: String,
        start_price: Uint128,
        duration: u64,
    },
    PlaceBid {
        auction_id: u64,
        denom: Denom,
        amount: Uint128,
    },
    SettleAuction {
        auction_id: u64,
    },
    ClaimRefunds {},
    RegisterPriceFeed {
        denom: Denom,
        address: String,
    },
    UpdateConfig {
        max_price_age: Option<u64>,
    },
    UpdateOwner {
        new_owner: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(Addr)]
    Owner {},
    #[returns(Auction)]
    Auction { auction_id: u64 },
    #[returns(Vec<(u64, Auction)>)]
    Auctions {
        query_options: Option<QueryOptions<u64>>,
    },
    #[returns(Vec<(u64, Auction)>)]
    AuctionsBySeller {
        seller: String,
        query_options: Option<QueryOptions<u64>>,
    },
    #[returns(Option<Addr>)]
    PriceFeed { denom: Denom },
    #[returns(Vec<Refund>)]
    Refunds { recipient: String },
    #[returns(Uint256)]
    NormalizedValue { denom: Denom, amount: Uint128 },
}
