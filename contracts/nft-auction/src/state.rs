use cosmwasm_schema::cw_serde;
use cosmwasm_std::{ensure, Addr, StdResult, Storage, Timestamp, Uint128};
use cw20::Denom;
use cw_storage_macro::index_list;
use cw_storage_plus::{IndexedMap, Item, Map, MultiIndex};

use crate::ContractError;

#[cw_serde]
pub struct Config {
    /// Denom that auction start prices are quoted in
    pub denom: String,
    /// Maximum age of an oracle price before it is considered stale, in seconds
    pub max_price_age: u64,
}

impl Config {
    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), ContractError> {
        self.validate()?;
        CONFIG.save(storage, self)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), ContractError> {
        ensure!(
            !self.denom.is_empty(),
            ContractError::InvalidInput("denom must not be empty".to_string())
        );
        ensure!(
            self.max_price_age > 0,
            ContractError::InvalidInput("max_price_age must be greater than zero".to_string())
        );
        Ok(())
    }
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const OWNER: Item<Addr> = Item::new("owner");

pub const NEXT_AUCTION_ID: Item<u64> = Item::new("next_auction_id");

/// Reserves the next auction id. Ids are never reused, so settled
/// auctions stay queryable forever.
pub fn next_auction_id(storage: &mut dyn Storage) -> StdResult<u64> {
    let auction_id = NEXT_AUCTION_ID.may_load(storage)?.unwrap_or_default();
    NEXT_AUCTION_ID.save(storage, &(auction_id + 1))?;
    Ok(auction_id)
}

#[cw_serde]
pub struct HighBid {
    pub bidder: Addr,
    pub amount: Uint128,
    pub denom: Denom,
}

#[cw_serde]
pub struct Auction {
    pub seller: Addr,
    pub collection: Addr,
    pub token_id: String,
    /// Minimum acceptable value, quoted in the listing denom
    pub start_price: Uint128,
    pub start_time: Timestamp,
    pub duration: u64, // in seconds
    pub ended: bool,
    pub high_bid: Option<HighBid>,
}

impl Auction {
    /// Cannot overflow: duration is bounded against the start time at creation
    pub fn end_time(&self) -> Timestamp {
        self.start_time.plus_seconds(self.duration)
    }
}

#[index_list(Auction)]
pub struct AuctionIndexes<'a> {
    pub seller: MultiIndex<'a, String, Auction, u64>,
}

pub fn auctions<'a>() -> IndexedMap<'a, u64, Auction, AuctionIndexes<'a>> {
    let indexes = AuctionIndexes {
        seller: MultiIndex::new(
            |_pk: &[u8], a: &Auction| a.seller.to_string(),
            "auctions",
            "auctions__seller",
        ),
    };
    IndexedMap::new("auctions", indexes)
}

/// Price feed contracts keyed by payment unit. Units without an entry
/// are not accepted for bidding.
pub const PRICE_FEEDS: Map<String, Addr> = Map::new("price_feeds");

#[cw_serde]
pub struct Refund {
    pub denom: Denom,
    pub amount: Uint128,
}

/// Funds owed to outbid bidders, keyed by (bidder, payment unit key).
/// Credited when a leader is outbid, debited only by ClaimRefunds.
pub const REFUNDS: Map<(Addr, String), Refund> = Map::new("refunds");
