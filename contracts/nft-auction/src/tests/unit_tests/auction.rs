use cosmwasm_std::{coins, Addr, StdError, Uint128};
use cw20::Denom;
use cw_multi_test::Executor;

use crate::msg::QueryMsg;
use crate::state::{Auction, Config};
use crate::tests::helpers::auction_functions::{
    create_auction, create_standard_auction, query_auction,
};
use crate::tests::helpers::constants::{
    DEFAULT_DURATION, DEFAULT_START_PRICE, DEFAULT_TOKEN_ID, MAX_PRICE_AGE, NATIVE_DENOM,
};
use crate::tests::helpers::nft_functions::{approve, mint, query_owner_of};
use crate::tests::helpers::utils::assert_error;
use crate::tests::setup::setup_auctions::setup_auction_context;
use crate::ContractError;

#[test]
fn try_instantiate() {
    let ctx = setup_auction_context();

    let config: Config = ctx
        .app
        .wrap()
        .query_wasm_smart(&ctx.auction, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.denom, NATIVE_DENOM);
    assert_eq!(config.max_price_age, MAX_PRICE_AGE);

    let owner: Addr = ctx
        .app
        .wrap()
        .query_wasm_smart(&ctx.auction, &QueryMsg::Owner {})
        .unwrap();
    assert_eq!(owner, ctx.owner);

    let feed: Option<Addr> = ctx
        .app
        .wrap()
        .query_wasm_smart(
            &ctx.auction,
            &QueryMsg::PriceFeed {
                denom: Denom::Native(NATIVE_DENOM.to_string()),
            },
        )
        .unwrap();
    assert_eq!(feed, Some(ctx.native_feed));
}

#[test]
fn try_create_auction() {
    let mut ctx = setup_auction_context();

    mint(
        &mut ctx.app,
        &ctx.owner,
        &ctx.collection,
        &ctx.seller,
        DEFAULT_TOKEN_ID,
    );

    // create auction as non-owner fails
    let res = create_auction(
        &mut ctx.app,
        &ctx.bidder,
        &ctx.auction,
        ctx.collection.as_ref(),
        DEFAULT_TOKEN_ID,
        DEFAULT_START_PRICE,
        DEFAULT_DURATION,
    );
    assert_error(res, StdError::generic_err("Unauthorized").to_string());

    // create auction without approval fails
    let res = create_auction(
        &mut ctx.app,
        &ctx.seller,
        &ctx.auction,
        ctx.collection.as_ref(),
        DEFAULT_TOKEN_ID,
        DEFAULT_START_PRICE,
        DEFAULT_DURATION,
    );
    assert!(res.is_err());

    approve(
        &mut ctx.app,
        &ctx.seller,
        &ctx.collection,
        &ctx.auction,
        DEFAULT_TOKEN_ID,
    );

    // zero start price fails
    let res = create_auction(
        &mut ctx.app,
        &ctx.seller,
        &ctx.auction,
        ctx.collection.as_ref(),
        DEFAULT_TOKEN_ID,
        0,
        DEFAULT_DURATION,
    );
    assert_error(
        res,
        ContractError::InvalidInput("start_price must be greater than zero".to_string())
            .to_string(),
    );

    // zero duration fails
    let res = create_auction(
        &mut ctx.app,
        &ctx.seller,
        &ctx.auction,
        ctx.collection.as_ref(),
        DEFAULT_TOKEN_ID,
        DEFAULT_START_PRICE,
        0,
    );
    assert_error(
        res,
        ContractError::InvalidInput("duration must be greater than zero".to_string()).to_string(),
    );

    // duration that would overflow the end time fails instead of
    // creating an auction that can never be bid on or settled
    let res = create_auction(
        &mut ctx.app,
        &ctx.seller,
        &ctx.auction,
        ctx.collection.as_ref(),
        DEFAULT_TOKEN_ID,
        DEFAULT_START_PRICE,
        u64::MAX,
    );
    assert_error(
        res,
        ContractError::InvalidInput("duration overflows the maximum end time".to_string())
            .to_string(),
    );

    // funds attached to create fails
    let res = ctx.app.execute_contract(
        ctx.seller.clone(),
        ctx.auction.clone(),
        &crate::msg::ExecuteMsg::CreateAuction {
            collection: ctx.collection.to_string(),
            token_id: DEFAULT_TOKEN_ID.to_string(),
            start_price: Uint128::new(DEFAULT_START_PRICE),
            duration: DEFAULT_DURATION,
        },
        &coins(100, NATIVE_DENOM),
    );
    assert!(res.is_err());

    // valid create auction succeeds and escrows the NFT
    let res = create_auction(
        &mut ctx.app,
        &ctx.seller,
        &ctx.auction,
        ctx.collection.as_ref(),
        DEFAULT_TOKEN_ID,
        DEFAULT_START_PRICE,
        DEFAULT_DURATION,
    );
    assert!(res.is_ok());
    assert_eq!(
        query_owner_of(&ctx.app, &ctx.collection, DEFAULT_TOKEN_ID),
        ctx.auction.to_string()
    );

    let block_time = ctx.app.block_info().time;
    let auction: Auction = query_auction(&ctx.app, &ctx.auction, 0);
    assert_eq!(auction.seller, ctx.seller);
    assert_eq!(auction.collection, ctx.collection);
    assert_eq!(auction.token_id, DEFAULT_TOKEN_ID);
    assert_eq!(auction.start_price, Uint128::new(DEFAULT_START_PRICE));
    assert_eq!(auction.start_time, block_time);
    assert_eq!(auction.duration, DEFAULT_DURATION);
    assert!(!auction.ended);
    assert!(auction.high_bid.is_none());

    // auction ids increment and are never reused
    mint(&mut ctx.app, &ctx.owner, &ctx.collection, &ctx.seller, "2");
    approve(&mut ctx.app, &ctx.seller, &ctx.collection, &ctx.auction, "2");
    let res = create_auction(
        &mut ctx.app,
        &ctx.seller,
        &ctx.auction,
        ctx.collection.as_ref(),
        "2",
        DEFAULT_START_PRICE,
        DEFAULT_DURATION,
    );
    assert!(res.is_ok());
    let auction: Auction = query_auction(&ctx.app, &ctx.auction, 1);
    assert_eq!(auction.token_id, "2");
}

#[test]
fn try_standard_auction_id_tracks_counter() {
    let mut ctx = setup_auction_context();

    // occupy id 0 with another auction first
    mint(&mut ctx.app, &ctx.owner, &ctx.collection, &ctx.seller, "0");
    approve(&mut ctx.app, &ctx.seller, &ctx.collection, &ctx.auction, "0");
    create_auction(
        &mut ctx.app,
        &ctx.seller,
        &ctx.auction,
        ctx.collection.as_ref(),
        "0",
        DEFAULT_START_PRICE,
        DEFAULT_DURATION,
    )
    .unwrap();

    let auction_id = create_standard_auction(&mut ctx);
    assert_eq!(auction_id, 1);
    assert_eq!(
        query_auction(&ctx.app, &ctx.auction, auction_id).token_id,
        DEFAULT_TOKEN_ID
    );
}

#[test]
fn try_query_auctions() {
    let mut ctx = setup_auction_context();

    for token_id in ["1", "2", "3"] {
        mint(
            &mut ctx.app,
            &ctx.owner,
            &ctx.collection,
            &ctx.seller,
            token_id,
        );
        approve(
            &mut ctx.app,
            &ctx.seller,
            &ctx.collection,
            &ctx.auction,
            token_id,
        );
        create_auction(
            &mut ctx.app,
            &ctx.seller,
            &ctx.auction,
            ctx.collection.as_ref(),
            token_id,
            DEFAULT_START_PRICE,
            DEFAULT_DURATION,
        )
        .unwrap();
    }

    let auctions: Vec<(u64, Auction)> = ctx
        .app
        .wrap()
        .query_wasm_smart(&ctx.auction, &QueryMsg::Auctions { query_options: None })
        .unwrap();
    assert_eq!(auctions.len(), 3);
    assert_eq!(auctions[0].0, 0);
    assert_eq!(auctions[2].1.token_id, "3");

    let auctions: Vec<(u64, Auction)> = ctx
        .app
        .wrap()
        .query_wasm_smart(
            &ctx.auction,
            &QueryMsg::AuctionsBySeller {
                seller: ctx.seller.to_string(),
                query_options: None,
            },
        )
        .unwrap();
    assert_eq!(auctions.len(), 3);

    let auctions: Vec<(u64, Auction)> = ctx
        .app
        .wrap()
        .query_wasm_smart(
            &ctx.auction,
            &QueryMsg::AuctionsBySeller {
                seller: ctx.bidder.to_string(),
                query_options: None,
            },
        )
        .unwrap();
    assert!(auctions.is_empty());
}
