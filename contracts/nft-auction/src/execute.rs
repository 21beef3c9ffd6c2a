#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use cosmwasm_std::{
    attr, coin, ensure, Addr, DepsMut, Env, Event, MessageInfo, Order, Response, StdResult,
    Uint128,
};
use cw20::Denom;
use cw_utils::{must_pay, nonpayable};

use auction_common::nft::{has_approval, only_owner, transfer_nft};
use auction_common::payment::{denom_key, pull_token, transfer_denom};

use crate::error::ContractError;
use crate::helpers::{
    only_contract_owner, queue_refund, settle_auction, validate_denom,
};
use crate::msg::ExecuteMsg;
use crate::oracle::normalized_value;
use crate::state::{
    auctions, next_auction_id, Auction, HighBid, Refund, CONFIG, OWNER, PRICE_FEEDS, REFUNDS,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let api = deps.api;

    match msg {
        ExecuteMsg::CreateAuction {
            collection,
            token_id,
            start_price,
            duration,
        } => execute_create_auction(
            deps,
            env,
            info,
            api.addr_validate(&collection)?,
            &token_id,
            start_price,
            duration,
        ),
        ExecuteMsg::PlaceBid {
            auction_id,
            denom,
            amount,
        } => execute_place_bid(deps, env, info, auction_id, denom, amount),
        ExecuteMsg::SettleAuction { auction_id } => {
            execute_settle_auction(deps, env, info, auction_id)
        }
        ExecuteMsg::ClaimRefunds {} => execute_claim_refunds(deps, info),
        ExecuteMsg::RegisterPriceFeed { denom, address } => {
            execute_register_price_feed(deps, info, denom, address)
        }
        ExecuteMsg::UpdateConfig { max_price_age } => {
            execute_update_config(deps, info, max_price_age)
        }
        ExecuteMsg::UpdateOwner { new_owner } => {
            execute_update_owner(deps, info, api.addr_validate(&new_owner)?)
        }
    }
}

pub fn execute_create_auction(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    collection: Addr,
    token_id: &str,
    start_price: Uint128,
    duration: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    ensure!(
        !start_price.is_zero(),
        ContractError::InvalidInput("start_price must be greater than zero".to_string())
    );
    ensure!(
        duration > 0,
        ContractError::InvalidInput("duration must be greater than zero".to_string())
    );
    // end_time() adds duration in nanos; bound it here so no later
    // plus_seconds call can overflow
    duration
        .checked_mul(1_000_000_000)
        .and_then(|nanos| env.block.time.nanos().checked_add(nanos))
        .ok_or_else(|| {
            ContractError::InvalidInput("duration overflows the maximum end time".to_string())
        })?;

    // Only the NFT owner can create an auction for it
    only_owner(&deps.querier, &info, &collection, token_id)?;

    // The NFT owner must have approved this contract to transfer the NFT
    has_approval(
        &deps.querier,
        &env.contract.address,
        &collection,
        token_id,
        Some(false),
    )?;

    let auction = Auction {
        seller: info.sender,
        collection: collection.clone(),
        token_id: token_id.to_string(),
        start_price,
        start_time: env.block.time,
        duration,
        ended: false,
        high_bid: None,
    };

    let auction_id = next_auction_id(deps.storage)?;
    auctions().save(deps.storage, auction_id, &auction)?;

    let event = Event::new("create-auction")
        .add_attribute("auction_id", auction_id.to_string())
        .add_attribute("collection", auction.collection.to_string())
        .add_attribute("token_id", auction.token_id.to_string())
        .add_attribute("seller", auction.seller.to_string())
        .add_attribute("start_price", auction.start_price)
        .add_attribute("start_time", auction.start_time.to_string())
        .add_attribute("duration", auction.duration.to_string());

    // Pull the NFT into escrow
    let response = Response::new().add_event(event).add_submessage(transfer_nft(
        &collection,
        token_id,
        &env.contract.address,
    ));

    Ok(response)
}

pub fn execute_place_bid(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    auction_id: u64,
    denom: Denom,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    validate_denom(deps.api, &denom)?;

    let mut auction = auctions()
        .may_load(deps.storage, auction_id)?
        .ok_or(ContractError::AuctionNotFound { auction_id })?;

    let block_time = env.block.time;
    ensure!(
        block_time >= auction.start_time,
        ContractError::AuctionNotStarted {}
    );
    ensure!(
        !auction.ended && block_time < auction.end_time(),
        ContractError::AuctionEnded {}
    );
    ensure!(
        auction.seller != info.sender,
        ContractError::SellerShouldNotBid {}
    );

    let bid_value = normalized_value(deps.as_ref(), &config, block_time, &denom, amount)?;

    // The value to beat is recomputed at current oracle prices so
    // cross-unit ordering stays consistent
    let min_value = match &auction.high_bid {
        Some(high_bid) => normalized_value(
            deps.as_ref(),
            &config,
            block_time,
            &high_bid.denom,
            high_bid.amount,
        )?,
        None => normalized_value(
            deps.as_ref(),
            &config,
            block_time,
            &Denom::Native(config.denom.clone()),
            auction.start_price,
        )?,
    };
    ensure!(
        bid_value > min_value,
        ContractError::BidTooLow {
            bid: bid_value,
            min: min_value,
        }
    );

    let mut response = Response::new();

    // Pull the bid into escrow
    match &denom {
        Denom::Native(bid_denom) => {
            let paid = must_pay(&info, bid_denom)?;
            ensure!(
                paid == amount,
                ContractError::IncorrectPayment {
                    expected: coin(amount.u128(), bid_denom),
                }
            );
        }
        Denom::Cw20(address) => {
            nonpayable(&info)?;
            response = response.add_submessage(pull_token(
                address,
                amount,
                &info.sender,
                &env.contract.address,
            ));
        }
    }

    // The outbid leader is credited to the refund escrow, never paid
    // inline, so a payee that rejects transfers cannot block bidding
    if let Some(previous) = &auction.high_bid {
        queue_refund(deps.storage, previous)?;
        response = response.add_event(Event::new("queue-refund").add_attributes(vec![
            attr("auction_id", auction_id.to_string()),
            attr("bidder", previous.bidder.to_string()),
            attr("amount", previous.amount),
            attr("denom", denom_key(&previous.denom)),
        ]));
    }

    auction.high_bid = Some(HighBid {
        bidder: info.sender,
        amount,
        denom,
    });
    auctions().save(deps.storage, auction_id, &auction)?;

    let high_bid = auction.high_bid.unwrap();
    let event = Event::new("place-bid")
        .add_attribute("auction_id", auction_id.to_string())
        .add_attribute("bidder", high_bid.bidder.to_string())
        .add_attribute("amount", high_bid.amount)
        .add_attribute("denom", denom_key(&high_bid.denom))
        .add_attribute("normalized_value", bid_value.to_string());

    Ok(response.add_event(event))
}

pub fn execute_settle_auction(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    auction_id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let auction = auctions()
        .may_load(deps.storage, auction_id)?
        .ok_or(ContractError::AuctionNotFound { auction_id })?;

    settle_auction(deps, env.block.time, auction_id, auction, Response::new())
}

pub fn execute_claim_refunds(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let refunds: Vec<(String, Refund)> = REFUNDS
        .prefix(info.sender.clone())
        .range(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<_>>()?;

    ensure!(!refunds.is_empty(), ContractError::NothingToClaim {});

    let mut response = Response::new();
    for (unit, refund) in refunds {
        // remove before transferring
        REFUNDS.remove(deps.storage, (info.sender.clone(), unit.clone()));
        response = response
            .add_submessage(transfer_denom(&refund.denom, refund.amount, &info.sender)?)
            .add_event(
                Event::new("claim-refunds")
                    .add_attribute("recipient", info.sender.to_string())
                    .add_attribute("denom", unit)
                    .add_attribute("amount", refund.amount),
            );
    }

    Ok(response)
}

pub fn execute_register_price_feed(
    deps: DepsMut,
    info: MessageInfo,
    denom: Denom,
    address: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    only_contract_owner(deps.storage, &info.sender)?;
    validate_denom(deps.api, &denom)?;

    let address = deps.api.addr_validate(&address)?;
    let unit = denom_key(&denom);

    // Overwrites any previous registration for the unit
    PRICE_FEEDS.save(deps.storage, unit.clone(), &address)?;

    let event = Event::new("register-price-feed")
        .add_attribute("denom", unit)
        .add_attribute("address", address);

    Ok(Response::new().add_event(event))
}

pub fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    max_price_age: Option<u64>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    only_contract_owner(deps.storage, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;

    let mut event = Event::new("update-config");
    if let Some(max_price_age) = max_price_age {
        config.max_price_age = max_price_age;
        event = event.add_attribute("max_price_age", max_price_age.to_string());
    }
    config.save(deps.storage)?;

    Ok(Response::new().add_event(event))
}

pub fn execute_update_owner(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: Addr,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    only_contract_owner(deps.storage, &info.sender)?;

    OWNER.save(deps.storage, &new_owner)?;

    let event = Event::new("update-owner")
        .add_attribute("previous_owner", info.sender.to_string())
        .add_attribute("new_owner", new_owner.to_string());

    Ok(Response::new().add_event(event))
}
