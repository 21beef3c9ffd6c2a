use cosmwasm_std::{ensure, ensure_eq, Addr, Api, DepsMut, Event, Response, Storage, SubMsg, Timestamp};
use cw20::Denom;

use auction_common::nft::transfer_nft;
use auction_common::payment::{denom_key, transfer_denom};

use crate::state::{auctions, Auction, HighBid, Refund, OWNER, REFUNDS};
use crate::ContractError;

pub fn only_contract_owner(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    let owner = OWNER.load(storage)?;
    ensure_eq!(owner, *sender, ContractError::Unauthorized {});
    Ok(())
}

/// Addresses inside a Denom arrive unvalidated from message JSON
pub fn validate_denom(api: &dyn Api, denom: &Denom) -> Result<(), ContractError> {
    match denom {
        Denom::Native(denom) => {
            ensure!(
                !denom.is_empty(),
                ContractError::InvalidInput("denom must not be empty".to_string())
            );
        }
        Denom::Cw20(address) => {
            api.addr_validate(address.as_str())?;
        }
    }
    Ok(())
}

/// Credits an outbid leader's funds to the refund escrow. Amounts in the
/// same payment unit accumulate under one entry.
pub fn queue_refund(storage: &mut dyn Storage, high_bid: &HighBid) -> Result<(), ContractError> {
    let key = (high_bid.bidder.clone(), denom_key(&high_bid.denom));
    REFUNDS.update(storage, key, |existing| -> Result<Refund, ContractError> {
        let amount = match existing {
            Some(refund) => refund
                .amount
                .checked_add(high_bid.amount)
                .map_err(|_| ContractError::ArithmeticOverflow {})?,
            None => high_bid.amount,
        };
        Ok(Refund {
            denom: high_bid.denom.clone(),
            amount,
        })
    })?;
    Ok(())
}

pub fn settle_auction(
    deps: DepsMut,
    block_time: Timestamp,
    auction_id: u64,
    mut auction: Auction,
    response: Response,
) -> Result<Response, ContractError> {
    ensure!(!auction.ended, ContractError::AuctionAlreadyEnded {});
    ensure!(
        block_time >= auction.end_time(),
        ContractError::AuctionStillOpen {}
    );

    // Mark the auction terminal before any transfer is dispatched
    auction.ended = true;
    auctions().save(deps.storage, auction_id, &auction)?;

    let mut event = Event::new("settle-auction")
        .add_attribute("auction_id", auction_id.to_string())
        .add_attribute("collection", auction.collection.to_string())
        .add_attribute("token_id", auction.token_id.to_string());

    let sub_msgs: Vec<SubMsg> = match &auction.high_bid {
        Some(high_bid) => {
            event = event
                .add_attribute("bidder", high_bid.bidder.to_string())
                .add_attribute("amount", high_bid.amount)
                .add_attribute("denom", denom_key(&high_bid.denom));

            vec![
                transfer_nft(&auction.collection, &auction.token_id, &high_bid.bidder),
                transfer_denom(&high_bid.denom, high_bid.amount, &auction.seller)?,
            ]
        }
        None => {
            // no bids, return NFT to seller
            event = event.add_attribute("bidder", "none");
            vec![transfer_nft(
                &auction.collection,
                &auction.token_id,
                &auction.seller,
            )]
        }
    };

    Ok(response.add_event(event).add_submessages(sub_msgs))
}
