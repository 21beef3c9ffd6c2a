#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response};
use cw2::set_contract_version;

use auction_common::payment::denom_key;

use crate::error::ContractError;
use crate::helpers::validate_denom;
use crate::msg::InstantiateMsg;
use crate::state::{Config, NEXT_AUCTION_ID, OWNER, PRICE_FEEDS};

// version info for migration info
pub const CONTRACT_NAME: &str = "crates.io:nft-auction";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    OWNER.save(deps.storage, &info.sender)?;
    NEXT_AUCTION_ID.save(deps.storage, &0u64)?;

    let config = Config {
        denom: msg.denom,
        max_price_age: msg.max_price_age,
    };
    config.save(deps.storage)?;

    let mut response = Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract_name", CONTRACT_NAME)
        .add_attribute("contract_version", CONTRACT_VERSION)
        .add_attribute("owner", info.sender.to_string())
        .add_attribute("denom", &config.denom)
        .add_attribute("max_price_age", config.max_price_age.to_string());

    for price_feed in msg.price_feeds {
        validate_denom(deps.api, &price_feed.denom)?;
        let address = deps.api.addr_validate(&price_feed.address)?;
        let unit = denom_key(&price_feed.denom);
        if PRICE_FEEDS.has(deps.storage, unit.clone()) {
            return Err(ContractError::InvalidInput(
                "found duplicate price feed denom".to_string(),
            ));
        }
        PRICE_FEEDS.save(deps.storage, unit.clone(), &address)?;
        response = response.add_event(
            Event::new("register-price-feed")
                .add_attribute("denom", unit)
                .add_attribute("address", address),
        );
    }

    Ok(response)
}
