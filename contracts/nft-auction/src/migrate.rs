use cosmwasm_schema::cw_serde;
use cosmwasm_std::{DepsMut, Env, Event, Response};
use cw2::set_contract_version;
use cw_storage_plus::Item;
use semver::Version;

use crate::instantiate::{CONTRACT_NAME, CONTRACT_VERSION};
use crate::state::Config;
use crate::ContractError;

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

#[cw_serde]
pub struct MigrateMsg {
    /// Staleness bound backfilled into configs written before v1.1
    pub max_price_age: u64,
}

/// Config layout used before v1.1, which had no oracle staleness bound
#[cw_serde]
pub struct V1_0Config {
    pub denom: String,
}

pub const V1_0_CONFIG: Item<V1_0Config> = Item::new("config");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    let current_version = cw2::get_contract_version(deps.storage)?;
    if current_version.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidImplementation {
            expected: CONTRACT_NAME.to_string(),
            actual: current_version.contract,
        });
    }

    let version: Version =
        current_version
            .version
            .parse()
            .map_err(|_| ContractError::WrongVersion {
                current: current_version.version.clone(),
                target: CONTRACT_VERSION.to_string(),
            })?;
    let target: Version = CONTRACT_VERSION
        .parse()
        .map_err(|_| ContractError::WrongVersion {
            current: current_version.version.clone(),
            target: CONTRACT_VERSION.to_string(),
        })?;

    if version >= target {
        return Err(ContractError::WrongVersion {
            current: version.to_string(),
            target: target.to_string(),
        });
    }

    // Storage is append-only across versions: auctions, price feeds,
    // refunds, the id counter and the owner all keep their keys. Only
    // the config record is rewritten here.
    if version < Version::new(1, 1, 0) {
        let old_config = V1_0_CONFIG.load(deps.storage)?;
        let config = Config {
            denom: old_config.denom,
            max_price_age: msg.max_price_age,
        };
        config.save(deps.storage)?;
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_event(
        Event::new("migrate")
            .add_attribute("from_version", current_version.version)
            .add_attribute("to_version", CONTRACT_VERSION),
    ))
}
