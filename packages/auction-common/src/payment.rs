use cosmwasm_std::{to_binary, Addr, BankMsg, Coin, SubMsg, Uint128, WasmMsg};
use cw20::{Cw20ExecuteMsg, Denom};

pub use crate::errors::AuctionCommonError;

pub fn transfer_coin(send_coin: Coin, to: &Addr) -> SubMsg {
    SubMsg::new(BankMsg::Send {
        to_address: to.to_string(),
        amount: vec![send_coin],
    })
}

pub fn transfer_token(token: &Addr, amount: Uint128, to: &Addr) -> SubMsg {
    SubMsg::new(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_binary(&Cw20ExecuteMsg::Transfer {
            recipient: to.to_string(),
            amount,
        })
        .unwrap(),
        funds: vec![],
    })
}

/// Pulls tokens from `from` into `to`. The sender must have granted
/// the executing contract an allowance beforehand.
pub fn pull_token(token: &Addr, amount: Uint128, from: &Addr, to: &Addr) -> SubMsg {
    SubMsg::new(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: from.to_string(),
            recipient: to.to_string(),
            amount,
        })
        .unwrap(),
        funds: vec![],
    })
}

/// Builds the transfer submessage appropriate for the payment unit.
pub fn transfer_denom(
    denom: &Denom,
    amount: Uint128,
    to: &Addr,
) -> Result<SubMsg, AuctionCommonError> {
    if amount.is_zero() {
        return Err(AuctionCommonError::ZeroAmountPayment);
    }
    let sub_msg = match denom {
        Denom::Native(denom) => transfer_coin(
            Coin {
                denom: denom.clone(),
                amount,
            },
            to,
        ),
        Denom::Cw20(address) => transfer_token(address, amount, to),
    };
    Ok(sub_msg)
}

/// Stable storage key for a payment unit.
pub fn denom_key(denom: &Denom) -> String {
    match denom {
        Denom::Native(denom) => format!("n:{denom}"),
        Denom::Cw20(address) => format!("c:{address}"),
    }
}
