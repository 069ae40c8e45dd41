//! Outbound swap handlers (shadow token -> base chain).
//!
//! The user opens the swap as the first-hand side, attaching the
//! withdrawal fee in native coin. The fee stays in escrow until the
//! terminal transition: refund forwards it to the storeman, revoke splits
//! it by the configured ratio. Ledger and engine state are finalized
//! before any native coin moves.

use cosmwasm_std::{
    coins, to_json_binary, BankMsg, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response,
    Uint128, WasmMsg,
};

use common::{bytes32_to_hex, keccak256, RATIO_PRECISE};

use crate::engine;
use crate::error::ContractError;
use crate::execute::{ensure_initialized, ensure_operational, parse_hash, parse_preimage};
use crate::fee;
use crate::state::{Config, TxDirection, CONFIG, FEE_ESCROWS};

/// Open the first-hand leg of an outbound swap, escrowing the user's
/// shadow tokens and the attached native-coin fee.
pub fn execute_outbound_lock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    x_hash: Binary,
    storeman: String,
    base_address: String,
    value: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_operational(&config)?;
    let (manager, registry) = ensure_initialized(&config)?;

    let x_hash = parse_hash(&x_hash)?;
    let storeman = deps.api.addr_validate(&storeman)?;

    let fee = fee::outbound_fee(deps.as_ref(), registry, &storeman, value)?;
    let attached = attached_fee(&config, &info)?;
    if attached < fee {
        return Err(ContractError::InsufficientFee {
            expected: fee,
            got: attached,
        });
    }

    engine::add_htlc_tx(
        deps.storage,
        env.block.time.seconds(),
        TxDirection::WtokenToCoin,
        info.sender.clone(),
        storeman.clone(),
        &x_hash,
        value,
        Some(base_address.clone()),
        config.locked_time,
    )?;
    FEE_ESCROWS.save(deps.storage, &x_hash, &fee)?;

    let lock_token = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: manager.to_string(),
        msg: to_json_binary(&quota::msg::ExecuteMsg::LockToken {
            group: storeman.to_string(),
            initiator: info.sender.to_string(),
            value,
        })?,
        funds: vec![],
    });

    let mut response = Response::new().add_message(lock_token);

    // Return any overpayment; the native transfer runs last.
    let excess = attached - fee;
    if !excess.is_zero() {
        response = response.add_message(CosmosMsg::Bank(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(excess.u128(), &config.fee_denom),
        }));
    }

    Ok(response
        .add_attribute("action", "outbound_lock")
        .add_attribute("sender", info.sender)
        .add_attribute("storeman", storeman)
        .add_attribute("x_hash", bytes32_to_hex(&x_hash))
        .add_attribute("value", value)
        .add_attribute("base_address", base_address)
        .add_attribute("fee", fee))
}

/// Settle an outbound swap by revealing the preimage. The caller must be
/// the recorded storeman, who burns the escrow and collects the fee.
pub fn execute_outbound_refund(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    preimage: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_operational(&config)?;
    let (manager, _) = ensure_initialized(&config)?;

    let preimage = parse_preimage(&preimage)?;
    let x_hash = keccak256(&preimage);

    let record = engine::refund_htlc_tx(
        deps.storage,
        env.block.time.seconds(),
        &info.sender,
        &x_hash,
        TxDirection::WtokenToCoin,
    )?;

    let escrowed = FEE_ESCROWS
        .may_load(deps.storage, &x_hash)?
        .unwrap_or_default();
    FEE_ESCROWS.remove(deps.storage, &x_hash);

    let burn = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: manager.to_string(),
        msg: to_json_binary(&quota::msg::ExecuteMsg::BurnToken {
            group: record.destination.to_string(),
            value: record.value,
        })?,
        funds: vec![],
    });

    let mut response = Response::new().add_message(burn);
    if !escrowed.is_zero() {
        response = response.add_message(CosmosMsg::Bank(BankMsg::Send {
            to_address: record.destination.to_string(),
            amount: coins(escrowed.u128(), &config.fee_denom),
        }));
    }

    Ok(response
        .add_attribute("action", "outbound_refund")
        .add_attribute("storeman", record.destination)
        .add_attribute("sender", record.source)
        .add_attribute("x_hash", bytes32_to_hex(&x_hash))
        .add_attribute("preimage", bytes32_to_hex(&preimage))
        .add_attribute("value", record.value)
        .add_attribute("fee", escrowed))
}

/// Cancel an expired outbound swap. Tokens return to the user; the
/// escrowed fee is split between storeman and user by the revoke ratio.
pub fn execute_outbound_revoke(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    x_hash: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_operational(&config)?;
    let (manager, _) = ensure_initialized(&config)?;

    let x_hash = parse_hash(&x_hash)?;

    let record = engine::revoke_htlc_tx(
        deps.storage,
        env.block.time.seconds(),
        &info.sender,
        &x_hash,
        TxDirection::WtokenToCoin,
        true,
    )?;

    let escrowed = FEE_ESCROWS
        .may_load(deps.storage, &x_hash)?
        .unwrap_or_default();
    FEE_ESCROWS.remove(deps.storage, &x_hash);

    let unlock = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: manager.to_string(),
        msg: to_json_binary(&quota::msg::ExecuteMsg::UnlockToken {
            group: record.destination.to_string(),
            recipient: record.source.to_string(),
            value: record.value,
        })?,
        funds: vec![],
    });

    let mut response = Response::new().add_message(unlock);

    // The storeman keeps its share for the capacity it had committed; the
    // rest returns to the user.
    let revoke_fee = escrowed.multiply_ratio(config.revoke_fee_ratio, RATIO_PRECISE);
    if !revoke_fee.is_zero() {
        response = response.add_message(CosmosMsg::Bank(BankMsg::Send {
            to_address: record.destination.to_string(),
            amount: coins(revoke_fee.u128(), &config.fee_denom),
        }));
    }
    let remainder = escrowed - revoke_fee;
    if !remainder.is_zero() {
        response = response.add_message(CosmosMsg::Bank(BankMsg::Send {
            to_address: record.source.to_string(),
            amount: coins(remainder.u128(), &config.fee_denom),
        }));
    }

    Ok(response
        .add_attribute("action", "outbound_revoke")
        .add_attribute("sender", record.source)
        .add_attribute("x_hash", bytes32_to_hex(&x_hash))
        .add_attribute("value", record.value)
        .add_attribute("revoke_fee", revoke_fee))
}

/// Sum the attached coins of the fee denom, rejecting any other denom.
fn attached_fee(config: &Config, info: &MessageInfo) -> Result<Uint128, ContractError> {
    let mut attached = Uint128::zero();
    for coin in &info.funds {
        if coin.denom != config.fee_denom {
            return Err(ContractError::UnsupportedFeeDenom {
                denom: coin.denom.clone(),
            });
        }
        attached = attached.checked_add(coin.amount)?;
    }
    Ok(attached)
}
