//! Inbound swap handlers (base chain -> shadow token).

use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};

use common::{bytes32_to_hex, keccak256};

use crate::engine;
use crate::error::ContractError;
use crate::execute::{ensure_initialized, ensure_operational, parse_hash, parse_preimage};
use crate::state::{TxDirection, CONFIG};

/// Open the shadow-chain leg of an inbound swap. The caller is the
/// storeman whose quota backs the mint.
pub fn execute_inbound_lock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    x_hash: Binary,
    recipient: String,
    value: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_operational(&config)?;
    let (manager, _) = ensure_initialized(&config)?;

    let x_hash = parse_hash(&x_hash)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    engine::add_htlc_tx(
        deps.storage,
        env.block.time.seconds(),
        TxDirection::CoinToWtoken,
        info.sender.clone(),
        recipient.clone(),
        &x_hash,
        value,
        None,
        config.locked_time,
    )?;

    let lock_quota = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: manager.to_string(),
        msg: to_json_binary(&quota::msg::ExecuteMsg::LockQuota {
            group: info.sender.to_string(),
            recipient: recipient.to_string(),
            value,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(lock_quota)
        .add_attribute("action", "inbound_lock")
        .add_attribute("storeman", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("x_hash", bytes32_to_hex(&x_hash))
        .add_attribute("value", value))
}

/// Settle an inbound swap by revealing the preimage. The caller must be
/// the recorded recipient.
pub fn execute_inbound_refund(
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
        TxDirection::CoinToWtoken,
    )?;

    let mint = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: manager.to_string(),
        msg: to_json_binary(&quota::msg::ExecuteMsg::MintToken {
            group: record.source.to_string(),
            recipient: record.destination.to_string(),
            value: record.value,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(mint)
        .add_attribute("action", "inbound_refund")
        .add_attribute("recipient", record.destination)
        .add_attribute("storeman", record.source)
        .add_attribute("x_hash", bytes32_to_hex(&x_hash))
        .add_attribute("preimage", bytes32_to_hex(&preimage))
        .add_attribute("value", record.value))
}

/// Cancel an expired inbound swap, releasing the quota reservation. Only
/// the storeman that opened it may revoke.
pub fn execute_inbound_revoke(
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
        TxDirection::CoinToWtoken,
        false,
    )?;

    let unlock = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: manager.to_string(),
        msg: to_json_binary(&quota::msg::ExecuteMsg::UnlockQuota {
            group: record.source.to_string(),
            value: record.value,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(unlock)
        .add_attribute("action", "inbound_revoke")
        .add_attribute("storeman", record.source)
        .add_attribute("x_hash", bytes32_to_hex(&x_hash))
        .add_attribute("value", record.value))
}
