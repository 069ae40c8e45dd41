//! Query handlers for the HTLC contract.

use cosmwasm_std::{Binary, Deps, Env, StdError, StdResult, Uint128};

use crate::engine;
use crate::fee;
use crate::msg::{
    ConfigResponse, HtlcResponse, LeftLockedTimeResponse, OutboundFeeResponse, XHashExistResponse,
};
use crate::state::{CONFIG, FEE_ESCROWS, HTLCS, SHADOWS};

pub fn query_left_locked_time(
    deps: Deps,
    env: Env,
    x_hash: Binary,
) -> StdResult<LeftLockedTimeResponse> {
    let x_hash = parse_hash(&x_hash)?;
    let seconds = engine::left_locked_time(deps.storage, env.block.time.seconds(), &x_hash)?;
    Ok(LeftLockedTimeResponse { seconds })
}

pub fn query_x_hash_exist(deps: Deps, x_hash: Binary) -> StdResult<XHashExistResponse> {
    let x_hash = parse_hash(&x_hash)?;
    Ok(XHashExistResponse {
        exists: HTLCS.may_load(deps.storage, &x_hash)?.is_some(),
    })
}

pub fn query_outbound_fee(
    deps: Deps,
    storeman: String,
    value: Uint128,
) -> StdResult<OutboundFeeResponse> {
    let config = CONFIG.load(deps.storage)?;
    let registry = config
        .storeman_admin
        .ok_or_else(|| StdError::generic_err("storeman admin registry not configured"))?;
    let storeman = deps.api.addr_validate(&storeman)?;

    let fee = fee::outbound_fee(deps, &registry, &storeman, value)?;
    Ok(OutboundFeeResponse { fee })
}

pub fn query_htlc(deps: Deps, x_hash: Binary) -> StdResult<HtlcResponse> {
    let x_hash = parse_hash(&x_hash)?;
    let record = HTLCS.load(deps.storage, &x_hash)?;

    Ok(HtlcResponse {
        direction: record.direction,
        source: record.source.to_string(),
        destination: record.destination.to_string(),
        value: record.value,
        status: record.status,
        begin_locked_time: record.begin_locked_time,
        locked_time: record.locked_time,
        shadow_address: SHADOWS.may_load(deps.storage, &x_hash)?,
        fee_escrow: FEE_ESCROWS.may_load(deps.storage, &x_hash)?,
    })
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner.to_string(),
        halted: config.halted,
        killed: config.killed,
        token_manager: config.token_manager.map(|m| m.to_string()),
        storeman_admin: config.storeman_admin.map(|r| r.to_string()),
        fee_denom: config.fee_denom,
        locked_time: config.locked_time,
        revoke_fee_ratio: config.revoke_fee_ratio,
    })
}

fn parse_hash(x_hash: &Binary) -> StdResult<[u8; 32]> {
    common::to_bytes32(x_hash).map_err(|got| {
        StdError::generic_err(format!("invalid hash length: expected 32 bytes, got {got}"))
    })
}
