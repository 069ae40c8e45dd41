//! HTLC Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Inbound, outbound and admin handlers
//! - `query` - Query handlers
//! - `engine` - The hash time-locked transaction state machine

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_inbound_lock, execute_inbound_refund, execute_inbound_revoke, execute_kill,
    execute_outbound_lock, execute_outbound_refund, execute_outbound_revoke, execute_pause,
    execute_set_locked_time, execute_set_revoke_fee_ratio, execute_set_storeman_admin,
    execute_set_token_manager, execute_unpause,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_htlc, query_left_locked_time, query_outbound_fee, query_x_hash_exist,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_LOCKED_TIME};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let token_manager = msg
        .token_manager
        .map(|m| deps.api.addr_validate(&m))
        .transpose()?;
    let storeman_admin = msg
        .storeman_admin
        .map(|r| deps.api.addr_validate(&r))
        .transpose()?;

    let locked_time = msg.locked_time.unwrap_or(DEFAULT_LOCKED_TIME);
    if locked_time == 0 {
        return Err(ContractError::InvalidLockedTime);
    }
    let revoke_fee_ratio = msg.revoke_fee_ratio.unwrap_or(0);
    if revoke_fee_ratio > common::RATIO_PRECISE {
        return Err(ContractError::InvalidFeeRatio {
            precise: common::RATIO_PRECISE,
        });
    }

    let config = Config {
        owner,
        halted: false,
        killed: false,
        token_manager,
        storeman_admin,
        fee_denom: msg.fee_denom,
        locked_time,
        revoke_fee_ratio,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("fee_denom", config.fee_denom)
        .add_attribute("locked_time", locked_time.to_string())
        .add_attribute("revoke_fee_ratio", revoke_fee_ratio.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Inbound leg
        ExecuteMsg::InboundLock {
            x_hash,
            recipient,
            value,
        } => execute_inbound_lock(deps, env, info, x_hash, recipient, value),
        ExecuteMsg::InboundRefund { preimage } => execute_inbound_refund(deps, env, info, preimage),
        ExecuteMsg::InboundRevoke { x_hash } => execute_inbound_revoke(deps, env, info, x_hash),

        // Outbound leg
        ExecuteMsg::OutboundLock {
            x_hash,
            storeman,
            base_address,
            value,
        } => execute_outbound_lock(deps, env, info, x_hash, storeman, base_address, value),
        ExecuteMsg::OutboundRefund { preimage } => {
            execute_outbound_refund(deps, env, info, preimage)
        }
        ExecuteMsg::OutboundRevoke { x_hash } => execute_outbound_revoke(deps, env, info, x_hash),

        // Administration
        ExecuteMsg::SetTokenManager { address } => execute_set_token_manager(deps, info, address),
        ExecuteMsg::SetStoremanAdmin { address } => execute_set_storeman_admin(deps, info, address),
        ExecuteMsg::SetLockedTime { seconds } => execute_set_locked_time(deps, info, seconds),
        ExecuteMsg::SetRevokeFeeRatio { ratio } => execute_set_revoke_fee_ratio(deps, info, ratio),
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::Kill {} => execute_kill(deps, env, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::LeftLockedTime { x_hash } => {
            to_json_binary(&query_left_locked_time(deps, env, x_hash)?)
        }
        QueryMsg::XHashExist { x_hash } => to_json_binary(&query_x_hash_exist(deps, x_hash)?),
        QueryMsg::OutboundFee { storeman, value } => {
            to_json_binary(&query_outbound_fee(deps, storeman, value)?)
        }
        QueryMsg::Htlc { x_hash } => to_json_binary(&query_htlc(deps, x_hash)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
