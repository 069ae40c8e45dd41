//! Quota Ledger Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute` - Lifecycle, settlement and admin handlers
//! - `query` - Query handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_apply_unregistration, execute_burn_token, execute_lock_quota, execute_lock_token,
    execute_mint_token, execute_pause, execute_register_storeman_group, execute_set_htlc,
    execute_unlock_quota, execute_unlock_token, execute_unpause,
    execute_unregister_storeman_group,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_groups, query_is_active_storeman_group, query_is_storeman_group,
    query_storeman_group, query_total_quota,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, TOTAL_QUOTA};

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
    let wtoken = deps.api.addr_validate(&msg.wtoken)?;
    let storeman_admin = deps.api.addr_validate(&msg.storeman_admin)?;
    let htlc = msg.htlc.map(|h| deps.api.addr_validate(&h)).transpose()?;

    let config = Config {
        owner,
        halted: false,
        wtoken,
        htlc,
        storeman_admin,
    };
    CONFIG.save(deps.storage, &config)?;
    TOTAL_QUOTA.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("wtoken", config.wtoken)
        .add_attribute("storeman_admin", config.storeman_admin))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Group lifecycle
        ExecuteMsg::RegisterStoremanGroup { group, quota } => {
            execute_register_storeman_group(deps, info, group, quota)
        }
        ExecuteMsg::ApplyUnregistration { group } => {
            execute_apply_unregistration(deps, info, group)
        }
        ExecuteMsg::UnregisterStoremanGroup { group } => {
            execute_unregister_storeman_group(deps, info, group)
        }

        // Settlement
        ExecuteMsg::LockQuota {
            group,
            recipient,
            value,
        } => execute_lock_quota(deps, info, group, recipient, value),
        ExecuteMsg::UnlockQuota { group, value } => execute_unlock_quota(deps, info, group, value),
        ExecuteMsg::MintToken {
            group,
            recipient,
            value,
        } => execute_mint_token(deps, info, group, recipient, value),
        ExecuteMsg::LockToken {
            group,
            initiator,
            value,
        } => execute_lock_token(deps, info, group, initiator, value),
        ExecuteMsg::UnlockToken {
            group,
            recipient,
            value,
        } => execute_unlock_token(deps, info, group, recipient, value),
        ExecuteMsg::BurnToken { group, value } => execute_burn_token(deps, info, group, value),

        // Administration
        ExecuteMsg::SetHtlc { address } => execute_set_htlc(deps, info, address),
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::StoremanGroup { group } => to_json_binary(&query_storeman_group(deps, group)?),
        QueryMsg::TotalQuota {} => to_json_binary(&query_total_quota(deps)?),
        QueryMsg::IsStoremanGroup { address } => {
            to_json_binary(&query_is_storeman_group(deps, address)?)
        }
        QueryMsg::IsActiveStoremanGroup { address } => {
            to_json_binary(&query_is_active_storeman_group(deps, address)?)
        }
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Groups { start_after, limit } => {
            to_json_binary(&query_groups(deps, start_after, limit)?)
        }
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
