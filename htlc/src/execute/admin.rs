//! Administrative handlers: halt gate, collaborator wiring and kill.

use cosmwasm_std::{BankMsg, CosmosMsg, DepsMut, Env, MessageInfo, Response};

use common::RATIO_PRECISE;

use crate::error::ContractError;
use crate::state::{Config, CONFIG};

/// Halt the contract (owner only).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = load_owned(&deps, &info)?;
    ensure_alive(&config)?;

    config.halted = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "pause"))
}

/// Resume the contract (owner only).
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = load_owned(&deps, &info)?;
    ensure_alive(&config)?;

    config.halted = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "unpause"))
}

/// Set the quota ledger reference (owner only, halted only).
pub fn execute_set_token_manager(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let mut config = load_owned_halted(&deps, &info)?;

    let manager = deps.api.addr_validate(&address)?;
    config.token_manager = Some(manager.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_token_manager")
        .add_attribute("token_manager", manager))
}

/// Set the storeman-admin registry reference (owner only, halted only).
pub fn execute_set_storeman_admin(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let mut config = load_owned_halted(&deps, &info)?;

    let registry = deps.api.addr_validate(&address)?;
    config.storeman_admin = Some(registry.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_storeman_admin")
        .add_attribute("storeman_admin", registry))
}

/// Set the base lock window (owner only, halted only).
pub fn execute_set_locked_time(
    deps: DepsMut,
    info: MessageInfo,
    seconds: u64,
) -> Result<Response, ContractError> {
    let mut config = load_owned_halted(&deps, &info)?;

    if seconds == 0 {
        return Err(ContractError::InvalidLockedTime);
    }
    config.locked_time = seconds;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_locked_time")
        .add_attribute("locked_time", seconds.to_string()))
}

/// Set the revoke fee ratio (owner only, halted only).
pub fn execute_set_revoke_fee_ratio(
    deps: DepsMut,
    info: MessageInfo,
    ratio: u64,
) -> Result<Response, ContractError> {
    let mut config = load_owned_halted(&deps, &info)?;

    if ratio > RATIO_PRECISE {
        return Err(ContractError::InvalidFeeRatio {
            precise: RATIO_PRECISE,
        });
    }
    config.revoke_fee_ratio = ratio;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_revoke_fee_ratio")
        .add_attribute("revoke_fee_ratio", ratio.to_string()))
}

/// Permanently deactivate the contract and sweep its native balance to the
/// owner (owner only, halted only).
pub fn execute_kill(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut config = load_owned_halted(&deps, &info)?;

    config.killed = true;
    CONFIG.save(deps.storage, &config)?;

    let balances = deps.querier.query_all_balances(&env.contract.address)?;
    let mut response = Response::new().add_attribute("action", "kill");
    if !balances.is_empty() {
        response = response.add_message(CosmosMsg::Bank(BankMsg::Send {
            to_address: config.owner.to_string(),
            amount: balances,
        }));
    }
    Ok(response)
}

// ============================================================================
// Helpers
// ============================================================================

fn load_owned(deps: &DepsMut, info: &MessageInfo) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}

fn load_owned_halted(deps: &DepsMut, info: &MessageInfo) -> Result<Config, ContractError> {
    let config = load_owned(deps, info)?;
    ensure_alive(&config)?;
    if !config.halted {
        return Err(ContractError::NotHalted);
    }
    Ok(config)
}

fn ensure_alive(config: &Config) -> Result<(), ContractError> {
    if config.killed {
        return Err(ContractError::Killed);
    }
    Ok(())
}
