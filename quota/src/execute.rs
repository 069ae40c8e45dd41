//! Execute handlers for the quota ledger.
//!
//! Lifecycle handlers are gated on the storeman-group admin, settlement
//! handlers on the HTLC engine. Every settlement handler finalizes ledger
//! state before emitting the wrapped-token sub-message, so a failing
//! sub-message rolls back the whole transaction.

use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, DepsMut, MessageInfo, Response, Uint128, WasmMsg,
};

use crate::error::ContractError;
use crate::state::{group_status, Config, GroupStatus, CONFIG, GROUPS, TOTAL_QUOTA, UNREGISTERING};

// ============================================================================
// Group lifecycle
// ============================================================================

/// Register a new storeman group (storeman-group admin only).
pub fn execute_register_storeman_group(
    deps: DepsMut,
    info: MessageInfo,
    group: String,
    quota: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_halted(&config)?;
    ensure_storeman_admin(&config, &info)?;

    if quota.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let group = deps.api.addr_validate(&group)?;

    if GROUPS.may_load(deps.storage, &group)?.is_some() {
        return Err(ContractError::GroupAlreadyRegistered {
            group: group.to_string(),
        });
    }

    let record = crate::state::GroupRecord {
        quota,
        ..Default::default()
    };
    GROUPS.save(deps.storage, &group, &record)?;

    let total_quota = TOTAL_QUOTA.load(deps.storage)?.checked_add(quota)?;
    TOTAL_QUOTA.save(deps.storage, &total_quota)?;

    Ok(Response::new()
        .add_attribute("action", "register_storeman_group")
        .add_attribute("group", group)
        .add_attribute("quota", quota)
        .add_attribute("total_quota", total_quota))
}

/// Mark an active group as decommissioning (storeman-group admin only).
pub fn execute_apply_unregistration(
    deps: DepsMut,
    info: MessageInfo,
    group: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_halted(&config)?;
    ensure_storeman_admin(&config, &info)?;

    let group = deps.api.addr_validate(&group)?;
    if group_status(deps.storage, &group)? != GroupStatus::Active {
        return Err(ContractError::GroupNotActive {
            group: group.to_string(),
        });
    }

    UNREGISTERING.save(deps.storage, &group, &true)?;

    Ok(Response::new()
        .add_attribute("action", "apply_unregistration")
        .add_attribute("group", group))
}

/// Remove a drained, decommissioned group (storeman-group admin only).
pub fn execute_unregister_storeman_group(
    deps: DepsMut,
    info: MessageInfo,
    group: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_halted(&config)?;
    ensure_storeman_admin(&config, &info)?;

    let group = deps.api.addr_validate(&group)?;
    if group_status(deps.storage, &group)? != GroupStatus::UnregisterPending {
        return Err(ContractError::NotUnregistering {
            group: group.to_string(),
        });
    }

    let record = GROUPS.load(deps.storage, &group)?;
    if !record.receivable.is_zero() || !record.payable.is_zero() || !record.debt.is_zero() {
        return Err(ContractError::DebtOutstanding);
    }

    let total_quota = TOTAL_QUOTA.load(deps.storage)?.checked_sub(record.quota)?;
    TOTAL_QUOTA.save(deps.storage, &total_quota)?;

    GROUPS.remove(deps.storage, &group);
    UNREGISTERING.remove(deps.storage, &group);

    Ok(Response::new()
        .add_attribute("action", "unregister_storeman_group")
        .add_attribute("group", group)
        .add_attribute("quota", record.quota)
        .add_attribute("total_quota", total_quota))
}

// ============================================================================
// Settlement operations (HTLC engine only)
// ============================================================================

/// Reserve inbound capacity for an open HTLC.
pub fn execute_lock_quota(
    deps: DepsMut,
    info: MessageInfo,
    group: String,
    recipient: String,
    value: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_halted(&config)?;
    ensure_htlc(&config, &info)?;

    if value.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let group = deps.api.addr_validate(&group)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    if group_status(deps.storage, &group)? != GroupStatus::Active {
        return Err(ContractError::GroupNotActive {
            group: group.to_string(),
        });
    }

    match group_status(deps.storage, &recipient)? {
        GroupStatus::Unregistered => {}
        GroupStatus::Active => {
            return Err(ContractError::RecipientIsActiveGroup {
                recipient: recipient.to_string(),
            });
        }
        GroupStatus::UnregisterPending => {
            // A mint may be directed into a decommissioning group only to
            // pay down its remaining debt.
            let target = GROUPS.load(deps.storage, &recipient)?;
            if !target.receivable.is_zero() || !target.payable.is_zero() || target.debt.is_zero() {
                return Err(ContractError::DrainNotAllowed);
            }
        }
    }

    let mut record = GROUPS.load(deps.storage, &group)?;
    let available = record.inbound_available();
    if available < value {
        return Err(ContractError::QuotaExceeded {
            available: available.to_string(),
            requested: value.to_string(),
        });
    }
    record.receivable = record.receivable.checked_add(value)?;
    GROUPS.save(deps.storage, &group, &record)?;

    Ok(Response::new()
        .add_attribute("action", "lock_quota")
        .add_attribute("group", group)
        .add_attribute("recipient", recipient)
        .add_attribute("value", value))
}

/// Release an inbound reservation after a revoked HTLC.
pub fn execute_unlock_quota(
    deps: DepsMut,
    info: MessageInfo,
    group: String,
    value: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_halted(&config)?;
    ensure_htlc(&config, &info)?;

    if value.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let group = deps.api.addr_validate(&group)?;

    let mut record = load_registered(deps.storage, &group)?;
    record.receivable = record.receivable.checked_sub(value)?;
    GROUPS.save(deps.storage, &group, &record)?;

    Ok(Response::new()
        .add_attribute("action", "unlock_quota")
        .add_attribute("group", group)
        .add_attribute("value", value))
}

/// Consume an inbound reservation, minting to a user or paying down a
/// decommissioning group's debt.
pub fn execute_mint_token(
    deps: DepsMut,
    info: MessageInfo,
    group: String,
    recipient: String,
    value: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_halted(&config)?;
    ensure_htlc(&config, &info)?;

    if value.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let group = deps.api.addr_validate(&group)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    // Validate the recipient before touching any record, so an invalid
    // recipient cannot leave a half-applied receivable/debt move behind.
    let recipient_status = group_status(deps.storage, &recipient)?;
    if recipient_status == GroupStatus::Active {
        return Err(ContractError::RecipientIsActiveGroup {
            recipient: recipient.to_string(),
        });
    }

    let mut record = load_registered(deps.storage, &group)?;
    record.receivable = record.receivable.checked_sub(value)?;
    record.debt = record.debt.checked_add(value)?;
    GROUPS.save(deps.storage, &group, &record)?;

    let response = Response::new()
        .add_attribute("action", "mint_token")
        .add_attribute("group", group)
        .add_attribute("recipient", recipient.clone())
        .add_attribute("value", value);

    if recipient_status == GroupStatus::UnregisterPending {
        // Debt drain: the obligation moves between groups, nothing is
        // minted. Clamped at zero so a concurrent drain cannot underflow.
        let mut target = GROUPS.load(deps.storage, &recipient)?;
        target.debt = target.debt.saturating_sub(value);
        GROUPS.save(deps.storage, &recipient, &target)?;
        return Ok(response.add_attribute("debt_drained", "true"));
    }

    // Ordinary user: circulate new shadow tokens.
    let mint = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.wtoken.to_string(),
        msg: to_json_binary(&wtoken::msg::ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount: value,
        })?,
        funds: vec![],
    });
    Ok(response.add_message(mint))
}

/// Escrow a user's shadow tokens under the HTLC engine.
pub fn execute_lock_token(
    deps: DepsMut,
    info: MessageInfo,
    group: String,
    initiator: String,
    value: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_halted(&config)?;
    let htlc = ensure_htlc(&config, &info)?;

    if value.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let group = deps.api.addr_validate(&group)?;
    let initiator = deps.api.addr_validate(&initiator)?;

    if group_status(deps.storage, &group)? != GroupStatus::Active {
        return Err(ContractError::GroupNotActive {
            group: group.to_string(),
        });
    }
    if group_status(deps.storage, &initiator)? != GroupStatus::Unregistered {
        return Err(ContractError::InitiatorIsGroup {
            initiator: initiator.to_string(),
        });
    }

    let mut record = GROUPS.load(deps.storage, &group)?;
    let available = record.outbound_available();
    if available < value {
        return Err(ContractError::QuotaExceeded {
            available: available.to_string(),
            requested: value.to_string(),
        });
    }
    record.payable = record.payable.checked_add(value)?;
    GROUPS.save(deps.storage, &group, &record)?;

    let lock = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.wtoken.to_string(),
        msg: to_json_binary(&wtoken::msg::ExecuteMsg::LockTo {
            owner: initiator.to_string(),
            recipient: htlc.to_string(),
            amount: value,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(lock)
        .add_attribute("action", "lock_token")
        .add_attribute("group", group)
        .add_attribute("initiator", initiator)
        .add_attribute("value", value))
}

/// Return escrowed tokens after a revoked outbound HTLC.
pub fn execute_unlock_token(
    deps: DepsMut,
    info: MessageInfo,
    group: String,
    recipient: String,
    value: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_halted(&config)?;
    let htlc = ensure_htlc(&config, &info)?;

    if value.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let group = deps.api.addr_validate(&group)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    let mut record = load_registered(deps.storage, &group)?;
    record.payable = record.payable.checked_sub(value)?;
    GROUPS.save(deps.storage, &group, &record)?;

    let unlock = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.wtoken.to_string(),
        msg: to_json_binary(&wtoken::msg::ExecuteMsg::LockTo {
            owner: htlc.to_string(),
            recipient: recipient.to_string(),
            amount: value,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(unlock)
        .add_attribute("action", "unlock_token")
        .add_attribute("group", group)
        .add_attribute("recipient", recipient)
        .add_attribute("value", value))
}

/// Burn escrowed tokens after a refunded outbound HTLC.
pub fn execute_burn_token(
    deps: DepsMut,
    info: MessageInfo,
    group: String,
    value: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_halted(&config)?;
    let htlc = ensure_htlc(&config, &info)?;

    if value.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let group = deps.api.addr_validate(&group)?;

    let mut record = load_registered(deps.storage, &group)?;
    record.debt = record.debt.checked_sub(value)?;
    record.payable = record.payable.checked_sub(value)?;
    GROUPS.save(deps.storage, &group, &record)?;

    let burn = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.wtoken.to_string(),
        msg: to_json_binary(&wtoken::msg::ExecuteMsg::Burn {
            owner: htlc.to_string(),
            amount: value,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(burn)
        .add_attribute("action", "burn_token")
        .add_attribute("group", group)
        .add_attribute("value", value))
}

// ============================================================================
// Administration
// ============================================================================

/// Set the HTLC engine reference (owner only, halted only).
pub fn execute_set_htlc(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    if !config.halted {
        return Err(ContractError::NotHalted);
    }

    let htlc = deps.api.addr_validate(&address)?;
    config.htlc = Some(htlc.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_htlc")
        .add_attribute("htlc", htlc))
}

/// Halt the ledger (owner only).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    config.halted = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "pause"))
}

/// Resume the ledger (owner only).
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    config.halted = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "unpause"))
}

// ============================================================================
// Helpers
// ============================================================================

fn ensure_not_halted(config: &Config) -> Result<(), ContractError> {
    if config.halted {
        return Err(ContractError::SystemHalted);
    }
    Ok(())
}

fn ensure_storeman_admin(config: &Config, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != config.storeman_admin {
        return Err(ContractError::UnauthorizedAdmin);
    }
    Ok(())
}

fn ensure_htlc<'a>(config: &'a Config, info: &MessageInfo) -> Result<&'a Addr, ContractError> {
    match &config.htlc {
        Some(htlc) if *htlc == info.sender => Ok(htlc),
        Some(_) => Err(ContractError::UnauthorizedHtlc),
        None => Err(ContractError::HtlcNotConfigured),
    }
}

fn load_registered(
    storage: &dyn cosmwasm_std::Storage,
    group: &Addr,
) -> Result<crate::state::GroupRecord, ContractError> {
    GROUPS
        .may_load(storage, group)?
        .ok_or(ContractError::GroupNotRegistered {
            group: group.to_string(),
        })
}
