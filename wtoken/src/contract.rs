//! Wrapped Token Contract - Entry Points and Handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Storage, Uint128,
};
use cw2::set_contract_version;
use cw20::{AllowanceResponse, BalanceResponse, TokenInfoResponse};
use cw_utils::Expiration;

use crate::error::ContractError;
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{
    Config, TokenInfo, ALLOWANCES, BALANCES, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, TOKEN_INFO,
};

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
    let manager = msg
        .manager
        .map(|m| deps.api.addr_validate(&m))
        .transpose()?;

    let config = Config {
        owner,
        halted: false,
        manager,
    };
    CONFIG.save(deps.storage, &config)?;

    let token_info = TokenInfo {
        name: msg.name,
        symbol: msg.symbol,
        decimals: msg.decimals,
        total_supply: Uint128::zero(),
    };
    TOKEN_INFO.save(deps.storage, &token_info)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("name", token_info.name)
        .add_attribute("symbol", token_info.symbol))
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
    // No execute path of this contract accepts native coin.
    if !info.funds.is_empty() {
        return Err(ContractError::NativeFundsRejected);
    }

    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, info, recipient, amount)
        }
        ExecuteMsg::IncreaseAllowance { spender, amount } => {
            execute_increase_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::DecreaseAllowance { spender, amount } => {
            execute_decrease_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, info, owner, recipient, amount),
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, info, recipient, amount),
        ExecuteMsg::Burn { owner, amount } => execute_burn(deps, info, owner, amount),
        ExecuteMsg::LockTo {
            owner,
            recipient,
            amount,
        } => execute_lock_to(deps, info, owner, recipient, amount),
        ExecuteMsg::SetManager { manager } => execute_set_manager(deps, info, manager),
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
    }
}

// ============================================================================
// Standard token surface
// ============================================================================

fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_halted(&config)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let recipient = deps.api.addr_validate(&recipient)?;

    deduct_balance(deps.storage, &info.sender, amount)?;
    add_balance(deps.storage, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount))
}

fn execute_increase_allowance(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_halted(&config)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let spender = deps.api.addr_validate(&spender)?;

    let key = (&info.sender, &spender);
    let current = ALLOWANCES
        .may_load(deps.storage, key)?
        .unwrap_or_default();
    ALLOWANCES.save(deps.storage, key, &current.checked_add(amount)?)?;

    Ok(Response::new()
        .add_attribute("action", "increase_allowance")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender)
        .add_attribute("amount", amount))
}

fn execute_decrease_allowance(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_halted(&config)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let spender = deps.api.addr_validate(&spender)?;

    let key = (&info.sender, &spender);
    let current = ALLOWANCES
        .may_load(deps.storage, key)?
        .unwrap_or_default();
    let remaining = current.saturating_sub(amount);
    if remaining.is_zero() {
        ALLOWANCES.remove(deps.storage, key);
    } else {
        ALLOWANCES.save(deps.storage, key, &remaining)?;
    }

    Ok(Response::new()
        .add_attribute("action", "decrease_allowance")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender)
        .add_attribute("amount", amount))
}

fn execute_transfer_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_halted(&config)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let owner = deps.api.addr_validate(&owner)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    let key = (&owner, &info.sender);
    let allowance = ALLOWANCES
        .may_load(deps.storage, key)?
        .unwrap_or_default();
    if allowance < amount {
        return Err(ContractError::InsufficientAllowance {
            allowance: allowance.to_string(),
            required: amount.to_string(),
        });
    }
    let remaining = allowance - amount;
    if remaining.is_zero() {
        ALLOWANCES.remove(deps.storage, key);
    } else {
        ALLOWANCES.save(deps.storage, key, &remaining)?;
    }

    deduct_balance(deps.storage, &owner, amount)?;
    add_balance(deps.storage, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_from")
        .add_attribute("spender", info.sender)
        .add_attribute("from", owner)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount))
}

// ============================================================================
// Manager-gated supply operations
// ============================================================================

fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_halted(&config)?;
    ensure_manager(&config, &info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let recipient = deps.api.addr_validate(&recipient)?;

    add_balance(deps.storage, &recipient, amount)?;

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    token_info.total_supply = token_info.total_supply.checked_add(amount)?;
    TOKEN_INFO.save(deps.storage, &token_info)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("account", recipient)
        .add_attribute("amount", amount)
        .add_attribute("total_supply", token_info.total_supply))
}

fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_halted(&config)?;
    ensure_manager(&config, &info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let owner = deps.api.addr_validate(&owner)?;

    deduct_balance(deps.storage, &owner, amount)?;

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    token_info.total_supply = token_info.total_supply.checked_sub(amount)?;
    TOKEN_INFO.save(deps.storage, &token_info)?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("account", owner)
        .add_attribute("amount", amount)
        .add_attribute("total_supply", token_info.total_supply))
}

fn execute_lock_to(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_halted(&config)?;
    ensure_manager(&config, &info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let owner = deps.api.addr_validate(&owner)?;
    let recipient = deps.api.addr_validate(&recipient)?;
    if owner == recipient {
        return Err(ContractError::SelfTransfer);
    }

    deduct_balance(deps.storage, &owner, amount)?;
    add_balance(deps.storage, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "lock_to")
        .add_attribute("from", owner)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount))
}

// ============================================================================
// Administration
// ============================================================================

fn execute_set_manager(
    deps: DepsMut,
    info: MessageInfo,
    manager: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let manager = deps.api.addr_validate(&manager)?;
    config.manager = Some(manager.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_manager")
        .add_attribute("manager", manager))
}

fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    config.halted = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "pause"))
}

fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
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

fn ensure_manager(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    match &config.manager {
        Some(manager) if manager == sender => Ok(()),
        Some(_) => Err(ContractError::UnauthorizedManager),
        None => Err(ContractError::NoManager),
    }
}

fn deduct_balance(
    storage: &mut dyn Storage,
    account: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let balance = BALANCES
        .may_load(storage, account)?
        .unwrap_or_default();
    if balance < amount {
        return Err(ContractError::InsufficientBalance {
            balance: balance.to_string(),
            required: amount.to_string(),
        });
    }
    let remaining = balance - amount;
    if remaining.is_zero() {
        BALANCES.remove(storage, account);
    } else {
        BALANCES.save(storage, account, &remaining)?;
    }
    Ok(())
}

fn add_balance(
    storage: &mut dyn Storage,
    account: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let balance = BALANCES
        .may_load(storage, account)?
        .unwrap_or_default();
    BALANCES.save(storage, account, &balance.checked_add(amount)?)?;
    Ok(())
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}

fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let balance = BALANCES
        .may_load(deps.storage, &address)?
        .unwrap_or_default();
    Ok(BalanceResponse { balance })
}

fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let token_info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: token_info.name,
        symbol: token_info.symbol,
        decimals: token_info.decimals,
        total_supply: token_info.total_supply,
    })
}

fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let spender = deps.api.addr_validate(&spender)?;
    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner, &spender))?
        .unwrap_or_default();
    Ok(AllowanceResponse {
        allowance,
        expires: Expiration::Never {},
    })
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner.to_string(),
        halted: config.halted,
        manager: config.manager.map(|m| m.to_string()),
    })
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
