//! State definitions for the wrapped token contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Owner address for administrative control
    pub owner: Addr,
    /// Whether the token is currently halted
    pub halted: bool,
    /// Manager authorized for mint/burn/lock_to (the quota ledger).
    /// Unset until wired after deployment.
    pub manager: Option<Addr>,
}

/// Token metadata and supply
#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:shadow-wtoken";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

/// Per-account balances
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// Allowances, keyed by (owner, spender)
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint128> = Map::new("allowances");
