//! Message types for the wrapped token contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address for administrative control
    pub owner: String,
    /// Token name (e.g. "Wrapped BTC")
    pub name: String,
    /// Token symbol (e.g. "WBTC")
    pub symbol: String,
    /// Number of decimals
    pub decimals: u8,
    /// Manager authorized for mint/burn/lock_to; may be wired later
    /// via `SetManager` when the quota ledger does not exist yet.
    pub manager: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Standard token surface
    // ========================================================================
    /// Move `amount` from the caller to `recipient`.
    Transfer { recipient: String, amount: Uint128 },

    /// Raise the caller's allowance for `spender` by `amount`.
    IncreaseAllowance { spender: String, amount: Uint128 },

    /// Lower the caller's allowance for `spender` by `amount`
    /// (clamped at zero).
    DecreaseAllowance { spender: String, amount: Uint128 },

    /// Move `amount` from `owner` to `recipient`, consuming the caller's
    /// allowance.
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },

    // ========================================================================
    // Manager-gated supply operations
    // ========================================================================
    /// Create `amount` new tokens for `recipient`.
    ///
    /// Authorization: manager only
    Mint { recipient: String, amount: Uint128 },

    /// Destroy `amount` tokens held by `owner`.
    ///
    /// Authorization: manager only
    Burn { owner: String, amount: Uint128 },

    /// Move `amount` from `owner` to `recipient` without touching the
    /// total supply. Used to escrow user tokens under the HTLC engine
    /// during outbound swaps.
    ///
    /// Authorization: manager only
    LockTo {
        owner: String,
        recipient: String,
        amount: Uint128,
    },

    // ========================================================================
    // Administration
    // ========================================================================
    /// Set the manager (the quota ledger address).
    ///
    /// Authorization: owner only
    SetManager { manager: String },

    /// Halt all state-mutating operations.
    ///
    /// Authorization: owner only
    Pause {},

    /// Resume operations.
    ///
    /// Authorization: owner only
    Unpause {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Balance of a single account.
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    /// Token metadata and total supply.
    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},

    /// Remaining allowance from `owner` to `spender`.
    #[returns(cw20::AllowanceResponse)]
    Allowance { owner: String, spender: String },

    /// Contract configuration.
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: String,
    pub halted: bool,
    pub manager: Option<String>,
}
