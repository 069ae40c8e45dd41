//! Message types for the quota ledger contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address for administrative control
    pub owner: String,
    /// Wrapped token contract driven by this ledger
    pub wtoken: String,
    /// Storeman-group admin authorized for lifecycle operations
    pub storeman_admin: String,
    /// HTLC engine address; may be wired later via `SetHtlc` when the
    /// engine does not exist yet
    pub htlc: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Group lifecycle
    // ========================================================================
    /// Register a new storeman group with its quota.
    ///
    /// Authorization: storeman-group admin only
    RegisterStoremanGroup { group: String, quota: Uint128 },

    /// Mark an active group as decommissioning. The group can no longer
    /// originate swaps; its debt must drain to zero before unregistration.
    ///
    /// Authorization: storeman-group admin only
    ApplyUnregistration { group: String },

    /// Remove a decommissioned group whose receivable, payable and debt
    /// have all reached zero.
    ///
    /// Authorization: storeman-group admin only
    UnregisterStoremanGroup { group: String },

    // ========================================================================
    // Settlement operations
    // ========================================================================
    /// Reserve inbound capacity for an open HTLC.
    ///
    /// Authorization: HTLC engine only
    LockQuota {
        group: String,
        recipient: String,
        value: Uint128,
    },

    /// Release an inbound reservation after a revoked HTLC.
    ///
    /// Authorization: HTLC engine only
    UnlockQuota { group: String, value: Uint128 },

    /// Consume an inbound reservation: move `value` from receivable to
    /// debt and mint shadow tokens to the recipient — or, when the
    /// recipient is a decommissioning group, pay down its debt instead.
    ///
    /// Authorization: HTLC engine only
    MintToken {
        group: String,
        recipient: String,
        value: Uint128,
    },

    /// Escrow a user's shadow tokens under the HTLC engine for an
    /// outbound swap.
    ///
    /// Authorization: HTLC engine only
    LockToken {
        group: String,
        initiator: String,
        value: Uint128,
    },

    /// Return escrowed tokens to `recipient` after a revoked outbound HTLC.
    ///
    /// Authorization: HTLC engine only
    UnlockToken {
        group: String,
        recipient: String,
        value: Uint128,
    },

    /// Burn escrowed tokens after a refunded outbound HTLC, settling the
    /// group's debt.
    ///
    /// Authorization: HTLC engine only
    BurnToken { group: String, value: Uint128 },

    // ========================================================================
    // Administration
    // ========================================================================
    /// Set the HTLC engine reference.
    ///
    /// Authorization: owner only, ledger must be halted
    SetHtlc { address: String },

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
    /// Full ledger record of a group; all zeros when unregistered.
    #[returns(StoremanGroupResponse)]
    StoremanGroup { group: String },

    /// Sum of all registered quotas.
    #[returns(TotalQuotaResponse)]
    TotalQuota {},

    /// Whether the address is a registered group (active or decommissioning).
    #[returns(IsStoremanGroupResponse)]
    IsStoremanGroup { address: String },

    /// Whether the address is a registered group that has not applied
    /// for unregistration.
    #[returns(IsStoremanGroupResponse)]
    IsActiveStoremanGroup { address: String },

    /// Contract configuration.
    #[returns(ConfigResponse)]
    Config {},

    /// Paginated list of registered groups.
    #[returns(GroupsResponse)]
    Groups {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct StoremanGroupResponse {
    pub quota: Uint128,
    pub inbound_available: Uint128,
    pub outbound_available: Uint128,
    pub receivable: Uint128,
    pub payable: Uint128,
    pub debt: Uint128,
}

#[cw_serde]
pub struct TotalQuotaResponse {
    pub total_quota: Uint128,
}

#[cw_serde]
pub struct IsStoremanGroupResponse {
    pub is_storeman_group: bool,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: String,
    pub halted: bool,
    pub wtoken: String,
    pub htlc: Option<String>,
    pub storeman_admin: String,
}

#[cw_serde]
pub struct GroupEntry {
    pub address: String,
    pub quota: Uint128,
    pub receivable: Uint128,
    pub debt: Uint128,
    pub payable: Uint128,
    pub unregistering: bool,
}

#[cw_serde]
pub struct GroupsResponse {
    pub groups: Vec<GroupEntry>,
}
