//! State definitions for the quota ledger contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Owner address for administrative control
    pub owner: Addr,
    /// Whether the ledger is currently halted
    pub halted: bool,
    /// Wrapped token contract driven by this ledger
    pub wtoken: Addr,
    /// HTLC engine authorized for settlement operations.
    /// Unset until wired after deployment; doubles as the escrow account
    /// that holds user tokens during outbound swaps.
    pub htlc: Option<Addr>,
    /// Storeman-group admin authorized for lifecycle operations
    pub storeman_admin: Addr,
}

/// Per-group ledger record
#[cw_serde]
#[derive(Default)]
pub struct GroupRecord {
    /// Total capacity in base-asset units
    pub quota: Uint128,
    /// Inbound value reserved by open HTLCs, not yet minted
    pub receivable: Uint128,
    /// Outstanding shadow-token supply attributed to this group
    pub debt: Uint128,
    /// Outbound value escrowed by open HTLCs, not yet burned
    pub payable: Uint128,
}

impl GroupRecord {
    /// Capacity left for new inbound reservations.
    pub fn inbound_available(&self) -> Uint128 {
        self.quota
            .saturating_sub(self.receivable)
            .saturating_sub(self.debt)
    }

    /// Capacity left for new outbound escrows.
    pub fn outbound_available(&self) -> Uint128 {
        self.debt.saturating_sub(self.payable)
    }
}

/// Lifecycle position of a group address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupStatus {
    /// No record: the address is an ordinary user
    Unregistered,
    /// Registered and accepting new swaps
    Active,
    /// Registered but decommissioning; no new swaps may originate from it
    UnregisterPending,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:shadow-quota-ledger";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

/// Group records; map presence encodes registration
pub const GROUPS: Map<&Addr, GroupRecord> = Map::new("groups");

/// Groups that applied for unregistration
pub const UNREGISTERING: Map<&Addr, bool> = Map::new("unregistering");

/// Sum of all registered quotas
pub const TOTAL_QUOTA: Item<Uint128> = Item::new("total_quota");

/// Resolve the lifecycle status of an address.
pub fn group_status(storage: &dyn Storage, address: &Addr) -> StdResult<GroupStatus> {
    if GROUPS.may_load(storage, address)?.is_none() {
        return Ok(GroupStatus::Unregistered);
    }
    let pending = UNREGISTERING
        .may_load(storage, address)?
        .unwrap_or(false);
    if pending {
        Ok(GroupStatus::UnregisterPending)
    } else {
        Ok(GroupStatus::Active)
    }
}
