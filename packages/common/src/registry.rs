//! Query interface of the storeman-group-admin registry.
//!
//! The registry is an external contract that manages storeman-group
//! membership economics. The settlement contracts only consume its fee
//! parameters through this narrow query surface; the registry itself is
//! deployed and governed elsewhere.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

#[cw_serde]
pub enum StoremanAdminQueryMsg {
    /// Fee parameters for outbound swaps handled by `storeman`.
    FeeRatios { storeman: String },
}

#[cw_serde]
pub struct FeeRatiosResponse {
    /// Price ratio between the base coin and the native coin, over `precise`.
    pub coin_ratio: Uint128,
    /// Per-group transaction fee ratio, over `precise`.
    pub tx_fee_ratio: Uint128,
    /// Denominator both ratios are quoted against.
    pub precise: Uint128,
}
