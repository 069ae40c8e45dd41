//! Message types for the HTLC contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

use crate::state::{TxDirection, TxStatus};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address for administrative control
    pub owner: String,
    /// Native denom collected as the outbound fee
    pub fee_denom: String,
    /// Quota ledger address; may be wired later via `SetTokenManager`
    pub token_manager: Option<String>,
    /// Storeman-admin registry address; may be wired later via
    /// `SetStoremanAdmin`
    pub storeman_admin: Option<String>,
    /// Base lock window in seconds; defaults to 36 hours
    pub locked_time: Option<u64>,
    /// Storeman share of the escrowed fee on revoke, over RATIO_PRECISE;
    /// defaults to zero (whole fee returns to the user)
    pub revoke_fee_ratio: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Inbound leg (base chain -> shadow token)
    // ========================================================================
    /// Open the shadow-chain leg of an inbound swap.
    ///
    /// Authorization: the storeman that observed the base-chain lock.
    /// Reserves `value` of the caller's quota for `recipient`.
    InboundLock {
        /// Keccak-256 digest of the swap preimage (32 bytes)
        x_hash: Binary,
        /// Recipient of the minted shadow tokens
        recipient: String,
        value: Uint128,
    },

    /// Settle an inbound swap by revealing the preimage (32 bytes).
    ///
    /// Authorization: the recorded recipient. Converts the quota
    /// reservation into debt and mints shadow tokens.
    InboundRefund { preimage: Binary },

    /// Cancel an expired inbound swap, releasing the quota reservation.
    ///
    /// Authorization: the storeman that opened it.
    InboundRevoke { x_hash: Binary },

    // ========================================================================
    // Outbound leg (shadow token -> base chain)
    // ========================================================================
    /// Open the first-hand leg of an outbound swap. The withdrawal fee in
    /// native coin must be attached; any excess is returned. The caller's
    /// shadow tokens are escrowed under this contract for twice the base
    /// window.
    OutboundLock {
        /// Keccak-256 digest of the swap preimage (32 bytes)
        x_hash: Binary,
        /// Storeman group mediating the swap
        storeman: String,
        /// Caller's address on the base chain, recorded for relayers
        base_address: String,
        value: Uint128,
    },

    /// Settle an outbound swap by revealing the preimage (32 bytes).
    ///
    /// Authorization: the recorded storeman. Burns the escrowed tokens and
    /// pays the escrowed fee to the storeman.
    OutboundRefund { preimage: Binary },

    /// Cancel an expired outbound swap. Returns the escrowed tokens to the
    /// user and splits the escrowed fee between storeman and user by the
    /// revoke-fee ratio.
    ///
    /// Authorization: either participant.
    OutboundRevoke { x_hash: Binary },

    // ========================================================================
    // Administration
    // ========================================================================
    /// Set the quota ledger reference.
    ///
    /// Authorization: owner only, contract must be halted
    SetTokenManager { address: String },

    /// Set the storeman-admin registry reference.
    ///
    /// Authorization: owner only, contract must be halted
    SetStoremanAdmin { address: String },

    /// Set the base lock window in seconds.
    ///
    /// Authorization: owner only, contract must be halted
    SetLockedTime { seconds: u64 },

    /// Set the storeman share of escrowed fees on revoke, over
    /// RATIO_PRECISE.
    ///
    /// Authorization: owner only, contract must be halted
    SetRevokeFeeRatio { ratio: u64 },

    /// Halt all state-mutating operations.
    ///
    /// Authorization: owner only
    Pause {},

    /// Resume operations.
    ///
    /// Authorization: owner only
    Unpause {},

    /// Permanently deactivate the contract and sweep its native balance to
    /// the owner.
    ///
    /// Authorization: owner only, contract must be halted
    Kill {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Seconds until the transaction expires; `u64::MAX` for unknown
    /// hashes, zero for expired or settled ones.
    #[returns(LeftLockedTimeResponse)]
    LeftLockedTime { x_hash: Binary },

    /// Whether a transaction is recorded for the hash.
    #[returns(XHashExistResponse)]
    XHashExist { x_hash: Binary },

    /// Fee quote for an outbound swap of `value` through `storeman`.
    #[returns(OutboundFeeResponse)]
    OutboundFee { storeman: String, value: Uint128 },

    /// Full record of a transaction, including the shadow address and the
    /// escrowed fee where present.
    #[returns(HtlcResponse)]
    Htlc { x_hash: Binary },

    /// Contract configuration.
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct LeftLockedTimeResponse {
    pub seconds: u64,
}

#[cw_serde]
pub struct XHashExistResponse {
    pub exists: bool,
}

#[cw_serde]
pub struct OutboundFeeResponse {
    pub fee: Uint128,
}

#[cw_serde]
pub struct HtlcResponse {
    pub direction: TxDirection,
    pub source: String,
    pub destination: String,
    pub value: Uint128,
    pub status: TxStatus,
    pub begin_locked_time: u64,
    pub locked_time: u64,
    /// Origin-chain counterparty address, first-hand entries only
    pub shadow_address: Option<String>,
    /// Escrowed native-coin fee, open outbound entries only
    pub fee_escrow: Option<Uint128>,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: String,
    pub halted: bool,
    pub killed: bool,
    pub token_manager: Option<String>,
    pub storeman_admin: Option<String>,
    pub fee_denom: String,
    pub locked_time: u64,
    pub revoke_fee_ratio: u64,
}
