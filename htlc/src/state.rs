//! State definitions for the HTLC contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Trade direction of a locked transaction.
#[cw_serde]
#[derive(Copy)]
pub enum TxDirection {
    /// Base coin locked on the origin chain, shadow tokens to be minted
    CoinToWtoken,
    /// Shadow tokens escrowed here, base coin to be released on the
    /// origin chain
    WtokenToCoin,
}

/// Lifecycle status of a locked transaction. Absence of a record is the
/// implicit initial status; both terminal states are final.
#[cw_serde]
#[derive(Copy)]
pub enum TxStatus {
    Locked,
    Refunded,
    Revoked,
}

/// A hash time-locked transaction, keyed by the Keccak-256 digest of its
/// preimage. All fields are immutable after creation except `status`.
#[cw_serde]
pub struct HtlcRecord {
    pub direction: TxDirection,
    /// Party that committed the value (storeman for inbound, user for
    /// outbound)
    pub source: Addr,
    /// Party entitled to claim by revealing the preimage
    pub destination: Addr,
    /// Swap amount; base-asset units inbound, shadow-token units outbound
    pub value: Uint128,
    pub status: TxStatus,
    /// Wall-clock seconds at creation
    pub begin_locked_time: u64,
    /// Window length in seconds
    pub locked_time: u64,
}

impl HtlcRecord {
    /// First instant at which the transaction can be revoked (and can no
    /// longer be refunded).
    pub fn deadline(&self) -> u64 {
        self.begin_locked_time.saturating_add(self.locked_time)
    }
}

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Owner address for administrative control
    pub owner: Addr,
    /// Whether the contract is currently halted
    pub halted: bool,
    /// Set by `Kill`; permanently rejects every execute
    pub killed: bool,
    /// Quota ledger driving the wrapped token. Unset until wired.
    pub token_manager: Option<Addr>,
    /// Storeman-group admin registry supplying fee ratios. Unset until
    /// wired.
    pub storeman_admin: Option<Addr>,
    /// Native denom used for outbound fees
    pub fee_denom: String,
    /// Base lock window in seconds; the first-hand side gets twice this
    pub locked_time: u64,
    /// Storeman share of the escrowed fee on revoke, over RATIO_PRECISE
    pub revoke_fee_ratio: u64,
}

/// Default base lock window: 36 hours
pub const DEFAULT_LOCKED_TIME: u64 = 36 * 3600;

/// Left-locked-time sentinel reported for unknown hashes
pub const MAX_LEFT_LOCKED_TIME: u64 = u64::MAX;

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:shadow-htlc";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

/// Locked transactions keyed by the 32-byte xHash
pub const HTLCS: Map<&[u8], HtlcRecord> = Map::new("htlcs");

/// Origin-chain addresses recorded for first-hand entries, so relayers can
/// route the counter-leg
pub const SHADOWS: Map<&[u8], String> = Map::new("shadows");

/// Native-coin fee held pending the terminal transition of an outbound
/// transaction
pub const FEE_ESCROWS: Map<&[u8], Uint128> = Map::new("fee_escrows");
