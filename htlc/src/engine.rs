//! Core state machine for hash time-locked transactions.
//!
//! Every locked transaction is keyed by the Keccak-256 digest of its
//! preimage and walks `Locked -> Refunded` (preimage revealed inside the
//! window) or `Locked -> Revoked` (window expired). Terminal states are
//! final; a hash can never be reused.
//!
//! The first-hand side of a swap — the party that commits value before its
//! counterparty — receives twice the base window: the counterparty needs
//! time to observe the lock, create the counter-leg, and reveal, and the
//! first-hand party must still be able to claim with the revealed preimage
//! afterwards.

use cosmwasm_std::{Addr, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{HtlcRecord, TxDirection, TxStatus, HTLCS, MAX_LEFT_LOCKED_TIME, SHADOWS};

/// Record a new locked transaction.
///
/// The hash must be unused; `base_window` is doubled for first-hand
/// entries, whose origin-chain counterparty address is kept for relayers.
#[allow(clippy::too_many_arguments)]
pub fn add_htlc_tx(
    storage: &mut dyn Storage,
    now: u64,
    direction: TxDirection,
    source: Addr,
    destination: Addr,
    x_hash: &[u8; 32],
    value: Uint128,
    shadow: Option<String>,
    base_window: u64,
) -> Result<HtlcRecord, ContractError> {
    if value.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    if HTLCS.may_load(storage, x_hash)?.is_some() {
        return Err(ContractError::HashAlreadyUsed);
    }

    let first_hand = shadow.is_some();
    let locked_time = if first_hand {
        base_window.saturating_mul(2)
    } else {
        base_window
    };

    let record = HtlcRecord {
        direction,
        source,
        destination,
        value,
        status: TxStatus::Locked,
        begin_locked_time: now,
        locked_time,
    };
    HTLCS.save(storage, x_hash, &record)?;

    if let Some(shadow) = shadow {
        SHADOWS.save(storage, x_hash, &shadow)?;
    }

    Ok(record)
}

/// Settle a locked transaction by preimage reveal.
///
/// Only the destination may refund, only while the window is open, and
/// only in the recorded direction.
pub fn refund_htlc_tx(
    storage: &mut dyn Storage,
    now: u64,
    sender: &Addr,
    x_hash: &[u8; 32],
    direction: TxDirection,
) -> Result<HtlcRecord, ContractError> {
    let mut record = load_locked(storage, x_hash)?;

    if record.direction != direction {
        return Err(ContractError::DirectionMismatch);
    }
    if record.destination != *sender {
        return Err(ContractError::UnauthorizedParticipant);
    }
    if now >= record.deadline() {
        return Err(ContractError::WindowExpired);
    }

    record.status = TxStatus::Refunded;
    HTLCS.save(storage, x_hash, &record)?;
    Ok(record)
}

/// Cancel an expired locked transaction.
///
/// Strict mode admits only the source; loose mode admits either
/// participant.
pub fn revoke_htlc_tx(
    storage: &mut dyn Storage,
    now: u64,
    sender: &Addr,
    x_hash: &[u8; 32],
    direction: TxDirection,
    loose: bool,
) -> Result<HtlcRecord, ContractError> {
    let mut record = load_locked(storage, x_hash)?;

    if record.direction != direction {
        return Err(ContractError::DirectionMismatch);
    }
    if now < record.deadline() {
        return Err(ContractError::WindowNotExpired);
    }
    let authorized = record.source == *sender || (loose && record.destination == *sender);
    if !authorized {
        return Err(ContractError::UnauthorizedParticipant);
    }

    record.status = TxStatus::Revoked;
    HTLCS.save(storage, x_hash, &record)?;
    Ok(record)
}

/// Seconds until a locked transaction expires.
///
/// Reports the maximum sentinel for unknown hashes and zero for expired or
/// settled ones.
pub fn left_locked_time(storage: &dyn Storage, now: u64, x_hash: &[u8; 32]) -> StdResult<u64> {
    let record = match HTLCS.may_load(storage, x_hash)? {
        Some(record) => record,
        None => return Ok(MAX_LEFT_LOCKED_TIME),
    };
    match record.status {
        TxStatus::Locked => Ok(record.deadline().saturating_sub(now)),
        TxStatus::Refunded | TxStatus::Revoked => Ok(0),
    }
}

fn load_locked(storage: &dyn Storage, x_hash: &[u8; 32]) -> Result<HtlcRecord, ContractError> {
    let record = HTLCS
        .may_load(storage, x_hash)?
        .ok_or(ContractError::SwapNotFound)?;
    match record.status {
        TxStatus::Locked => Ok(record),
        TxStatus::Refunded | TxStatus::Revoked => Err(ContractError::AlreadySettled),
    }
}
