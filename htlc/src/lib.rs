//! HTLC Contract - Atomic Swap Settlement for the Shadow Bridge
//!
//! Records hash time-locked transactions keyed by the Keccak-256 digest of
//! their preimage and drives the quota ledger through the swap lifecycle.
//!
//! # Inbound Flow (base chain → shadow token)
//! 1. A storeman observes the user's lock on the base chain and calls
//!    `InboundLock`, reserving quota for the recipient
//! 2. The recipient reveals the preimage via `InboundRefund`, which converts
//!    the reservation into debt and mints shadow tokens
//! 3. If no preimage appears within the lock window, the storeman calls
//!    `InboundRevoke` to release the reservation
//!
//! # Outbound Flow (shadow token → base chain)
//! 1. The user calls `OutboundLock` with a native-coin fee attached; their
//!    shadow tokens are escrowed under this contract for twice the base
//!    window (the first-hand side commits first and must wait longest)
//! 2. The storeman reveals the preimage via `OutboundRefund`, burning the
//!    escrow and collecting the fee
//! 3. After expiry, `OutboundRevoke` returns the tokens and splits the fee
//!    between storeman and user by the configured revoke ratio

pub mod contract;
pub mod engine;
pub mod error;
mod execute;
pub mod fee;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
