//! Quota Ledger Contract - Per-Group Settlement Bookkeeping
//!
//! Tracks, for every storeman group, the total capacity (`quota`), the
//! inbound in-flight amount (`receivable`), the outstanding shadow-token
//! supply attributed to the group (`debt`), and the outbound in-flight
//! amount (`payable`). Every swap settlement runs through this ledger, which
//! validates capacity and drives the wrapped token's mint/burn/escrow moves.
//!
//! # Invariants
//! After every successful mutation:
//! - `quota >= receivable + debt` for every group
//! - `debt >= payable` for every group
//! - the sum of all debts equals the wrapped token's total supply
//! - the sum of all registered quotas equals `total_quota`
//!
//! # Authorization
//! Group lifecycle operations are reserved for the storeman-group admin;
//! all settlement operations are reserved for the HTLC engine.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
