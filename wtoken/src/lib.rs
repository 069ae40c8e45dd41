//! Wrapped Token Contract - Shadow Representation of the Base Asset
//!
//! A cw20-compatible token whose supply is controlled exclusively by the
//! quota ledger (the "manager"). Users transfer and approve as with any
//! cw20 token; mint, burn and the supply-neutral `LockTo` escrow move are
//! reserved for the manager, which invokes them while settling swaps.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
