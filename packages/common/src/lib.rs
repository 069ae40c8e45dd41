//! Common - Shared Types and Utilities for the Shadow-Bridge Contracts
//!
//! This package provides the hashing helpers and the storeman-admin registry
//! interface shared across the settlement contracts.

pub mod hash;
pub mod registry;

pub use hash::{bytes32_to_hex, hex_to_bytes32, keccak256, to_bytes32};
pub use registry::{FeeRatiosResponse, StoremanAdminQueryMsg};

/// Denominator for the revoke-fee ratio (10000 = 100%).
pub const RATIO_PRECISE: u64 = 10_000;
