//! Error types for the HTLC contract.

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: caller is not a participant of this transaction")]
    UnauthorizedParticipant,

    #[error("Contract is halted")]
    SystemHalted,

    #[error("Operation requires the contract to be halted")]
    NotHalted,

    #[error("Contract has been killed")]
    Killed,

    #[error("Contract is not initialized: token manager and storeman admin must be set")]
    NotInitialized,

    #[error("Value must be greater than zero")]
    InvalidZeroAmount,

    #[error("Invalid hash length: expected 32 bytes, got {got}")]
    InvalidHashLength { got: usize },

    #[error("Invalid preimage length: expected 32 bytes, got {got}")]
    InvalidPreimageLength { got: usize },

    #[error("Hash already in use")]
    HashAlreadyUsed,

    #[error("No transaction recorded for this hash")]
    SwapNotFound,

    #[error("Transaction already settled")]
    AlreadySettled,

    #[error("Transaction direction does not match")]
    DirectionMismatch,

    #[error("Lock window has expired; only revoke is possible")]
    WindowExpired,

    #[error("Lock window has not expired yet")]
    WindowNotExpired,

    #[error("Insufficient fee: expected {expected}, got {got}")]
    InsufficientFee { expected: Uint128, got: Uint128 },

    #[error("Unsupported fee denom: {denom}")]
    UnsupportedFeeDenom { denom: String },

    #[error("Revoke fee ratio must not exceed {precise}")]
    InvalidFeeRatio { precise: u64 },

    #[error("Locked time must be greater than zero")]
    InvalidLockedTime,
}
