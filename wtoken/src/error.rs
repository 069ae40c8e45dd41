//! Error types for the wrapped token contract.

use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only the token manager can perform this action")]
    UnauthorizedManager,

    #[error("Token is halted")]
    SystemHalted,

    #[error("Token manager is not configured")]
    NoManager,

    #[error("Amount must be greater than zero")]
    InvalidZeroAmount,

    #[error("Cannot move tokens from an account to itself")]
    SelfTransfer,

    #[error("Insufficient balance: account holds {balance}, needs {required}")]
    InsufficientBalance { balance: String, required: String },

    #[error("Insufficient allowance: spender holds {allowance}, needs {required}")]
    InsufficientAllowance {
        allowance: String,
        required: String,
    },

    #[error("Native coin transfers are not accepted by this contract")]
    NativeFundsRejected,
}
