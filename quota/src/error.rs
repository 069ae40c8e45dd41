//! Error types for the quota ledger contract.

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

    #[error("Unauthorized: only the storeman-group admin can perform this action")]
    UnauthorizedAdmin,

    #[error("Unauthorized: only the HTLC engine can perform this action")]
    UnauthorizedHtlc,

    #[error("Ledger is halted")]
    SystemHalted,

    #[error("Operation requires the ledger to be halted")]
    NotHalted,

    #[error("HTLC engine is not configured")]
    HtlcNotConfigured,

    #[error("Value must be greater than zero")]
    InvalidZeroAmount,

    #[error("Storeman group already registered: {group}")]
    GroupAlreadyRegistered { group: String },

    #[error("Storeman group not registered: {group}")]
    GroupNotRegistered { group: String },

    #[error("Storeman group not active: {group}")]
    GroupNotActive { group: String },

    #[error("Group has not applied for unregistration: {group}")]
    NotUnregistering { group: String },

    #[error("Cannot unregister: group still has receivable, payable or debt")]
    DebtOutstanding,

    #[error("Recipient is an active storeman group: {recipient}")]
    RecipientIsActiveGroup { recipient: String },

    #[error("Initiator is a registered storeman group: {initiator}")]
    InitiatorIsGroup { initiator: String },

    #[error(
        "Debt drain not allowed: decommissioning recipient must have zero \
         receivable and payable and nonzero debt"
    )]
    DrainNotAllowed,

    #[error("Quota exceeded: {available} available, {requested} requested")]
    QuotaExceeded {
        available: String,
        requested: String,
    },
}
