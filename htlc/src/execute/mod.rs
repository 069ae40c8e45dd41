//! Execute handlers for the HTLC contract.
//!
//! - `inbound` - InboundLock, InboundRefund, InboundRevoke
//! - `outbound` - OutboundLock, OutboundRefund, OutboundRevoke
//! - `admin` - Pause, unpause, kill and the halted-only setters

mod admin;
mod inbound;
mod outbound;

pub use admin::*;
pub use inbound::*;
pub use outbound::*;

use cosmwasm_std::{Addr, Binary};

use crate::error::ContractError;
use crate::state::Config;

/// Reject executes on a killed or halted contract.
fn ensure_operational(config: &Config) -> Result<(), ContractError> {
    if config.killed {
        return Err(ContractError::Killed);
    }
    if config.halted {
        return Err(ContractError::SystemHalted);
    }
    Ok(())
}

/// Both collaborator references must be wired before any swap operation.
fn ensure_initialized(config: &Config) -> Result<(&Addr, &Addr), ContractError> {
    match (&config.token_manager, &config.storeman_admin) {
        (Some(manager), Some(registry)) => Ok((manager, registry)),
        _ => Err(ContractError::NotInitialized),
    }
}

fn parse_hash(x_hash: &Binary) -> Result<[u8; 32], ContractError> {
    common::to_bytes32(x_hash).map_err(|got| ContractError::InvalidHashLength { got })
}

fn parse_preimage(preimage: &Binary) -> Result<[u8; 32], ContractError> {
    common::to_bytes32(preimage).map_err(|got| ContractError::InvalidPreimageLength { got })
}
