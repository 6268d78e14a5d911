//! Error types for the contracts crate.

use alloy_primitives::Address;
use thiserror::Error;

/// Errors that can occur when reading contract state.
#[derive(Debug, Error)]
pub enum ContractError {
    /// RPC connection failed.
    #[error("RPC connection failed: {0}")]
    RpcConnection(String),

    /// An `eth_call` failed at the transport or node level.
    #[error("Call failed: {0}")]
    CallFailed(String),

    /// A sub-call of a multicall batch reverted.
    #[error("Call to {method} on {target} reverted")]
    Reverted { target: Address, method: &'static str },

    /// Return data could not be decoded.
    #[error("Failed to decode {method} from {target}: {reason}")]
    Decode {
        target: Address,
        method: &'static str,
        reason: String,
    },
}

/// Result type alias for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
