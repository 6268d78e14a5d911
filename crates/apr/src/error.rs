//! Error types for the staking APR library.

use alloy_chains::Chain;
use alloy_primitives::Address;
use rust_decimal::Decimal;
use staking_apr_contracts::{ContractError, PoolMethod};
use staking_apr_math::MathError;
use thiserror::Error;

/// Errors from a [`ChainReader`](crate::chain::ChainReader).
#[derive(Debug, Error)]
pub enum ChainReadError {
    /// No RPC endpoint is configured for the chain.
    #[error("No RPC endpoint configured for chain {0}")]
    UnknownChain(Chain),

    /// The underlying contract call failed.
    #[error(transparent)]
    Contract(#[from] ContractError),
}

/// Errors raised when populating the in-memory stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Token decimals never change once recorded.
    #[error("Token {token} on chain {chain} already has {existing} decimals, refusing {new}")]
    ConflictingDecimals {
        chain: Chain,
        token: Address,
        existing: u8,
        new: u8,
    },

    /// Prices are never negative.
    #[error("Negative price {price} for token {token} on chain {chain}")]
    NegativePrice {
        chain: Chain,
        token: Address,
        price: Decimal,
    },
}

/// Errors raised while loading a store snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot is not valid JSON for the expected shape.
    #[error("Failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    /// The snapshot contents are inconsistent.
    #[error("Invalid snapshot: {0}")]
    Store(#[from] StoreError),
}

/// Errors that abort the APR computation of a single vault.
///
/// Expected steady states (no campaign, ended rewards, nothing staked,
/// unknown vault token) are not errors; they are reported through
/// [`AprOutcome::Skipped`](crate::outcome::AprOutcome::Skipped).
#[derive(Debug, Error)]
pub enum AprError {
    /// Reading pool state or token decimals failed.
    #[error("Chain read failed: {0}")]
    ChainRead(#[from] ChainReadError),

    /// A batch read did not return a value for a requested call.
    #[error("Missing {method} in batch result for pool {pool}")]
    MissingValue { pool: Address, method: PoolMethod },

    /// A batch read returned a value of the wrong type.
    #[error("Unexpected value type for {method} on pool {pool}")]
    UnexpectedValue { pool: Address, method: PoolMethod },

    /// Normalization or the APR formula failed.
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Result type alias for APR operations.
pub type Result<T> = std::result::Result<T, AprError>;
