//! Staking reward APR for yield-bearing vaults.
//!
//! Vaults can have a staking rewards pool attached, in which vault tokens
//! are staked to earn a constant per-second emission of a reward token
//! until the end of the reward period. This crate computes the annualized
//! rate of that emission for one staked vault token.
//!
//! The calculator depends on four injected collaborators:
//!
//! - a [`StakingRegistry`] mapping vaults to pools,
//! - a [`ChainReader`] for batched pool reads and `decimals()` fallbacks,
//! - a [`MetadataStore`] of cached token decimals,
//! - a [`PriceStore`] of USD prices.
//!
//! # Example
//!
//! ```no_run
//! use staking_apr::{
//!     AprCalculator, AprConfig, Chain, RpcChainReader, StoreSnapshot,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let stores = StoreSnapshot::load("snapshot.json")?.into_stores()?;
//!     let config = AprConfig::new()
//!         .with_rpc_url(Chain::from_id(10), "https://mainnet.optimism.io".parse()?);
//!     let reader = RpcChainReader::from_config(&config)?;
//!
//!     let calculator = AprCalculator::new(stores.registry, reader, stores.metadata, stores.prices)
//!         .with_config(config);
//!
//!     for vault in &stores.vaults {
//!         let (apr, valid) = calculator.compute(vault).await?.into_pair();
//!         println!("{}: {} ({})", vault.address, apr, valid);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Expected conditions (no campaign, ended rewards, empty pool, unknown
//! vault token) are reported as [`AprOutcome::Skipped`], which maps to
//! `(0, false)`. A missing price counts as zero. Only failed chain reads,
//! malformed pool data and undefined arithmetic (such as a zero vault
//! price) surface as [`AprError`].

pub mod calculator;
pub mod chain;
pub mod config;
pub mod decimals;
pub mod error;
pub mod guard;
pub mod outcome;
pub mod snapshot;
pub mod store;
pub mod types;

pub use alloy_chains::Chain;
pub use calculator::AprCalculator;
pub use chain::{ChainReader, PoolState, ReadCall, RpcChainReader};
pub use config::{AprConfig, DEFAULT_REWARD_DECIMALS};
pub use decimals::{resolve_token_decimals, vault_decimals, DecimalsSource, ResolvedDecimals};
pub use error::{AprError, ChainReadError, Result, SnapshotError, StoreError};
pub use outcome::{AprOutcome, SkipReason};
pub use snapshot::{StoreSnapshot, Stores};
pub use staking_apr_contracts::{ContractError, PoolMethod, PoolReadClient, ReadValue};
pub use staking_apr_math::{AprBreakdown, AprInputs, MathError, SECONDS_PER_YEAR};
pub use store::{
    InMemoryMetadataStore, InMemoryPriceStore, InMemoryRegistry, MetadataStore, PriceStore,
    StakingRegistry,
};
pub use types::{chain_id_serde, PriceQuote, StakingCampaign, TokenMetadata, Vault};
