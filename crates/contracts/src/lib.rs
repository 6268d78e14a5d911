//! Contract bindings and read client for staking reward pools.
//!
//! This crate provides Solidity bindings for the contracts involved in
//! staking reward APRs (ERC20 tokens, `StakingRewards` pools and
//! Multicall3) and a read-only client that fetches pool state in a single
//! batched round trip.
//!
//! # Example
//!
//! ```no_run
//! use staking_apr_contracts::{PoolMethod, PoolReadClient};
//! use alloy_primitives::Address;
//!
//! #[tokio::main]
//! async fn main() -> staking_apr_contracts::Result<()> {
//!     let client = PoolReadClient::new("https://mainnet.optimism.io")?;
//!
//!     let pool: Address = "0x...".parse().unwrap();
//!     let calls: Vec<_> = PoolMethod::ALL.iter().map(|m| (pool, *m)).collect();
//!     let values = client.aggregate(&calls).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod erc20;
pub mod error;
pub mod multicall;
pub mod pool_method;
pub mod provider;
pub mod read_client;
pub mod staking_rewards;

pub use error::{ContractError, Result};
pub use multicall::MULTICALL3_ADDRESS;
pub use pool_method::{PoolMethod, ReadValue};
pub use provider::{connect_http, ReadProvider};
pub use read_client::PoolReadClient;
