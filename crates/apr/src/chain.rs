//! Batched on-chain reads.
//!
//! The calculator only needs two things from a chain: a batch of typed pool
//! view calls resolved in one round trip, and a single ERC20 `decimals()`
//! read. [`ChainReader`] models both; [`RpcChainReader`] implements them
//! over JSON-RPC with Multicall3.

use std::collections::HashMap;
use std::future::Future;

use alloy_chains::Chain;
use alloy_primitives::{Address, U256};
use staking_apr_contracts::{PoolMethod, PoolReadClient, ReadValue};

use crate::config::AprConfig;
use crate::error::{AprError, ChainReadError};

/// One view call in a batch, also used as the key of the batch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReadCall {
    pub target: Address,
    pub method: PoolMethod,
}

impl ReadCall {
    pub fn new(target: Address, method: PoolMethod) -> Self {
        Self { target, method }
    }
}

/// Read access to chain state.
pub trait ChainReader: Send + Sync {
    /// Resolve every call in one round trip.
    ///
    /// The returned map is keyed by the requested calls; a call absent from
    /// the map had no result.
    fn batch_read(
        &self,
        chain: Chain,
        calls: &[ReadCall],
    ) -> impl Future<Output = Result<HashMap<ReadCall, ReadValue>, ChainReadError>> + Send;

    /// Read an ERC20 token's `decimals()`.
    fn read_decimals(
        &self,
        chain: Chain,
        token: Address,
    ) -> impl Future<Output = Result<u8, ChainReadError>> + Send;
}

/// [`ChainReader`] over one JSON-RPC endpoint per chain.
#[derive(Clone, Default)]
pub struct RpcChainReader {
    clients: HashMap<Chain, PoolReadClient>,
}

impl RpcChainReader {
    /// Create a reader with no chains configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader for every chain with an RPC URL in `config`.
    pub fn from_config(config: &AprConfig) -> Result<Self, ChainReadError> {
        let mut reader = Self::new();
        for (chain, url) in &config.rpc_urls {
            reader
                .clients
                .insert(*chain, PoolReadClient::new(url.as_str())?);
        }
        Ok(reader)
    }

    /// Use `client` for reads on `chain`.
    pub fn with_client(mut self, chain: Chain, client: PoolReadClient) -> Self {
        self.clients.insert(chain, client);
        self
    }

    /// Whether an endpoint is configured for `chain`.
    pub fn supports(&self, chain: Chain) -> bool {
        self.clients.contains_key(&chain)
    }

    fn client(&self, chain: Chain) -> Result<&PoolReadClient, ChainReadError> {
        self.clients
            .get(&chain)
            .ok_or(ChainReadError::UnknownChain(chain))
    }
}

impl ChainReader for RpcChainReader {
    async fn batch_read(
        &self,
        chain: Chain,
        calls: &[ReadCall],
    ) -> Result<HashMap<ReadCall, ReadValue>, ChainReadError> {
        let client = self.client(chain)?;
        let pairs: Vec<(Address, PoolMethod)> =
            calls.iter().map(|call| (call.target, call.method)).collect();
        let values = client.aggregate(&pairs).await?;
        Ok(calls.iter().copied().zip(values).collect())
    }

    async fn read_decimals(&self, chain: Chain, token: Address) -> Result<u8, ChainReadError> {
        let client = self.client(chain)?;
        Ok(client.get_decimals(token).await?)
    }
}

/// Staking pool state needed to evaluate a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolState {
    /// Unix timestamp at which rewards stop.
    pub period_finish: U256,
    /// Reward token base units emitted per second.
    pub reward_rate: U256,
    /// Vault token base units staked.
    pub total_supply: U256,
    /// Token paid out as reward.
    pub rewards_token: Address,
}

impl PoolState {
    /// The batch of calls that reads a pool's state.
    pub fn calls(pool: Address) -> Vec<ReadCall> {
        PoolMethod::ALL
            .iter()
            .map(|method| ReadCall::new(pool, *method))
            .collect()
    }

    /// Assemble the state from a batch result.
    pub fn from_values(
        pool: Address,
        values: &HashMap<ReadCall, ReadValue>,
    ) -> Result<Self, AprError> {
        let value = |method: PoolMethod| {
            values
                .get(&ReadCall::new(pool, method))
                .copied()
                .ok_or(AprError::MissingValue { pool, method })
        };
        let uint = |method: PoolMethod| {
            value(method)?
                .as_uint()
                .ok_or(AprError::UnexpectedValue { pool, method })
        };

        let rewards_token = value(PoolMethod::RewardsToken)?
            .as_address()
            .ok_or(AprError::UnexpectedValue {
                pool,
                method: PoolMethod::RewardsToken,
            })?;

        Ok(Self {
            period_finish: uint(PoolMethod::PeriodFinish)?,
            reward_rate: uint(PoolMethod::RewardRate)?,
            total_supply: uint(PoolMethod::TotalSupply)?,
            rewards_token,
        })
    }
}
