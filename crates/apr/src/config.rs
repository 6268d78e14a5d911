//! Configuration for the APR calculator and its RPC chain reader.

use std::collections::HashMap;

use alloy_chains::Chain;
use url::Url;

/// Decimals assumed for a reward token whose decimals cannot be resolved.
pub const DEFAULT_REWARD_DECIMALS: u8 = 18;

/// Configuration for [`AprCalculator`](crate::calculator::AprCalculator) and
/// [`RpcChainReader`](crate::chain::RpcChainReader).
#[derive(Debug, Clone)]
pub struct AprConfig {
    /// Fallback decimals for reward tokens missing from the metadata store
    /// whose on-chain read fails.
    pub default_reward_decimals: u8,
    /// JSON-RPC endpoint per chain.
    pub rpc_urls: HashMap<Chain, Url>,
}

impl Default for AprConfig {
    fn default() -> Self {
        Self {
            default_reward_decimals: DEFAULT_REWARD_DECIMALS,
            rpc_urls: HashMap::new(),
        }
    }
}

impl AprConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback decimals for reward tokens.
    pub fn with_default_reward_decimals(mut self, decimals: u8) -> Self {
        self.default_reward_decimals = decimals;
        self
    }

    /// Set the RPC endpoint for a chain.
    pub fn with_rpc_url(mut self, chain: Chain, url: Url) -> Self {
        self.rpc_urls.insert(chain, url);
        self
    }
}
