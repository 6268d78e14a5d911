//! Read-only client for staking pools and ERC20 tokens.

use alloy_primitives::Address;

use crate::erc20::IERC20;
use crate::error::{ContractError, Result};
use crate::multicall::{IMulticall3, MULTICALL3_ADDRESS};
use crate::pool_method::{PoolMethod, ReadValue};
use crate::provider::{connect_http, ReadProvider};

/// Client for reading staking pool state over JSON-RPC.
#[derive(Clone)]
pub struct PoolReadClient {
    provider: ReadProvider,
    multicall: Address,
}

impl PoolReadClient {
    /// Create a new read client for the given RPC URL.
    pub fn new(rpc_url: &str) -> Result<Self> {
        Ok(Self::from_provider(connect_http(rpc_url)?))
    }

    /// Create a read client from an existing provider.
    pub fn from_provider(provider: ReadProvider) -> Self {
        Self {
            provider,
            multicall: MULTICALL3_ADDRESS,
        }
    }

    /// Use a Multicall3 deployment at a non-canonical address.
    pub fn with_multicall(mut self, multicall: Address) -> Self {
        self.multicall = multicall;
        self
    }

    /// Get the decimals of a token.
    pub async fn get_decimals(&self, token: Address) -> Result<u8> {
        let contract = IERC20::new(token, &self.provider);
        let result = contract.decimals().call().await.map_err(|e| {
            ContractError::CallFailed(format!("Failed to get decimals of {}: {}", token, e))
        })?;
        Ok(result)
    }

    /// Read several pool methods in a single `aggregate3` round trip.
    ///
    /// Results are returned in the order of `calls`. Any reverted sub-call
    /// fails the whole batch.
    pub async fn aggregate(&self, calls: &[(Address, PoolMethod)]) -> Result<Vec<ReadValue>> {
        if calls.is_empty() {
            return Ok(Vec::new());
        }

        let encoded: Vec<IMulticall3::Call3> = calls
            .iter()
            .map(|(target, method)| IMulticall3::Call3 {
                target: *target,
                allowFailure: true,
                callData: method.calldata(),
            })
            .collect();

        let multicall = IMulticall3::new(self.multicall, &self.provider);
        let results = multicall.aggregate3(encoded).call().await.map_err(|e| {
            ContractError::CallFailed(format!("Failed to execute multicall: {}", e))
        })?;

        if results.len() != calls.len() {
            return Err(ContractError::CallFailed(format!(
                "Multicall returned {} results for {} calls",
                results.len(),
                calls.len()
            )));
        }

        calls
            .iter()
            .zip(results)
            .map(|((target, method), result)| {
                if !result.success {
                    return Err(ContractError::Reverted {
                        target: *target,
                        method: method.name(),
                    });
                }
                method.decode(*target, &result.returnData)
            })
            .collect()
    }
}
