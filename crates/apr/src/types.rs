//! Domain types shared by the stores, the chain reader and the calculator.

use alloy_chains::Chain;
use alloy_primitives::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Serde helper module for serializing/deserializing [`Chain`] as a numeric chain ID.
///
/// # Example
///
/// ```ignore
/// use alloy_chains::Chain;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Entry {
///     #[serde(with = "chain_id_serde")]
///     chain: Chain,
/// }
/// ```
pub mod chain_id_serde {
    use alloy_chains::Chain;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(chain: &Chain, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(chain.id())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Chain, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Chain::from_id)
    }
}

/// A vault whose staking APR is being computed. Supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vault {
    /// Chain the vault is deployed on.
    #[serde(with = "chain_id_serde")]
    pub chain: Chain,
    /// Vault token address.
    pub address: Address,
    /// Decimals of the vault token.
    pub decimals: u8,
}

impl Vault {
    pub fn new(chain: Chain, address: Address, decimals: u8) -> Self {
        Self {
            chain,
            address,
            decimals,
        }
    }
}

/// A staking rewards pool registered for a vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StakingCampaign {
    /// Chain the pool is deployed on.
    #[serde(with = "chain_id_serde")]
    pub chain: Chain,
    /// Vault whose tokens are staked in the pool.
    pub vault: Address,
    /// Staking rewards pool contract.
    pub pool: Address,
}

/// Decimal precision of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenMetadata {
    #[serde(with = "chain_id_serde")]
    pub chain: Chain,
    pub address: Address,
    pub decimals: u8,
}

/// USD price of a token, already expressed in whole-token units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    #[serde(with = "chain_id_serde")]
    pub chain: Chain,
    pub address: Address,
    pub price: Decimal,
}
