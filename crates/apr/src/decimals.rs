//! Token decimals resolution.
//!
//! Reward tokens and vault tokens are treated differently. A reward token
//! missing from the metadata store is read on-chain, and if that read fails
//! the configured default is used. A vault token must be in the metadata
//! store; there is no fallback.

use alloy_chains::Chain;
use alloy_primitives::Address;
use tracing::{debug, warn};

use crate::chain::ChainReader;
use crate::store::MetadataStore;
use crate::types::Vault;

/// Where a decimals value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalsSource {
    /// The metadata store.
    Cache,
    /// A live `decimals()` read.
    Chain,
    /// The configured fallback after a failed read.
    Default,
}

/// A resolved decimals value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDecimals {
    pub decimals: u8,
    pub source: DecimalsSource,
}

/// Resolve a reward token's decimals. Never fails.
pub async fn resolve_token_decimals<M, C>(
    metadata: &M,
    reader: &C,
    chain: Chain,
    token: Address,
    default: u8,
) -> ResolvedDecimals
where
    M: MetadataStore,
    C: ChainReader,
{
    if let Some(decimals) = metadata.token_decimals(chain, token) {
        return ResolvedDecimals {
            decimals,
            source: DecimalsSource::Cache,
        };
    }

    match reader.read_decimals(chain, token).await {
        Ok(decimals) => {
            debug!(%chain, %token, decimals, "read token decimals on-chain");
            ResolvedDecimals {
                decimals,
                source: DecimalsSource::Chain,
            }
        }
        Err(error) => {
            warn!(
                %chain,
                %token,
                %error,
                default,
                "failed to read token decimals, using default"
            );
            ResolvedDecimals {
                decimals: default,
                source: DecimalsSource::Default,
            }
        }
    }
}

/// Look up a vault token's decimals in the metadata store.
///
/// The store is authoritative; a value disagreeing with the vault record is
/// logged.
pub fn vault_decimals<M: MetadataStore>(metadata: &M, vault: &Vault) -> Option<u8> {
    let decimals = metadata.token_decimals(vault.chain, vault.address)?;
    if decimals != vault.decimals {
        warn!(
            chain = %vault.chain,
            vault = %vault.address,
            stored = decimals,
            record = vault.decimals,
            "vault decimals disagree with metadata store, using stored value"
        );
    }
    Some(decimals)
}
