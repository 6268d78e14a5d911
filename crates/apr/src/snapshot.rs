//! JSON snapshots of the registry, metadata and price stores.
//!
//! A snapshot looks like:
//!
//! ```json
//! {
//!   "campaigns": [{ "chain": 10, "vault": "0x…", "pool": "0x…" }],
//!   "tokens":    [{ "chain": 10, "address": "0x…", "decimals": 18 }],
//!   "prices":    [{ "chain": 10, "address": "0x…", "price": "2.0" }],
//!   "vaults":    [{ "chain": 10, "address": "0x…", "decimals": 18 }]
//! }
//! ```
//!
//! Every section is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::store::{InMemoryMetadataStore, InMemoryPriceStore, InMemoryRegistry};
use crate::types::{PriceQuote, StakingCampaign, TokenMetadata, Vault};

/// Serialized contents of the stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSnapshot {
    pub campaigns: Vec<StakingCampaign>,
    pub tokens: Vec<TokenMetadata>,
    pub prices: Vec<PriceQuote>,
    pub vaults: Vec<Vault>,
}

/// Stores populated from a snapshot.
#[derive(Debug, Clone, Default)]
pub struct Stores {
    pub registry: InMemoryRegistry,
    pub metadata: InMemoryMetadataStore,
    pub prices: InMemoryPriceStore,
    pub vaults: Vec<Vault>,
}

impl StoreSnapshot {
    /// Parse a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Build the in-memory stores.
    ///
    /// Fails if two entries disagree on a token's decimals or a price is
    /// negative.
    pub fn into_stores(self) -> Result<Stores, SnapshotError> {
        let mut stores = Stores::default();

        for campaign in self.campaigns {
            stores.registry.insert(campaign);
        }
        for token in self.tokens {
            stores.metadata.insert(token)?;
        }
        for quote in self.prices {
            stores.prices.insert(quote)?;
        }
        stores.vaults = self.vaults;

        Ok(stores)
    }
}
