//! Read-only lookups the calculator depends on, and in-memory implementations.
//!
//! The calculator never owns the data behind these traits: campaign
//! registries, token metadata and prices are maintained elsewhere and only
//! queried here. The in-memory stores are filled once (for example from a
//! [`StoreSnapshot`](crate::snapshot::StoreSnapshot)) and then shared
//! read-only.

use std::collections::HashMap;

use alloy_chains::Chain;
use alloy_primitives::Address;
use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::types::{PriceQuote, StakingCampaign, TokenMetadata};

/// Looks up the staking campaign attached to a vault.
pub trait StakingRegistry: Send + Sync {
    fn staking_for_vault(&self, chain: Chain, vault: Address) -> Option<StakingCampaign>;
}

/// Looks up cached token decimals.
pub trait MetadataStore: Send + Sync {
    fn token_decimals(&self, chain: Chain, token: Address) -> Option<u8>;
}

/// Looks up humanized USD prices.
pub trait PriceStore: Send + Sync {
    fn usd_price(&self, chain: Chain, token: Address) -> Option<Decimal>;
}

/// Campaign registry backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    campaigns: HashMap<(Chain, Address), StakingCampaign>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a campaign, replacing any previous one for the same vault.
    pub fn insert(&mut self, campaign: StakingCampaign) {
        self.campaigns
            .insert((campaign.chain, campaign.vault), campaign);
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }
}

impl StakingRegistry for InMemoryRegistry {
    fn staking_for_vault(&self, chain: Chain, vault: Address) -> Option<StakingCampaign> {
        self.campaigns.get(&(chain, vault)).copied()
    }
}

/// Token metadata store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetadataStore {
    decimals: HashMap<(Chain, Address), u8>,
}

impl InMemoryMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a token's decimals.
    ///
    /// Re-inserting the same value is a no-op; a different value for a known
    /// token is rejected.
    pub fn insert(&mut self, token: TokenMetadata) -> Result<(), StoreError> {
        let key = (token.chain, token.address);
        match self.decimals.get(&key) {
            Some(&existing) if existing != token.decimals => Err(StoreError::ConflictingDecimals {
                chain: token.chain,
                token: token.address,
                existing,
                new: token.decimals,
            }),
            Some(_) => Ok(()),
            None => {
                self.decimals.insert(key, token.decimals);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.decimals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decimals.is_empty()
    }
}

impl MetadataStore for InMemoryMetadataStore {
    fn token_decimals(&self, chain: Chain, token: Address) -> Option<u8> {
        self.decimals.get(&(chain, token)).copied()
    }
}

/// Price store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPriceStore {
    prices: HashMap<(Chain, Address), Decimal>,
}

impl InMemoryPriceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a price, replacing any previous quote for the token.
    pub fn insert(&mut self, quote: PriceQuote) -> Result<(), StoreError> {
        if quote.price < Decimal::ZERO {
            return Err(StoreError::NegativePrice {
                chain: quote.chain,
                token: quote.address,
                price: quote.price,
            });
        }
        self.prices.insert((quote.chain, quote.address), quote.price);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl PriceStore for InMemoryPriceStore {
    fn usd_price(&self, chain: Chain, token: Address) -> Option<Decimal> {
        self.prices.get(&(chain, token)).copied()
    }
}
