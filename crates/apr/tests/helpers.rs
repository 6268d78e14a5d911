//! Test helpers: a fake chain reader and a reference campaign fixture.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use alloy_primitives::{address, Address, U256};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use staking_apr::{
    AprCalculator, Chain, ChainReadError, ChainReader, ContractError, InMemoryMetadataStore,
    InMemoryPriceStore, InMemoryRegistry, PoolMethod, PoolState, PriceQuote, ReadCall, ReadValue,
    StakingCampaign, TokenMetadata, Vault,
};

pub const NOW: u64 = 1_700_000_000;

pub const VAULT: Address = address!("1111111111111111111111111111111111111111");
pub const POOL: Address = address!("2222222222222222222222222222222222222222");
pub const REWARD_TOKEN: Address = address!("4200000000000000000000000000000000000042");

pub type TestCalculator =
    AprCalculator<InMemoryRegistry, FakeChainReader, InMemoryMetadataStore, InMemoryPriceStore>;

pub fn optimism() -> Chain {
    Chain::from_id(10)
}

/// `amount * 10^decimals`.
pub fn units(amount: u64, decimals: u8) -> U256 {
    U256::from(amount) * U256::from(10u64).pow(U256::from(decimals))
}

/// Chain reader serving canned pool state and token decimals.
///
/// Decimals reads for tokens without a canned value fail.
#[derive(Default)]
pub struct FakeChainReader {
    values: HashMap<ReadCall, ReadValue>,
    decimals: HashMap<Address, u8>,
    batch_reads: AtomicUsize,
    decimals_reads: AtomicUsize,
}

impl FakeChainReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pool_state(mut self, pool: Address, state: PoolState) -> Self {
        let entries = [
            (PoolMethod::PeriodFinish, ReadValue::Uint(state.period_finish)),
            (PoolMethod::RewardRate, ReadValue::Uint(state.reward_rate)),
            (PoolMethod::TotalSupply, ReadValue::Uint(state.total_supply)),
            (PoolMethod::RewardsToken, ReadValue::Address(state.rewards_token)),
        ];
        for (method, value) in entries {
            self.values.insert(ReadCall::new(pool, method), value);
        }
        self
    }

    pub fn without_value(mut self, pool: Address, method: PoolMethod) -> Self {
        self.values.remove(&ReadCall::new(pool, method));
        self
    }

    pub fn with_decimals(mut self, token: Address, decimals: u8) -> Self {
        self.decimals.insert(token, decimals);
        self
    }

    pub fn batch_reads(&self) -> usize {
        self.batch_reads.load(Ordering::SeqCst)
    }

    pub fn decimals_reads(&self) -> usize {
        self.decimals_reads.load(Ordering::SeqCst)
    }
}

impl ChainReader for FakeChainReader {
    async fn batch_read(
        &self,
        _chain: Chain,
        calls: &[ReadCall],
    ) -> Result<HashMap<ReadCall, ReadValue>, ChainReadError> {
        self.batch_reads.fetch_add(1, Ordering::SeqCst);
        Ok(calls
            .iter()
            .filter_map(|call| self.values.get(call).map(|value| (*call, *value)))
            .collect())
    }

    async fn read_decimals(&self, _chain: Chain, token: Address) -> Result<u8, ChainReadError> {
        self.decimals_reads.fetch_add(1, Ordering::SeqCst);
        self.decimals.get(&token).copied().ok_or_else(|| {
            ChainReadError::Contract(ContractError::CallFailed(
                "execution reverted".to_string(),
            ))
        })
    }
}

/// Everything a calculator needs, editable before building it.
pub struct Fixture {
    pub vault: Vault,
    pub campaign: Option<StakingCampaign>,
    pub state: PoolState,
    pub tokens: Vec<TokenMetadata>,
    pub prices: Vec<PriceQuote>,
    pub reader: FakeChainReader,
}

impl Fixture {
    /// A running campaign emitting 1 reward token per second to 1000 staked
    /// vault tokens, both with 18 decimals; reward token at $2, vault token
    /// at $10.
    pub fn reference() -> Self {
        Self {
            vault: Vault::new(optimism(), VAULT, 18),
            campaign: Some(StakingCampaign {
                chain: optimism(),
                vault: VAULT,
                pool: POOL,
            }),
            state: PoolState {
                period_finish: U256::from(NOW + 1_000_000),
                reward_rate: units(1, 18),
                total_supply: units(1000, 18),
                rewards_token: REWARD_TOKEN,
            },
            tokens: vec![
                TokenMetadata {
                    chain: optimism(),
                    address: VAULT,
                    decimals: 18,
                },
                TokenMetadata {
                    chain: optimism(),
                    address: REWARD_TOKEN,
                    decimals: 18,
                },
            ],
            prices: vec![
                PriceQuote {
                    chain: optimism(),
                    address: REWARD_TOKEN,
                    price: dec!(2.0),
                },
                PriceQuote {
                    chain: optimism(),
                    address: VAULT,
                    price: dec!(10.0),
                },
            ],
            reader: FakeChainReader::new(),
        }
    }

    pub fn set_price(&mut self, token: Address, price: Decimal) {
        self.remove_price(token);
        self.prices.push(PriceQuote {
            chain: optimism(),
            address: token,
            price,
        });
    }

    pub fn remove_price(&mut self, token: Address) {
        self.prices.retain(|quote| quote.address != token);
    }

    pub fn remove_token(&mut self, token: Address) {
        self.tokens.retain(|meta| meta.address != token);
    }

    pub fn calculator(self) -> TestCalculator {
        let mut registry = InMemoryRegistry::new();
        if let Some(campaign) = self.campaign {
            registry.insert(campaign);
        }

        let mut metadata = InMemoryMetadataStore::new();
        for token in self.tokens {
            metadata.insert(token).unwrap();
        }

        let mut prices = InMemoryPriceStore::new();
        for quote in self.prices {
            prices.insert(quote).unwrap();
        }

        let pool = self.campaign.map_or(POOL, |campaign| campaign.pool);
        let reader = self.reader.with_pool_state(pool, self.state);

        AprCalculator::new(registry, reader, metadata, prices)
    }
}
