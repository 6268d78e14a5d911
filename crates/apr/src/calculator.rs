//! Staking APR calculator.
//!
//! [`AprCalculator`] runs the full pipeline for a vault:
//!
//! 1. look up the vault's staking campaign (skip if none),
//! 2. batch-read `periodFinish`, `rewardRate`, `totalSupply` and
//!    `rewardsToken` from the pool,
//! 3. skip if rewards ended or nothing is staked,
//! 4. resolve vault token decimals (skip if unknown) and reward token
//!    decimals (falling back to a default),
//! 5. look up both USD prices (missing prices count as zero),
//! 6. normalize and apply the APR formula.

use std::time::{SystemTime, UNIX_EPOCH};

use alloy_chains::Chain;
use alloy_primitives::Address;
use futures::future::join_all;
use rust_decimal::Decimal;
use staking_apr_math::{normalize, staking_apr, AprInputs};
use tracing::{debug, info};

use crate::chain::{ChainReader, PoolState};
use crate::config::AprConfig;
use crate::decimals::{resolve_token_decimals, vault_decimals};
use crate::error::Result;
use crate::guard::{check_campaign, check_pool_state};
use crate::outcome::{AprOutcome, SkipReason};
use crate::store::{MetadataStore, PriceStore, StakingRegistry};
use crate::types::Vault;

/// Computes staking reward APRs from injected stores and a chain reader.
pub struct AprCalculator<R, C, M, P> {
    registry: R,
    reader: C,
    metadata: M,
    prices: P,
    config: AprConfig,
}

impl<R, C, M, P> AprCalculator<R, C, M, P>
where
    R: StakingRegistry,
    C: ChainReader,
    M: MetadataStore,
    P: PriceStore,
{
    /// Create a calculator with the default configuration.
    pub fn new(registry: R, reader: C, metadata: M, prices: P) -> Self {
        Self {
            registry,
            reader,
            metadata,
            prices,
            config: AprConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: AprConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AprConfig {
        &self.config
    }

    pub fn reader(&self) -> &C {
        &self.reader
    }

    /// Compute the staking APR of a vault as of the current wall-clock time.
    pub async fn compute(&self, vault: &Vault) -> Result<AprOutcome> {
        self.compute_at(vault, unix_now()).await
    }

    /// Compute the staking APRs of many vaults concurrently.
    ///
    /// Results are in the order of `vaults`; an error for one vault does not
    /// affect the others.
    pub async fn compute_many(&self, vaults: &[Vault]) -> Vec<Result<AprOutcome>> {
        let now = unix_now();
        join_all(vaults.iter().map(|vault| self.compute_at(vault, now))).await
    }

    /// Compute the staking APR of a vault as of `now` (unix seconds).
    pub async fn compute_at(&self, vault: &Vault, now: u64) -> Result<AprOutcome> {
        let campaign =
            match check_campaign(self.registry.staking_for_vault(vault.chain, vault.address)) {
                Ok(campaign) => campaign,
                Err(reason) => return Ok(skipped(vault, reason)),
            };

        let calls = PoolState::calls(campaign.pool);
        let values = self.reader.batch_read(vault.chain, &calls).await?;
        let state = PoolState::from_values(campaign.pool, &values)?;

        if let Err(reason) = check_pool_state(&state, now) {
            return Ok(skipped(vault, reason));
        }

        let Some(vault_token_decimals) = vault_decimals(&self.metadata, vault) else {
            return Ok(skipped(vault, SkipReason::MissingVaultMetadata));
        };

        let reward_decimals = resolve_token_decimals(
            &self.metadata,
            &self.reader,
            vault.chain,
            state.rewards_token,
            self.config.default_reward_decimals,
        )
        .await;

        let inputs = AprInputs {
            reward_rate: normalize(state.reward_rate, reward_decimals.decimals)?,
            total_supply: normalize(state.total_supply, vault_token_decimals)?,
            reward_price: self.usd_price_or_zero(vault.chain, state.rewards_token),
            vault_price: self.usd_price_or_zero(vault.chain, vault.address),
        };

        let breakdown = staking_apr(&inputs)?;
        info!(
            chain = %vault.chain,
            vault = %vault.address,
            pool = %campaign.pool,
            apr = %breakdown.apr,
            "computed staking APR"
        );

        Ok(AprOutcome::Computed(breakdown))
    }

    fn usd_price_or_zero(&self, chain: Chain, token: Address) -> Decimal {
        self.prices.usd_price(chain, token).unwrap_or_else(|| {
            debug!(%chain, %token, "no USD price, using zero");
            Decimal::ZERO
        })
    }
}

fn skipped(vault: &Vault, reason: SkipReason) -> AprOutcome {
    debug!(
        chain = %vault.chain,
        vault = %vault.address,
        %reason,
        "staking APR not applicable"
    );
    AprOutcome::Skipped(reason)
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}
