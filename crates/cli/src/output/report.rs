//! Flattened, serializable view of an APR computation.

use alloy_primitives::Address;
use rust_decimal::Decimal;
use serde::Serialize;
use staking_apr::{AprError, AprOutcome, Vault};

/// One vault's APR as printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct AprReport {
    pub chain: u64,
    pub vault: Address,
    pub apr: Decimal,
    pub valid: bool,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_supply: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_token_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_price: Option<Decimal>,
}

impl AprReport {
    pub fn from_outcome(vault: &Vault, outcome: &AprOutcome) -> Self {
        let mut report = Self::empty(vault);
        report.apr = outcome.apr();
        report.valid = outcome.is_valid();

        match outcome {
            AprOutcome::Computed(breakdown) => {
                report.status = "computed".to_string();
                report.reward_rate = Some(breakdown.inputs.reward_rate);
                report.total_supply = Some(breakdown.inputs.total_supply);
                report.per_token_rate = Some(breakdown.per_token_rate);
                report.reward_price = Some(breakdown.inputs.reward_price);
                report.vault_price = Some(breakdown.inputs.vault_price);
            }
            AprOutcome::Skipped(reason) => {
                report.status = reason.to_string();
            }
        }

        report
    }

    pub fn failed(vault: &Vault, error: &AprError) -> Self {
        let mut report = Self::empty(vault);
        report.status = format!("error: {}", error);
        report
    }

    fn empty(vault: &Vault) -> Self {
        Self {
            chain: vault.chain.id(),
            vault: vault.address,
            apr: Decimal::ZERO,
            valid: false,
            status: String::new(),
            reward_rate: None,
            total_supply: None,
            per_token_rate: None,
            reward_price: None,
            vault_price: None,
        }
    }
}
