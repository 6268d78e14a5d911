//! Annualized reward rate of a staking campaign.
//!
//! A staking pool streams `reward_rate` reward tokens per second, shared by
//! everything staked in it. The APR of one staked vault token is the yearly
//! value of its share of that stream divided by its own value:
//!
//! ```text
//! per_token_rate = reward_rate / total_supply
//! apr            = SECONDS_PER_YEAR * per_token_rate * reward_price / vault_price
//! ```
//!
//! Both divisions are performed last so that the multiplications run on
//! exact operands.

use rust_decimal::Decimal;

use crate::error::MathError;

/// Seconds in an average Gregorian year (365.2425 days).
pub const SECONDS_PER_YEAR: u64 = 31_556_952;

/// Normalized inputs to the APR formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AprInputs {
    /// Reward tokens emitted per second, in whole tokens.
    pub reward_rate: Decimal,
    /// Vault tokens staked in the pool, in whole tokens.
    pub total_supply: Decimal,
    /// USD price of one reward token.
    pub reward_price: Decimal,
    /// USD price of one vault token.
    pub vault_price: Decimal,
}

/// Result of the APR formula together with its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AprBreakdown {
    /// The inputs the APR was computed from.
    pub inputs: AprInputs,
    /// Reward tokens earned per second by one staked vault token.
    pub per_token_rate: Decimal,
    /// Annualized rate as a fraction (0.05 = 5%).
    pub apr: Decimal,
}

/// Compute the APR of a staking campaign.
///
/// Returns [`MathError::DivisionByZero`] when the total supply or the vault
/// price is zero: neither case has a meaningful rate, and callers that want
/// a zero must guard before calling.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use staking_apr_math::{staking_apr, AprInputs};
///
/// let breakdown = staking_apr(&AprInputs {
///     reward_rate: Decimal::ONE,
///     total_supply: Decimal::from(1000),
///     reward_price: Decimal::from(2),
///     vault_price: Decimal::from(10),
/// })
/// .unwrap();
///
/// assert_eq!(breakdown.apr, Decimal::new(63_113_904, 4));
/// ```
pub fn staking_apr(inputs: &AprInputs) -> Result<AprBreakdown, MathError> {
    if inputs.total_supply.is_zero() {
        return Err(MathError::DivisionByZero {
            divisor: "total supply",
        });
    }
    if inputs.vault_price.is_zero() {
        return Err(MathError::DivisionByZero {
            divisor: "vault price",
        });
    }

    let per_token_rate = inputs
        .reward_rate
        .checked_div(inputs.total_supply)
        .ok_or(MathError::Overflow {
            operation: "per token rate",
        })?;

    let yearly_rewards_usd = inputs
        .reward_rate
        .checked_mul(Decimal::from(SECONDS_PER_YEAR))
        .and_then(|v| v.checked_mul(inputs.reward_price))
        .ok_or(MathError::Overflow {
            operation: "yearly rewards value",
        })?;

    let staked_usd = inputs
        .total_supply
        .checked_mul(inputs.vault_price)
        .ok_or(MathError::Overflow {
            operation: "staked value",
        })?;

    let apr = yearly_rewards_usd
        .checked_div(staked_usd)
        .ok_or(MathError::Overflow { operation: "apr" })?;

    Ok(AprBreakdown {
        inputs: *inputs,
        per_token_rate,
        apr,
    })
}
