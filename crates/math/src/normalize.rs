//! Conversion of raw token amounts into human-scale decimals.
//!
//! On-chain quantities are integers in a token's smallest unit. Dividing by
//! `10^decimals` is done in `U256` first, so the scaling step itself never
//! rounds; only fractional digits beyond what a [`Decimal`] can hold are lost.

use alloy_primitives::U256;
use rust_decimal::Decimal;

use crate::error::MathError;

/// Largest number of fractional digits a `Decimal` can carry.
pub const MAX_FRACTION_DIGITS: u8 = 28;

/// Returns `10^exp`, or `None` if it does not fit in a `U256`.
pub fn pow10(exp: u32) -> Option<U256> {
    U256::from(10u64).checked_pow(U256::from(exp))
}

/// Normalize a raw token amount: `raw / 10^decimals`.
///
/// Digits past the 28th fractional place are truncated. Fails with
/// [`MathError::Overflow`] when the whole-token part exceeds what a
/// `Decimal` can represent (roughly 7.9e28 tokens).
///
/// # Example
///
/// ```rust
/// use alloy_primitives::U256;
/// use rust_decimal::Decimal;
/// use staking_apr_math::normalize;
///
/// let one_token = U256::from(1_000_000_000_000_000_000u64);
/// assert_eq!(normalize(one_token, 18).unwrap(), Decimal::ONE);
/// ```
pub fn normalize(raw: U256, decimals: u8) -> Result<Decimal, MathError> {
    let (whole, remainder) = match pow10(u32::from(decimals)) {
        Some(scale) => (raw / scale, raw % scale),
        None => (U256::ZERO, raw),
    };

    let whole = u256_to_decimal(whole, 0)?;
    let fraction = fraction_to_decimal(remainder, decimals)?;

    whole.checked_add(fraction).ok_or(MathError::Overflow {
        operation: "normalized amount",
    })
}

fn fraction_to_decimal(remainder: U256, decimals: u8) -> Result<Decimal, MathError> {
    if remainder.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let scale = decimals.min(MAX_FRACTION_DIGITS);
    let digits = match pow10(u32::from(decimals - scale)) {
        Some(divisor) => remainder / divisor,
        None => U256::ZERO,
    };

    u256_to_decimal(digits, u32::from(scale))
}

fn u256_to_decimal(value: U256, scale: u32) -> Result<Decimal, MathError> {
    let overflow = MathError::Overflow {
        operation: "normalized amount",
    };
    let value = u128::try_from(value).map_err(|_| overflow.clone())?;
    let value = i128::try_from(value).map_err(|_| overflow.clone())?;
    Decimal::try_from_i128_with_scale(value, scale).map_err(|_| overflow)
}
