//! Staking reward APR math.
//!
//! This crate holds the pure arithmetic behind staking reward APRs:
//! turning raw on-chain integers into token amounts and combining a
//! campaign's emission rate, staked supply and USD prices into an
//! annualized rate. Everything is done on [`rust_decimal::Decimal`] so that
//! chained multiplications and divisions do not compound float error.
//!
//! # Example
//!
//! ```rust
//! use alloy_primitives::U256;
//! use rust_decimal::Decimal;
//! use staking_apr_math::{normalize, staking_apr, AprInputs};
//!
//! let wad = U256::from(1_000_000_000_000_000_000u64);
//! let inputs = AprInputs {
//!     reward_rate: normalize(wad, 18).unwrap(),
//!     total_supply: normalize(U256::from(1000) * wad, 18).unwrap(),
//!     reward_price: Decimal::from(2),
//!     vault_price: Decimal::from(10),
//! };
//!
//! let breakdown = staking_apr(&inputs).unwrap();
//! println!("APR: {:.2}%", breakdown.apr * Decimal::ONE_HUNDRED);
//! ```

pub mod apr;
pub mod error;
pub mod normalize;

pub use apr::{staking_apr, AprBreakdown, AprInputs, SECONDS_PER_YEAR};
pub use error::MathError;
pub use normalize::{normalize, pow10, MAX_FRACTION_DIGITS};
