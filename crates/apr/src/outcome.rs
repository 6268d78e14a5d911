//! Result of an APR computation.

use std::fmt;

use alloy_primitives::U256;
use rust_decimal::Decimal;
use staking_apr_math::AprBreakdown;

/// Why a vault has no staking APR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No staking campaign is registered for the vault.
    NoCampaign,
    /// The campaign's reward period ended before `now`.
    RewardsEnded { period_finish: U256, now: u64 },
    /// Nothing is staked in the pool.
    NothingStaked,
    /// The vault token's decimals are unknown.
    MissingVaultMetadata,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCampaign => f.write_str("no staking campaign"),
            Self::RewardsEnded { period_finish, now } => {
                write!(f, "rewards ended at {} (now {})", period_finish, now)
            }
            Self::NothingStaked => f.write_str("nothing staked"),
            Self::MissingVaultMetadata => f.write_str("vault token metadata missing"),
        }
    }
}

/// Staking APR of a vault, or the reason it has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AprOutcome {
    Computed(AprBreakdown),
    Skipped(SkipReason),
}

impl AprOutcome {
    /// The APR as a fraction, zero when skipped.
    pub fn apr(&self) -> Decimal {
        match self {
            Self::Computed(breakdown) => breakdown.apr,
            Self::Skipped(_) => Decimal::ZERO,
        }
    }

    /// Whether an APR was computed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    pub fn breakdown(&self) -> Option<&AprBreakdown> {
        match self {
            Self::Computed(breakdown) => Some(breakdown),
            Self::Skipped(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Computed(_) => None,
            Self::Skipped(reason) => Some(*reason),
        }
    }

    /// `(apr, valid)`: `(apr, true)` when computed, `(0, false)` when skipped.
    pub fn into_pair(self) -> (Decimal, bool) {
        (self.apr(), self.is_valid())
    }
}
