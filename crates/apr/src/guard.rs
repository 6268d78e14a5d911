//! Early-exit checks run before any APR arithmetic.
//!
//! Checks run in a fixed order and the first failing one wins: campaign
//! registered, rewards still running, something staked.

use alloy_primitives::U256;

use crate::chain::PoolState;
use crate::outcome::SkipReason;
use crate::types::StakingCampaign;

/// Require a registered campaign. Checked before any chain read.
pub fn check_campaign(campaign: Option<StakingCampaign>) -> Result<StakingCampaign, SkipReason> {
    campaign.ok_or(SkipReason::NoCampaign)
}

/// Require a running reward period and a non-zero staked supply.
///
/// A period finishing exactly at `now` is still running.
pub fn check_pool_state(state: &PoolState, now: u64) -> Result<(), SkipReason> {
    if state.period_finish < U256::from(now) {
        return Err(SkipReason::RewardsEnded {
            period_finish: state.period_finish,
            now,
        });
    }
    if state.total_supply.is_zero() {
        return Err(SkipReason::NothingStaked);
    }
    Ok(())
}
