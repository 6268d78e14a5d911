//! Staking rewards pool interface definitions.
//!
//! Covers the view functions of the Synthetix-style `StakingRewards` pools
//! used for vault boost campaigns.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IStakingRewards {
        function periodFinish() external view returns (uint256);
        function rewardRate() external view returns (uint256);
        function totalSupply() external view returns (uint256);
        function rewardsToken() external view returns (address);
        function stakingToken() external view returns (address);
    }
}
