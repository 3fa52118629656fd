//! Typed bindings for the contracts the deployer interacts with.
//!
//! The staking pool itself is compiled externally (its artifact is consumed
//! at runtime, see [`artifact`]); only the deployment surface is declared
//! here so constructor arguments are encoded with static types instead of a
//! hand-rolled ABI encoder.

pub mod artifact;

pub use artifact::Artifact;

alloy::sol!(
    #[allow(missing_docs)]
    contract NFTStaking {
        constructor(
            address owner,
            address nftContract,
            address rewardToken,
            uint256 rewardRate,
            uint256 unbondingPeriod,
            uint256 rewardDelayPeriod
        );
    }
);
