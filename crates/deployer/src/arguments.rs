use {
    crate::deployment::DeploymentRequest,
    alloy::{
        primitives::{Address, U256},
        signers::local::PrivateKeySigner,
    },
    clap::Parser,
    std::path::PathBuf,
    url::Url,
};

#[derive(Parser)]
pub struct Arguments {
    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Private key of the account funding the deployment. When it is not
    /// given the node's first unlocked account signs the transaction.
    #[clap(long, env)]
    pub private_key: Option<PrivateKeySigner>,

    /// Path to the compiled NFTStaking artifact.
    #[clap(long, env, default_value = "artifacts/NFTStaking.json")]
    pub artifact: PathBuf,

    /// Account that becomes the owner of the staking pool.
    #[clap(long, env)]
    pub owner: Address,

    /// Address of the NFT collection whose tokens can be staked.
    #[clap(long, env)]
    pub nft_contract: Address,

    /// Address of the ERC-20 token rewards are paid out in.
    #[clap(long, env)]
    pub reward_token: Address,

    /// Reward granted per block of staking, in whole reward tokens. Scaled
    /// to the token's 18 decimals before it is passed to the constructor.
    #[clap(
        long,
        env,
        default_value = "1",
        value_parser = reward_rate_from_base_unit,
    )]
    pub reward_rate: U256,

    /// Number of blocks an unstaked token stays locked before it can be
    /// withdrawn.
    #[clap(long, env, default_value = "10")]
    pub unbonding_period: u64,

    /// Number of blocks accrued rewards stay locked before they become
    /// claimable.
    #[clap(long, env, default_value = "5")]
    pub reward_delay_period: u64,
}

impl Arguments {
    pub fn deployment_request(&self) -> DeploymentRequest {
        DeploymentRequest {
            owner: self.owner,
            nft_contract: self.nft_contract,
            reward_token: self.reward_token,
            reward_rate: self.reward_rate,
            unbonding_period: U256::from(self.unbonding_period),
            reward_delay_period: U256::from(self.reward_delay_period),
        }
    }
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "node_url: {}", self.node_url)?;
        writeln!(
            f,
            "private_key: {}",
            match self.private_key {
                Some(_) => "SECRET",
                None => "<node account>",
            }
        )?;
        writeln!(f, "artifact: {}", self.artifact.display())?;
        writeln!(f, "owner: {}", self.owner)?;
        writeln!(f, "nft_contract: {}", self.nft_contract)?;
        writeln!(f, "reward_token: {}", self.reward_token)?;
        writeln!(f, "reward_rate: {}", self.reward_rate)?;
        writeln!(f, "unbonding_period: {}", self.unbonding_period)?;
        writeln!(f, "reward_delay_period: {}", self.reward_delay_period)?;
        Ok(())
    }
}

pub fn reward_rate_from_base_unit(s: &str) -> anyhow::Result<U256> {
    Ok(s.parse::<U256>()? * U256::from(10u64).pow(U256::from(18)))
}
