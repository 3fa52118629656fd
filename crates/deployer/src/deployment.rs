//! Assembly of the contract creation payload.

use {
    alloy::{
        primitives::{Address, Bytes, U256},
        sol_types::SolConstructor,
    },
    anyhow::{Result, ensure},
    contracts::{Artifact, NFTStaking},
};

/// The six constructor parameters of the staking pool, in the order the
/// contract declares them. Built once per run and consumed by the
/// deployment transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    pub owner: Address,
    pub nft_contract: Address,
    pub reward_token: Address,
    /// Reward per block, fixed point scaled by 10^18.
    pub reward_rate: U256,
    /// Blocks an unstaked token stays locked before withdrawal.
    pub unbonding_period: U256,
    /// Blocks accrued rewards stay locked before they are claimable.
    pub reward_delay_period: U256,
}

impl DeploymentRequest {
    /// The complete init code of the creation transaction: the artifact's
    /// creation bytecode followed by the ABI encoded constructor arguments.
    pub fn init_code(&self, artifact: &Artifact) -> Result<Bytes> {
        ensure!(
            !artifact.bytecode.is_empty(),
            "artifact for {} contains no creation bytecode; interfaces and \
             abstract contracts cannot be deployed",
            artifact.contract_name,
        );
        let args = NFTStaking::constructorCall {
            owner: self.owner,
            nftContract: self.nft_contract,
            rewardToken: self.reward_token,
            rewardRate: self.reward_rate,
            unbondingPeriod: self.unbonding_period,
            rewardDelayPeriod: self.reward_delay_period,
        }
        .abi_encode();
        Ok([artifact.bytecode.as_ref(), args.as_slice()].concat().into())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, alloy::primitives::address};

    fn request() -> DeploymentRequest {
        DeploymentRequest {
            owner: address!("0xD733B8fDcFaFf240c602203D574c05De12ae358C"),
            nft_contract: address!("0x20eE7B720f4E4c4FFcB00C4065cdae55271aECCa"),
            reward_token: address!("0x58730ae0FAA10d73b0cDdb5e7b87C3594f7a20CB"),
            reward_rate: U256::from(10u64).pow(U256::from(18)),
            unbonding_period: U256::from(10),
            reward_delay_period: U256::from(5),
        }
    }

    fn artifact(bytecode: &str) -> Artifact {
        Artifact::from_json(&format!(
            r#"{{"contractName": "NFTStaking", "abi": [], "bytecode": "{bytecode}"}}"#,
        ))
        .unwrap()
    }

    #[test]
    fn init_code_is_bytecode_followed_by_args() {
        let artifact = artifact("0x6080604052");
        let init_code = request().init_code(&artifact).unwrap();

        assert!(init_code.starts_with(artifact.bytecode.as_ref()));
        // Creation bytecode plus one 32 byte word per constructor argument.
        assert_eq!(init_code.len(), artifact.bytecode.len() + 6 * 32);
    }

    #[test]
    fn args_are_appended_in_constructor_order() {
        let request = request();
        let init_code = request.init_code(&artifact("0x6080604052")).unwrap();
        let args = &init_code[init_code.len() - 6 * 32..];

        let word = |i: usize| &args[i * 32..][..32];
        assert_eq!(&word(0)[12..], request.owner.as_slice());
        assert_eq!(&word(1)[12..], request.nft_contract.as_slice());
        assert_eq!(&word(2)[12..], request.reward_token.as_slice());
        assert_eq!(word(3), request.reward_rate.to_be_bytes::<32>().as_slice());
        assert_eq!(
            word(4),
            request.unbonding_period.to_be_bytes::<32>().as_slice()
        );
        assert_eq!(
            word(5),
            request.reward_delay_period.to_be_bytes::<32>().as_slice()
        );
    }

    #[test]
    fn refuses_artifact_without_creation_bytecode() {
        let err = request().init_code(&artifact("0x")).unwrap_err();
        assert!(err.to_string().contains("no creation bytecode"));
    }
}
