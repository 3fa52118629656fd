pub mod arguments;
pub mod deployment;
pub mod ethrpc;
pub mod submitter;

use {
    crate::{
        arguments::Arguments,
        deployment::DeploymentRequest,
        submitter::{ChainWrite, Submitter},
    },
    alloy::primitives::Address,
    anyhow::Result,
    contracts::Artifact,
};

/// Encodes the deployment of `request` against the compiled `artifact` and
/// submits it through `chain`, returning the deployed contract's address.
///
/// The init code is fully assembled before `chain` is touched, so an invalid
/// request or artifact never causes a network round trip.
pub async fn deploy(
    request: &DeploymentRequest,
    artifact: &Artifact,
    chain: &impl ChainWrite,
) -> Result<Address> {
    let init_code = request.init_code(artifact)?;
    tracing::debug!(
        contract = %artifact.contract_name,
        code_len = init_code.len(),
        "submitting deployment transaction"
    );
    chain.submit_deployment(init_code).await
}

pub async fn run(args: Arguments) -> Result<()> {
    let request = args.deployment_request();
    let artifact = Artifact::load(&args.artifact)?;

    let chain = match args.private_key {
        Some(key) => Submitter::new(ethrpc::provider_with_signer(
            args.node_url.as_str(),
            key,
        )?),
        None => {
            let provider = ethrpc::provider(args.node_url.as_str())?;
            Submitter::with_node_account(provider).await?
        }
    };

    let address = deploy(&request, &artifact, &chain).await?;
    println!("{} contract deployed to: {address}", artifact.contract_name);
    Ok(())
}
