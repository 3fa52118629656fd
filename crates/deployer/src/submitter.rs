//! Chain boundary of the deployer.

use {
    alloy::{
        network::TransactionBuilder,
        primitives::{Address, Bytes},
        providers::{DynProvider, Provider},
        rpc::types::TransactionRequest,
    },
    anyhow::{Context, Result, ensure},
};

/// Abstracts transaction submission so the runner can be exercised against a
/// mocked chain.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ChainWrite: Send + Sync {
    /// Broadcasts a contract creation transaction carrying `init_code` and
    /// waits until it is mined, returning the created contract's address.
    async fn submit_deployment(&self, init_code: Bytes) -> Result<Address>;
}

/// Submits deployments through a JSON-RPC provider.
pub struct Submitter {
    provider: DynProvider,
    from: Option<Address>,
}

impl Submitter {
    /// The provider's wallet signs the transaction and determines the
    /// sender.
    pub fn new(provider: DynProvider) -> Self {
        Self {
            provider,
            from: None,
        }
    }

    /// Lets the node sign with its first unlocked account, the usual
    /// workflow against local development nodes.
    pub async fn with_node_account(provider: DynProvider) -> Result<Self> {
        let accounts = provider
            .get_accounts()
            .await
            .context("failed to fetch the node's accounts")?;
        let from = accounts
            .first()
            .copied()
            .context("the node does not manage any accounts")?;
        tracing::debug!(%from, "deploying from node managed account");
        Ok(Self {
            provider,
            from: Some(from),
        })
    }
}

#[async_trait::async_trait]
impl ChainWrite for Submitter {
    async fn submit_deployment(&self, init_code: Bytes) -> Result<Address> {
        let mut tx = TransactionRequest::default().with_deploy_code(init_code);
        if let Some(from) = self.from {
            tx = tx.with_from(from);
        }

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .context("failed to submit deployment transaction")?;
        let tx_hash = *pending.tx_hash();
        tracing::info!(%tx_hash, "deployment transaction submitted, awaiting inclusion");

        let receipt = pending
            .get_receipt()
            .await
            .with_context(|| format!("deployment transaction {tx_hash} was not confirmed"))?;
        ensure!(
            receipt.status(),
            "deployment transaction {tx_hash} reverted",
        );
        receipt
            .contract_address
            .with_context(|| format!("receipt of {tx_hash} carries no contract address"))
    }
}
