//! Provider construction.

use {
    alloy::{
        network::EthereumWallet,
        providers::{DynProvider, Provider, ProviderBuilder},
        signers::local::PrivateKeySigner,
    },
    anyhow::Result,
};

/// Creates a provider that relies on the node for signing.
pub fn provider(url: &str) -> Result<DynProvider> {
    Ok(ProviderBuilder::new().connect_http(url.parse()?).erased())
}

/// Creates a provider whose transactions are signed locally with `signer`.
pub fn provider_with_signer(url: &str, signer: PrivateKeySigner) -> Result<DynProvider> {
    let wallet = EthereumWallet::new(signer);
    Ok(ProviderBuilder::new()
        .wallet(wallet)
        .connect_http(url.parse()?)
        .erased())
}
