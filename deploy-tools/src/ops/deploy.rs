// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Run every deploy script against a live network.

use alloy::{primitives::Address, providers::Provider};

use crate::{
    core::{
        accounts::RpcAccounts,
        config::DeployConfig,
        deployment::{DeploymentStore, RpcRegistrar},
    },
    environment::RuntimeEnvironment,
    scripts, Error, Result,
};

/// Deploys to `network` through `provider`.
///
/// `signers` are the addresses the provider can sign for locally; they take the first named
/// account indices.
pub async fn deploy<P: Provider + Clone>(
    config: &DeployConfig,
    network: &str,
    provider: P,
    signers: Vec<Address>,
    max_fee_per_gas_wei: Option<u128>,
) -> Result<()> {
    let chain_id = provider.get_chain_id().await?;
    debug!(@grey, "connected to chain {chain_id}");
    let expected = config.networks.get(network).and_then(|network| network.chain_id);
    if let Some(expected) = expected {
        if expected != chain_id {
            return Err(Error::WrongChain {
                network: network.to_string(),
                expected,
                actual: chain_id,
            });
        }
    }

    let store = DeploymentStore::new(config.deployments_dir(), network);
    store.check_chain_id(chain_id)?;

    let registrar = RpcRegistrar::builder()
        .provider(provider.clone())
        .artifacts(config.artifacts_dir())
        .store(store)
        .max_fee_per_gas_wei(max_fee_per_gas_wei)
        .build();
    let accounts = RpcAccounts::new(provider, config.named_accounts.clone(), network, signers);
    let env = RuntimeEnvironment::new(network, registrar, accounts);

    scripts::run_scripts(&scripts::all(), &env).await?;
    Ok(())
}
