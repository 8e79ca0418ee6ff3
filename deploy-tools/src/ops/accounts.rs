// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{primitives::Address, providers::Provider};

use crate::{
    core::{
        accounts::{AccountsError, NamedAccountResolver, NamedAccounts, RpcAccounts},
        config::DeployConfig,
    },
    utils::color::{Color, DebugColor},
};

/// Resolves the named accounts of `network` and prints them.
pub async fn accounts<P: Provider>(
    config: &DeployConfig,
    network: &str,
    provider: P,
    signers: Vec<Address>,
) -> Result<NamedAccounts, AccountsError> {
    let resolver = RpcAccounts::new(provider, config.named_accounts.clone(), network, signers);
    let accounts = resolver.named_accounts().await?;
    if accounts.is_empty() {
        greyln!("no named accounts for {network}");
    }
    for (role, address) in accounts.iter() {
        println!("{}: {}", role.mint(), address.debug_lavender());
    }
    Ok(accounts)
}
