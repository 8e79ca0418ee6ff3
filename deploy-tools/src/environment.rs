// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::{accounts::NamedAccountResolver, deployment::DeploymentRegistrar};

/// Capabilities handed to every deploy script.
#[derive(Debug)]
pub struct RuntimeEnvironment<R, A> {
    /// Name of the active network.
    pub network: String,
    pub deployments: R,
    pub accounts: A,
}

impl<R: DeploymentRegistrar, A: NamedAccountResolver> RuntimeEnvironment<R, A> {
    pub fn new(network: impl Into<String>, deployments: R, accounts: A) -> Self {
        Self {
            network: network.into(),
            deployments,
            accounts,
        }
    }
}
