// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Named accounts: logical roles such as `deployer` mapped to concrete addresses.

use std::collections::BTreeMap;

use alloy::{primitives::Address, providers::Provider};
use serde::Deserialize;

use crate::utils::color::DebugColor;

/// Key used for the fallback entry of a per-network account table.
pub const DEFAULT_KEY: &str = "default";

#[derive(Debug, thiserror::Error)]
pub enum AccountsError {
    #[error("no named account \"{0}\" for this network")]
    MissingRole(String),
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
}

/// Resolved mapping from role name to address for the active network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedAccounts(BTreeMap<String, Address>);

impl NamedAccounts {
    pub fn get(&self, role: &str) -> Result<Address, AccountsError> {
        self.0
            .get(role)
            .copied()
            .ok_or_else(|| AccountsError::MissingRole(role.to_string()))
    }

    pub fn insert(&mut self, role: impl Into<String>, address: Address) -> Option<Address> {
        self.0.insert(role.into(), address)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Address)> {
        self.0.iter().map(|(role, address)| (role.as_str(), address))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Address)> for NamedAccounts {
    fn from_iter<I: IntoIterator<Item = (S, Address)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(role, address)| (role.into(), address))
                .collect(),
        )
    }
}

/// How a role picks its address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AccountSpec {
    /// Position in the list of available accounts.
    Index(usize),
    Address(Address),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum AccountEntry {
    Single(AccountSpec),
    PerNetwork(BTreeMap<String, AccountSpec>),
}

/// Named account declarations from the project configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct NamedAccountsConfig(BTreeMap<String, AccountEntry>);

impl NamedAccountsConfig {
    /// Returns the spec of `role` on `network`, falling back to its `default` entry.
    pub fn spec_for(&self, role: &str, network: &str) -> Option<AccountSpec> {
        match self.0.get(role)? {
            AccountEntry::Single(spec) => Some(*spec),
            AccountEntry::PerNetwork(by_network) => by_network
                .get(network)
                .or_else(|| by_network.get(DEFAULT_KEY))
                .copied(),
        }
    }

    /// Largest account index referenced on `network`, if any.
    pub fn max_index(&self, network: &str) -> Option<usize> {
        self.0
            .keys()
            .filter_map(|role| match self.spec_for(role, network)? {
                AccountSpec::Index(index) => Some(index),
                AccountSpec::Address(_) => None,
            })
            .max()
    }

    /// Resolves every role declared for `network` against the `available` accounts.
    ///
    /// Roles with no entry for the network and no `default` are left out, as are roles whose
    /// index is past the end of `available`.
    pub fn resolve(&self, network: &str, available: &[Address]) -> NamedAccounts {
        let mut accounts = NamedAccounts::default();
        for role in self.0.keys() {
            let Some(spec) = self.spec_for(role, network) else {
                continue;
            };
            let address = match spec {
                AccountSpec::Address(address) => address,
                AccountSpec::Index(index) => match available.get(index) {
                    Some(address) => *address,
                    None => {
                        warn!(@yellow,
                            "named account {role} wants account #{index} but only {} are available",
                            available.len()
                        );
                        continue;
                    }
                },
            };
            accounts.insert(role.clone(), address);
        }
        accounts
    }
}

/// Source of the named-account mapping for the active network.
#[allow(async_fn_in_trait)]
pub trait NamedAccountResolver {
    async fn named_accounts(&self) -> Result<NamedAccounts, AccountsError>;
}

/// Resolves named accounts against local signers and the node's unlocked accounts.
///
/// Local signers take the first indices. The node is only asked for `eth_accounts` when an
/// index goes past the local signers, since public endpoints commonly reject that call.
#[derive(Debug)]
pub struct RpcAccounts<P> {
    provider: P,
    config: NamedAccountsConfig,
    network: String,
    signers: Vec<Address>,
}

impl<P: Provider> RpcAccounts<P> {
    pub fn new(
        provider: P,
        config: NamedAccountsConfig,
        network: impl Into<String>,
        signers: Vec<Address>,
    ) -> Self {
        Self {
            provider,
            config,
            network: network.into(),
            signers,
        }
    }

    async fn available_accounts(&self) -> Result<Vec<Address>, AccountsError> {
        let mut available = self.signers.clone();
        let needs_node = self
            .config
            .max_index(&self.network)
            .is_some_and(|index| index >= available.len());
        if needs_node {
            for address in self.provider.get_accounts().await? {
                if !available.contains(&address) {
                    available.push(address);
                }
            }
        }
        Ok(available)
    }
}

impl<P: Provider> NamedAccountResolver for RpcAccounts<P> {
    async fn named_accounts(&self) -> Result<NamedAccounts, AccountsError> {
        let available = self.available_accounts().await?;
        let accounts = self.config.resolve(&self.network, &available);
        for (role, address) in accounts.iter() {
            debug!(@grey, "named account {role}: {}", address.debug_lavender());
        }
        Ok(accounts)
    }
}
