// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::{Ethereum, EthereumWallet, NetworkWallet},
    primitives::{Address, FixedBytes},
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use deploy_tools::{core::config::DeployConfig, utils::decode0x};
use eyre::{eyre, Context};

use crate::{constants::DEFAULT_CONFIG_FILE, utils::convert_gwei_to_wei};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
}

impl AuthArgs {
    /// Builds a local wallet, or `None` when the node's own accounts should sign.
    fn build_wallet(&self, chain_id: u64) -> eyre::Result<Option<EthereumWallet>> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return Self::wallet_from_hex(key, chain_id).map(Some);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return Self::wallet_from_hex(&key, chain_id).map(Some);
        }

        let Some(keystore) = &self.keystore_path else {
            return Ok(None);
        };
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        let signer =
            LocalSigner::decrypt_keystore(keystore, password)?.with_chain_id(Some(chain_id));
        Ok(Some(EthereumWallet::new(signer)))
    }

    fn wallet_from_hex(key: &str, chain_id: u64) -> eyre::Result<EthereumWallet> {
        let bytes = decode0x(key)?;
        if bytes.len() != 32 {
            return Err(eyre!("private key must be 32 bytes, got {}", bytes.len()));
        }
        let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(&bytes);
        let signer = PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
        Ok(EthereumWallet::new(signer))
    }

    pub fn get_max_fee_per_gas_wei(&self) -> eyre::Result<Option<u128>> {
        self.max_fee_per_gas_gwei
            .as_ref()
            .map(|fee_str| convert_gwei_to_wei(fee_str))
            .transpose()
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// Project configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    /// Network to deploy to (defaults to the config's default network)
    #[arg(short, long)]
    pub network: Option<String>,
    /// RPC endpoint, overriding the network's configured url
    #[arg(short, long)]
    pub endpoint: Option<String>,
}

/// A connected provider plus the addresses it signs for locally.
pub struct Connection {
    pub config: DeployConfig,
    pub network: String,
    pub provider: DynProvider,
    pub signers: Vec<Address>,
}

impl ProviderArgs {
    pub async fn connect(&self, auth: &AuthArgs) -> eyre::Result<Connection> {
        let config = DeployConfig::load(&self.config)?;
        let network = self
            .network
            .clone()
            .unwrap_or_else(|| config.default_network.clone());
        let endpoint = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => config.network(&network)?.url,
        };
        log::debug!("connecting to {network} at {endpoint}");

        let provider = ProviderBuilder::new().connect(&endpoint).await?;
        let chain_id = provider.get_chain_id().await?;
        let (provider, signers) = match auth.build_wallet(chain_id)? {
            Some(wallet) => {
                let signers = vec![NetworkWallet::<Ethereum>::default_signer_address(&wallet)];
                let provider = ProviderBuilder::new()
                    .wallet(wallet)
                    .connect(&endpoint)
                    .await?;
                (provider.erased(), signers)
            }
            None => (provider.erased(), Vec::new()),
        };

        Ok(Connection {
            config,
            network,
            provider,
            signers,
        })
    }
}
