// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Project configuration loaded from `deploy.toml`.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::core::accounts::NamedAccountsConfig;

pub const DEFAULT_CONFIG_FILE: &str = "deploy.toml";
pub const DEFAULT_NETWORK: &str = "localhost";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8545";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    pub url: String,
    #[serde(default)]
    pub chain_id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployConfig {
    pub artifacts: PathBuf,
    pub deployments: PathBuf,
    pub default_network: String,
    pub networks: BTreeMap<String, NetworkConfig>,
    pub named_accounts: NamedAccountsConfig,
    #[serde(skip)]
    root: PathBuf,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            artifacts: "artifacts".into(),
            deployments: "deployments".into(),
            default_network: DEFAULT_NETWORK.to_string(),
            networks: BTreeMap::new(),
            named_accounts: NamedAccountsConfig::default(),
            root: PathBuf::new(),
        }
    }
}

impl DeployConfig {
    /// Loads the configuration at `path`, falling back to defaults if the file does not exist.
    ///
    /// Relative paths in the file are resolved against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let mut config = match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(@grey, "no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        config.root = root;
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Looks up a network by name.
    ///
    /// `localhost` is always available and points at [`DEFAULT_ENDPOINT`] unless configured.
    pub fn network(&self, name: &str) -> Result<NetworkConfig, ConfigError> {
        match self.networks.get(name) {
            Some(network) => Ok(network.clone()),
            None if name == DEFAULT_NETWORK => Ok(NetworkConfig {
                url: DEFAULT_ENDPOINT.to_string(),
                chain_id: None,
            }),
            None => Err(ConfigError::UnknownNetwork(name.to_string())),
        }
    }

    pub fn artifacts_dir(&self) -> PathBuf {
        self.root.join(&self.artifacts)
    }

    pub fn deployments_dir(&self) -> PathBuf {
        self.root.join(&self.deployments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::accounts::AccountSpec;
    use alloy::primitives::address;

    #[test]
    fn parses_full_config() {
        let config = DeployConfig::parse(
            r#"
            artifacts = "out"
            default_network = "sepolia"

            [networks.sepolia]
            url = "https://rpc.sepolia.org"
            chain_id = 11155111

            [named_accounts]
            admin = 1

            [named_accounts.deployer]
            default = 0
            sepolia = "0x00000000000000000000000000000000000000aa"
            "#,
        )
        .unwrap();

        assert_eq!(config.artifacts, PathBuf::from("out"));
        assert_eq!(config.deployments, PathBuf::from("deployments"));
        assert_eq!(config.default_network, "sepolia");
        assert_eq!(
            config.network("sepolia").unwrap(),
            NetworkConfig {
                url: "https://rpc.sepolia.org".to_string(),
                chain_id: Some(11155111),
            }
        );
        assert_eq!(
            config.named_accounts.spec_for("admin", "sepolia"),
            Some(AccountSpec::Index(1))
        );
        assert_eq!(
            config.named_accounts.spec_for("deployer", "sepolia"),
            Some(AccountSpec::Address(address!(
                "00000000000000000000000000000000000000aa"
            )))
        );
        assert_eq!(
            config.named_accounts.spec_for("deployer", "mainnet"),
            Some(AccountSpec::Index(0))
        );
    }

    #[test]
    fn localhost_is_implicit() {
        let config = DeployConfig::default();
        let network = config.network(DEFAULT_NETWORK).unwrap();
        assert_eq!(network.url, DEFAULT_ENDPOINT);
        assert!(matches!(
            config.network("mainnet"),
            Err(ConfigError::UnknownNetwork(name)) if name == "mainnet"
        ));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeployConfig::load(dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config.default_network, DEFAULT_NETWORK);
        assert_eq!(config.artifacts_dir(), dir.path().join("artifacts"));
        assert_eq!(config.deployments_dir(), dir.path().join("deployments"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "artifact = \"typo\"\n").unwrap();
        assert!(matches!(
            DeployConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
