// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment records kept on disk, one directory per network.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use alloy::{
    json_abi::JsonAbi,
    primitives::{Address, TxHash, B256},
};
use serde::{Deserialize, Serialize};

use super::DeploymentError;

const CHAIN_ID_FILE: &str = ".chainId";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub address: Address,
    pub contract_name: String,
    pub transaction_hash: TxHash,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    #[serde(default)]
    pub args: Vec<String>,
    /// keccak256 of the artifact bytecode, without constructor arguments.
    pub bytecode_hash: B256,
    #[serde(default)]
    pub abi: JsonAbi,
}

/// Reads and writes `<root>/<network>/<name>.json`.
#[derive(Debug, Clone)]
pub struct DeploymentStore {
    dir: PathBuf,
}

impl DeploymentStore {
    pub fn new(root: impl AsRef<Path>, network: &str) -> Self {
        Self {
            dir: root.as_ref().join(network),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    pub fn load(&self, name: &str) -> Result<Option<DeploymentRecord>, DeploymentError> {
        let text = match fs::read_to_string(self.path(name)) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&text)?))
    }

    pub fn save(&self, name: &str, record: &DeploymentRecord) -> Result<(), DeploymentError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(record)?;
        fs::write(self.path(name), json)?;
        Ok(())
    }

    /// Ensures records in this directory belong to `chain_id`, claiming the directory if new.
    pub fn check_chain_id(&self, chain_id: u64) -> Result<(), DeploymentError> {
        let path = self.dir.join(CHAIN_ID_FILE);
        match fs::read_to_string(&path) {
            Ok(text) => {
                let recorded = text.trim().parse::<u64>().map_err(|err| {
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("bad chain id in {}: {err}", path.display()),
                    )
                })?;
                if recorded != chain_id {
                    return Err(DeploymentError::ChainIdMismatch {
                        recorded,
                        actual: chain_id,
                    });
                }
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                fs::create_dir_all(&self.dir)?;
                fs::write(path, chain_id.to_string())?;
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
