// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.
//!
//! A [`DeploymentRegistrar`] takes a logical deployment name and a [`DeployOptions`] descriptor,
//! publishes the contract, and records the result. [`RpcRegistrar`] is the implementation backed
//! by a JSON-RPC provider.

use alloy::primitives::{Address, TxHash};

use crate::{core::artifact::ArtifactError, utils::color::DebugColor};

pub use constructor::init_code;
pub use record::{DeploymentRecord, DeploymentStore};
pub use request::DeploymentRequest;
pub use rpc::RpcRegistrar;

pub mod constructor;
pub mod record;
pub mod request;
pub mod rpc;

/// Describes what to deploy and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    /// Name of the compiled contract artifact.
    pub contract: String,
    /// Sender of the creation transaction.
    pub from: Address,
    /// Constructor arguments, coerced against the constructor ABI.
    pub args: Vec<String>,
    /// Reuse a recorded deployment under the same name instead of sending a new transaction.
    pub skip_if_already_deployed: bool,
    /// Report the outcome at info level rather than debug.
    pub log: bool,
}

/// Outcome of a [`DeploymentRegistrar::deploy`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub name: String,
    pub address: Address,
    /// Hash of the creation transaction; `None` when an existing deployment was reused.
    pub transaction_hash: Option<TxHash>,
    pub newly_deployed: bool,
}

impl Deployment {
    pub fn new(name: impl Into<String>, address: Address, transaction_hash: TxHash) -> Self {
        Self {
            name: name.into(),
            address,
            transaction_hash: Some(transaction_hash),
            newly_deployed: true,
        }
    }

    pub fn reused(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            address,
            transaction_hash: None,
            newly_deployed: false,
        }
    }
}

/// Publishes contracts and records their deployments.
#[allow(async_fn_in_trait)]
pub trait DeploymentRegistrar {
    async fn deploy(
        &self,
        name: &str,
        options: DeployOptions,
    ) -> Result<Deployment, DeploymentError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in receipt of {}", .tx_hash.debug_red())]
    MissingReceiptAddress { tx_hash: TxHash },
    #[error("deployments were recorded on chain {recorded} but the node reports chain {actual}")]
    ChainIdMismatch { recorded: u64, actual: u64 },
}
