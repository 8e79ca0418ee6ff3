// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Registrar that deploys through a JSON-RPC provider.

use std::path::PathBuf;

use alloy::{primitives::keccak256, providers::Provider};
use typed_builder::TypedBuilder;

use super::{
    init_code, DeployOptions, Deployment, DeploymentError, DeploymentRecord, DeploymentRegistrar,
    DeploymentRequest, DeploymentStore,
};
use crate::{
    core::artifact::Artifact,
    utils::{color::DebugColor, format_gas},
};

/// Deploys compiled artifacts with `provider` and records them in `store`.
///
/// Nonce, gas limit and signing are left to the provider's fillers and the node.
#[derive(Debug, TypedBuilder)]
pub struct RpcRegistrar<P> {
    provider: P,
    #[builder(setter(into))]
    artifacts: PathBuf,
    store: DeploymentStore,
    #[builder(default)]
    max_fee_per_gas_wei: Option<u128>,
}

impl<P: Provider> DeploymentRegistrar for RpcRegistrar<P> {
    async fn deploy(
        &self,
        name: &str,
        options: DeployOptions,
    ) -> Result<Deployment, DeploymentError> {
        let artifact = Artifact::find(&self.artifacts, &options.contract)?;

        if options.skip_if_already_deployed {
            if let Some(record) = self.store.load(name)? {
                report!(options.log, @grey, "reusing \"{name}\" at {}", record.address.debug_lavender());
                return Ok(Deployment::reused(name, record.address));
            }
        }

        let code = init_code(&artifact, &options.args)?;
        debug!(@grey, "sender address: {}", options.from.debug_lavender());
        let receipt = DeploymentRequest::new(options.from, code, self.max_fee_per_gas_wei)
            .exec(&self.provider)
            .await?;
        let tx_hash = receipt.transaction_hash;
        let address = receipt
            .contract_address
            .ok_or(DeploymentError::MissingReceiptAddress { tx_hash })?;

        report!(
            options.log,
            @grey,
            "deploying \"{name}\" (tx: {})...: deployed at {} with {}",
            tx_hash.debug_lavender(),
            address.debug_lavender(),
            format_gas(receipt.gas_used)
        );

        let record = DeploymentRecord {
            address,
            contract_name: artifact.contract_name,
            transaction_hash: tx_hash,
            block_number: receipt.block_number,
            args: options.args,
            bytecode_hash: keccak256(&artifact.bytecode),
            abi: artifact.abi,
        };
        self.store.save(name, &record)?;

        Ok(Deployment::new(name, address, tx_hash))
    }
}
