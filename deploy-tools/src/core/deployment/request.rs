// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract creation transaction.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes},
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use super::DeploymentError;
use crate::utils::color::DebugColor;

/// Creation transaction carrying a contract's init code.
///
/// Gas limit, nonce and fees are filled in by the provider unless a fee cap is set.
#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
    max_fee_per_gas_wei: Option<u128>,
}

impl DeploymentRequest {
    pub fn new(sender: Address, init_code: Bytes, max_fee_per_gas_wei: Option<u128>) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(init_code),
            max_fee_per_gas_wei,
        }
    }

    /// Builds the transaction to send, applying the fee cap if there is one.
    ///
    /// With a cap, the network's suggested tip is kept but never exceeds the cap.
    pub async fn prepare(
        self,
        provider: &impl Provider,
    ) -> Result<TransactionRequest, DeploymentError> {
        let mut tx = self.tx;
        if let Some(cap) = self.max_fee_per_gas_wei {
            let estimate = provider.estimate_eip1559_fees().await?;
            tx.max_fee_per_gas = Some(cap);
            tx.max_priority_fee_per_gas = Some(estimate.max_priority_fee_per_gas.min(cap));
        }
        Ok(tx)
    }

    /// Sends the transaction and waits for a successful receipt.
    pub async fn exec(
        self,
        provider: &impl Provider,
    ) -> Result<TransactionReceipt, DeploymentError> {
        let tx = self.prepare(provider).await?;
        let pending = provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());

        let receipt = pending
            .get_receipt()
            .await
            .or(Err(DeploymentError::FailedToComplete))?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }
        Ok(receipt)
    }
}
