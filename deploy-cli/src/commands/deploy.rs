// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use deploy_tools::ops;

use crate::{
    common_args::{AuthArgs, ProviderArgs},
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let max_fee_per_gas_wei = args.auth.get_max_fee_per_gas_wei()?;
    let conn = args.provider.connect(&args.auth).await?;
    ops::deploy(
        &conn.config,
        &conn.network,
        conn.provider,
        conn.signers,
        max_fee_per_gas_wei,
    )
    .await?;
    Ok(())
}
