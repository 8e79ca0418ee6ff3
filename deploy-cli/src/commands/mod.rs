// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CliResult;

mod accounts;
mod deploy;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the named accounts resolved for a network
    #[clap(visible_alias = "a")]
    Accounts(accounts::Args),
    /// Run the deploy scripts against a network
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
}

pub async fn exec(cmd: Command) -> CliResult {
    match cmd {
        Command::Accounts(args) => accounts::exec(args).await,
        Command::Deploy(args) => deploy::exec(args).await,
    }
}
