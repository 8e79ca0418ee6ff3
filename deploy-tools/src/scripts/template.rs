// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use super::{DeployScript, ScriptError};
use crate::{
    core::{
        accounts::NamedAccountResolver,
        deployment::{DeployOptions, DeploymentRegistrar},
    },
    environment::RuntimeEnvironment,
};

pub const TEMPLATE: &str = "Template";
pub const DEPLOYER: &str = "deployer";

/// Deploys `Template` from the `deployer` named account.
///
/// Never reuses an earlier deployment: every run sends a new creation transaction.
pub async fn deploy_template<R, A>(env: &RuntimeEnvironment<R, A>) -> Result<(), ScriptError>
where
    R: DeploymentRegistrar,
    A: NamedAccountResolver,
{
    let deployer = env.accounts.named_accounts().await?.get(DEPLOYER)?;

    env.deployments
        .deploy(
            TEMPLATE,
            DeployOptions {
                contract: TEMPLATE.to_string(),
                from: deployer,
                args: vec![],
                skip_if_already_deployed: false,
                log: true,
            },
        )
        .await?;
    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateScript;

impl DeployScript for TemplateScript {
    fn id(&self) -> &str {
        "00_main"
    }

    async fn run<R, A>(&self, env: &RuntimeEnvironment<R, A>) -> Result<(), ScriptError>
    where
        R: DeploymentRegistrar,
        A: NamedAccountResolver,
    {
        deploy_template(env).await
    }
}
