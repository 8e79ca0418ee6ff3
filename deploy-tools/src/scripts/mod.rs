// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploy scripts and the runner that executes them in order.

use crate::{
    core::{
        accounts::{AccountsError, NamedAccountResolver},
        deployment::{DeploymentError, DeploymentRegistrar},
    },
    environment::RuntimeEnvironment,
};

pub use template::{deploy_template, TemplateScript};

pub mod template;

/// Failure of a single script. Collaborator errors pass through untouched.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error(transparent)]
    Accounts(#[from] AccountsError),
    #[error(transparent)]
    Deployment(#[from] DeploymentError),
}

#[derive(Debug, thiserror::Error)]
#[error("deploy script {id} failed: {source}")]
pub struct ScriptRunError {
    pub id: String,
    #[source]
    pub source: ScriptError,
}

#[allow(async_fn_in_trait)]
pub trait DeployScript {
    /// Identifier used in logs, e.g. `00_main`.
    fn id(&self) -> &str;

    async fn run<R, A>(&self, env: &RuntimeEnvironment<R, A>) -> Result<(), ScriptError>
    where
        R: DeploymentRegistrar,
        A: NamedAccountResolver;
}

/// Scripts shipped with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Template(TemplateScript),
}

impl DeployScript for Script {
    fn id(&self) -> &str {
        match self {
            Script::Template(script) => script.id(),
        }
    }

    async fn run<R, A>(&self, env: &RuntimeEnvironment<R, A>) -> Result<(), ScriptError>
    where
        R: DeploymentRegistrar,
        A: NamedAccountResolver,
    {
        match self {
            Script::Template(script) => script.run(env).await,
        }
    }
}

/// Every script, in execution order.
pub fn all() -> Vec<Script> {
    vec![Script::Template(TemplateScript)]
}

/// Runs `scripts` one after another, stopping at the first failure.
pub async fn run_scripts<S, R, A>(
    scripts: &[S],
    env: &RuntimeEnvironment<R, A>,
) -> Result<(), ScriptRunError>
where
    S: DeployScript,
    R: DeploymentRegistrar,
    A: NamedAccountResolver,
{
    for script in scripts {
        info!(@grey, "running deploy script {} on {}", script.id(), env.network);
        script.run(env).await.map_err(|source| ScriptRunError {
            id: script.id().to_string(),
            source,
        })?;
    }
    Ok(())
}
