// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::sync::Mutex;

use alloy::{
    primitives::{address, Address, B256},
    transports::TransportErrorKind,
};
use deploy_tools::{
    core::{
        accounts::{AccountsError, NamedAccountResolver, NamedAccounts},
        deployment::{DeployOptions, Deployment, DeploymentError, DeploymentRegistrar},
    },
    scripts::{self, deploy_template, DeployScript, ScriptError, TemplateScript},
    RuntimeEnvironment,
};

const DEPLOYER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
const TEMPLATE_ADDRESS: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");

enum Accounts {
    Fixed(NamedAccounts),
    Failing,
}

impl NamedAccountResolver for Accounts {
    async fn named_accounts(&self) -> Result<NamedAccounts, AccountsError> {
        match self {
            Accounts::Fixed(accounts) => Ok(accounts.clone()),
            Accounts::Failing => Err(TransportErrorKind::custom_str("connection refused").into()),
        }
    }
}

#[derive(Default)]
struct Registrar {
    calls: Mutex<Vec<(String, DeployOptions)>>,
    fail: bool,
}

impl Registrar {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<(String, DeployOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

impl DeploymentRegistrar for Registrar {
    async fn deploy(
        &self,
        name: &str,
        options: DeployOptions,
    ) -> Result<Deployment, DeploymentError> {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), options));
        if self.fail {
            return Err(DeploymentError::Reverted {
                tx_hash: B256::repeat_byte(0xab),
            });
        }
        Ok(Deployment::new(name, TEMPLATE_ADDRESS, B256::repeat_byte(0x01)))
    }
}

fn env_with_deployer(registrar: Registrar) -> RuntimeEnvironment<Registrar, Accounts> {
    let accounts = [("deployer", DEPLOYER)].into_iter().collect();
    RuntimeEnvironment::new("localhost", registrar, Accounts::Fixed(accounts))
}

fn expected_options() -> DeployOptions {
    DeployOptions {
        contract: "Template".to_string(),
        from: DEPLOYER,
        args: vec![],
        skip_if_already_deployed: false,
        log: true,
    }
}

#[tokio::test]
async fn deploys_template_from_deployer() {
    let env = env_with_deployer(Registrar::default());
    deploy_template(&env).await.unwrap();

    let calls = env.deployments.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], ("Template".to_string(), expected_options()));
}

#[tokio::test]
async fn missing_deployer_role_skips_registrar() {
    let accounts = [("admin", DEPLOYER)].into_iter().collect();
    let env = RuntimeEnvironment::new("localhost", Registrar::default(), Accounts::Fixed(accounts));

    let err = deploy_template(&env).await.unwrap_err();
    assert!(matches!(
        err,
        ScriptError::Accounts(AccountsError::MissingRole(ref role)) if role == "deployer"
    ));
    assert!(env.deployments.calls().is_empty());
}

#[tokio::test]
async fn resolver_failure_skips_registrar() {
    let env = RuntimeEnvironment::new("localhost", Registrar::default(), Accounts::Failing);

    let err = deploy_template(&env).await.unwrap_err();
    assert!(matches!(
        err,
        ScriptError::Accounts(AccountsError::Rpc(_))
    ));
    assert!(env.deployments.calls().is_empty());
}

#[tokio::test]
async fn registrar_failure_propagates_unchanged() {
    let env = env_with_deployer(Registrar::failing());

    let err = deploy_template(&env).await.unwrap_err();
    let expected = DeploymentError::Reverted {
        tx_hash: B256::repeat_byte(0xab),
    };
    assert_eq!(err.to_string(), expected.to_string());
    assert!(matches!(
        err,
        ScriptError::Deployment(DeploymentError::Reverted { tx_hash }) if tx_hash == B256::repeat_byte(0xab)
    ));
    assert_eq!(env.deployments.calls().len(), 1);
}

#[tokio::test]
async fn repeated_runs_always_redeploy() {
    let env = env_with_deployer(Registrar::default());
    deploy_template(&env).await.unwrap();
    deploy_template(&env).await.unwrap();

    let calls = env.deployments.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls
        .iter()
        .all(|(_, options)| !options.skip_if_already_deployed));
}

#[tokio::test]
async fn default_scripts_run_template() {
    let env = env_with_deployer(Registrar::default());
    let all = scripts::all();
    assert_eq!(
        all.iter().map(|script| script.id()).collect::<Vec<_>>(),
        vec![TemplateScript.id()]
    );

    scripts::run_scripts(&all, &env).await.unwrap();
    assert_eq!(env.deployments.calls().len(), 1);
}

#[tokio::test]
async fn runner_stops_at_first_failure() {
    let env = RuntimeEnvironment::new("localhost", Registrar::default(), Accounts::Failing);
    let err = scripts::run_scripts(&[TemplateScript, TemplateScript], &env)
        .await
        .unwrap_err();

    assert_eq!(err.id, "00_main");
    assert!(matches!(err.source, ScriptError::Accounts(_)));
    assert!(err.to_string().starts_with("deploy script 00_main failed: "));
    assert!(env.deployments.calls().is_empty());
}
