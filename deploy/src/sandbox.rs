//! Sandbox-backed provisioning.

use std::fs;

use near_workspaces::network::Sandbox;
use near_workspaces::{sandbox, Worker};
use serde_json::Value;
use tracing::{info, warn};

use crate::config::Config;
use crate::deployer::{DeployReceipt, Deployer};
use crate::error::Error;

/// Provisioning backend that creates instances inside a local NEAR
/// sandbox: deploys the wasm artifact to a dev account, then runs the
/// init method with the positional argument array as its body.
pub struct SandboxDeployer {
    worker: Worker<Sandbox>,
    config: Config,
}

impl SandboxDeployer {
    /// Starts a sandbox worker, retrying startup a bounded number of
    /// times (first boot downloads the sandbox binary and can be flaky).
    pub async fn new(config: Config) -> Result<Self, Error> {
        let mut last_err = String::new();
        for attempt in 1..=6 {
            match sandbox().await {
                Ok(worker) => return Ok(Self { worker, config }),
                Err(e) => {
                    warn!(attempt, error = %e, "sandbox startup failed, retrying in 5s");
                    last_err = e.to_string();
                    tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                }
            }
        }
        Err(Error::Provision(format!(
            "sandbox failed to start after 6 attempts: {last_err}"
        )))
    }
}

impl Deployer for SandboxDeployer {
    async fn deploy(&mut self, unit: &str, args: Vec<Value>) -> Result<DeployReceipt, Error> {
        let wasm = fs::read(&self.config.wasm_path)
            .map_err(|e| Error::Artifact(format!("{}: {e}", self.config.wasm_path)))?;

        let contract = self
            .worker
            .dev_deploy(&wasm)
            .await
            .map_err(|e| Error::Provision(format!("{unit} code deploy failed: {e}")))?;

        contract
            .call(&self.config.init_method)
            .args_json(Value::Array(args))
            .transact()
            .await
            .map_err(|e| Error::Provision(format!("{unit} init transaction failed: {e}")))?
            .into_result()
            .map_err(|e| Error::Provision(format!("{unit} init rejected: {e}")))?;

        info!(unit, account = %contract.id(), "deployed");

        Ok(DeployReceipt {
            unit: unit.to_string(),
            account_id: contract.id().to_string(),
        })
    }
}
