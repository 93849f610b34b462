use gen_nft_deploy::{DeployReceipt, Deployer, Error};
use serde_json::Value;

/// Test double that records every instantiation request it receives.
#[derive(Default)]
pub struct RecordingDeployer {
    pub calls: Vec<(String, Vec<Value>)>,
}

impl Deployer for RecordingDeployer {
    async fn deploy(&mut self, unit: &str, args: Vec<Value>) -> Result<DeployReceipt, Error> {
        self.calls.push((unit.to_string(), args));
        Ok(DeployReceipt {
            unit: unit.to_string(),
            account_id: format!("dev-{}.test.near", self.calls.len()),
        })
    }
}

/// Test double that rejects every instantiation request.
pub struct FailingDeployer;

impl Deployer for FailingDeployer {
    async fn deploy(&mut self, _unit: &str, _args: Vec<Value>) -> Result<DeployReceipt, Error> {
        Err(Error::Provision(
            "provisioning backend rejected the request".into(),
        ))
    }
}
