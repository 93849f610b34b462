//! The provisioning collaborator seam.

use serde_json::Value;

use crate::error::Error;

/// Receipt for one completed instantiation, as reported by the backend.
#[derive(Debug, Clone)]
pub struct DeployReceipt {
    /// Deployable-unit identifier the backend instantiated.
    pub unit: String,
    /// Account the new instance lives at.
    pub account_id: String,
}

/// External provisioning system: one capability, creating an instance of a
/// named deployable unit from positional constructor arguments.
///
/// Resolution of the identifier to an artifact, persistence of the created
/// instance, and failure reporting all belong to the implementation.
#[allow(async_fn_in_trait)]
pub trait Deployer {
    async fn deploy(&mut self, unit: &str, args: Vec<Value>) -> Result<DeployReceipt, Error>;
}
