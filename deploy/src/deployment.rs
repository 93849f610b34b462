//! The GenNFT launch parameters and the one-shot invoker.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::deployer::{DeployReceipt, Deployer};
use crate::error::Error;

/// Deployable-unit identifier resolved by the provisioning backend.
pub const GEN_NFT: &str = "GenNFT";

/// Constructor parameters for one GenNFT deployment, in declaration order.
///
/// Every field is a literal fixed at authoring time; nothing here is read
/// from a clock, the environment, or the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    pub max_supply: u32,
    pub mint_batch_limit: u32,
    pub reserve_limit: u32,
    /// Sale window start, Unix seconds.
    pub sale_start: u64,
    /// Sale window end, Unix seconds. Window validation belongs to the
    /// contract, not this tool.
    pub sale_end: u64,
    /// Metadata pointer shown before reveal (single IPFS object).
    pub hidden_uri: String,
    /// Per-token metadata prefix (IPFS directory, trailing slash).
    pub base_uri: String,
    pub metadata_extension: String,
    pub sale_open: bool,
    pub revealed: bool,
}

impl DeploymentConfig {
    /// The GenNFT launch parameters.
    pub fn gen_nft() -> Self {
        Self {
            max_supply: 20,
            mint_batch_limit: 1,
            reserve_limit: 50,
            sale_start: 1648739423,
            sale_end: 1648739423,
            hidden_uri:
                "https://gateway.pinata.cloud/ipfs/QmTNpSVs3MhWKYPUf47UsCK5yc96JwExZkVf3KyuRtQAKz"
                    .to_string(),
            base_uri:
                "https://gateway.pinata.cloud/ipfs/QmSVyoTFpi9jepZke4pMtuCm5dWY71fJka5qPJ2qkqwgvW/"
                    .to_string(),
            metadata_extension: ".json".to_string(),
            sale_open: false,
            revealed: true,
        }
    }

    /// Constructor arguments as an ordered JSON array. The constructor
    /// binds positionally, so order follows field declaration exactly.
    pub fn constructor_args(&self) -> Vec<Value> {
        vec![
            json!(self.max_supply),
            json!(self.mint_batch_limit),
            json!(self.reserve_limit),
            json!(self.sale_start),
            json!(self.sale_end),
            json!(self.hidden_uri),
            json!(self.base_uri),
            json!(self.metadata_extension),
            json!(self.sale_open),
            json!(self.revealed),
        ]
    }
}

/// Requests instantiation of `GenNFT` exactly once against the given
/// collaborator. Backend failures propagate unmodified.
pub async fn deploy_gen_nft<D: Deployer>(deployer: &mut D) -> Result<DeployReceipt, Error> {
    let config = DeploymentConfig::gen_nft();
    deployer.deploy(GEN_NFT, config.constructor_args()).await
}
