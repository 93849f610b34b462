//! Deployment tool settings.
//!
//! These are the tool's own knobs (artifact location, init method name),
//! not the GenNFT constructor parameters — those are fixed literals in
//! [`crate::DeploymentConfig`].

use serde::Deserialize;

/// Configuration for the deployment tool.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::wasm_path")]
    pub wasm_path: String,

    #[serde(default = "defaults::init_method")]
    pub init_method: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wasm_path: defaults::wasm_path(),
            init_method: defaults::init_method(),
        }
    }
}

mod defaults {
    pub fn wasm_path() -> String {
        std::env::var("GEN_NFT_WASM_PATH")
            .unwrap_or_else(|_| "target/near/gen_nft/gen_nft.wasm".into())
    }

    pub fn init_method() -> String {
        std::env::var("GEN_NFT_INIT_METHOD").unwrap_or_else(|_| "new".into())
    }
}
