//! # GenNFT Deploy
//!
//! A minimal deployment tool for the GenNFT contract. Binds a fixed
//! constructor-argument tuple to the `GenNFT` deployable unit and requests
//! its instantiation exactly once per run. The contract itself lives
//! elsewhere; this crate is configuration glue around the provisioning
//! backend.
//!
//! ## Quick Start
//! ```bash
//! cargo run --bin gen-nft-deploy
//! ```

pub mod config;
mod deployer;
mod deployment;
mod error;
mod sandbox;

pub use config::Config;
pub use deployer::{DeployReceipt, Deployer};
pub use deployment::{deploy_gen_nft, DeploymentConfig, GEN_NFT};
pub use error::Error;
pub use sandbox::SandboxDeployer;
