//! GenNFT deployment binary.

use gen_nft_deploy::{deploy_gen_nft, Config, SandboxDeployer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting GenNFT deployment");

    let settings: Config = config::Config::builder()
        .add_source(config::File::with_name("gen-nft-deploy").required(false))
        .add_source(config::Environment::with_prefix("GEN_NFT"))
        .build()?
        .try_deserialize()
        .unwrap_or_default();

    info!(wasm = %settings.wasm_path, init = %settings.init_method, "Configuration loaded");

    let mut deployer = SandboxDeployer::new(settings).await?;
    let receipt = deploy_gen_nft(&mut deployer).await?;

    info!(unit = %receipt.unit, account = %receipt.account_id, "Deployment complete");

    Ok(())
}
