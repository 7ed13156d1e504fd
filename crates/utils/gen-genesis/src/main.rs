//! # Genesis Generator
//!
//! Writes the genesis JSON for a fee-token development chain.
//!
//! ## Usage
//!
//! ```bash
//! FEETOKEN_GENESIS_PROFILE=legacy-dev cargo run --package gen-genesis --bin gen_genesis
//! geth init --datadir ./node genesis.json
//! ```
//!
//! The program will:
//! 1. Load `.env` and the `FEETOKEN_*` configuration
//! 2. Read the AMM bytecode from the artifacts directory
//! 3. Build the selected profile and check the router storage layout
//! 4. Write the genesis file

use anyhow::Context;
use lib_core::config::{core_config, init_config};
use lib_feetoken::constants::{BINDER_ADDRESS, FACTORY_ADDRESS, ROUTER_ADDRESS, WRAPPED_NATIVE_ADDRESS};
use lib_feetoken::{build_genesis, ContractArtifacts, GenesisProfile};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    init_config().map_err(|e| anyhow::anyhow!(e))?;
    let config = core_config();

    let profile: GenesisProfile = config.genesis_profile.parse()?;
    info!("Generating {} genesis", profile);

    let artifacts = ContractArtifacts::load_dir(&config.artifacts_dir)
        .with_context(|| format!("loading artifacts from {}", config.artifacts_dir.display()))?;

    let genesis = build_genesis(profile, &artifacts).with_timestamp(config.genesis_timestamp);
    genesis.verify_router_layout()?;

    let json = genesis.to_json_pretty()?;
    tokio::fs::write(&config.genesis_out, json)
        .await
        .with_context(|| format!("writing {}", config.genesis_out.display()))?;

    info!("Wrote {}", config.genesis_out.display());
    info!("  chain id:       {}", genesis.config.chain_id);
    info!("  clique period:  {}s", genesis.config.clique.period);
    info!("  timestamp:      {}", genesis.timestamp);
    info!("  accounts:       {}", genesis.alloc.len());
    info!("  factory:        {}", FACTORY_ADDRESS);
    info!("  wrapped native: {}", WRAPPED_NATIVE_ADDRESS);
    info!("  router:         {}", ROUTER_ADDRESS);
    info!("  binder:         {}", BINDER_ADDRESS);

    Ok(())
}
