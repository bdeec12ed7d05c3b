//! Agent Marketplace Dashboard
//!
//! Native dashboard for creating and managing agent listings on the
//! marketplace.

use agent_marketplace_dashboard::{app, config::Config};
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    app::run(config)?;

    info!("Dashboard closed");
    Ok(())
}
