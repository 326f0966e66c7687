//! Command line access to a UiPath Orchestrator tenant

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod cli;

use cli::{Args, run};

#[tokio::main]
async fn main() -> Result<()> {
    uipath_orchestrator::init_default_logging()?;

    let args = Args::parse();
    info!(
        "Starting uipath v{} on {}/{}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    );

    run(args).await
}
