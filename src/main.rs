mod aggregate;
mod config;
mod error;
mod export;
mod import;
mod models;
mod run;
mod util;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = config::Cli::parse();
    run::setup_logging(&cli.log_level);
    tracing::debug!("ledger-rollup v{} starting", env!("CARGO_PKG_VERSION"));

    run::as_cli(cli)
}
