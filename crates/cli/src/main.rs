//! Staking APR CLI - Compute staking reward APRs of vaults.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{run_compute, run_compute_all};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compute(args) => {
            run_compute(&args, cli.format).await?;
        }
        Commands::ComputeAll(args) => {
            run_compute_all(&args, cli.format).await?;
        }
    }

    Ok(())
}
