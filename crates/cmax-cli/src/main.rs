//! CMAX CLI - Command-line interface for the bond dashboard core.
//!
//! # Usage
//!
//! ```bash
//! # Project an investment at a bond's coupon
//! cmax calc --bond CMAX-2022-001 --principal 10000 --years 5
//!
//! # Compare two bonds
//! cmax compare --left CMAX-2022-001 --right CMAX-2022-002
//!
//! # Run the three-scenario simulation
//! cmax simulate --principal 50000 --years 10 --rates 5.5,4.5,3.5 --weights 30,50,20
//!
//! # Replay trades against the demo portfolio
//! cmax portfolio --trades trades.json --format json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use cmax_config::DashboardConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,cmax=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,cmax=info"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => DashboardConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    tracing::debug!(?config, "configuration loaded");

    let format = cli.format;

    match cli.command {
        Commands::Calc(args) => commands::calc::execute(args, &config, format)?,
        Commands::Compare(args) => commands::compare::execute(args, &config, format)?,
        Commands::Simulate(args) => commands::simulate::execute(args, &config, format)?,
        Commands::Portfolio(args) => commands::portfolio::execute(args, &config, format)?,
    }

    Ok(())
}
