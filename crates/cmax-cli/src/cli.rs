//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CalcArgs, CompareArgs, PortfolioArgs, SimulateArgs};

/// CMAX - Bond portfolio ledger and projection engine
#[derive(Parser)]
#[command(name = "cmax")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (TOML, or JSON by extension)
    #[arg(short, long, global = true, env = "CMAX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Project an investment at a fixed coupon rate
    Calc(CalcArgs),

    /// Compare two bonds over the same horizon
    Compare(CompareArgs),

    /// Run the fixed-weight scenario simulation
    Simulate(SimulateArgs),

    /// Show the portfolio, optionally replaying trades first
    Portfolio(PortfolioArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}
