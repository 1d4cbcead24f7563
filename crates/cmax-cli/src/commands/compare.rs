//! Compare command implementation.

use clap::Args;
use cmax_analytics::{compare_bonds, BondLeg, LegResult};
use cmax_config::DashboardConfig;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{build_oracle, parse_bond_id};
use crate::output::{format_money, format_pct, print_header, print_json_value, print_output};

/// Arguments for the compare command.
#[derive(Args)]
pub struct CompareArgs {
    /// First bond
    #[arg(short, long, default_value = "CMAX-2022-001")]
    pub left: String,

    /// Second bond
    #[arg(short, long, default_value = "CMAX-2022-002")]
    pub right: String,

    /// Amount invested in each bond
    #[arg(short, long, default_value = "10000")]
    pub principal: f64,

    /// Horizon in years
    #[arg(short, long, default_value = "5")]
    pub years: f64,
}

#[derive(Serialize, Tabled)]
struct LegRow {
    #[tabled(rename = "Bond")]
    bond: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Final Value")]
    final_value: String,
    #[tabled(rename = "Gain")]
    gain: String,
    #[tabled(rename = "Annualized")]
    annualized: String,
}

impl From<&LegResult> for LegRow {
    fn from(r: &LegResult) -> Self {
        Self {
            bond: r.leg.bond_id.to_string(),
            name: r.leg.name.clone(),
            rate: format_pct(r.leg.rate),
            final_value: format_money(r.final_value),
            gain: format_money(r.gain),
            annualized: format_pct(r.annualized_return_pct),
        }
    }
}

/// Executes the compare command.
pub fn execute(args: CompareArgs, config: &DashboardConfig, format: OutputFormat) -> anyhow::Result<()> {
    let oracle = build_oracle(config);
    let left = BondLeg::from_oracle(parse_bond_id(&args.left)?, &oracle);
    let right = BondLeg::from_oracle(parse_bond_id(&args.right)?, &oracle);

    let comparison = compare_bonds(&left, &right, args.principal, args.years)?;

    match format {
        OutputFormat::Table => {
            print_header(&format!(
                "Comparison over {} years on {}",
                comparison.years,
                format_money(comparison.principal)
            ));
            let rows = vec![LegRow::from(&comparison.left), LegRow::from(&comparison.right)];
            print_output(&rows, format)?;

            match comparison.winner() {
                Some(w) => println!(
                    "\n{} leads by {} per year ({} over the horizon)",
                    w.leg.name,
                    format_pct(comparison.return_diff.abs()),
                    format_money(comparison.final_diff.abs())
                ),
                None => println!("\nBoth bonds return the same"),
            }
        }
        OutputFormat::Json => print_json_value(&comparison)?,
    }

    Ok(())
}
