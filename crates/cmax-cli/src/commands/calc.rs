//! Calc command implementation.

use clap::Args;
use cmax_analytics::ReturnCalculator;
use cmax_config::DashboardConfig;
use cmax_core::PriceOracle;

use crate::cli::OutputFormat;
use crate::commands::{build_oracle, parse_bond_id};
use crate::error::CliError;
use crate::output::{format_money, format_pct, print_header, print_json_value, print_output, KeyValue};

/// Arguments for the calc command.
#[derive(Args)]
pub struct CalcArgs {
    /// Bond whose coupon rate is used
    #[arg(short, long, conflicts_with = "rate")]
    pub bond: Option<String>,

    /// Annual coupon rate in percent
    #[arg(short, long)]
    pub rate: Option<f64>,

    /// Amount invested
    #[arg(short, long, default_value = "10000")]
    pub principal: f64,

    /// Horizon in years
    #[arg(short, long, default_value = "5")]
    pub years: f64,

    /// Pay coupons out instead of reinvesting them
    #[arg(long)]
    pub simple: bool,
}

/// Executes the calc command.
pub fn execute(args: CalcArgs, config: &DashboardConfig, format: OutputFormat) -> anyhow::Result<()> {
    let oracle = build_oracle(config);

    let (label, rate) = match (&args.bond, args.rate) {
        (Some(bond), _) => {
            let id = parse_bond_id(bond)?;
            (oracle.name(&id), oracle.coupon_rate(&id))
        }
        (None, Some(rate)) => (format!("{rate}% coupon"), rate),
        (None, None) => {
            return Err(CliError::MissingArgument("--bond or --rate".to_string()).into());
        }
    };

    let projection = ReturnCalculator::calculate(args.principal, rate, args.years, !args.simple)?;

    match format {
        OutputFormat::Table => {
            let rows = vec![
                KeyValue::new("Principal", format_money(projection.principal)),
                KeyValue::new("Coupon Rate", format_pct(projection.annual_rate_pct)),
                KeyValue::new("Years", format!("{}", projection.years)),
                KeyValue::new("Mode", format!("{:?}", projection.mode)),
                KeyValue::new("Final Value", format_money(projection.final_value)),
                KeyValue::new("Total Gain", format_money(projection.total_gain)),
                KeyValue::new("Annualized Return", format_pct(projection.annualized_return_pct)),
                KeyValue::new("Annual Coupon", format_money(projection.annual_coupon)),
            ];
            print_header(&format!("Projection: {label}"));
            print_output(&rows, format)?;
        }
        OutputFormat::Json => print_json_value(&projection)?,
    }

    Ok(())
}
