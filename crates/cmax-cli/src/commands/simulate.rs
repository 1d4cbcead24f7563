//! Simulate command implementation.

use clap::Args;
use cmax_analytics::{simulate, ScenarioSet};
use cmax_config::DashboardConfig;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::output::{format_money, format_pct, print_header, print_json_value, print_output, KeyValue};

/// Arguments for the simulate command.
#[derive(Args)]
pub struct SimulateArgs {
    /// Amount invested
    #[arg(short, long, default_value = "50000")]
    pub principal: f64,

    /// Horizon in years
    #[arg(short, long, default_value = "10")]
    pub years: f64,

    /// Optimistic, base and pessimistic rates in percent
    #[arg(long, value_delimiter = ',', default_values_t = [5.5, 4.5, 3.5])]
    pub rates: Vec<f64>,

    /// Optimistic, base and pessimistic weights in whole percent
    #[arg(long, value_delimiter = ',', default_values_t = [30, 50, 20])]
    pub weights: Vec<u32>,
}

#[derive(Serialize, Tabled)]
struct OutcomeRow {
    #[tabled(rename = "Scenario")]
    name: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Probability")]
    probability: String,
    #[tabled(rename = "Final Value")]
    final_value: String,
    #[tabled(rename = "Annualized")]
    annualized: String,
}

fn triple<T: Copy>(values: &[T], flag: &str) -> anyhow::Result<[T; 3]> {
    match values {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => anyhow::bail!("{flag} takes exactly three values, got {}", values.len()),
    }
}

/// Executes the simulate command.
pub fn execute(args: SimulateArgs, config: &DashboardConfig, format: OutputFormat) -> anyhow::Result<()> {
    let set = ScenarioSet::from_percentages(
        triple(&args.rates, "--rates")?,
        triple(&args.weights, "--weights")?,
    );

    let result = simulate(&set, args.principal, args.years, config)?;

    match format {
        OutputFormat::Table => {
            let rows: Vec<OutcomeRow> = result
                .outcomes
                .iter()
                .map(|o| OutcomeRow {
                    name: o.name.clone(),
                    rate: format_pct(o.rate),
                    probability: format_pct(o.probability * 100.0),
                    final_value: format_money(o.final_value),
                    annualized: format_pct(o.annualized_return_pct),
                })
                .collect();
            print_header("Scenarios");
            print_output(&rows, format)?;

            let mut summary = vec![
                KeyValue::new("Expected Value", format_money(result.expected_value)),
                KeyValue::new("Best Case", format_money(result.best_final)),
                KeyValue::new("Worst Case", format_money(result.worst_final)),
                KeyValue::new("Spread", format_money(result.spread)),
                KeyValue::new("Risk", result.risk_tier.to_string()),
            ];
            summary.extend(
                result
                    .notes
                    .iter()
                    .map(|n| KeyValue::new("Note", n.description())),
            );
            print_header("Risk");
            print_output(&summary, format)?;
        }
        OutputFormat::Json => print_json_value(&result)?,
    }

    Ok(())
}
