//! Portfolio command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use cmax_config::DashboardConfig;
use cmax_core::{BondId, StaticPriceOracle};
use cmax_portfolio::{parse_quantity, Holding, Ledger, PortfolioSummary};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use tracing::info;

use crate::cli::OutputFormat;
use crate::commands::{build_oracle, parse_bond_id};
use crate::error::{CliError, CliResult};
use crate::output::{
    format_decimal, print_header, print_json_value, print_output, print_warning, KeyValue,
};

/// Arguments for the portfolio command.
#[derive(Args)]
pub struct PortfolioArgs {
    /// JSON file with trades to replay, in order
    #[arg(short, long)]
    pub trades: Option<PathBuf>,

    /// Start from an empty book instead of the demo holdings
    #[arg(long)]
    pub empty: bool,
}

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

/// One trade from the trades file.
#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    pub side: Side,
    pub bond_id: String,
    pub quantity: f64,
    /// Execution price for buys; the oracle price when absent.
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// A trade the ledger refused.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedTrade {
    /// Position in the trades file, from zero.
    pub index: usize,
    pub bond_id: String,
    pub reason: String,
}

#[derive(Serialize)]
struct PortfolioReport<'a> {
    holdings: &'a [Holding],
    summary: PortfolioSummary,
    rejected: Vec<RejectedTrade>,
}

#[derive(Serialize, Tabled)]
struct HoldingRow {
    #[tabled(rename = "Bond")]
    bond: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Qty")]
    quantity: u64,
    #[tabled(rename = "Avg Cost")]
    avg_cost: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Gain/Loss")]
    gain_loss: String,
    #[tabled(rename = "Yield")]
    yield_pct: String,
}

impl From<&Holding> for HoldingRow {
    fn from(h: &Holding) -> Self {
        Self {
            bond: h.bond_id().to_string(),
            name: h.name().to_string(),
            quantity: h.quantity(),
            avg_cost: format_decimal(h.avg_cost()),
            price: format_decimal(h.current_price()),
            value: format_decimal(h.current_value()),
            gain_loss: format_decimal(h.gain_loss()),
            yield_pct: format!("{:.2}%", h.yield_pct()),
        }
    }
}

/// Reads a trades file.
pub fn load_trades(path: &Path) -> CliResult<Vec<Trade>> {
    let trades_error = |reason: String| CliError::Trades {
        path: path.display().to_string(),
        reason,
    };
    let content = fs::read_to_string(path).map_err(|e| trades_error(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| trades_error(e.to_string()))
}

fn apply_trade(ledger: &mut Ledger<StaticPriceOracle>, trade: &Trade) -> anyhow::Result<()> {
    let bond_id: BondId = parse_bond_id(&trade.bond_id)?;
    let quantity = i64::try_from(parse_quantity(trade.quantity)?)?;

    match (trade.side, trade.price) {
        (Side::Buy, Some(price)) => ledger.buy_at(&bond_id, quantity, price)?,
        (Side::Buy, None) => ledger.buy(&bond_id, quantity)?,
        (Side::Sell, _) => ledger.sell(&bond_id, quantity)?,
    }
    Ok(())
}

/// Replays trades in order. Rejected trades leave the ledger unchanged
/// and are reported back.
pub fn replay(ledger: &mut Ledger<StaticPriceOracle>, trades: &[Trade]) -> Vec<RejectedTrade> {
    let mut rejected = Vec::new();
    for (index, trade) in trades.iter().enumerate() {
        if let Err(e) = apply_trade(ledger, trade) {
            rejected.push(RejectedTrade {
                index,
                bond_id: trade.bond_id.clone(),
                reason: e.to_string(),
            });
        }
    }
    info!(
        applied = trades.len() - rejected.len(),
        rejected = rejected.len(),
        "trades replayed"
    );
    rejected
}

/// Executes the portfolio command.
pub fn execute(args: PortfolioArgs, config: &DashboardConfig, format: OutputFormat) -> anyhow::Result<()> {
    let oracle = build_oracle(config);
    let mut ledger = if args.empty {
        Ledger::new(oracle)
    } else {
        Ledger::with_demo_holdings(oracle)?
    };

    let rejected = match &args.trades {
        Some(path) => {
            let trades = load_trades(path)?;
            replay(&mut ledger, &trades)
        }
        None => Vec::new(),
    };

    let summary = ledger.summary();

    match format {
        OutputFormat::Table => {
            for r in &rejected {
                print_warning(&format!("trade #{} ({}) rejected: {}", r.index, r.bond_id, r.reason));
            }

            let rows: Vec<HoldingRow> = ledger.holdings().iter().map(HoldingRow::from).collect();
            print_header("Holdings");
            print_output(&rows, format)?;

            let totals = vec![
                KeyValue::new("Holdings", summary.holdings_count.to_string()),
                KeyValue::new("Total Value", format_decimal(summary.total_value)),
                KeyValue::new("Total Investment", format_decimal(summary.total_investment)),
                KeyValue::new("Total Return", format_decimal(summary.total_return)),
                KeyValue::new("Average Yield", format!("{:.2}%", summary.avg_yield_pct)),
            ];
            print_header("Summary");
            print_output(&totals, format)?;
        }
        OutputFormat::Json => {
            let report = PortfolioReport {
                holdings: ledger.holdings(),
                summary,
                rejected,
            };
            print_json_value(&report)?;
        }
    }

    Ok(())
}
