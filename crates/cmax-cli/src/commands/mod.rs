//! Command implementations.

pub mod calc;
pub mod compare;
pub mod portfolio;
pub mod simulate;

pub use calc::CalcArgs;
pub use compare::CompareArgs;
pub use portfolio::PortfolioArgs;
pub use simulate::SimulateArgs;

use cmax_config::DashboardConfig;
use cmax_core::{BondId, StaticPriceOracle};

use crate::error::{CliError, CliResult};

/// Parses a bond identifier.
pub fn parse_bond_id(s: &str) -> CliResult<BondId> {
    BondId::new(s).map_err(|_| CliError::InvalidBondId(s.to_string()))
}

/// Builds the catalog oracle with the configured fallbacks.
pub fn build_oracle(config: &DashboardConfig) -> StaticPriceOracle {
    StaticPriceOracle::cmax_catalog()
        .with_fallback_price(config.fallback_price)
        .with_fallback_coupon_rate(config.fallback_coupon_rate)
}
