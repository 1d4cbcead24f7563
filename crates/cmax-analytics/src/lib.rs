//! # CMAX Analytics
//!
//! Projection and scenario analytics for CMAX bonds.
//!
//! - [`projection`]: simple and compound growth, annualized return,
//!   probability-weighted expected value
//! - [`scenarios`]: fixed-weight scenario simulation
//! - [`risk`]: spread classification and risk notes
//! - [`calculator`]: the rate-of-return calculator
//! - [`comparison`]: two-bond comparison
//!
//! Everything here is a pure function of its inputs.
//!
//! ## Example
//!
//! ```rust
//! use cmax_analytics::{simulate, ScenarioSet, RiskTier};
//! use cmax_config::DashboardConfig;
//!
//! let set = ScenarioSet::from_percentages([5.5, 4.5, 3.5], [30, 50, 20]);
//! let result = simulate(&set, 50_000.0, 10.0, &DashboardConfig::default()).unwrap();
//!
//! assert!((result.expected_value - 78_552.39).abs() < 0.01);
//! assert_eq!(result.risk_tier, RiskTier::Low);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod calculator;
pub mod comparison;
pub mod error;
pub mod projection;
pub mod risk;
pub mod scenarios;

pub use calculator::{ReturnCalculator, ReturnProjection};
pub use comparison::{compare_bonds, BondComparison, BondLeg, LegResult, Verdict};
pub use error::{AnalyticsError, AnalyticsResult};
pub use projection::{annualized_return, compound_growth, expected_value, simple_growth, GrowthMode};
pub use risk::{classify, risk_spread, RiskNote, RiskTier};
pub use scenarios::{simulate, Scenario, ScenarioKind, ScenarioOutcome, ScenarioSet, SimulationResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::{ReturnCalculator, ReturnProjection};
    pub use crate::comparison::{compare_bonds, BondComparison, BondLeg, Verdict};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::projection::*;
    pub use crate::risk::{RiskNote, RiskTier};
    pub use crate::scenarios::{simulate, Scenario, ScenarioSet, SimulationResult};
}
