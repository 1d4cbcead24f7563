//! Growth projections.
//!
//! Rates are annual percentages (4.5 means 4.5% a year). Horizons are in
//! years and may be fractional.
//!
//! ## Formulas
//!
//! ```text
//! simple:     P + P × (r/100) × y          (coupons paid out)
//! compound:   P × (1 + r/100)^y            (coupons reinvested)
//! annualized: ((F/P)^(1/y) − 1) × 100
//! expected:   Σ compound(P, rᵢ, y) × pᵢ
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{check_principal, check_years, AnalyticsError, AnalyticsResult};
use crate::scenarios::Scenario;

/// How coupons are treated over the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GrowthMode {
    /// Coupons paid out each year; no interest on interest.
    Simple,
    /// Coupons reinvested at the same rate.
    #[default]
    Compound,
}

impl GrowthMode {
    /// Mode for a reinvestment flag.
    #[must_use]
    pub fn from_reinvestment(reinvest: bool) -> Self {
        if reinvest {
            Self::Compound
        } else {
            Self::Simple
        }
    }

    /// Final value of `principal` under this mode.
    #[must_use]
    pub fn project(self, principal: f64, annual_rate_pct: f64, years: f64) -> f64 {
        match self {
            Self::Simple => simple_growth(principal, annual_rate_pct, years),
            Self::Compound => compound_growth(principal, annual_rate_pct, years),
        }
    }
}

/// Final value without compounding.
#[must_use]
pub fn simple_growth(principal: f64, annual_rate_pct: f64, years: f64) -> f64 {
    principal + principal * (annual_rate_pct / 100.0) * years
}

/// Final value with annual compounding.
#[must_use]
pub fn compound_growth(principal: f64, annual_rate_pct: f64, years: f64) -> f64 {
    principal * (1.0 + annual_rate_pct / 100.0).powf(years)
}

/// Annualized return in percent that turns `principal` into `final_value`
/// over `years`.
///
/// # Errors
///
/// `InvalidPrincipal` when `principal <= 0`, `InvalidYears` when `years <= 0`,
/// `InvalidFinalValue` when `final_value <= 0` (a total loss or worse).
pub fn annualized_return(principal: f64, final_value: f64, years: f64) -> AnalyticsResult<f64> {
    check_principal(principal)?;
    check_years(years)?;
    if !(final_value.is_finite() && final_value > 0.0) {
        return Err(AnalyticsError::InvalidFinalValue { value: final_value });
    }
    Ok(((final_value / principal).powf(1.0 / years) - 1.0) * 100.0)
}

/// Probability-weighted final value across scenarios.
///
/// Does not validate the scenario probabilities; callers validate the set
/// first (see [`ScenarioSet::validate`](crate::ScenarioSet::validate)).
#[must_use]
pub fn expected_value(scenarios: &[Scenario], principal: f64, years: f64) -> f64 {
    scenarios
        .iter()
        .map(|s| compound_growth(principal, s.rate, years) * s.probability)
        .sum()
}
