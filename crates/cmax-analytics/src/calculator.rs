//! Rate-of-return calculator.

use serde::{Deserialize, Serialize};

use crate::error::{check_principal, check_rate, check_years, AnalyticsResult};
use crate::projection::{annualized_return, GrowthMode};

/// Projection of an investment at a fixed coupon rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnProjection {
    /// Invested amount.
    pub principal: f64,
    /// Coupon rate in percent.
    pub annual_rate_pct: f64,
    /// Horizon in years.
    pub years: f64,
    /// Growth mode used.
    pub mode: GrowthMode,
    /// Value at the end of the horizon.
    pub final_value: f64,
    /// `final_value - principal`.
    pub total_gain: f64,
    /// Annualized return in percent.
    pub annualized_return_pct: f64,
    /// Coupon paid in one year on the principal.
    pub annual_coupon: f64,
}

/// Return calculator.
///
/// Stateless; reinvested coupons compound, paid-out coupons do not.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnCalculator;

impl ReturnCalculator {
    /// Projects `principal` at `annual_rate_pct` over `years`.
    ///
    /// # Errors
    ///
    /// `InvalidPrincipal`, `InvalidYears`, `InvalidRate`, or `InvalidFinalValue`
    /// when paid-out losses exceed the principal.
    pub fn calculate(
        principal: f64,
        annual_rate_pct: f64,
        years: f64,
        reinvest: bool,
    ) -> AnalyticsResult<ReturnProjection> {
        check_principal(principal)?;
        check_years(years)?;
        check_rate(annual_rate_pct)?;

        let mode = GrowthMode::from_reinvestment(reinvest);
        let final_value = mode.project(principal, annual_rate_pct, years);

        Ok(ReturnProjection {
            principal,
            annual_rate_pct,
            years,
            mode,
            final_value,
            total_gain: final_value - principal,
            annualized_return_pct: annualized_return(principal, final_value, years)?,
            annual_coupon: principal * annual_rate_pct / 100.0,
        })
    }
}
