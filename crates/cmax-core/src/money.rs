//! Monetary rounding and conversion helpers.
//!
//! Money is carried as [`Decimal`]; rates and projections are `f64`. These
//! helpers are the only place the two representations meet.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{CoreError, CoreResult};

/// Number of decimal places kept for money amounts.
pub const MONEY_DP: u32 = 2;

/// Rounds a money amount to two decimal places, halves away from zero.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a decimal to `f64`, saturating to zero on failure.
#[must_use]
pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Converts an `f64` to a decimal.
///
/// Rejects NaN, infinities and values outside the decimal range.
pub fn f64_to_decimal(value: f64) -> CoreResult<Decimal> {
    if !value.is_finite() {
        return Err(CoreError::NotRepresentable { value });
    }
    Decimal::from_f64(value).ok_or(CoreError::NotRepresentable { value })
}
