//! Reference data for a bond issue.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Currency;
use crate::money::decimal_to_f64;

/// Average days per year used for year fractions.
const DAYS_PER_YEAR: f64 = 365.25;

/// Static description of a bond issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondInfo {
    /// Display name.
    pub name: String,

    /// ISIN code.
    pub isin: String,

    /// Annual coupon rate as a percentage (4.5 means 4.5%).
    pub coupon_rate: f64,

    /// Face (nominal) value per unit.
    pub face_value: Decimal,

    /// Currency of the issue.
    pub currency: Currency,

    /// Emission date.
    pub emission_date: NaiveDate,

    /// Maturity date.
    pub maturity_date: NaiveDate,
}

impl BondInfo {
    /// Annual coupon amount per unit of face value.
    #[must_use]
    pub fn annual_coupon(&self) -> f64 {
        self.coupon_rate * decimal_to_f64(self.face_value) / 100.0
    }

    /// Years remaining until maturity, measured on a 365.25-day year.
    ///
    /// Negative once the bond has matured.
    #[must_use]
    pub fn years_to_maturity(&self, as_of: NaiveDate) -> f64 {
        (self.maturity_date - as_of).num_days() as f64 / DAYS_PER_YEAR
    }

    /// Current yield in percent at the given price: annual coupon over price.
    ///
    /// Returns `None` for a non-positive price.
    #[must_use]
    pub fn current_yield(&self, price: Decimal) -> Option<f64> {
        let price = decimal_to_f64(price);
        (price > 0.0).then(|| self.annual_coupon() / price * 100.0)
    }

    /// Premium (positive) or discount (negative) of a price to face, in percent.
    #[must_use]
    pub fn premium_discount(&self, price: Decimal) -> Option<f64> {
        let face = decimal_to_f64(self.face_value);
        (face > 0.0).then(|| (decimal_to_f64(price) - face) / face * 100.0)
    }
}
