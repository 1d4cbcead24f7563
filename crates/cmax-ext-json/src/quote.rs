//! Quote extraction and application to the oracle.

use chrono::NaiveDate;
use cmax_core::money::round_money;
use cmax_core::{BondId, BondQuote, CoreResult, StaticPriceOracle};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::payload::{BondResponse, RealtimeResponse, Recommendation};

/// Price data for one bond, extracted from a backend payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteUpdate {
    /// The bond.
    pub bond_id: BondId,
    /// Display name.
    pub name: String,
    /// Current price, rounded to cents.
    pub price: Decimal,
    /// Coupon rate in percent.
    pub coupon_rate: f64,
    /// Years to maturity, when the backend supplied metrics.
    pub years_to_maturity: Option<f64>,
}

impl QuoteUpdate {
    /// Extracts the quote from a bond response.
    ///
    /// The body does not repeat the identifier, so the caller passes the
    /// one it requested.
    #[must_use]
    pub fn from_bond_response(bond_id: BondId, response: &BondResponse) -> Self {
        Self {
            bond_id,
            name: response.bond_info.name.clone(),
            price: round_money(response.history.current_price),
            coupon_rate: response.bond_info.coupon_rate,
            years_to_maturity: years_from(response.recommendation.as_ref()),
        }
    }

    /// Extracts the quote from a realtime response.
    #[must_use]
    pub fn from_realtime_response(bond_id: BondId, response: &RealtimeResponse) -> Self {
        Self {
            bond_id,
            name: response.bond_info.name.clone(),
            price: round_money(response.realtime_data.current_price),
            coupon_rate: response.bond_info.coupon_rate,
            years_to_maturity: years_from(response.recommendation.as_ref()),
        }
    }

    /// Fills in years to maturity from the maturity date when the backend
    /// sent no metrics.
    #[must_use]
    pub fn with_maturity_fallback(mut self, maturity: NaiveDate, as_of: NaiveDate) -> Self {
        if self.years_to_maturity.is_none() {
            self.years_to_maturity = Some((maturity - as_of).num_days() as f64 / 365.25);
        }
        self
    }
}

fn years_from(recommendation: Option<&Recommendation>) -> Option<f64> {
    recommendation.map(|r| r.metrics.years_to_maturity)
}

/// Oracles that accept decoded quotes.
pub trait ApplyQuote {
    /// Installs the quote, replacing any previous one for the bond.
    ///
    /// # Errors
    ///
    /// Rejects a negative price.
    fn apply_quote(&mut self, update: &QuoteUpdate) -> CoreResult<()>;
}

impl ApplyQuote for StaticPriceOracle {
    fn apply_quote(&mut self, update: &QuoteUpdate) -> CoreResult<()> {
        let quote = BondQuote::new(update.name.clone(), update.price)
            .with_coupon_rate(update.coupon_rate);
        self.insert(update.bond_id.clone(), quote)?;
        debug!(bond_id = %update.bond_id, price = %update.price, "quote applied");
        Ok(())
    }
}
