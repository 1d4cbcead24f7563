//! Pricing oracle.
//!
//! The oracle maps a bond identifier to its current price and display name.
//! It never fails: an unknown bond resolves to a fallback price and a
//! synthesized name, so callers must not assume every identifier has
//! curated metadata.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::BondId;

/// Price returned for bonds the oracle knows nothing about.
pub const DEFAULT_FALLBACK_PRICE: Decimal = dec!(950.00);

/// Coupon rate (percent) assumed for bonds without a curated rate.
pub const DEFAULT_FALLBACK_COUPON_RATE: f64 = 4.0;

/// Source of current prices and display names.
pub trait PriceOracle {
    /// Current price per unit.
    fn price(&self, bond_id: &BondId) -> Decimal;

    /// Display name.
    fn name(&self, bond_id: &BondId) -> String;
}

impl<T: PriceOracle + ?Sized> PriceOracle for &T {
    fn price(&self, bond_id: &BondId) -> Decimal {
        (**self).price(bond_id)
    }

    fn name(&self, bond_id: &BondId) -> String {
        (**self).name(bond_id)
    }
}

impl<T: PriceOracle + ?Sized> PriceOracle for Box<T> {
    fn price(&self, bond_id: &BondId) -> Decimal {
        (**self).price(bond_id)
    }

    fn name(&self, bond_id: &BondId) -> String {
        (**self).name(bond_id)
    }
}

/// Curated market data for one bond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondQuote {
    /// Display name.
    pub name: String,
    /// Current price per unit.
    pub price: Decimal,
    /// Annual coupon rate in percent, when known.
    pub coupon_rate: Option<f64>,
}

impl BondQuote {
    /// Creates a quote.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            coupon_rate: None,
        }
    }

    /// Sets the coupon rate.
    #[must_use]
    pub fn with_coupon_rate(mut self, rate: f64) -> Self {
        self.coupon_rate = Some(rate);
        self
    }
}

/// In-memory oracle backed by a lookup table.
#[derive(Debug, Clone)]
pub struct StaticPriceOracle {
    quotes: HashMap<BondId, BondQuote>,
    fallback_price: Decimal,
    fallback_coupon_rate: f64,
}

impl Default for StaticPriceOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticPriceOracle {
    /// Creates an empty oracle with the default fallbacks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            quotes: HashMap::new(),
            fallback_price: DEFAULT_FALLBACK_PRICE,
            fallback_coupon_rate: DEFAULT_FALLBACK_COUPON_RATE,
        }
    }

    /// Creates an oracle preloaded with the CMAX bond catalog.
    #[must_use]
    pub fn cmax_catalog() -> Self {
        let catalog = [
            ("CMAX-2022-001", "Bono CMAX Corporativo 2022", dec!(975.50), 4.5),
            ("CMAX-2022-002", "Bono CMAX Verde 2022", dec!(962.75), 3.8),
            ("CMAX-2023-001", "Bono CMAX Gobierno 2023", dec!(980.00), 4.2),
            ("CMAX-2023-002", "Bono CMAX Infraestructura 2023", dec!(955.25), 4.0),
        ];

        let quotes = catalog
            .into_iter()
            .filter_map(|(id, name, price, rate)| {
                let quote = BondQuote::new(name, price).with_coupon_rate(rate);
                BondId::new(id).ok().map(|id| (id, quote))
            })
            .collect();

        Self {
            quotes,
            ..Self::new()
        }
    }

    /// Sets the fallback price for unknown bonds.
    #[must_use]
    pub fn with_fallback_price(mut self, price: Decimal) -> Self {
        self.fallback_price = price;
        self
    }

    /// Sets the fallback coupon rate for bonds without a curated rate.
    #[must_use]
    pub fn with_fallback_coupon_rate(mut self, rate: f64) -> Self {
        self.fallback_coupon_rate = rate;
        self
    }

    /// Returns the fallback price.
    #[must_use]
    pub fn fallback_price(&self) -> Decimal {
        self.fallback_price
    }

    /// Inserts or replaces the quote for a bond.
    pub fn insert(&mut self, bond_id: BondId, quote: BondQuote) -> CoreResult<()> {
        if quote.price < Decimal::ZERO {
            return Err(CoreError::invalid_price(quote.price, "price cannot be negative"));
        }
        self.quotes.insert(bond_id, quote);
        Ok(())
    }

    /// Updates the price of a bond, keeping its name and coupon.
    ///
    /// Unknown bonds are added under their synthesized name.
    pub fn set_price(&mut self, bond_id: &BondId, price: Decimal) -> CoreResult<()> {
        if price < Decimal::ZERO {
            return Err(CoreError::invalid_price(price, "price cannot be negative"));
        }
        self.quotes
            .entry(bond_id.clone())
            .and_modify(|q| q.price = price)
            .or_insert_with(|| BondQuote::new(synthesized_name(bond_id), price));
        Ok(())
    }

    /// Returns the curated quote for a bond, if any.
    #[must_use]
    pub fn quote(&self, bond_id: &BondId) -> Option<&BondQuote> {
        self.quotes.get(bond_id)
    }

    /// Returns true if the bond has curated data.
    #[must_use]
    pub fn contains(&self, bond_id: &BondId) -> bool {
        self.quotes.contains_key(bond_id)
    }

    /// Coupon rate in percent, or the fallback rate.
    #[must_use]
    pub fn coupon_rate(&self, bond_id: &BondId) -> f64 {
        self.quotes
            .get(bond_id)
            .and_then(|q| q.coupon_rate)
            .unwrap_or(self.fallback_coupon_rate)
    }

    /// Curated bond identifiers, sorted.
    #[must_use]
    pub fn bond_ids(&self) -> Vec<BondId> {
        let mut ids: Vec<BondId> = self.quotes.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl PriceOracle for StaticPriceOracle {
    fn price(&self, bond_id: &BondId) -> Decimal {
        self.quotes
            .get(bond_id)
            .map_or(self.fallback_price, |q| q.price)
    }

    fn name(&self, bond_id: &BondId) -> String {
        self.quotes
            .get(bond_id)
            .map_or_else(|| synthesized_name(bond_id), |q| q.name.clone())
    }
}

fn synthesized_name(bond_id: &BondId) -> String {
    format!("Bond {bond_id}")
}
