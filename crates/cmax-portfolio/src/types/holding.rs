//! A bond position held in the ledger.

use cmax_core::BondId;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::PortfolioResult;
use crate::valuation::{value_holding, Valuation};

/// A single bond position.
///
/// The valuation fields are derived from quantity, average cost and
/// current price whenever the holding is built or repriced. They have no
/// setters, so a holding can never carry stale derived values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holding {
    bond_id: BondId,
    name: String,
    quantity: u64,
    avg_cost: Decimal,
    current_price: Decimal,
    #[serde(flatten)]
    valuation: Valuation,
}

impl Holding {
    /// Creates a holding and derives its valuation.
    ///
    /// # Errors
    ///
    /// `InvalidQuantity` when the position is too large to value.
    pub fn new(
        bond_id: BondId,
        name: impl Into<String>,
        quantity: u64,
        avg_cost: Decimal,
        current_price: Decimal,
    ) -> PortfolioResult<Self> {
        Ok(Self {
            valuation: value_holding(quantity, avg_cost, current_price)?,
            bond_id,
            name: name.into(),
            quantity,
            avg_cost,
            current_price,
        })
    }

    /// Same position at a new price.
    pub fn repriced(&self, current_price: Decimal) -> PortfolioResult<Self> {
        Self::new(
            self.bond_id.clone(),
            self.name.clone(),
            self.quantity,
            self.avg_cost,
            current_price,
        )
    }

    /// Same position with a new quantity and average cost.
    pub(crate) fn with_position(&self, quantity: u64, avg_cost: Decimal) -> PortfolioResult<Self> {
        Self::new(
            self.bond_id.clone(),
            self.name.clone(),
            quantity,
            avg_cost,
            self.current_price,
        )
    }

    /// Bond identifier.
    #[must_use]
    pub fn bond_id(&self) -> &BondId {
        &self.bond_id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Units held.
    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Volume-weighted average purchase price per unit.
    #[must_use]
    pub fn avg_cost(&self) -> Decimal {
        self.avg_cost
    }

    /// Last price from the oracle.
    #[must_use]
    pub fn current_price(&self) -> Decimal {
        self.current_price
    }

    /// Derived valuation.
    #[must_use]
    pub fn valuation(&self) -> &Valuation {
        &self.valuation
    }

    /// `quantity × current_price`.
    #[must_use]
    pub fn current_value(&self) -> Decimal {
        self.valuation.current_value
    }

    /// `quantity × avg_cost`.
    #[must_use]
    pub fn investment(&self) -> Decimal {
        self.valuation.investment
    }

    /// `current_value - investment`.
    #[must_use]
    pub fn gain_loss(&self) -> Decimal {
        self.valuation.gain_loss
    }

    /// Gain or loss as a percentage of the investment.
    #[must_use]
    pub fn yield_pct(&self) -> Decimal {
        self.valuation.yield_pct
    }
}
