//! Holding valuation and portfolio recomputation.
//!
//! ## Formulas
//!
//! ```text
//! current_value = quantity × current_price
//! investment    = quantity × avg_cost
//! gain_loss     = current_value − investment
//! yield_pct     = gain_loss / investment × 100     (0 when investment = 0)
//! ```
//!
//! Amounts are rounded to cents and `yield_pct` to two decimals. Totals are
//! sums of the rounded per-holding fields, so they always add up exactly.
//! Every product and sum is checked; a position too large to value is an
//! `InvalidQuantity` error rather than a panic.

use cmax_core::money::round_money;
use cmax_core::PriceOracle;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::Holding;

/// Derived valuation of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct Valuation {
    /// Market value.
    pub current_value: Decimal,
    /// Cost of the position.
    pub investment: Decimal,
    /// Unrealized gain (negative for a loss).
    pub gain_loss: Decimal,
    /// Gain as a percentage of cost.
    pub yield_pct: Decimal,
}

fn overflow(quantity: impl ToString) -> PortfolioError {
    PortfolioError::invalid_quantity(quantity, "position value overflows")
}

/// Values a position.
///
/// # Errors
///
/// `InvalidQuantity` when `quantity × price` does not fit in a `Decimal`.
pub fn value_holding(
    quantity: u64,
    avg_cost: Decimal,
    current_price: Decimal,
) -> PortfolioResult<Valuation> {
    let units = Decimal::from(quantity);
    let current_value = units
        .checked_mul(current_price)
        .map(round_money)
        .ok_or_else(|| overflow(quantity))?;
    let investment = units
        .checked_mul(avg_cost)
        .map(round_money)
        .ok_or_else(|| overflow(quantity))?;
    let gain_loss = current_value
        .checked_sub(investment)
        .ok_or_else(|| overflow(quantity))?;
    let yield_pct = if investment > Decimal::ZERO {
        gain_loss
            .checked_div(investment)
            .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
            .map(round_money)
            .ok_or_else(|| overflow(quantity))?
    } else {
        Decimal::ZERO
    };

    Ok(Valuation {
        current_value,
        investment,
        gain_loss,
        yield_pct,
    })
}

/// Holdings with their aggregate totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct PortfolioSnapshot {
    holdings: Vec<Holding>,
    total_value: Decimal,
    total_investment: Decimal,
}

impl PortfolioSnapshot {
    /// Sums the totals of already-valued holdings.
    ///
    /// # Errors
    ///
    /// `InvalidQuantity` when a total does not fit in a `Decimal`.
    pub fn from_holdings(holdings: Vec<Holding>) -> PortfolioResult<Self> {
        let total = |field: fn(&Holding) -> Decimal| {
            holdings
                .iter()
                .try_fold(Decimal::ZERO, |acc, h| acc.checked_add(field(h)))
                .ok_or_else(|| {
                    let units: u128 = holdings.iter().map(|h| u128::from(h.quantity())).sum();
                    overflow(units)
                })
        };
        let total_value = total(Holding::current_value)?;
        let total_investment = total(Holding::investment)?;
        Ok(Self {
            holdings,
            total_value,
            total_investment,
        })
    }

    /// Holdings in insertion order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Sum of current values.
    #[must_use]
    pub fn total_value(&self) -> Decimal {
        self.total_value
    }

    /// Sum of investments.
    #[must_use]
    pub fn total_investment(&self) -> Decimal {
        self.total_investment
    }

    /// `total_value - total_investment`.
    #[must_use]
    pub fn total_gain_loss(&self) -> Decimal {
        self.total_value - self.total_investment
    }

    /// Returns true if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

/// Reprices every holding from the oracle and re-sums the totals.
///
/// Pure and idempotent for a fixed oracle.
///
/// # Errors
///
/// `InvalidQuantity` when a holding or a total overflows at the oracle's
/// prices.
pub fn recompute_portfolio<O>(
    holdings: &[Holding],
    oracle: &O,
) -> PortfolioResult<PortfolioSnapshot>
where
    O: PriceOracle + ?Sized,
{
    let repriced = holdings
        .iter()
        .map(|h| h.repriced(oracle.price(h.bond_id())))
        .collect::<PortfolioResult<Vec<_>>>()?;
    PortfolioSnapshot::from_holdings(repriced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmax_core::{BondId, StaticPriceOracle};
    use rust_decimal_macros::dec;

    #[test]
    fn test_value_holding() {
        let v = value_holding(25, dec!(960.00), dec!(962.75)).unwrap();
        assert_eq!(v.current_value, dec!(24068.75));
        assert_eq!(v.investment, dec!(24000.00));
        assert_eq!(v.gain_loss, dec!(68.75));
        assert_eq!(v.yield_pct, dec!(0.29));
    }

    #[test]
    fn test_zero_cost_has_zero_yield() {
        let v = value_holding(10, Decimal::ZERO, dec!(100)).unwrap();
        assert_eq!(v.investment, Decimal::ZERO);
        assert_eq!(v.gain_loss, dec!(1000));
        assert_eq!(v.yield_pct, Decimal::ZERO);
    }

    #[test]
    fn test_recompute_and_idempotence() {
        let oracle = StaticPriceOracle::cmax_catalog();
        let holdings = vec![
            Holding::new(
                BondId::new("CMAX-2022-001").unwrap(),
                "Corp",
                50,
                dec!(950.00),
                dec!(0),
            )
            .unwrap(),
            Holding::new(
                BondId::new("UNLISTED").unwrap(),
                "Bond UNLISTED",
                2,
                dec!(900.00),
                dec!(0),
            )
            .unwrap(),
        ];

        let first = recompute_portfolio(&holdings, &oracle).unwrap();
        assert_eq!(first.holdings()[0].current_price(), dec!(975.50));
        assert_eq!(first.holdings()[1].current_price(), dec!(950.00));
        assert_eq!(first.total_value(), dec!(48775.00) + dec!(1900.00));
        assert_eq!(first.total_investment(), dec!(47500.00) + dec!(1800.00));

        let second = recompute_portfolio(first.holdings(), &oracle).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty() {
        let snapshot = recompute_portfolio(&[], &StaticPriceOracle::new()).unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.total_value(), Decimal::ZERO);
    }

    #[test]
    fn test_oversized_position_is_an_error() {
        let err = value_holding(u64::MAX, dec!(950.00), dec!(10000000000)).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidQuantity { .. }));

        // Worthless at market, but the cost still overflows.
        assert!(value_holding(u64::MAX, Decimal::MAX, Decimal::ZERO).is_err());
    }

    #[test]
    fn test_oversized_repricing_is_an_error() {
        let bond = BondId::new("UNLISTED").unwrap();
        let holdings =
            vec![Holding::new(bond, "Bond UNLISTED", u64::MAX, dec!(1), dec!(1)).unwrap()];
        let oracle = StaticPriceOracle::new().with_fallback_price(dec!(10000000000));
        assert!(recompute_portfolio(&holdings, &oracle).is_err());
    }
}
