//! Portfolio summary and allocation.

use cmax_core::money::round_money;
use cmax_core::BondId;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::valuation::PortfolioSnapshot;

/// Share of one holding in the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    /// The bond.
    pub bond_id: BondId,
    /// Display name.
    pub name: String,
    /// Current value of the holding.
    pub value: Decimal,
    /// Percent of total value, two decimals.
    pub weight_pct: Decimal,
}

/// Headline figures of a portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioSummary {
    /// Number of holdings.
    pub holdings_count: usize,
    /// Sum of current values.
    pub total_value: Decimal,
    /// Sum of investments.
    pub total_investment: Decimal,
    /// `total_value - total_investment`.
    pub total_return: Decimal,
    /// Simple mean of holding yields, two decimals.
    pub avg_yield_pct: Decimal,
    /// Per-holding allocation in holding order.
    pub allocation: Vec<Allocation>,
}

impl PortfolioSummary {
    /// Summarizes a snapshot.
    ///
    /// The average yield is unweighted, matching the dashboard. Weights
    /// are zero when the portfolio has no value.
    #[must_use]
    pub fn from_snapshot(snapshot: &PortfolioSnapshot) -> Self {
        let holdings = snapshot.holdings();
        let total_value = snapshot.total_value();

        let avg_yield_pct = if holdings.is_empty() {
            Decimal::ZERO
        } else {
            let n = Decimal::from(holdings.len());
            round_money(holdings.iter().map(|h| h.yield_pct() / n).sum())
        };

        let allocation = holdings
            .iter()
            .map(|h| Allocation {
                bond_id: h.bond_id().clone(),
                name: h.name().to_string(),
                value: h.current_value(),
                weight_pct: if total_value > Decimal::ZERO {
                    round_money(h.current_value() / total_value * Decimal::ONE_HUNDRED)
                } else {
                    Decimal::ZERO
                },
            })
            .collect();

        Self {
            holdings_count: holdings.len(),
            total_value,
            total_investment: snapshot.total_investment(),
            total_return: snapshot.total_gain_loss(),
            avg_yield_pct,
            allocation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Holding;
    use rust_decimal_macros::dec;

    fn holding(id: &str, qty: u64, cost: Decimal, price: Decimal) -> Holding {
        Holding::new(BondId::new(id).unwrap(), id, qty, cost, price).unwrap()
    }

    #[test]
    fn test_demo_book_summary() {
        let snapshot = PortfolioSnapshot::from_holdings(vec![
            holding("CMAX-2022-001", 50, dec!(950.00), dec!(975.50)),
            holding("CMAX-2022-002", 25, dec!(960.00), dec!(962.75)),
        ])
        .unwrap();

        let summary = PortfolioSummary::from_snapshot(&snapshot);
        assert_eq!(summary.holdings_count, 2);
        assert_eq!(summary.total_value, dec!(72843.75));
        assert_eq!(summary.total_investment, dec!(71500.00));
        assert_eq!(summary.total_return, dec!(1343.75));
        // (2.68 + 0.29) / 2
        assert_eq!(summary.avg_yield_pct, dec!(1.49));
        assert_eq!(summary.allocation[0].weight_pct, dec!(66.96));
        assert_eq!(summary.allocation[1].weight_pct, dec!(33.04));
    }

    #[test]
    fn test_empty_summary() {
        let summary = PortfolioSummary::from_snapshot(&PortfolioSnapshot::default());
        assert_eq!(summary.holdings_count, 0);
        assert_eq!(summary.avg_yield_pct, Decimal::ZERO);
        assert!(summary.allocation.is_empty());
    }

    #[test]
    fn test_zero_value_weights() {
        let snapshot =
            PortfolioSnapshot::from_holdings(vec![holding("FREE", 3, dec!(10), Decimal::ZERO)])
                .unwrap();
        let summary = PortfolioSummary::from_snapshot(&snapshot);
        assert_eq!(summary.allocation[0].weight_pct, Decimal::ZERO);
        assert_eq!(summary.total_return, dec!(-30));
    }
}
