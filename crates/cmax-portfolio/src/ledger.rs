//! The holdings ledger.
//!
//! A [`Ledger`] owns the holdings, the pricing oracle and the current
//! snapshot of totals. Every trade is validated first, applied to a copy of
//! the holdings and recomputed; only then is the new snapshot swapped in
//! and events published. A rejected trade never touches the ledger.

use cmax_core::money::round_money;
use cmax_core::{BondId, PriceOracle, StaticPriceOracle};
use crossbeam::channel::Receiver;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, trace, warn};

use crate::error::{PortfolioError, PortfolioResult};
use crate::events::{EventBus, LedgerEvent};
use crate::summary::PortfolioSummary;
use crate::types::Holding;
use crate::valuation::{recompute_portfolio, PortfolioSnapshot};

/// Checks a signed trade quantity and returns it as a unit count.
///
/// # Errors
///
/// `InvalidQuantity` when `quantity <= 0`.
pub fn validate_quantity(quantity: i64) -> PortfolioResult<u64> {
    u64::try_from(quantity)
        .ok()
        .filter(|&q| q > 0)
        .ok_or_else(|| PortfolioError::invalid_quantity(quantity, "must be a positive integer"))
}

/// Converts a numeric quantity from external input into a unit count.
///
/// # Errors
///
/// `InvalidQuantity` when the value is not finite, fractional or not
/// positive.
pub fn parse_quantity(quantity: f64) -> PortfolioResult<u64> {
    if !quantity.is_finite() || quantity.fract() != 0.0 {
        return Err(PortfolioError::invalid_quantity(
            quantity,
            "must be a whole number of units",
        ));
    }
    // u64::MAX as f64 rounds up to 2^64, which is already out of range.
    if quantity <= 0.0 || quantity >= u64::MAX as f64 {
        return Err(PortfolioError::invalid_quantity(
            quantity,
            "must be a positive integer",
        ));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(quantity as u64)
}

/// Volume-weighted average cost after adding `qty` units at `price`,
/// rounded to cents.
///
/// # Errors
///
/// `InvalidQuantity` when the combined cost does not fit in a `Decimal`.
pub fn weighted_average_cost(
    held: u64,
    avg_cost: Decimal,
    qty: u64,
    price: Decimal,
) -> PortfolioResult<Decimal> {
    let held_units = Decimal::from(held);
    let new_units = Decimal::from(qty);
    let total_units = held_units + new_units;
    if total_units.is_zero() {
        return Ok(Decimal::ZERO);
    }
    held_units
        .checked_mul(avg_cost)
        .zip(new_units.checked_mul(price))
        .and_then(|(old, new)| old.checked_add(new))
        .and_then(|cost| cost.checked_div(total_units))
        .map(round_money)
        .ok_or_else(|| PortfolioError::invalid_quantity(qty, "position cost overflows"))
}

/// Holdings ledger over a pricing oracle.
#[derive(Debug)]
pub struct Ledger<O = StaticPriceOracle> {
    oracle: O,
    snapshot: PortfolioSnapshot,
    events: EventBus,
}

impl<O: PriceOracle> Ledger<O> {
    /// Creates an empty ledger.
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            snapshot: PortfolioSnapshot::default(),
            events: EventBus::default(),
        }
    }

    /// Creates a ledger seeded with the dashboard's starting book:
    /// 50 × CMAX-2022-001 at 950.00 and 25 × CMAX-2022-002 at 960.00.
    ///
    /// # Errors
    ///
    /// `InvalidQuantity` when the oracle prices the book beyond `Decimal`
    /// range.
    pub fn with_demo_holdings(oracle: O) -> PortfolioResult<Self> {
        let seed = [
            ("CMAX-2022-001", 50, dec!(950.00)),
            ("CMAX-2022-002", 25, dec!(960.00)),
        ];

        let holdings = seed
            .into_iter()
            .map(|(id, qty, cost)| {
                let bond_id = BondId::new(id)?;
                let name = oracle.name(&bond_id);
                Holding::new(bond_id, name, qty, cost, cost)
            })
            .collect::<PortfolioResult<Vec<_>>>()?;

        let snapshot = recompute_portfolio(&holdings, &oracle)?;
        Ok(Self {
            oracle,
            snapshot,
            events: EventBus::default(),
        })
    }

    /// The pricing oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Mutable access to the oracle. Call [`refresh`](Self::refresh)
    /// afterwards to reprice the holdings.
    pub fn oracle_mut(&mut self) -> &mut O {
        &mut self.oracle
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> &PortfolioSnapshot {
        &self.snapshot
    }

    /// Holdings in insertion order.
    pub fn holdings(&self) -> &[Holding] {
        self.snapshot.holdings()
    }

    /// Holding for a bond, if held.
    pub fn holding(&self, bond_id: &BondId) -> Option<&Holding> {
        self.holdings().iter().find(|h| h.bond_id() == bond_id)
    }

    /// Sum of current values.
    pub fn total_value(&self) -> Decimal {
        self.snapshot.total_value()
    }

    /// Sum of investments.
    pub fn total_investment(&self) -> Decimal {
        self.snapshot.total_investment()
    }

    /// Number of holdings.
    pub fn len(&self) -> usize {
        self.holdings().len()
    }

    /// Returns true if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Summary of the current snapshot.
    pub fn summary(&self) -> PortfolioSummary {
        PortfolioSummary::from_snapshot(&self.snapshot)
    }

    /// Subscribes to ledger events.
    pub fn subscribe(&mut self) -> Receiver<LedgerEvent> {
        self.events.subscribe()
    }

    /// Buys `quantity` units at the oracle's current price.
    ///
    /// # Errors
    ///
    /// `InvalidQuantity` when `quantity <= 0` or the position would
    /// overflow.
    pub fn buy(&mut self, bond_id: &BondId, quantity: i64) -> PortfolioResult<()> {
        let price = self.oracle.price(bond_id);
        self.buy_at(bond_id, quantity, price)
    }

    /// Buys `quantity` units at `exec_price`.
    ///
    /// A new holding starts at `avg_cost = exec_price`; an existing one
    /// moves to the volume-weighted average, rounded to cents.
    ///
    /// # Errors
    ///
    /// `InvalidQuantity` or `InvalidPrice`.
    pub fn buy_at(
        &mut self,
        bond_id: &BondId,
        quantity: i64,
        exec_price: Decimal,
    ) -> PortfolioResult<()> {
        let qty = validate_quantity(quantity).map_err(|e| Self::rejected("buy", bond_id, e))?;
        if exec_price < Decimal::ZERO {
            return Err(Self::rejected(
                "buy",
                bond_id,
                PortfolioError::InvalidPrice {
                    bond_id: bond_id.to_string(),
                    price: exec_price,
                },
            ));
        }

        let mut holdings = self.holdings().to_vec();
        let opened = match holdings.iter_mut().find(|h| h.bond_id() == bond_id) {
            Some(existing) => {
                let new_qty = existing.quantity().checked_add(qty).ok_or_else(|| {
                    Self::rejected(
                        "buy",
                        bond_id,
                        PortfolioError::invalid_quantity(quantity, "position would overflow"),
                    )
                })?;
                let new_avg =
                    weighted_average_cost(existing.quantity(), existing.avg_cost(), qty, exec_price)
                        .map_err(|e| Self::rejected("buy", bond_id, e))?;
                *existing = existing
                    .with_position(new_qty, new_avg)
                    .map_err(|e| Self::rejected("buy", bond_id, e))?;
                false
            }
            None => {
                let name = self.oracle.name(bond_id);
                let holding = Holding::new(bond_id.clone(), name, qty, exec_price, exec_price)
                    .map_err(|e| Self::rejected("buy", bond_id, e))?;
                holdings.push(holding);
                true
            }
        };

        self.commit(&holdings)
            .map_err(|e| Self::rejected("buy", bond_id, e))?;
        debug!(
            bond_id = %bond_id,
            quantity = qty,
            price = %exec_price,
            opened,
            "buy applied"
        );
        self.events.publish(&LedgerEvent::Bought {
            bond_id: bond_id.clone(),
            quantity: qty,
            price: exec_price,
            opened,
        });
        self.publish_refreshed();
        Ok(())
    }

    /// Sells `quantity` units. Selling the whole position removes the
    /// holding; a partial sell keeps the average cost.
    ///
    /// # Errors
    ///
    /// `InvalidQuantity`, `NoSuchHolding` or `InsufficientQuantity`.
    pub fn sell(&mut self, bond_id: &BondId, quantity: i64) -> PortfolioResult<()> {
        let qty = validate_quantity(quantity).map_err(|e| Self::rejected("sell", bond_id, e))?;

        let mut holdings = self.holdings().to_vec();
        let Some(index) = holdings.iter().position(|h| h.bond_id() == bond_id) else {
            return Err(Self::rejected(
                "sell",
                bond_id,
                PortfolioError::no_such_holding(bond_id.as_str()),
            ));
        };

        let held = holdings[index].quantity();
        let closed = match qty.cmp(&held) {
            std::cmp::Ordering::Greater => {
                return Err(Self::rejected(
                    "sell",
                    bond_id,
                    PortfolioError::InsufficientQuantity {
                        bond_id: bond_id.to_string(),
                        requested: qty,
                        held,
                    },
                ));
            }
            std::cmp::Ordering::Equal => {
                holdings.remove(index);
                true
            }
            std::cmp::Ordering::Less => {
                let avg = holdings[index].avg_cost();
                holdings[index] = holdings[index]
                    .with_position(held - qty, avg)
                    .map_err(|e| Self::rejected("sell", bond_id, e))?;
                false
            }
        };

        self.commit(&holdings)
            .map_err(|e| Self::rejected("sell", bond_id, e))?;
        debug!(bond_id = %bond_id, quantity = qty, closed, "sell applied");
        self.events.publish(&LedgerEvent::Sold {
            bond_id: bond_id.clone(),
            quantity: qty,
            closed,
        });
        self.publish_refreshed();
        Ok(())
    }

    /// Reprices every holding from the oracle.
    ///
    /// # Errors
    ///
    /// `InvalidQuantity` when a holding overflows at the new prices; the
    /// previous snapshot is kept.
    pub fn refresh(&mut self) -> PortfolioResult<()> {
        let holdings = self.holdings().to_vec();
        self.commit(&holdings).map_err(|e| {
            warn!(error = %e, "refresh rejected");
            e
        })?;
        self.publish_refreshed();
        Ok(())
    }

    /// Recomputes `holdings` and swaps the snapshot in only on success.
    fn commit(&mut self, holdings: &[Holding]) -> PortfolioResult<()> {
        self.snapshot = recompute_portfolio(holdings, &self.oracle)?;
        trace!(
            holdings = self.snapshot.holdings().len(),
            total_value = %self.snapshot.total_value(),
            total_investment = %self.snapshot.total_investment(),
            "portfolio recomputed"
        );
        Ok(())
    }

    fn publish_refreshed(&mut self) {
        let event = LedgerEvent::Refreshed {
            total_value: self.snapshot.total_value(),
            total_investment: self.snapshot.total_investment(),
        };
        self.events.publish(&event);
    }

    /// Logs a rejected trade and hands the error back.
    fn rejected(op: &str, bond_id: &BondId, err: PortfolioError) -> PortfolioError {
        warn!(op, bond_id = %bond_id, error = %err, "trade rejected");
        err
    }
}

impl Default for Ledger<StaticPriceOracle> {
    fn default() -> Self {
        Self::new(StaticPriceOracle::cmax_catalog())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> BondId {
        BondId::new(s).unwrap()
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(5), Ok(5));
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(10.0), Ok(10));
        assert!(matches!(
            parse_quantity(2.5),
            Err(PortfolioError::InvalidQuantity { .. })
        ));
        assert!(parse_quantity(0.0).is_err());
        assert!(parse_quantity(-4.0).is_err());
        assert!(parse_quantity(f64::NAN).is_err());
        // 2^64 is the first whole float past u64::MAX.
        assert!(parse_quantity(18_446_744_073_709_551_616.0).is_err());
        assert_eq!(parse_quantity(9_007_199_254_740_992.0), Ok(1 << 53));
    }

    #[test]
    fn test_weighted_average_cost() {
        assert_eq!(
            weighted_average_cost(50, dec!(950.00), 10, dec!(975.50)),
            Ok(dec!(954.25))
        );
        // 1×100 + 2×101 = 302 / 3 = 100.666...
        assert_eq!(
            weighted_average_cost(1, dec!(100), 2, dec!(101)),
            Ok(dec!(100.67))
        );
        assert!(weighted_average_cost(u64::MAX, dec!(10000000000), 1, dec!(1)).is_err());
    }

    #[test]
    fn test_buy_opens_then_averages() {
        let mut ledger: Ledger = Ledger::default();
        let corp = id("CMAX-2022-001");

        ledger.buy_at(&corp, 10, dec!(950.00)).unwrap();
        let h = ledger.holding(&corp).unwrap();
        assert_eq!(h.avg_cost(), dec!(950.00));
        assert_eq!(h.name(), "Bono CMAX Corporativo 2022");
        assert_eq!(h.current_price(), dec!(975.50));

        ledger.buy(&corp, 10).unwrap();
        let h = ledger.holding(&corp).unwrap();
        assert_eq!(h.quantity(), 20);
        assert_eq!(h.avg_cost(), dec!(962.75));
    }

    #[test]
    fn test_rejections_leave_state() {
        let mut ledger = Ledger::with_demo_holdings(StaticPriceOracle::cmax_catalog()).unwrap();
        let before = ledger.snapshot().clone();

        assert!(ledger.buy(&id("CMAX-2022-001"), 0).is_err());
        assert!(ledger.buy_at(&id("CMAX-2022-001"), 1, dec!(-1)).is_err());
        assert!(ledger.sell(&id("CMAX-2023-001"), 1).is_err());
        assert!(ledger.sell(&id("CMAX-2022-001"), 51).is_err());
        assert!(ledger.sell(&id("CMAX-2022-001"), -5).is_err());

        assert_eq!(ledger.snapshot(), &before);
    }

    #[test]
    fn test_events() {
        let mut ledger: Ledger = Ledger::default();
        let rx = ledger.subscribe();
        let green = id("CMAX-2022-002");

        ledger.buy_at(&green, 4, dec!(960.00)).unwrap();
        ledger.sell(&green, 4).unwrap();
        assert!(ledger.sell(&green, 1).is_err());

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], LedgerEvent::Bought { opened: true, quantity: 4, .. }));
        assert!(matches!(events[1], LedgerEvent::Refreshed { .. }));
        assert!(matches!(events[2], LedgerEvent::Sold { closed: true, .. }));
        assert_eq!(
            events[3],
            LedgerEvent::Refreshed {
                total_value: Decimal::ZERO,
                total_investment: Decimal::ZERO,
            }
        );
    }

    #[test]
    fn test_oversized_buy_is_rejected() {
        let oracle = StaticPriceOracle::cmax_catalog().with_fallback_price(dec!(10000000000));
        let mut ledger = Ledger::new(oracle);
        let rx = ledger.subscribe();
        let unlisted = id("UNLISTED");

        let err = ledger.buy(&unlisted, i64::MAX).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidQuantity { .. }));
        assert!(ledger.is_empty());
        assert!(rx.try_recv().is_err());

        // Averaging into a large position overflows the combined cost.
        let mut ledger: Ledger = Ledger::default();
        ledger.buy_at(&unlisted, i64::MAX, dec!(1)).unwrap();
        let before = ledger.snapshot().clone();
        let err = ledger
            .buy_at(&unlisted, i64::MAX, dec!(10000000000))
            .unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidQuantity { .. }));
        assert_eq!(ledger.snapshot(), &before);
    }

    #[test]
    fn test_refresh_overflow_keeps_snapshot() {
        let mut ledger: Ledger = Ledger::default();
        let unlisted = id("UNLISTED");
        ledger.buy_at(&unlisted, i64::MAX, dec!(1)).unwrap();
        let before = ledger.snapshot().clone();

        ledger.oracle_mut().set_price(&unlisted, dec!(10000000000)).unwrap();
        assert!(ledger.refresh().is_err());
        assert_eq!(ledger.snapshot(), &before);
    }
}
