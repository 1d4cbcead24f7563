//! Integration tests for cmax-portfolio.
//!
//! These drive the ledger through realistic trading sessions on the CMAX
//! catalog.

use approx::assert_abs_diff_eq;
use cmax_core::money::decimal_to_f64;
use cmax_core::{BondId, StaticPriceOracle};
use cmax_portfolio::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn id(s: &str) -> BondId {
    BondId::new(s).unwrap()
}

fn demo_ledger() -> Ledger {
    Ledger::with_demo_holdings(StaticPriceOracle::cmax_catalog()).unwrap()
}

fn assert_conserved(ledger: &Ledger) {
    let value: Decimal = ledger.holdings().iter().map(Holding::current_value).sum();
    let investment: Decimal = ledger.holdings().iter().map(Holding::investment).sum();
    assert_eq!(ledger.total_value(), value);
    assert_eq!(ledger.total_investment(), investment);
}

// =============================================================================
// SEED BOOK
// =============================================================================

#[test]
fn demo_book_is_priced_from_catalog() {
    let ledger = demo_ledger();

    assert_eq!(ledger.len(), 2);
    let corp = ledger.holding(&id("CMAX-2022-001")).unwrap();
    assert_eq!(corp.quantity(), 50);
    assert_eq!(corp.current_value(), dec!(48775.00));
    assert_eq!(corp.yield_pct(), dec!(2.68));

    assert_eq!(ledger.total_value(), dec!(72843.75));
    assert_eq!(ledger.total_investment(), dec!(71500.00));
    assert_conserved(&ledger);
}

// =============================================================================
// TRADING SESSIONS
// =============================================================================

#[test]
fn full_liquidation_then_sell_again() {
    let mut ledger = demo_ledger();
    let green = id("CMAX-2022-002");

    ledger.sell(&green, 25).unwrap();
    assert!(ledger.holding(&green).is_none());
    assert_eq!(ledger.len(), 1);
    assert_conserved(&ledger);

    assert_eq!(
        ledger.sell(&green, 1),
        Err(PortfolioError::NoSuchHolding {
            bond_id: "CMAX-2022-002".into()
        })
    );
}

#[test]
fn selling_more_than_held_is_rejected() {
    let mut ledger = demo_ledger();
    let corp = id("CMAX-2022-001");
    let before = ledger.holding(&corp).cloned();

    let err = ledger.sell(&corp, 51).unwrap_err();
    assert_eq!(
        err,
        PortfolioError::InsufficientQuantity {
            bond_id: "CMAX-2022-001".into(),
            requested: 51,
            held: 50,
        }
    );
    assert_eq!(ledger.holding(&corp).cloned(), before);
}

#[test]
fn partial_sell_keeps_average_cost() {
    let mut ledger = demo_ledger();
    let corp = id("CMAX-2022-001");

    ledger.sell(&corp, 20).unwrap();
    let h = ledger.holding(&corp).unwrap();
    assert_eq!(h.quantity(), 30);
    assert_eq!(h.avg_cost(), dec!(950.00));
    assert_eq!(h.investment(), dec!(28500.00));
    assert_conserved(&ledger);
}

#[test]
fn unknown_bond_uses_fallback_price() {
    let mut ledger = demo_ledger();
    let exotic = id("CMAX-2099-999");

    ledger.buy(&exotic, 3).unwrap();
    let h = ledger.holding(&exotic).unwrap();
    assert_eq!(h.avg_cost(), dec!(950.00));
    assert_eq!(h.name(), "Bond CMAX-2099-999");
    assert_eq!(ledger.holdings().last().map(|h| h.bond_id()), Some(&exotic));
    assert_conserved(&ledger);
}

#[test]
fn price_update_flows_through_refresh() {
    let mut ledger = demo_ledger();
    let corp = id("CMAX-2022-001");
    let rx = ledger.subscribe();

    ledger.oracle_mut().set_price(&corp, dec!(1000.00)).unwrap();
    // Not repriced until refresh.
    assert_eq!(ledger.holding(&corp).unwrap().current_price(), dec!(975.50));

    ledger.refresh().unwrap();
    let h = ledger.holding(&corp).unwrap();
    assert_eq!(h.current_value(), dec!(50000.00));
    assert_eq!(h.gain_loss(), dec!(2500.00));
    assert_conserved(&ledger);

    assert_eq!(
        rx.try_recv().unwrap(),
        LedgerEvent::Refreshed {
            total_value: dec!(74068.75),
            total_investment: dec!(71500.00),
        }
    );
}

#[test]
fn summary_matches_ledger() {
    let mut ledger = demo_ledger();
    ledger.buy(&id("CMAX-2023-001"), 10).unwrap();

    let summary = ledger.summary();
    assert_eq!(summary.holdings_count, 3);
    assert_eq!(summary.total_value, ledger.total_value());
    assert_eq!(
        summary.total_return,
        ledger.total_value() - ledger.total_investment()
    );

    let weights: Decimal = summary.allocation.iter().map(|a| a.weight_pct).sum();
    assert_abs_diff_eq!(decimal_to_f64(weights), 100.0, epsilon = 0.02);
}

#[test]
fn oversized_trade_is_rejected_without_panicking() {
    let oracle = StaticPriceOracle::cmax_catalog().with_fallback_price(dec!(10000000000));
    let mut ledger = Ledger::new(oracle);
    let unlisted = id("UNLISTED");

    let err = ledger.buy(&unlisted, i64::MAX).unwrap_err();
    assert!(matches!(err, PortfolioError::InvalidQuantity { .. }));
    assert!(ledger.is_empty());

    // The ledger keeps trading normally afterwards.
    ledger.buy(&unlisted, 3).unwrap();
    assert_eq!(ledger.total_value(), dec!(30000000000));
    assert_conserved(&ledger);
}

#[test]
fn dropped_subscriber_does_not_block_trading() {
    let mut ledger = demo_ledger();
    let rx = ledger.subscribe();
    drop(rx);

    ledger.buy(&id("CMAX-2022-001"), 1).unwrap();
    ledger.sell(&id("CMAX-2022-001"), 1).unwrap();
    assert_eq!(ledger.holding(&id("CMAX-2022-001")).unwrap().quantity(), 50);
}
