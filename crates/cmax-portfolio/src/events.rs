//! Ledger change notifications.
//!
//! Subscribers receive events over unbounded crossbeam channels. Sending
//! never blocks the ledger; a subscriber whose receiver has been dropped is
//! removed on the next publish.

use cmax_core::BondId;
use crossbeam::channel::{unbounded, Receiver, Sender};
use rust_decimal::Decimal;
use serde::Serialize;

/// A change applied to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// Units bought.
    Bought {
        /// The bond.
        bond_id: BondId,
        /// Units bought.
        quantity: u64,
        /// Execution price per unit.
        price: Decimal,
        /// True when the trade opened a new holding.
        opened: bool,
    },
    /// Units sold.
    Sold {
        /// The bond.
        bond_id: BondId,
        /// Units sold.
        quantity: u64,
        /// True when the trade closed the holding.
        closed: bool,
    },
    /// Totals recomputed.
    Refreshed {
        /// New total value.
        total_value: Decimal,
        /// New total investment.
        total_investment: Decimal,
    },
}

/// Fan-out of ledger events to any number of subscribers.
#[derive(Debug, Default)]
pub(crate) struct EventBus {
    subscribers: Vec<Sender<LedgerEvent>>,
}

impl EventBus {
    pub(crate) fn subscribe(&mut self) -> Receiver<LedgerEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub(crate) fn publish(&mut self, event: &LedgerEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub(crate) fn len(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fan_out_and_prune() {
        let mut bus = EventBus::default();
        let a = bus.subscribe();
        let b = bus.subscribe();
        assert_eq!(bus.len(), 2);

        let event = LedgerEvent::Refreshed {
            total_value: dec!(10),
            total_investment: dec!(9),
        };
        bus.publish(&event);
        assert_eq!(a.try_recv().unwrap(), event);
        assert_eq!(b.try_recv().unwrap(), event);

        drop(b);
        bus.publish(&event);
        assert_eq!(bus.len(), 1);
        assert_eq!(a.try_recv().unwrap(), event);
    }

    #[test]
    fn test_serialized_tag() {
        let event = LedgerEvent::Sold {
            bond_id: BondId::new("CMAX-2022-001").unwrap(),
            quantity: 5,
            closed: false,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "sold");
        assert_eq!(json["bond_id"], "CMAX-2022-001");
    }
}
