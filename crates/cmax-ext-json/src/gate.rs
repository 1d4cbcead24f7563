//! Relevance gate for asynchronous responses.
//!
//! Every new selection (bond and period) issues a ticket. A response that
//! arrives holding an older ticket belongs to a superseded selection and
//! is dropped. The gate is advisory: it never cancels a request.

use cmax_core::BondId;
use tracing::debug;

use crate::period::Period;

/// Ticket issued for one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Sequence number.
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// Tracks the latest selection.
#[derive(Debug, Default)]
pub struct ResponseGate {
    latest: u64,
    selection: Option<(BondId, Period)>,
}

impl ResponseGate {
    /// Creates a gate with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new selection and returns its ticket. Earlier tickets
    /// stop being current.
    pub fn issue(&mut self, bond_id: BondId, period: Period) -> Ticket {
        self.latest += 1;
        self.selection = Some((bond_id, period));
        Ticket(self.latest)
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> Option<&(BondId, Period)> {
        self.selection.as_ref()
    }

    /// Returns true if the ticket belongs to the latest selection.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest && self.selection.is_some()
    }

    /// Passes `value` through if the ticket is current, otherwise drops it.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            debug!(ticket = ticket.0, latest = self.latest, "stale response dropped");
            None
        }
    }
}
