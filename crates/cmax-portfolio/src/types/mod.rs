//! Domain types for the holdings ledger.

mod holding;

pub use holding::Holding;
