//! # CMAX Portfolio
//!
//! Bond holdings ledger for the CMAX dashboard.
//!
//! ## Design
//!
//! - **Derived fields are never stored independently**: a [`Holding`]
//!   re-derives value, cost, gain and yield whenever it is built
//! - **Pure recomputation**: [`recompute_portfolio`] reprices holdings from
//!   an oracle and re-sums totals without side effects
//! - **Atomic trades**: the [`Ledger`] validates, recomputes on a copy and
//!   swaps the result in; a rejected trade changes nothing
//! - **Message passing**: presentation layers subscribe to
//!   [`LedgerEvent`]s instead of polling
//!
//! ## Quick Start
//!
//! ```rust
//! use cmax_core::{BondId, StaticPriceOracle};
//! use cmax_portfolio::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let mut ledger = Ledger::with_demo_holdings(StaticPriceOracle::cmax_catalog()).unwrap();
//! let corp = BondId::new("CMAX-2022-001").unwrap();
//!
//! ledger.buy(&corp, 10).unwrap();
//! assert_eq!(ledger.holding(&corp).unwrap().avg_cost(), dec!(954.25));
//!
//! let err = ledger.sell(&corp, 61).unwrap_err();
//! assert!(matches!(err, PortfolioError::InsufficientQuantity { held: 60, .. }));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod events;
pub mod ledger;
pub mod summary;
pub mod types;
pub mod valuation;

pub use error::{PortfolioError, PortfolioResult};
pub use events::LedgerEvent;
pub use ledger::{parse_quantity, validate_quantity, weighted_average_cost, Ledger};
pub use summary::{Allocation, PortfolioSummary};
pub use types::Holding;
pub use valuation::{recompute_portfolio, value_holding, PortfolioSnapshot, Valuation};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::events::LedgerEvent;
    pub use crate::ledger::Ledger;
    pub use crate::summary::PortfolioSummary;
    pub use crate::types::Holding;
    pub use crate::valuation::{recompute_portfolio, value_holding, PortfolioSnapshot};
}
