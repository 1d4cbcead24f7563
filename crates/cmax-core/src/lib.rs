//! # CMAX Core
//!
//! Core types and the pricing oracle for the CMAX bond dashboard.
//!
//! This crate provides the foundational building blocks used by the rest of
//! the workspace:
//!
//! - **Types**: [`BondId`], [`BondInfo`], [`Currency`]
//! - **Money**: two-decimal rounding and `Decimal`/`f64` conversion helpers
//! - **Oracle**: the [`PriceOracle`] trait and a curated [`StaticPriceOracle`]
//!
//! ## Example
//!
//! ```rust
//! use cmax_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let oracle = StaticPriceOracle::cmax_catalog();
//! let id = BondId::new("CMAX-2022-001").unwrap();
//! assert_eq!(oracle.price(&id), dec!(975.50));
//!
//! // Unknown bonds resolve to the fallback price and a synthesized name.
//! let unknown = BondId::new("XYZ").unwrap();
//! assert_eq!(oracle.price(&unknown), dec!(950.00));
//! assert_eq!(oracle.name(&unknown), "Bond XYZ");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod money;
pub mod oracle;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use oracle::{BondQuote, PriceOracle, StaticPriceOracle};
pub use types::{BondId, BondInfo, Currency};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::money::{decimal_to_f64, f64_to_decimal, round_money};
    pub use crate::oracle::{BondQuote, PriceOracle, StaticPriceOracle};
    pub use crate::types::{BondId, BondInfo, Currency};
    pub use rust_decimal::Decimal;
}
