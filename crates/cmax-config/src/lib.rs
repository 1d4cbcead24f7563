//! CMAX Configuration Layer
//!
//! Configuration for the CMAX dashboard calculation core: scenario risk
//! thresholds, the probability tolerance used when validating scenario sets,
//! and the fallbacks the pricing oracle applies to unknown bonds.
//!
//! # Example
//!
//! ```rust
//! use cmax_config::{DashboardConfig, Validate};
//!
//! let config = DashboardConfig::from_toml_str(
//!     r#"
//!     probability_tolerance = 0.01
//!
//!     [risk]
//!     high_spread = 50000.0
//!     moderate_spread = 20000.0
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.is_valid());
//! assert_eq!(config.risk.diversify_spread, 30000.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod dashboard;
mod error;
mod risk;

pub use dashboard::DashboardConfig;
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use risk::RiskConfig;
