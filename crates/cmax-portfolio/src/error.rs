//! Error types for the holdings ledger.
//!
//! Every error is returned before any state is touched; a rejected trade
//! leaves the ledger exactly as it was.

use cmax_core::CoreError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Quantity is zero, negative, fractional or overflows.
    #[error("Invalid quantity {value}: {reason}")]
    InvalidQuantity {
        /// The rejected quantity as given.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Sell of a bond that is not held.
    #[error("No holding for bond '{bond_id}'")]
    NoSuchHolding {
        /// The bond.
        bond_id: String,
    },

    /// Sell of more units than are held.
    #[error("Cannot sell {requested} of '{bond_id}': only {held} held")]
    InsufficientQuantity {
        /// The bond.
        bond_id: String,
        /// Units requested.
        requested: u64,
        /// Units held.
        held: u64,
    },

    /// Execution price is negative.
    #[error("Invalid execution price {price} for '{bond_id}'")]
    InvalidPrice {
        /// The bond.
        bond_id: String,
        /// The rejected price.
        price: Decimal,
    },

    /// Error from the core crate (bond identifiers, prices).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PortfolioError {
    /// Creates an invalid quantity error.
    #[must_use]
    pub fn invalid_quantity(value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidQuantity {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates a no-such-holding error.
    #[must_use]
    pub fn no_such_holding(bond_id: impl Into<String>) -> Self {
        Self::NoSuchHolding {
            bond_id: bond_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PortfolioError::InsufficientQuantity {
            bond_id: "CMAX-2022-001".into(),
            requested: 51,
            held: 50,
        };
        assert_eq!(
            err.to_string(),
            "Cannot sell 51 of 'CMAX-2022-001': only 50 held"
        );

        let err = PortfolioError::invalid_quantity(-3, "must be positive");
        assert_eq!(err.to_string(), "Invalid quantity -3: must be positive");
    }

    #[test]
    fn test_from_core() {
        let core = CoreError::invalid_bond_id("", "must not be empty");
        let err: PortfolioError = core.clone().into();
        assert_eq!(err, PortfolioError::Core(core));
    }
}
