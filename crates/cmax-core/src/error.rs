//! Error types for core CMAX types.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while constructing core types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Bond identifier is empty or malformed.
    #[error("Invalid bond id '{value}': {reason}")]
    InvalidBondId {
        /// The rejected identifier.
        value: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// Price is negative.
    #[error("Invalid price: {value} - {reason}")]
    InvalidPrice {
        /// The invalid price value.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Currency code is not recognised.
    #[error("Unknown currency code: {code}")]
    UnknownCurrency {
        /// The rejected code.
        code: String,
    },

    /// A floating point value cannot be represented as a decimal.
    #[error("Value {value} cannot be represented as a decimal")]
    NotRepresentable {
        /// The offending value.
        value: f64,
    },
}

impl CoreError {
    /// Creates an invalid bond id error.
    #[must_use]
    pub fn invalid_bond_id(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBondId {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidPrice {
            value,
            reason: reason.into(),
        }
    }
}
