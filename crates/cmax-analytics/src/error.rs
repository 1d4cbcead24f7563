//! Error types for projection and scenario analytics.

use thiserror::Error;

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur during analytics calculations.
///
/// All of these are deterministic input-validation failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Principal is zero, negative or not finite.
    #[error("Invalid principal: {value} (must be positive)")]
    InvalidPrincipal {
        /// The rejected principal.
        value: f64,
    },

    /// Horizon is zero, negative or not finite.
    #[error("Invalid horizon: {value} years (must be positive)")]
    InvalidYears {
        /// The rejected horizon.
        value: f64,
    },

    /// A scenario probability lies outside [0, 1].
    #[error("Invalid probability for scenario '{scenario}': {value}")]
    InvalidProbability {
        /// Scenario name.
        scenario: String,
        /// The rejected probability.
        value: f64,
    },

    /// Scenario probabilities do not sum to one.
    #[error("Scenario probabilities sum to {total}, expected 1 (tolerance {tolerance})")]
    InvalidProbabilityTotal {
        /// Actual sum.
        total: f64,
        /// Allowed absolute deviation.
        tolerance: f64,
    },

    /// Final value is zero, negative or not finite, so no annual rate
    /// reaches it.
    #[error("Invalid final value: {value} (must be positive)")]
    InvalidFinalValue {
        /// The rejected final value.
        value: f64,
    },

    /// Scenario set has no scenarios.
    #[error("Scenario set is empty")]
    EmptyScenarioSet,

    /// Both legs of a comparison are the same bond.
    #[error("Cannot compare bond '{bond}' with itself")]
    IdenticalBonds {
        /// The repeated bond.
        bond: String,
    },

    /// A rate is not a finite number.
    #[error("Invalid rate: {value}")]
    InvalidRate {
        /// The rejected rate.
        value: f64,
    },
}

impl AnalyticsError {
    /// Creates an invalid principal error.
    #[must_use]
    pub fn invalid_principal(value: f64) -> Self {
        Self::InvalidPrincipal { value }
    }

    /// Creates an invalid years error.
    #[must_use]
    pub fn invalid_years(value: f64) -> Self {
        Self::InvalidYears { value }
    }
}

/// Checks that a principal is positive and finite.
pub(crate) fn check_principal(principal: f64) -> AnalyticsResult<()> {
    if principal.is_finite() && principal > 0.0 {
        Ok(())
    } else {
        Err(AnalyticsError::invalid_principal(principal))
    }
}

/// Checks that a horizon is positive and finite.
pub(crate) fn check_years(years: f64) -> AnalyticsResult<()> {
    if years.is_finite() && years > 0.0 {
        Ok(())
    } else {
        Err(AnalyticsError::invalid_years(years))
    }
}

/// Checks that a rate is finite.
pub(crate) fn check_rate(rate: f64) -> AnalyticsResult<()> {
    if rate.is_finite() {
        Ok(())
    } else {
        Err(AnalyticsError::InvalidRate { value: rate })
    }
}
