//! Risk classification settings for the scenario simulator.

use serde::{Deserialize, Serialize};

use crate::error::{Validate, ValidationError};

/// Thresholds used to classify and annotate scenario simulations.
///
/// Spread thresholds are absolute currency amounts on the scale of the
/// simulated principal; they do not rescale with the principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Spread above which a simulation is high risk.
    #[serde(default = "default_high_spread")]
    pub high_spread: f64,

    /// Spread above which a simulation is moderate risk.
    #[serde(default = "default_moderate_spread")]
    pub moderate_spread: f64,

    /// Spread above which diversification is suggested.
    #[serde(default = "default_diversify_spread")]
    pub diversify_spread: f64,

    /// Pessimistic-scenario probability (0-1) above which a warning is raised.
    #[serde(default = "default_pessimistic_alert")]
    pub pessimistic_alert_probability: f64,

    /// Base-scenario annualized return (percent) considered attractive.
    #[serde(default = "default_attractive_return")]
    pub attractive_base_return_pct: f64,
}

fn default_high_spread() -> f64 {
    50_000.0
}

fn default_moderate_spread() -> f64 {
    20_000.0
}

fn default_diversify_spread() -> f64 {
    30_000.0
}

fn default_pessimistic_alert() -> f64 {
    0.30
}

fn default_attractive_return() -> f64 {
    6.0
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            high_spread: default_high_spread(),
            moderate_spread: default_moderate_spread(),
            diversify_spread: default_diversify_spread(),
            pessimistic_alert_probability: default_pessimistic_alert(),
            attractive_base_return_pct: default_attractive_return(),
        }
    }
}

impl RiskConfig {
    /// Creates the default risk configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the high and moderate spread thresholds.
    #[must_use]
    pub fn with_spread_thresholds(mut self, high: f64, moderate: f64) -> Self {
        self.high_spread = high;
        self.moderate_spread = moderate;
        self
    }

    /// Sets the diversification threshold.
    #[must_use]
    pub fn with_diversify_spread(mut self, spread: f64) -> Self {
        self.diversify_spread = spread;
        self
    }

    /// Sets the pessimistic probability alert level.
    #[must_use]
    pub fn with_pessimistic_alert(mut self, probability: f64) -> Self {
        self.pessimistic_alert_probability = probability;
        self
    }

    /// Sets the attractive base return level.
    #[must_use]
    pub fn with_attractive_return(mut self, pct: f64) -> Self {
        self.attractive_base_return_pct = pct;
        self
    }
}

impl Validate for RiskConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("risk.high_spread", self.high_spread),
            ("risk.moderate_spread", self.moderate_spread),
            ("risk.diversify_spread", self.diversify_spread),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(ValidationError::with_rule(
                    field,
                    format!("Spread threshold {value} must be a non-negative number"),
                    "non_negative",
                ));
            }
        }

        if self.moderate_spread > self.high_spread {
            errors.push(ValidationError::with_rule(
                "risk.moderate_spread",
                format!(
                    "Moderate threshold {} exceeds high threshold {}",
                    self.moderate_spread, self.high_spread
                ),
                "ordered_thresholds",
            ));
        }

        if !(0.0..=1.0).contains(&self.pessimistic_alert_probability) {
            errors.push(ValidationError::with_rule(
                "risk.pessimistic_alert_probability",
                "Probability must be between 0 and 1",
                "probability_range",
            ));
        }

        if !self.attractive_base_return_pct.is_finite() {
            errors.push(ValidationError::new(
                "risk.attractive_base_return_pct",
                "Return must be a finite number",
            ));
        }

        errors
    }
}
