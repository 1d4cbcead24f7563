//! Top-level dashboard configuration.

use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::risk::RiskConfig;

/// Largest accepted probability tolerance.
const MAX_PROBABILITY_TOLERANCE: f64 = 0.5;

/// Configuration for the dashboard calculation core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Absolute tolerance on the sum of scenario probabilities (0.01 = 1 point).
    #[serde(default = "default_probability_tolerance")]
    pub probability_tolerance: f64,

    /// Price assumed for bonds the oracle does not know.
    #[serde(default = "default_fallback_price")]
    pub fallback_price: Decimal,

    /// Coupon rate (percent) assumed for bonds without a curated rate.
    #[serde(default = "default_fallback_coupon_rate")]
    pub fallback_coupon_rate: f64,

    /// Risk classification settings.
    #[serde(default)]
    pub risk: RiskConfig,
}

fn default_probability_tolerance() -> f64 {
    0.01
}

fn default_fallback_price() -> Decimal {
    dec!(950.00)
}

fn default_fallback_coupon_rate() -> f64 {
    4.0
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            probability_tolerance: default_probability_tolerance(),
            fallback_price: default_fallback_price(),
            fallback_coupon_rate: default_fallback_coupon_rate(),
            risk: RiskConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the risk configuration.
    #[must_use]
    pub fn with_risk(mut self, risk: RiskConfig) -> Self {
        self.risk = risk;
        self
    }

    /// Sets the probability tolerance.
    #[must_use]
    pub fn with_probability_tolerance(mut self, tolerance: f64) -> Self {
        self.probability_tolerance = tolerance;
        self
    }

    /// Sets the fallback price.
    #[must_use]
    pub fn with_fallback_price(mut self, price: Decimal) -> Self {
        self.fallback_price = price;
        self
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads a configuration file.
    ///
    /// Files ending in `.json` are read as JSON, everything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Serializes to a TOML document.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Validate for DashboardConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = self.risk.validate();

        if !(0.0..=MAX_PROBABILITY_TOLERANCE).contains(&self.probability_tolerance) {
            errors.push(ValidationError::with_rule(
                "probability_tolerance",
                format!(
                    "Tolerance {} must be between 0 and {}",
                    self.probability_tolerance, MAX_PROBABILITY_TOLERANCE
                ),
                "valid_tolerance",
            ));
        }

        if self.fallback_price < Decimal::ZERO {
            errors.push(ValidationError::with_rule(
                "fallback_price",
                "Fallback price cannot be negative",
                "non_negative",
            ));
        }

        if !self.fallback_coupon_rate.is_finite() || self.fallback_coupon_rate < 0.0 {
            errors.push(ValidationError::with_rule(
                "fallback_coupon_rate",
                "Fallback coupon rate must be a non-negative number",
                "non_negative",
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = DashboardConfig::default();
        assert_eq!(config.probability_tolerance, 0.01);
        assert_eq!(config.fallback_price, dec!(950.00));
        assert_eq!(config.fallback_coupon_rate, 4.0);
        assert!(config.is_valid());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = DashboardConfig::from_toml_str(
            r#"
            probability_tolerance = 0.005

            [risk]
            high_spread = 80000.0
            "#,
        )
        .unwrap();

        assert_eq!(config.probability_tolerance, 0.005);
        assert_eq!(config.risk.high_spread, 80_000.0);
        assert_eq!(config.risk.moderate_spread, 20_000.0);
        assert_eq!(config.fallback_price, dec!(950.00));
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        let result = DashboardConfig::from_toml_str("probability_tolerance = 0.9");
        assert!(matches!(result, Err(ConfigError::Validation { field, .. }) if field == "probability_tolerance"));
    }

    #[test]
    fn test_json() {
        let config = DashboardConfig::from_json_str(r#"{"fallback_price": 1000.0}"#).unwrap();
        assert_eq!(config.fallback_price, dec!(1000));

        assert!(matches!(
            DashboardConfig::from_json_str("{not json"),
            Err(ConfigError::Deserialization(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DashboardConfig::new().with_probability_tolerance(0.02);
        let text = config.to_toml_string().unwrap();
        let parsed = DashboardConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
