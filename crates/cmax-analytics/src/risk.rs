//! Risk spread classification.

use std::fmt;

use cmax_config::RiskConfig;
use serde::{Deserialize, Serialize};

/// Risk tier of a scenario simulation, from the spread between the best
/// and worst final values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    /// Scenarios tightly grouped.
    Low,
    /// Acceptable dispersion.
    Moderate,
    /// Wide dispersion between scenarios.
    High,
}

impl RiskTier {
    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low risk",
            Self::Moderate => "Moderate risk",
            Self::High => "High risk",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Annotation attached to a simulation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskNote {
    /// The pessimistic scenario is more likely than the alert level.
    HighPessimisticProbability,
    /// The base scenario returns more than the attractive level.
    AttractiveBaseReturn,
    /// Spread is wide enough to suggest diversifying.
    Diversify,
    /// Spread is narrow; a stable investment.
    Stable,
}

impl RiskNote {
    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::HighPessimisticProbability => "High probability of the pessimistic scenario",
            Self::AttractiveBaseReturn => "Attractive base-case return",
            Self::Diversify => "Recommendation: diversify",
            Self::Stable => "Recommendation: stable investment",
        }
    }
}

impl fmt::Display for RiskNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Spread between the best and worst final values.
#[must_use]
pub fn risk_spread(best: f64, worst: f64) -> f64 {
    best - worst
}

/// Classifies a spread against the configured thresholds.
///
/// Both comparisons are strict: a spread exactly at the high threshold is
/// moderate.
#[must_use]
pub fn classify(spread: f64, config: &RiskConfig) -> RiskTier {
    if spread > config.high_spread {
        RiskTier::High
    } else if spread > config.moderate_spread {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = RiskConfig::default();
        assert_eq!(classify(60_000.0, &config), RiskTier::High);
        assert_eq!(classify(50_000.0, &config), RiskTier::Moderate);
        assert_eq!(classify(20_000.01, &config), RiskTier::Moderate);
        assert_eq!(classify(20_000.0, &config), RiskTier::Low);
        assert_eq!(classify(0.0, &config), RiskTier::Low);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = RiskConfig::default().with_spread_thresholds(1_000.0, 500.0);
        assert_eq!(classify(14_877.28, &config), RiskTier::High);
        assert_eq!(classify(750.0, &config), RiskTier::Moderate);
    }

    #[test]
    fn test_spread() {
        assert_eq!(risk_spread(85_407.22, 70_529.94), 85_407.22 - 70_529.94);
        assert!(RiskTier::High > RiskTier::Low);
        assert_eq!(RiskTier::Moderate.to_string(), "Moderate risk");
    }
}
