//! History window selector.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Price history window, sent as the `period` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Period {
    /// Last 24 hours, hourly points.
    #[default]
    Day,
    /// Last 7 days, daily points.
    Week,
    /// Last month, a point every two days.
    Month,
}

impl Period {
    /// Query parameter value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "24h",
            Self::Week => "7d",
            Self::Month => "1m",
        }
    }

    /// Parses a query parameter; anything unrecognised is the 24h window.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim() {
            "7d" => Self::Week,
            "1m" => Self::Month,
            _ => Self::Day,
        }
    }

    /// Number of history points the backend returns for this window.
    #[must_use]
    pub fn points(&self) -> usize {
        match self {
            Self::Day => 24,
            Self::Week => 7,
            Self::Month => 15,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Period {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl From<Period> for String {
    fn from(value: Period) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Period::parse_lenient("24h"), Period::Day);
        assert_eq!(Period::parse_lenient("7d"), Period::Week);
        assert_eq!(Period::parse_lenient("1m"), Period::Month);
        assert_eq!(Period::parse_lenient("1y"), Period::Day);
        assert_eq!(Period::parse_lenient(""), Period::Day);
    }

    #[test]
    fn test_serde() {
        let p: Period = serde_json::from_str("\"7d\"").unwrap();
        assert_eq!(p, Period::Week);
        let p: Period = serde_json::from_str("\"3y\"").unwrap();
        assert_eq!(p, Period::Day);
        assert_eq!(serde_json::to_string(&Period::Month).unwrap(), "\"1m\"");
    }

    #[test]
    fn test_points() {
        assert_eq!(Period::Day.points(), 24);
        assert_eq!(Period::Month.points(), 15);
        assert_eq!(Period::Week.to_string(), "7d");
    }
}
