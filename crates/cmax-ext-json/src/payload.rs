//! Backend response shapes.
//!
//! Only the fields the dashboard core consumes are required. The
//! recommendation block is optional and passed through untouched.

use chrono::NaiveDateTime;
use cmax_core::BondInfo;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::Period;

/// Timestamp format of realtime payloads.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Body of `GET /api/bond/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondResponse {
    /// Reference data of the issue.
    pub bond_info: BondInfo,
    /// Price history.
    pub history: PriceHistory,
    /// Backend recommendation, when present.
    #[serde(default)]
    pub recommendation: Option<Recommendation>,
}

/// Price history over a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    /// Point labels; the backend sends them as `labels`.
    #[serde(alias = "labels")]
    pub dates: Vec<String>,
    /// Prices, one per label.
    pub prices: Vec<Decimal>,
    /// Latest price.
    pub current_price: Decimal,
    /// Window actually served.
    #[serde(default)]
    pub period: Option<Period>,
}

impl PriceHistory {
    /// Label and price pairs. Extra entries on either side are ignored.
    pub fn points(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        self.dates
            .iter()
            .map(String::as_str)
            .zip(self.prices.iter().copied())
    }
}

/// Body of `GET /api/realtime/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealtimeResponse {
    /// Reference data of the issue.
    pub bond_info: BondInfo,
    /// Live quote and intraday history.
    pub realtime_data: RealtimeData,
    /// Backend recommendation, when present.
    #[serde(default)]
    pub recommendation: Option<Recommendation>,
}

/// Live quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealtimeData {
    /// Current price.
    pub current_price: Decimal,
    /// Change from the first point of the window.
    pub change: f64,
    /// Change in percent.
    pub change_percent: f64,
    /// Quote time as `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    /// History of the requested window.
    pub history_24h: HourlyHistory,
}

impl RealtimeData {
    /// Parsed quote time.
    #[must_use]
    pub fn quoted_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }
}

/// Intraday history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyHistory {
    /// Point labels.
    pub hours: Vec<String>,
    /// Prices, one per label.
    pub prices: Vec<Decimal>,
}

/// Backend recommendation. Carried, never computed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Action label.
    pub recommendation: String,
    /// Explanation.
    pub reason: String,
    /// Supporting metrics.
    pub metrics: RecommendationMetrics,
}

/// Metrics behind a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationMetrics {
    /// Current yield in percent.
    pub current_yield: f64,
    /// Approximate yield to maturity in percent.
    pub ytm: f64,
    /// Years to maturity.
    pub years_to_maturity: f64,
    /// Premium or discount to face in percent.
    pub premium_discount: f64,
}
