//! # CMAX Ext JSON
//!
//! Decoding of the dashboard backend's JSON payloads.
//!
//! The backend is an external collaborator with a fixed contract. This crate
//! only reads its bodies: it turns them into typed payloads, extracts
//! [`QuoteUpdate`]s for the pricing oracle and gates late responses with a
//! [`ResponseGate`].
//!
//! ```rust
//! use cmax_core::{BondId, PriceOracle, StaticPriceOracle};
//! use cmax_ext_json::{decode_realtime_response, ApplyQuote, QuoteUpdate};
//! use rust_decimal_macros::dec;
//!
//! let body = br#"{
//!     "bond_info": {
//!         "name": "Bono CMAX Verde 2022", "isin": "XS2337285866",
//!         "coupon_rate": 3.8, "face_value": 1000, "currency": "MXN",
//!         "emission_date": "2020-06-01", "maturity_date": "2027-06-01"
//!     },
//!     "realtime_data": {
//!         "current_price": 963.5, "change": 0.75, "change_percent": 0.08,
//!         "timestamp": "2022-11-16 10:00:00",
//!         "history_24h": {"hours": ["09:00", "10:00"], "prices": [962.75, 963.5]}
//!     }
//! }"#;
//!
//! let id = BondId::new("CMAX-2022-002").unwrap();
//! let response = decode_realtime_response(body).unwrap();
//! let update = QuoteUpdate::from_realtime_response(id.clone(), &response);
//!
//! let mut oracle = StaticPriceOracle::cmax_catalog();
//! oracle.apply_quote(&update).unwrap();
//! assert_eq!(oracle.price(&id), dec!(963.50));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod decode;
mod error;
mod gate;
mod payload;
mod period;
mod quote;

pub use decode::{decode_bond_response, decode_realtime_response};
pub use error::{DecodeError, DecodeResult};
pub use gate::{ResponseGate, Ticket};
pub use payload::{
    BondResponse, HourlyHistory, PriceHistory, RealtimeData, RealtimeResponse, Recommendation,
    RecommendationMetrics, TIMESTAMP_FORMAT,
};
pub use period::Period;
pub use quote::{ApplyQuote, QuoteUpdate};
