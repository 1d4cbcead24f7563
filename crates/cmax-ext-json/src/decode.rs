//! Decoding of raw response bodies.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{DecodeError, DecodeResult};
use crate::payload::{BondResponse, RealtimeResponse};

/// Decodes a `GET /api/bond/{id}` body.
///
/// # Errors
///
/// `Backend` for an `{"error": ...}` body, `Json` for anything malformed.
pub fn decode_bond_response(body: &[u8]) -> DecodeResult<BondResponse> {
    decode(body)
}

/// Decodes a `GET /api/realtime/{id}` body.
///
/// # Errors
///
/// `Backend` for an `{"error": ...}` body, `Json` for anything malformed.
pub fn decode_realtime_response(body: &[u8]) -> DecodeResult<RealtimeResponse> {
    decode(body)
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> DecodeResult<T> {
    let value: Value = serde_json::from_slice(body)?;
    if let Some(message) = value.get("error") {
        let message = message
            .as_str()
            .map_or_else(|| message.to_string(), str::to_string);
        return Err(DecodeError::backend(message));
    }
    Ok(serde_json::from_value(value)?)
}
