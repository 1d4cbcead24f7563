//! Decoding errors.

use cmax_core::CoreError;
use thiserror::Error;

/// Result type for decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors raised while decoding backend payloads.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Body is not valid JSON or does not match the expected shape.
    #[error("Malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend answered with an `{"error": ...}` body.
    #[error("Backend error: {message}")]
    Backend {
        /// The backend's message.
        message: String,
    },

    /// Decoded values were rejected by the core types.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl DecodeError {
    /// Creates a backend error.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Returns true if the backend reported the error.
    #[must_use]
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend { .. })
    }
}
