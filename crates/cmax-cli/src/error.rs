//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed bond identifier.
    #[error("Invalid bond id: {0}")]
    InvalidBondId(String),

    /// Neither a bond nor a rate was given, or both were.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Trade file could not be read or parsed.
    #[error("Cannot read trades from {path}: {reason}")]
    Trades {
        /// File path.
        path: String,
        /// What went wrong.
        reason: String,
    },
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
