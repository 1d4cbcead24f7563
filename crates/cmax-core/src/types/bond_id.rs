//! Bond identifier newtype.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Identifier of a bond issue, unique within a ledger.
///
/// Surrounding whitespace is trimmed; empty identifiers and identifiers
/// containing inner whitespace are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BondId(String);

impl BondId {
    /// Creates a validated bond identifier.
    pub fn new(value: impl Into<String>) -> CoreResult<Self> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::invalid_bond_id(raw, "must not be empty"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(CoreError::invalid_bond_id(raw, "must not contain whitespace"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BondId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BondId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BondId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BondId> for String {
    fn from(id: BondId) -> Self {
        id.0
    }
}

impl AsRef<str> for BondId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
