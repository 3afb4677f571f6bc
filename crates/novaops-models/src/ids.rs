//! Type-safe identifier wrapper for incidents.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Number of hex digits taken from a v4 UUID when generating an ID.
const ID_HEX_LEN: usize = 6;

/// Identifier of a user-created incident, e.g. `INC-3FA9C1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentId(String);

impl IncidentId {
    /// Creates a new random ID.
    pub fn new() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(format!("INC-{}", hex[..ID_HEX_LEN].to_uppercase()))
    }

    /// Creates an ID from an existing string (for lookups and testing).
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for IncidentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for IncidentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for IncidentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for IncidentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
