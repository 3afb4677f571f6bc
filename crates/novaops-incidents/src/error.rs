//! Error types for incident store operations.

use thiserror::Error;

/// Errors that can occur during incident store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IncidentError {
    /// No incident with this ID.
    #[error("no incident found with ID '{0}'")]
    NotFound(String),

    /// Requested status is not one of the lifecycle values.
    #[error("invalid status '{value}'; must be one of: {allowed}")]
    InvalidStatus {
        /// The rejected input.
        value: String,
        /// Comma-separated accepted values.
        allowed: String,
    },
}

/// Result type alias for incident store operations.
pub type Result<T> = std::result::Result<T, IncidentError>;
