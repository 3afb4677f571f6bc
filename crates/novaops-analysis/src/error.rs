//! Error types for analysis operations.

use thiserror::Error;

/// Errors that can occur during analysis operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// No catalog incident with this ID.
    #[error("no incident found with ID '{0}'")]
    NotFound(String),
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
