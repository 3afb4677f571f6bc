//! Error types for tool execution.

use thiserror::Error;

/// Errors that can occur while routing or executing a tool call.
#[derive(Error, Debug)]
pub enum ToolError {
    /// No sub-agent owns a tool with this name.
    #[error("tool not found: {0}")]
    NotFound(String),

    /// Invalid tool arguments.
    #[error("invalid tool arguments for {tool_name}: {message}")]
    InvalidArguments {
        /// Name of the tool.
        tool_name: String,
        /// Error message.
        message: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for tool operations.
pub type Result<T> = std::result::Result<T, ToolError>;
