//! Tool definitions, calls and results exchanged with the agent layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A tool a sub-agent exposes, described by a JSON schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique tool name.
    pub name: String,
    /// What the tool does.
    pub description: String,
    /// JSON schema of the arguments object.
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Creates a tool definition.
    pub fn new(name: impl Into<String>, description: impl Into<String>, input_schema: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }

    /// Names of the required arguments, as declared by the schema.
    pub fn required_args(&self) -> Vec<&str> {
        self.input_schema["required"]
            .as_array()
            .map(|args| args.iter().filter_map(|a| a.as_str()).collect())
            .unwrap_or_default()
    }
}

/// A request to run a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Identifier echoed back in the result.
    pub id: String,
    /// Tool name.
    pub name: String,
    /// Arguments object.
    #[serde(default)]
    pub arguments: Value,
}

impl ToolCall {
    /// Creates a call with a fresh ID.
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            id: format!("call-{}", Uuid::new_v4()),
            name: name.into(),
            arguments,
        }
    }

    /// Gets an argument by name.
    pub fn get_arg(&self, key: &str) -> Option<&Value> {
        self.arguments.get(key)
    }

    /// Gets a required string argument.
    pub fn get_string_arg(&self, key: &str) -> Result<&str, String> {
        match self.arguments.get(key) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(format!("argument '{}' must be a string, got {}", key, other)),
            None => Err(format!("missing required argument '{}'", key)),
        }
    }

    /// Gets an optional string argument; `null` counts as absent.
    pub fn get_optional_string_arg(&self, key: &str) -> Result<Option<&str>, String> {
        match self.arguments.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => self.get_string_arg(key).map(Some),
        }
    }
}

/// The outcome of a tool call, as handed back to the agent layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// ID of the call this answers.
    pub tool_call_id: String,
    /// JSON payload or error text.
    pub content: String,
    /// Whether the call failed outright.
    #[serde(default)]
    pub is_error: bool,
}

impl ToolResult {
    /// Creates a successful result.
    pub fn success(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            content: content.into(),
            is_error: false,
        }
    }

    /// Creates a failed result.
    pub fn error(tool_call_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            content: message.into(),
            is_error: true,
        }
    }
}
