//! Sub-agent tools and tool routing for NovaOps.
//!
//! The Commander delegates operator requests to four sub-agents, each owning
//! a handful of tools:
//!
//! - **Monitor**: `check_health`, `get_metrics`
//! - **Analyst**: `search_incidents`, `root_cause_analysis`, `get_embeddings`
//! - **Voice**: `text_to_speech`, `speech_to_text`, `voice_alert`
//! - **Dashboard**: `get_dashboard_data`, `create_incident`, `update_incident_status`
//!
//! Infrastructure and voice tools are mocks: they draw their values from a
//! random generator instead of talking to real services.
//!
//! # Core Types
//!
//! - [`Commander`]: owns the incident store and routes [`ToolCall`]s
//! - [`SubAgent`]: a role with its system prompt and tool list
//! - [`ToolDefinition`]: JSON-schema description of a tool
//! - [`ToolResult`]: serialized outcome handed back to the agent layer
//!
//! # Example
//!
//! ```
//! use novaops_tools::{Commander, ToolCall};
//! use serde_json::json;
//!
//! let commander = Commander::new();
//! let result = commander.dispatch(&ToolCall::new("check_health", json!({"service": "api"})));
//!
//! assert!(!result.is_error);
//! assert!(result.content.contains("\"service\":\"api\""));
//! ```

pub mod agents;
pub mod commander;
pub mod dashboard;
pub mod definitions;
pub mod error;
pub mod infra;
pub mod prompts;
pub mod tool;
pub mod voice;

pub use agents::{roster, AgentRole, SubAgent};
pub use commander::{Commander, DEFAULT_MODEL_ID};
pub use dashboard::{
    create_incident, get_dashboard_data, update_incident_status, DashboardSnapshot, StatusUpdate,
    SystemHealth,
};
pub use error::{Result, ToolError};
pub use infra::{check_health, get_metrics, HealthReport, MetricReport, ServiceStatus, DEFAULT_SERVICES};
pub use tool::{ToolCall, ToolDefinition, ToolResult};
pub use voice::{speech_to_text, text_to_speech, voice_alert, AlertSeverity, VoiceAlert};
