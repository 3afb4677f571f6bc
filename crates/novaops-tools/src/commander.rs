//! The Commander: owns the shared state and routes tool calls to sub-agents.

use novaops_analysis::{root_cause_analysis_with_rng, AnalysisError, EmbeddingGenerator, SimilaritySearch};
use novaops_incidents::IncidentStore;
use rand::Rng;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::agents::{roster, SubAgent};
use crate::dashboard::{create_incident, get_dashboard_data, update_incident_status};
use crate::error::{Result, ToolError};
use crate::infra::{check_health, get_metrics};
use crate::tool::{ToolCall, ToolResult};
use crate::voice::{speech_to_text, text_to_speech, voice_alert};

/// Model used by sub-agents unless configured otherwise.
pub const DEFAULT_MODEL_ID: &str = "us.amazon.nova-pro-v1:0";

/// Top-level orchestrator holding the incident store and analysis engines.
///
/// # Example
///
/// ```
/// use novaops_tools::{Commander, ToolCall};
/// use serde_json::json;
///
/// let commander = Commander::new();
/// let call = ToolCall::new("create_incident", json!({
///     "title": "API latency",
///     "severity": "high",
///     "description": "p99 above 2s",
/// }));
///
/// let payload = commander.execute(&call).unwrap();
/// assert_eq!(payload["status"], "open");
/// assert_eq!(commander.store().len(), 1);
/// ```
#[derive(Debug)]
pub struct Commander {
    store: IncidentStore,
    search: SimilaritySearch,
    embedder: EmbeddingGenerator,
    agents: Vec<SubAgent>,
}

impl Default for Commander {
    fn default() -> Self {
        Self::new()
    }
}

impl Commander {
    /// Creates a Commander with an empty store and the default roster.
    pub fn new() -> Self {
        Self {
            store: IncidentStore::new(),
            search: SimilaritySearch::default(),
            embedder: EmbeddingGenerator::default(),
            agents: roster(DEFAULT_MODEL_ID),
        }
    }

    /// Sets the embedding dimension.
    pub fn with_embedding_dim(mut self, dimension: usize) -> Self {
        self.embedder = EmbeddingGenerator::new(dimension);
        self
    }

    /// Rebuilds the roster on another model.
    pub fn with_model(mut self, model_id: &str) -> Self {
        self.agents = roster(model_id);
        self
    }

    /// Get the incident store.
    pub fn store(&self) -> &IncidentStore {
        &self.store
    }

    /// Get the sub-agents.
    pub fn agents(&self) -> &[SubAgent] {
        &self.agents
    }

    /// Get the similarity search engine.
    pub fn search(&self) -> &SimilaritySearch {
        &self.search
    }

    /// Get the embedding generator.
    pub fn embedder(&self) -> &EmbeddingGenerator {
        &self.embedder
    }

    /// Finds the sub-agent owning a tool.
    pub fn route(&self, tool_name: &str) -> Option<&SubAgent> {
        self.agents.iter().find(|agent| agent.has_tool(tool_name))
    }

    /// Executes a tool call using the thread-local random generator.
    pub fn execute(&self, call: &ToolCall) -> Result<Value> {
        self.execute_with_rng(call, &mut rand::thread_rng())
    }

    /// Executes a tool call, drawing mock randomness from `rng`.
    pub fn execute_with_rng<R: Rng + ?Sized>(&self, call: &ToolCall, rng: &mut R) -> Result<Value> {
        let agent = self
            .route(&call.name)
            .ok_or_else(|| ToolError::NotFound(call.name.clone()))?;

        debug!(tool = %call.name, agent = %agent.role, call_id = %call.id, "Routing tool call");

        let arg = |key: &str| {
            call.get_string_arg(key).map_err(|message| ToolError::InvalidArguments {
                tool_name: call.name.clone(),
                message,
            })
        };
        let optional_arg = |key: &str| {
            call.get_optional_string_arg(key)
                .map_err(|message| ToolError::InvalidArguments {
                    tool_name: call.name.clone(),
                    message,
                })
        };

        match call.name.as_str() {
            "check_health" => to_payload(&check_health(rng, arg("service")?)),
            "get_metrics" => {
                let metric_type = optional_arg("metric_type")?.unwrap_or("cpu");
                to_payload(&get_metrics(rng, arg("service")?, metric_type))
            }
            "search_incidents" => to_payload(&self.search.search_with_rng(arg("query")?, rng)),
            "root_cause_analysis" => {
                let incident_id = arg("incident_id")?;
                match root_cause_analysis_with_rng(incident_id, rng) {
                    Ok(analysis) => to_payload(&analysis),
                    Err(AnalysisError::NotFound(id)) => Ok(json!({
                        "incident_id": id,
                        "status": "not_found",
                        "message": format!("No incident found with ID '{}'.", id),
                    })),
                }
            }
            "get_embeddings" => to_payload(&self.embedder.embed(arg("text")?)),
            "text_to_speech" => to_payload(&text_to_speech(arg("text")?)),
            "speech_to_text" => to_payload(&speech_to_text(rng, arg("audio_ref")?)),
            "voice_alert" => {
                let severity = optional_arg("severity")?.unwrap_or("info");
                to_payload(&voice_alert(rng, arg("message")?, severity))
            }
            "get_dashboard_data" => to_payload(&get_dashboard_data(&self.store, rng)),
            "create_incident" => {
                let incident = create_incident(
                    &self.store,
                    arg("title")?,
                    arg("severity")?,
                    optional_arg("description")?.unwrap_or(""),
                );
                info!(incident_id = %incident.id, agent = %agent.role, "Incident created via tool");
                to_payload(&incident)
            }
            "update_incident_status" => to_payload(&update_incident_status(
                &self.store,
                arg("incident_id")?,
                arg("status")?,
            )),
            other => Err(ToolError::NotFound(other.to_string())),
        }
    }

    /// Executes a tool call and wraps the outcome for the agent layer.
    ///
    /// Never fails: routing and argument errors become `is_error` results.
    pub fn dispatch(&self, call: &ToolCall) -> ToolResult {
        match self.execute(call) {
            Ok(payload) => ToolResult::success(&call.id, payload.to_string()),
            Err(e) => {
                warn!(tool = %call.name, error = %e, "Tool call failed");
                ToolResult::error(&call.id, e.to_string())
            }
        }
    }
}

fn to_payload<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::AgentRole;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn call(name: &str, arguments: Value) -> ToolCall {
        ToolCall::new(name, arguments)
    }

    #[test]
    fn test_route() {
        let commander = Commander::new();

        assert_eq!(commander.route("get_metrics").unwrap().role, AgentRole::Monitor);
        assert_eq!(commander.route("get_embeddings").unwrap().role, AgentRole::Analyst);
        assert_eq!(commander.route("speech_to_text").unwrap().role, AgentRole::Voice);
        assert_eq!(commander.route("create_incident").unwrap().role, AgentRole::Dashboard);
        assert!(commander.route("deploy").is_none());
    }

    #[test]
    fn test_unknown_tool() {
        let commander = Commander::new();
        let err = commander.execute(&call("deploy", json!({}))).unwrap_err();
        assert!(matches!(err, ToolError::NotFound(name) if name == "deploy"));
    }

    #[test]
    fn test_missing_argument() {
        let commander = Commander::new();
        let err = commander.execute(&call("check_health", json!({}))).unwrap_err();

        match err {
            ToolError::InvalidArguments { tool_name, message } => {
                assert_eq!(tool_name, "check_health");
                assert!(message.contains("service"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_mistyped_argument() {
        let commander = Commander::new();
        let err = commander
            .execute(&call("search_incidents", json!({"query": 42})))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { .. }));
    }

    #[test]
    fn test_metrics_default_cpu() {
        let commander = Commander::new();
        let payload = commander
            .execute_with_rng(&call("get_metrics", json!({"service": "api"})), &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(payload["metric_type"], "cpu");
        assert_eq!(payload["unit"], "%");
    }

    #[test]
    fn test_search_tool() {
        let commander = Commander::new();
        let payload = commander
            .execute(&call("search_incidents", json!({"query": "database lag"})))
            .unwrap();

        assert_eq!(payload["query"], "database lag");
        let results = payload["results"].as_array().unwrap();
        assert_eq!(payload["result_count"], results.len());
        assert!(results.len() <= 3);
    }

    #[test]
    fn test_root_cause_not_found_payload() {
        let commander = Commander::new();
        let payload = commander
            .execute(&call("root_cause_analysis", json!({"incident_id": "INC-999"})))
            .unwrap();

        assert_eq!(payload["status"], "not_found");
        assert_eq!(payload["message"], "No incident found with ID 'INC-999'.");
    }

    #[test]
    fn test_embeddings_dimension() {
        let commander = Commander::new().with_embedding_dim(16);
        let payload = commander
            .execute(&call("get_embeddings", json!({"text": "hello"})))
            .unwrap();

        assert_eq!(payload["dimension"], 16);
        assert_eq!(payload["vector"].as_array().unwrap().len(), 16);
    }

    #[test]
    fn test_embeddings_draw_nothing_from_caller_rng() {
        let commander = Commander::new();
        let mut used = StdRng::seed_from_u64(42);
        let mut untouched = StdRng::seed_from_u64(42);

        let payload = commander
            .execute_with_rng(&call("get_embeddings", json!({"text": "hello"})), &mut used)
            .unwrap();

        assert_eq!(payload["vector"].as_array().unwrap().len(), 256);
        assert_eq!(used.gen::<u64>(), untouched.gen::<u64>());
    }

    #[test]
    fn test_seeded_search_advances_caller_rng() {
        let commander = Commander::new();
        let mut used = StdRng::seed_from_u64(42);
        let mut untouched = StdRng::seed_from_u64(42);

        commander
            .execute_with_rng(&call("search_incidents", json!({"query": "redis"})), &mut used)
            .unwrap();

        assert_ne!(used.gen::<u64>(), untouched.gen::<u64>());
    }

    #[test]
    fn test_voice_alert_default_severity() {
        let commander = Commander::new();
        let payload = commander
            .execute(&call("voice_alert", json!({"message": "heads up"})))
            .unwrap();

        assert_eq!(payload["severity"], "info");
        assert_eq!(payload["broadcast_status"], "delivered");
    }

    #[test]
    fn test_dispatch_wraps_errors() {
        let commander = Commander::new();

        let bad = call("nope", json!({}));
        let result = commander.dispatch(&bad);
        assert!(result.is_error);
        assert_eq!(result.tool_call_id, bad.id);
        assert_eq!(result.content, "tool not found: nope");

        let good = call("get_dashboard_data", json!({}));
        let result = commander.dispatch(&good);
        assert!(!result.is_error);
        let payload: Value = serde_json::from_str(&result.content).unwrap();
        assert_eq!(payload["incident_count"], 0);
    }

    #[test]
    fn test_with_model() {
        let commander = Commander::new().with_model("us.amazon.nova-lite-v1:0");
        assert!(commander
            .agents()
            .iter()
            .all(|a| a.model_id == "us.amazon.nova-lite-v1:0"));
    }
}
