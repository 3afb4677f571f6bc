//! Tool definitions for each sub-agent.

use serde_json::json;

use crate::tool::ToolDefinition;

/// Tools for the Monitor sub-agent.
pub fn monitor_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "check_health",
            "Check the health status of an infrastructure service",
            json!({
                "type": "object",
                "properties": {
                    "service": {
                        "type": "string",
                        "description": "Name of the service to check (e.g. api, database, cache, queue)"
                    }
                },
                "required": ["service"]
            }),
        ),
        ToolDefinition::new(
            "get_metrics",
            "Get a performance metric for a service",
            json!({
                "type": "object",
                "properties": {
                    "service": {
                        "type": "string",
                        "description": "Name of the service"
                    },
                    "metric_type": {
                        "type": "string",
                        "enum": ["cpu", "memory", "latency", "throughput"],
                        "description": "Metric to sample (defaults to cpu)"
                    }
                },
                "required": ["service"]
            }),
        ),
    ]
}

/// Tools for the Analyst sub-agent.
pub fn analyst_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "search_incidents",
            "Search historical incidents similar to a query",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Natural language description of the problem"
                    }
                },
                "required": ["query"]
            }),
        ),
        ToolDefinition::new(
            "root_cause_analysis",
            "Run root cause analysis on a historical incident",
            json!({
                "type": "object",
                "properties": {
                    "incident_id": {
                        "type": "string",
                        "description": "Catalog incident ID (e.g. INC-001)"
                    }
                },
                "required": ["incident_id"]
            }),
        ),
        ToolDefinition::new(
            "get_embeddings",
            "Generate a vector embedding for a piece of text",
            json!({
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "description": "Text to embed"
                    }
                },
                "required": ["text"]
            }),
        ),
    ]
}

/// Tools for the Voice sub-agent.
pub fn voice_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "text_to_speech",
            "Convert text to speech audio",
            json!({
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "description": "Text to synthesize"
                    }
                },
                "required": ["text"]
            }),
        ),
        ToolDefinition::new(
            "speech_to_text",
            "Transcribe recorded audio to text",
            json!({
                "type": "object",
                "properties": {
                    "audio_ref": {
                        "type": "string",
                        "description": "Reference to the recorded audio"
                    }
                },
                "required": ["audio_ref"]
            }),
        ),
        ToolDefinition::new(
            "voice_alert",
            "Broadcast a voice alert to the operations team",
            json!({
                "type": "object",
                "properties": {
                    "message": {
                        "type": "string",
                        "description": "Alert message"
                    },
                    "severity": {
                        "type": "string",
                        "enum": ["info", "warning", "critical"],
                        "description": "Alert severity (defaults to info)"
                    }
                },
                "required": ["message"]
            }),
        ),
    ]
}

/// Tools for the Dashboard sub-agent.
pub fn dashboard_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "get_dashboard_data",
            "Get service statuses, active incidents and agent activity",
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        ),
        ToolDefinition::new(
            "create_incident",
            "Create a new incident",
            json!({
                "type": "object",
                "properties": {
                    "title": {
                        "type": "string",
                        "description": "Short incident title"
                    },
                    "severity": {
                        "type": "string",
                        "enum": ["low", "medium", "high", "critical"],
                        "description": "Incident severity"
                    },
                    "description": {
                        "type": "string",
                        "description": "Detailed description"
                    }
                },
                "required": ["title", "severity", "description"]
            }),
        ),
        ToolDefinition::new(
            "update_incident_status",
            "Move an incident to a new lifecycle status",
            json!({
                "type": "object",
                "properties": {
                    "incident_id": {
                        "type": "string",
                        "description": "Incident ID to update"
                    },
                    "status": {
                        "type": "string",
                        "enum": ["open", "investigating", "mitigated", "resolved", "closed"],
                        "description": "New status"
                    }
                },
                "required": ["incident_id", "status"]
            }),
        ),
    ]
}
