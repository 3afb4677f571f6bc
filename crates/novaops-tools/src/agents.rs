//! Agent roles and the sub-agent roster.

use serde::{Deserialize, Serialize};

use crate::definitions::{analyst_tools, dashboard_tools, monitor_tools, voice_tools};
use crate::prompts::{
    ANALYST_SYSTEM_PROMPT, COMMANDER_SYSTEM_PROMPT, DASHBOARD_SYSTEM_PROMPT, MONITOR_SYSTEM_PROMPT,
    VOICE_SYSTEM_PROMPT,
};
use crate::tool::ToolDefinition;

/// Role of an agent in the command center.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    /// Top-level orchestrator.
    Commander,
    /// Health checks and metrics.
    Monitor,
    /// Incident search and analysis.
    Analyst,
    /// Speech in and out.
    Voice,
    /// Dashboard and incident lifecycle.
    Dashboard,
}

impl AgentRole {
    /// All roles, Commander first.
    pub const ALL: [AgentRole; 5] = [
        AgentRole::Commander,
        AgentRole::Monitor,
        AgentRole::Analyst,
        AgentRole::Voice,
        AgentRole::Dashboard,
    ];

    /// Roles that own tools.
    pub const SUB_AGENTS: [AgentRole; 4] = [
        AgentRole::Monitor,
        AgentRole::Analyst,
        AgentRole::Voice,
        AgentRole::Dashboard,
    ];

    /// Human-facing name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Commander => "Commander",
            Self::Monitor => "Monitor",
            Self::Analyst => "Analyst",
            Self::Voice => "Voice",
            Self::Dashboard => "Dashboard",
        }
    }

    /// What the dashboard shows this agent doing when idle.
    pub fn last_action(&self) -> &'static str {
        match self {
            Self::Commander => "orchestrating",
            Self::Monitor => "health_check",
            Self::Analyst => "incident_search",
            Self::Voice => "listening",
            Self::Dashboard => "data_refresh",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            Self::Commander => COMMANDER_SYSTEM_PROMPT,
            Self::Monitor => MONITOR_SYSTEM_PROMPT,
            Self::Analyst => ANALYST_SYSTEM_PROMPT,
            Self::Voice => VOICE_SYSTEM_PROMPT,
            Self::Dashboard => DASHBOARD_SYSTEM_PROMPT,
        }
    }

    /// Tools owned by this role. The Commander delegates and owns none.
    pub fn tools(&self) -> Vec<ToolDefinition> {
        match self {
            Self::Commander => Vec::new(),
            Self::Monitor => monitor_tools(),
            Self::Analyst => analyst_tools(),
            Self::Voice => voice_tools(),
            Self::Dashboard => dashboard_tools(),
        }
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Commander => write!(f, "commander"),
            Self::Monitor => write!(f, "monitor"),
            Self::Analyst => write!(f, "analyst"),
            Self::Voice => write!(f, "voice"),
            Self::Dashboard => write!(f, "dashboard"),
        }
    }
}

/// A named bundle of tools the Commander delegates to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubAgent {
    pub role: AgentRole,
    pub name: String,
    pub system_prompt: String,
    /// Model the agent would run on.
    pub model_id: String,
    pub tools: Vec<ToolDefinition>,
}

impl SubAgent {
    /// Builds the sub-agent for a role.
    pub fn new(role: AgentRole, model_id: impl Into<String>) -> Self {
        Self {
            role,
            name: format!("{} Agent", role.display_name()),
            system_prompt: role.system_prompt().to_string(),
            model_id: model_id.into(),
            tools: role.tools(),
        }
    }

    /// Whether this agent owns the named tool.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name == name)
    }

    /// Names of the owned tools.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }
}

/// All tool-owning sub-agents running on the given model.
pub fn roster(model_id: &str) -> Vec<SubAgent> {
    AgentRole::SUB_AGENTS
        .iter()
        .map(|role| SubAgent::new(*role, model_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_roster_tools() {
        let agents = roster("us.amazon.nova-pro-v1:0");

        assert_eq!(agents.len(), 4);
        assert_eq!(agents[0].tool_names(), vec!["check_health", "get_metrics"]);
        assert_eq!(
            agents[1].tool_names(),
            vec!["search_incidents", "root_cause_analysis", "get_embeddings"]
        );
        assert_eq!(
            agents[2].tool_names(),
            vec!["text_to_speech", "speech_to_text", "voice_alert"]
        );
        assert_eq!(
            agents[3].tool_names(),
            vec!["get_dashboard_data", "create_incident", "update_incident_status"]
        );
    }

    #[test]
    fn test_tool_names_unique() {
        let agents = roster("m");
        let names: Vec<_> = agents.iter().flat_map(|a| a.tool_names()).collect();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_sub_agent_new() {
        let agent = SubAgent::new(AgentRole::Voice, "us.amazon.nova-lite-v1:0");

        assert_eq!(agent.name, "Voice Agent");
        assert_eq!(agent.model_id, "us.amazon.nova-lite-v1:0");
        assert!(agent.system_prompt.contains("Voice Agent"));
        assert!(agent.has_tool("voice_alert"));
        assert!(!agent.has_tool("check_health"));
    }

    #[test]
    fn test_commander_owns_no_tools() {
        assert!(AgentRole::Commander.tools().is_empty());
        assert_eq!(AgentRole::Commander.last_action(), "orchestrating");
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&AgentRole::Analyst).unwrap(), "\"analyst\"");
        assert_eq!(AgentRole::Dashboard.to_string(), "dashboard");
    }
}
