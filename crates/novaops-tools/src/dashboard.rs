//! Dashboard tools - aggregated dashboard state and incident lifecycle.

use chrono::{DateTime, Utc};
use novaops_incidents::{IncidentError, IncidentStore};
use novaops_models::{Incident, IncidentStatus};
use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::agents::AgentRole;
use crate::infra::{pick, ServiceStatus};

use ServiceStatus::{Degraded, Healthy, Unhealthy};

/// Dashboard services with their status weights and nominal uptime.
const SERVICES: [(&str, [ServiceStatus; 3], &str); 4] = [
    ("api", [Healthy, Healthy, Degraded], "99.95%"),
    ("database", [Healthy, Healthy, Healthy], "99.99%"),
    ("cache", [Healthy, Healthy, Degraded], "99.90%"),
    ("queue", [Healthy, Degraded, Unhealthy], "99.80%"),
];

/// One service tile on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceSummary {
    pub name: &'static str,
    pub status: ServiceStatus,
    pub uptime: &'static str,
}

/// What a sub-agent is doing.
#[derive(Debug, Clone, Serialize)]
pub struct AgentActivity {
    pub name: &'static str,
    pub status: &'static str,
    pub last_action: &'static str,
}

/// Overall health roll-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemHealth {
    Operational,
    Degraded,
}

impl SystemHealth {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemHealth::Operational => "operational",
            SystemHealth::Degraded => "degraded",
        }
    }

    /// Operational only when every service is healthy.
    pub fn from_services(services: &[ServiceSummary]) -> Self {
        if services.iter().all(|s| s.status == Healthy) {
            SystemHealth::Operational
        } else {
            SystemHealth::Degraded
        }
    }
}

/// Full dashboard state.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub services: Vec<ServiceSummary>,
    /// Snapshot of the store at the time of the call.
    pub active_incidents: Vec<Incident>,
    pub incident_count: usize,
    pub agents: Vec<AgentActivity>,
    pub system_health: SystemHealth,
    pub timestamp: DateTime<Utc>,
}

/// Aggregates service health, incidents and agent activity.
pub fn get_dashboard_data<R: Rng + ?Sized>(store: &IncidentStore, rng: &mut R) -> DashboardSnapshot {
    let services: Vec<ServiceSummary> = SERVICES
        .iter()
        .map(|(name, weights, uptime)| ServiceSummary {
            name: *name,
            status: pick(rng, weights),
            uptime: *uptime,
        })
        .collect();

    let agents = AgentRole::ALL
        .iter()
        .map(|role| AgentActivity {
            name: role.display_name(),
            status: "active",
            last_action: role.last_action(),
        })
        .collect();

    let active_incidents = store.list_all();

    DashboardSnapshot {
        system_health: SystemHealth::from_services(&services),
        incident_count: active_incidents.len(),
        active_incidents,
        services,
        agents,
        timestamp: Utc::now(),
    }
}

/// Creates an incident; unknown severities become medium.
pub fn create_incident(store: &IncidentStore, title: &str, severity: &str, description: &str) -> Incident {
    store.create(title, severity, description)
}

/// Outcome of a status update, shaped for the agent layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatusUpdate {
    Updated {
        incident_id: String,
        status: IncidentStatus,
        message: String,
        updated_at: DateTime<Utc>,
    },
    Invalid {
        incident_id: String,
        error: String,
    },
    NotFound {
        incident_id: String,
        /// Always `"not_found"`.
        status: &'static str,
        message: String,
    },
}

impl StatusUpdate {
    /// Whether the incident was actually changed.
    pub fn is_updated(&self) -> bool {
        matches!(self, StatusUpdate::Updated { .. })
    }
}

/// Moves an incident to a new status, reporting failures as payloads.
pub fn update_incident_status(store: &IncidentStore, incident_id: &str, status: &str) -> StatusUpdate {
    match store.update_status(incident_id, status) {
        Ok(incident) => StatusUpdate::Updated {
            incident_id: incident_id.to_string(),
            status: incident.status,
            message: format!("Incident {} updated to '{}'.", incident_id, incident.status),
            updated_at: incident.updated_at,
        },
        Err(err @ IncidentError::InvalidStatus { .. }) => StatusUpdate::Invalid {
            incident_id: incident_id.to_string(),
            error: err.to_string(),
        },
        Err(IncidentError::NotFound(_)) => {
            info!(incident_id = %incident_id, "Status update for unknown incident");
            StatusUpdate::NotFound {
                incident_id: incident_id.to_string(),
                status: "not_found",
                message: format!("No incident found with ID '{}'.", incident_id),
            }
        }
    }
}
