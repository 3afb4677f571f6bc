//! Incident records and their lifecycle.
//!
//! Incidents are created with a severity and move through a fixed set of
//! statuses. They are never deleted; only their status changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::IncidentId;

/// Severity of an incident.
///
/// Ordering: Critical > High > Medium > Low
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Minor impact.
    Low,
    /// Noticeable impact.
    #[default]
    Medium,
    /// Major impact on a service.
    High,
    /// Outage or data risk - requires immediate attention.
    Critical,
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_value().cmp(&other.as_value())
    }
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    /// Returns numeric value for severity comparison.
    fn as_value(&self) -> u8 {
        match self {
            Severity::Low => 0,
            Severity::Medium => 1,
            Severity::High => 2,
            Severity::Critical => 3,
        }
    }

    /// Returns the wire name of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Parses an exact severity name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sev| sev.as_str() == s)
    }

    /// Parses a severity name, falling back to `Medium` for anything unrecognized.
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle stage of an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    /// Newly reported.
    #[default]
    Open,
    /// Someone is looking into it.
    Investigating,
    /// Impact has been contained.
    Mitigated,
    /// Root cause fixed.
    Resolved,
    /// Follow-up complete.
    Closed,
}

impl IncidentStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [IncidentStatus; 5] = [
        IncidentStatus::Open,
        IncidentStatus::Investigating,
        IncidentStatus::Mitigated,
        IncidentStatus::Resolved,
        IncidentStatus::Closed,
    ];

    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Mitigated => "mitigated",
            IncidentStatus::Resolved => "resolved",
            IncidentStatus::Closed => "closed",
        }
    }

    /// Parses an exact status name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Comma-separated list of accepted status names.
    pub fn allowed() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-created incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// Unique identifier for the incident.
    #[serde(rename = "incident_id")]
    pub id: IncidentId,

    /// Short title.
    pub title: String,

    /// Severity level.
    pub severity: Severity,

    /// Detailed description.
    pub description: String,

    /// Current lifecycle status.
    pub status: IncidentStatus,

    /// Responder the incident is assigned to.
    pub assigned_to: Option<String>,

    /// When the incident was created.
    pub created_at: DateTime<Utc>,

    /// When the status last changed.
    pub updated_at: DateTime<Utc>,
}

impl Incident {
    /// Creates a new open incident with a fresh ID.
    pub fn new(title: impl Into<String>, severity: Severity, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: IncidentId::new(),
            title: title.into(),
            severity,
            description: description.into(),
            status: IncidentStatus::Open,
            assigned_to: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves the incident to a new status and refreshes `updated_at`.
    pub fn set_status(&mut self, status: IncidentStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Returns true once the incident no longer needs attention.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            IncidentStatus::Resolved | IncidentStatus::Closed
        )
    }
}
