//! Read-only catalog of historical incidents.
//!
//! Seed data for similarity search and root-cause analysis. The catalog is a
//! `static` so it cannot change for the life of the process and is unaffected
//! by the mutable incident store.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::incident::Severity;

/// A resolved incident from the historical record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalIncident {
    /// Catalog identifier (e.g. `INC-002`).
    pub id: &'static str,
    /// Short title.
    pub title: &'static str,
    /// Severity at the time.
    pub severity: Severity,
    /// Affected service name.
    pub service: &'static str,
    /// What was observed.
    pub description: &'static str,
    /// What caused it.
    pub root_cause: &'static str,
    /// Whether the incident was resolved.
    pub resolved: bool,
    /// When it happened, RFC 3339.
    pub timestamp: &'static str,
}

impl HistoricalIncident {
    /// Returns the timestamp parsed as UTC, if well-formed.
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Lower-cased text used for lexical matching: title, description and service.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.service).to_lowercase()
    }
}

/// The five historical incidents.
pub static CATALOG: [HistoricalIncident; 5] = [
    HistoricalIncident {
        id: "INC-001",
        title: "API gateway timeout spike",
        severity: Severity::High,
        service: "api",
        description: "API gateway experienced 5x increase in P99 latency, causing cascading timeouts.",
        root_cause: "Connection pool exhaustion due to slow downstream database queries.",
        resolved: true,
        timestamp: "2026-02-10T14:30:00Z",
    },
    HistoricalIncident {
        id: "INC-002",
        title: "Database replication lag",
        severity: Severity::Critical,
        service: "database",
        description: "Primary-replica replication lag exceeded 30 seconds, risking stale reads.",
        root_cause: "Large batch insert job saturated I/O bandwidth on the primary node.",
        resolved: true,
        timestamp: "2026-02-08T09:15:00Z",
    },
    HistoricalIncident {
        id: "INC-003",
        title: "Cache eviction storm",
        severity: Severity::Medium,
        service: "cache",
        description: "Redis cache hit ratio dropped to 40% after a deployment cleared warm caches.",
        root_cause: "Deployment script flushed all cache keys instead of performing rolling invalidation.",
        resolved: true,
        timestamp: "2026-02-05T18:45:00Z",
    },
    HistoricalIncident {
        id: "INC-004",
        title: "Queue consumer backlog",
        severity: Severity::High,
        service: "queue",
        description: "Message queue backlog grew to 500K messages, processing delay exceeded 10 minutes.",
        root_cause: "Consumer pods were OOMKilled due to memory leak in message deserialization.",
        resolved: true,
        timestamp: "2026-02-01T22:00:00Z",
    },
    HistoricalIncident {
        id: "INC-005",
        title: "SSL certificate expiry",
        severity: Severity::Critical,
        service: "api",
        description: "TLS certificate for api.example.com expired, causing 100% request failures.",
        root_cause: "Certificate auto-renewal cron job was disabled during maintenance window.",
        resolved: true,
        timestamp: "2026-01-28T06:00:00Z",
    },
];

/// Looks up a catalog entry by ID.
pub fn find_historical(id: &str) -> Option<&'static HistoricalIncident> {
    CATALOG.iter().find(|inc| inc.id == id)
}
