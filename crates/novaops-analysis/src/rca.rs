//! Canned root-cause analysis for catalog incidents.

use chrono::{DateTime, Utc};
use novaops_models::{find_historical, Severity};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::embedding::round_to;
use crate::error::{AnalysisError, Result};

/// Root-cause analysis of a historical incident.
#[derive(Debug, Clone, Serialize)]
pub struct RootCauseAnalysis {
    /// Catalog identifier.
    pub incident_id: String,
    /// Catalog title.
    pub title: &'static str,
    /// Catalog severity.
    pub severity: Severity,
    /// Affected service.
    pub service: &'static str,
    /// Recorded root cause.
    pub root_cause: &'static str,
    /// Factors that made the incident worse.
    pub contributing_factors: Vec<String>,
    /// Suggested follow-ups.
    pub recommendations: Vec<String>,
    /// Confidence in `[0.75, 0.98]`, two decimals.
    pub confidence: f64,
    /// When the analysis ran.
    pub analysis_timestamp: DateTime<Utc>,
}

/// Analyzes a catalog incident using the thread-local random generator.
pub fn root_cause_analysis(incident_id: &str) -> Result<RootCauseAnalysis> {
    root_cause_analysis_with_rng(incident_id, &mut rand::thread_rng())
}

/// Analyzes a catalog incident using the given random generator for confidence.
pub fn root_cause_analysis_with_rng<R: Rng + ?Sized>(
    incident_id: &str,
    rng: &mut R,
) -> Result<RootCauseAnalysis> {
    let incident =
        find_historical(incident_id).ok_or_else(|| AnalysisError::NotFound(incident_id.to_string()))?;

    debug!(incident_id = %incident_id, service = %incident.service, "Running root cause analysis");

    Ok(RootCauseAnalysis {
        incident_id: incident_id.to_string(),
        title: incident.title,
        severity: incident.severity,
        service: incident.service,
        root_cause: incident.root_cause,
        contributing_factors: vec![
            "Insufficient monitoring alerting thresholds".to_string(),
            "Missing automated remediation runbook".to_string(),
            format!(
                "Service '{}' lacks redundancy in failure path",
                incident.service
            ),
        ],
        recommendations: vec![
            "Add automated alerting for early detection".to_string(),
            "Implement circuit breaker pattern".to_string(),
            "Create runbook for similar incidents".to_string(),
        ],
        confidence: round_to(rng.gen_range(0.75..=0.98), 2),
        analysis_timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_of_known_incident() {
        let analysis = root_cause_analysis("INC-004").unwrap();

        assert_eq!(analysis.title, "Queue consumer backlog");
        assert_eq!(analysis.severity, Severity::High);
        assert!(analysis.root_cause.contains("OOMKilled"));
        assert_eq!(analysis.contributing_factors.len(), 3);
        assert!(analysis.contributing_factors[2].contains("'queue'"));
        assert_eq!(analysis.recommendations.len(), 3);
        assert!((0.75..=0.98).contains(&analysis.confidence));
    }

    #[test]
    fn test_analysis_not_found() {
        let result = root_cause_analysis("INC-404");
        assert_eq!(result.unwrap_err(), AnalysisError::NotFound("INC-404".into()));
    }

    #[test]
    fn test_user_incident_ids_are_not_in_catalog() {
        // Store-created IDs use six hex digits and never collide with the catalog
        assert!(root_cause_analysis("INC-ABC123").is_err());
    }
}
