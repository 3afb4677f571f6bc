//! Incident filtering for queries.

use novaops_models::{Incident, IncidentStatus, Severity};

/// Filter criteria for listing incidents.
#[derive(Debug, Clone, Default)]
pub struct IncidentFilter {
    /// Filter by exact severity.
    pub severity: Option<Severity>,
    /// Filter by status.
    pub status: Option<IncidentStatus>,
    /// Filter by minimum severity.
    pub min_severity: Option<Severity>,
    /// Hide resolved and closed incidents.
    pub active_only: bool,
}

impl IncidentFilter {
    /// Creates a new empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exact severity filter.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Sets the status filter.
    pub fn with_status(mut self, status: IncidentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the minimum severity filter.
    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = Some(severity);
        self
    }

    /// Only match incidents that are not yet resolved or closed.
    pub fn active(mut self) -> Self {
        self.active_only = true;
        self
    }

    /// Returns true if the incident matches this filter.
    pub fn matches(&self, incident: &Incident) -> bool {
        if let Some(severity) = self.severity {
            if incident.severity != severity {
                return false;
            }
        }

        if let Some(status) = self.status {
            if incident.status != status {
                return false;
            }
        }

        if let Some(min) = self.min_severity {
            if incident.severity < min {
                return false;
            }
        }

        if self.active_only && incident.is_terminal() {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_incident(severity: Severity) -> Incident {
        Incident::new("Test", severity, "")
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = IncidentFilter::new();
        assert!(filter.matches(&make_incident(Severity::Low)));
    }

    #[test]
    fn test_filter_by_severity() {
        let filter = IncidentFilter::new().with_severity(Severity::High);

        assert!(filter.matches(&make_incident(Severity::High)));
        assert!(!filter.matches(&make_incident(Severity::Critical)));
    }

    #[test]
    fn test_filter_by_status() {
        let filter = IncidentFilter::new().with_status(IncidentStatus::Open);

        let open = make_incident(Severity::Low);
        let mut mitigated = make_incident(Severity::Low);
        mitigated.set_status(IncidentStatus::Mitigated);

        assert!(filter.matches(&open));
        assert!(!filter.matches(&mitigated));
    }

    #[test]
    fn test_filter_by_min_severity() {
        let filter = IncidentFilter::new().with_min_severity(Severity::High);

        assert!(filter.matches(&make_incident(Severity::Critical)));
        assert!(filter.matches(&make_incident(Severity::High)));
        assert!(!filter.matches(&make_incident(Severity::Medium)));
        assert!(!filter.matches(&make_incident(Severity::Low)));
    }

    #[test]
    fn test_active_filter() {
        let filter = IncidentFilter::new().active();

        let mut closed = make_incident(Severity::High);
        closed.set_status(IncidentStatus::Closed);
        let mut investigating = make_incident(Severity::High);
        investigating.set_status(IncidentStatus::Investigating);

        assert!(!filter.matches(&closed));
        assert!(filter.matches(&investigating));
    }

    #[test]
    fn test_combined_filters() {
        let filter = IncidentFilter::new()
            .with_min_severity(Severity::High)
            .with_status(IncidentStatus::Open);

        let mut resolved = make_incident(Severity::Critical);
        resolved.set_status(IncidentStatus::Resolved);

        assert!(filter.matches(&make_incident(Severity::Critical)));
        assert!(!filter.matches(&make_incident(Severity::Low))); // too low
        assert!(!filter.matches(&resolved)); // wrong status
    }
}
