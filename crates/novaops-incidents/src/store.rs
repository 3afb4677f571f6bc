//! IncidentStore - explicitly owned, in-memory incident collection.
//!
//! Replaces a module-level list with a value that callers construct, pass
//! around and reset. Every mutation happens under the write lock, so the
//! append in `create` and the lookup-then-mutate in `update_status` are
//! critical sections even when the store is shared across threads.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use novaops_models::{Incident, IncidentId, IncidentStatus, Severity};
use tracing::{debug, info, warn};

use crate::error::{IncidentError, Result};
use crate::filter::IncidentFilter;

/// Thread-safe in-memory incident store.
///
/// Records are kept in creation order and never removed. Lookups are a
/// linear scan by ID, which is fine at the scale this store is used.
///
/// # Lock poisoning
///
/// Each mutation is a single push or field assignment, so the collection is
/// consistent even if a writer panicked. A poisoned lock is recovered rather
/// than reported.
#[derive(Debug, Default)]
pub struct IncidentStore {
    incidents: RwLock<Vec<Incident>>,
}

impl IncidentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Incident>> {
        self.incidents.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Incident>> {
        self.incidents.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates and stores a new open incident.
    ///
    /// Unrecognized severities are normalized to `medium` rather than rejected.
    pub fn create(
        &self,
        title: impl Into<String>,
        severity: &str,
        description: impl Into<String>,
    ) -> Incident {
        let parsed = Severity::parse_lenient(severity);
        if parsed.as_str() != severity {
            debug!(requested = %severity, "Unrecognized severity, using medium");
        }

        let mut incident = Incident::new(title, parsed, description);

        {
            let mut incidents = self.write();
            assign_unique_id(&incidents, &mut incident, IncidentId::new);
            incidents.push(incident.clone());
        }

        info!(
            incident_id = %incident.id,
            severity = %incident.severity,
            "Created incident"
        );

        incident
    }

    /// Moves an incident to a new status.
    ///
    /// # Returns
    ///
    /// The updated record, `InvalidStatus` if `status` is not a lifecycle
    /// value, or `NotFound` for an unknown ID. Failed calls change nothing.
    pub fn update_status(&self, id: impl AsRef<str>, status: &str) -> Result<Incident> {
        let id = id.as_ref();

        let Some(new_status) = IncidentStatus::parse(status) else {
            warn!(incident_id = %id, status = %status, "Rejected invalid status");
            return Err(IncidentError::InvalidStatus {
                value: status.to_string(),
                allowed: IncidentStatus::allowed(),
            });
        };

        let mut incidents = self.write();
        let incident = incidents
            .iter_mut()
            .find(|inc| inc.id.as_str() == id)
            .ok_or_else(|| IncidentError::NotFound(id.to_string()))?;

        let previous = incident.status;
        incident.set_status(new_status);

        info!(
            incident_id = %id,
            from = %previous,
            to = %new_status,
            "Updated incident status"
        );

        Ok(incident.clone())
    }

    /// Gets an incident by ID.
    pub fn get(&self, id: impl AsRef<str>) -> Option<Incident> {
        let id = id.as_ref();
        self.read().iter().find(|inc| inc.id.as_str() == id).cloned()
    }

    /// Returns a snapshot of every incident in creation order.
    pub fn list_all(&self) -> Vec<Incident> {
        self.read().clone()
    }

    /// Lists incidents, optionally filtered, in creation order.
    pub fn list(&self, filter: Option<IncidentFilter>) -> Vec<Incident> {
        self.read()
            .iter()
            .filter(|inc| filter.as_ref().map(|f| f.matches(inc)).unwrap_or(true))
            .cloned()
            .collect()
    }

    /// Returns the number of incidents.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if no incidents have been created.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every incident. Intended for resetting state between tests.
    pub fn clear(&self) {
        self.write().clear();
    }
}

/// Redraws `incident.id` from `next_id` until no stored record shares it.
///
/// Generated IDs carry only six hex digits, so collisions are rare but real.
fn assign_unique_id<F>(existing: &[Incident], incident: &mut Incident, mut next_id: F)
where
    F: FnMut() -> IncidentId,
{
    while existing.iter().any(|inc| inc.id == incident.id) {
        debug!(incident_id = %incident.id, "Incident ID collision, regenerating");
        incident.id = next_id();
    }
}
