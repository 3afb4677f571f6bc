//! In-memory incident tracking for NovaOps.
//!
//! This crate provides the `IncidentStore`, an explicitly owned collection of
//! user-created incidents:
//! - Interior mutability through `RwLock`, so a store can be shared by reference
//! - Severity normalization on create, strict status validation on update
//! - Snapshot reads that never expose the underlying collection
//!
//! # Example
//!
//! ```
//! use novaops_incidents::{IncidentFilter, IncidentStore};
//! use novaops_models::{IncidentStatus, Severity};
//!
//! let store = IncidentStore::new();
//!
//! let incident = store.create("API gateway timeout", "high", "P99 above 2s");
//! let updated = store.update_status(&incident.id, "investigating").unwrap();
//! assert_eq!(updated.status, IncidentStatus::Investigating);
//!
//! let open_high = store.list(Some(IncidentFilter::new().with_min_severity(Severity::High)));
//! assert_eq!(open_high.len(), 1);
//! ```

pub mod error;
pub mod filter;
pub mod store;

pub use error::{IncidentError, Result};
pub use filter::IncidentFilter;
pub use store::IncidentStore;
