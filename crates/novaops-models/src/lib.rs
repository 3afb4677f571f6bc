//! Core data models for NovaOps.
//!
//! This crate provides the fundamental data types shared by the incident
//! store, the analysis tools and the CLI: incident records with their
//! severity and lifecycle status, and the read-only historical catalog.

pub mod catalog;
pub mod ids;
pub mod incident;

// Re-export main types
pub use catalog::{find_historical, HistoricalIncident, CATALOG};
pub use ids::IncidentId;
pub use incident::{Incident, IncidentStatus, Severity};
