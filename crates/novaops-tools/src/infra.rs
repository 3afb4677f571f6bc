//! Monitor tools - mock infrastructure health checks and metrics.

use chrono::{DateTime, Utc};
use novaops_analysis::embedding::round_to;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// Services probed by a default health sweep.
pub const DEFAULT_SERVICES: [&str; 4] = ["api", "database", "cache", "queue"];

/// Health of a monitored service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl ServiceStatus {
    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Healthy => "healthy",
            ServiceStatus::Degraded => "degraded",
            ServiceStatus::Unhealthy => "unhealthy",
        }
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks one element uniformly; `options` must be non-empty.
pub(crate) fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, options: &[T]) -> T {
    options[rng.gen_range(0..options.len())]
}

/// Result of a health check.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub service: String,
    pub status: ServiceStatus,
    pub timestamp: DateTime<Utc>,
    pub uptime_hours: f64,
    /// `None` when healthy.
    pub last_incident: Option<&'static str>,
}

/// Checks the health of a service.
///
/// Healthy three times out of five, otherwise degraded or unhealthy.
pub fn check_health<R: Rng + ?Sized>(rng: &mut R, service: &str) -> HealthReport {
    const WEIGHTED: [ServiceStatus; 5] = [
        ServiceStatus::Healthy,
        ServiceStatus::Healthy,
        ServiceStatus::Healthy,
        ServiceStatus::Degraded,
        ServiceStatus::Unhealthy,
    ];

    let status = pick(rng, &WEIGHTED);
    debug!(service = %service, status = %status, "Health check");

    HealthReport {
        service: service.to_string(),
        status,
        timestamp: Utc::now(),
        uptime_hours: round_to(rng.gen_range(1.0..=720.0), 2),
        last_incident: (status != ServiceStatus::Healthy).then_some("High latency detected"),
    }
}

/// Kind of metric to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricType {
    Cpu,
    Memory,
    Latency,
    Throughput,
}

impl MetricType {
    /// Parses a metric name, falling back to `Cpu` for anything unrecognized.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "memory" => MetricType::Memory,
            "latency" => MetricType::Latency,
            "throughput" => MetricType::Throughput,
            _ => MetricType::Cpu,
        }
    }

    fn range(&self) -> (f64, f64, &'static str) {
        match self {
            MetricType::Cpu => (5.0, 95.0, "%"),
            MetricType::Memory => (20.0, 90.0, "%"),
            MetricType::Latency => (1.0, 500.0, "ms"),
            MetricType::Throughput => (100.0, 10000.0, "req/s"),
        }
    }
}

/// Direction a metric is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Stable,
    Increasing,
    Decreasing,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Stable => "stable",
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
        }
    }
}

/// A sampled metric value.
#[derive(Debug, Clone, Serialize)]
pub struct MetricReport {
    pub service: String,
    /// The metric type as requested, even when it fell back to cpu.
    pub metric_type: String,
    pub value: f64,
    pub unit: &'static str,
    pub timestamp: DateTime<Utc>,
    pub trend: Trend,
}

/// Samples a performance metric for a service.
pub fn get_metrics<R: Rng + ?Sized>(rng: &mut R, service: &str, metric_type: &str) -> MetricReport {
    let (low, high, unit) = MetricType::parse_lenient(metric_type).range();

    MetricReport {
        service: service.to_string(),
        metric_type: metric_type.to_string(),
        value: round_to(rng.gen_range(low..=high), 1),
        unit,
        timestamp: Utc::now(),
        trend: pick(rng, &[Trend::Stable, Trend::Increasing, Trend::Decreasing]),
    }
}
