//! Metrics and monitoring for the tournament service
//!
//! Prometheus metrics are exposed on the API's `/metrics` route.

pub mod collector;

pub use collector::{MetricsCollector, MetricsTimer, ServiceMetrics, StandingsMetrics};
