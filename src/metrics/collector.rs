//! Metrics collection using Prometheus
//!
//! Counters and histograms for recorded games and standings requests.

use anyhow::Result;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, IntGaugeVec, Opts,
    Registry, TextEncoder,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main metrics collector for the tournament service
#[derive(Clone)]
pub struct MetricsCollector {
    /// Prometheus registry
    registry: Arc<Registry>,

    /// Service-level metrics
    service_metrics: ServiceMetrics,

    /// Standings-related metrics
    standings_metrics: StandingsMetrics,
}

/// Service-level metrics
#[derive(Clone)]
pub struct ServiceMetrics {
    /// Service uptime in seconds
    pub uptime_seconds: IntGauge,

    /// Health check status (0=unhealthy, 1=degraded, 2=healthy)
    pub health_status: IntGauge,

    /// Component health status
    pub component_health: IntGaugeVec,
}

/// Standings-related metrics
#[derive(Clone)]
pub struct StandingsMetrics {
    /// Games accepted and stored
    pub games_recorded_total: IntCounter,

    /// Requests by operation and outcome
    pub requests_total: IntCounterVec,

    /// Request handling time by operation
    pub request_duration_seconds: HistogramVec,

    /// Teams in the most recently computed league table
    pub teams_ranked: IntGauge,
}

impl MetricsCollector {
    /// Create a new metrics collector with its own registry
    pub fn new() -> Result<Self> {
        let registry = Arc::new(Registry::new());
        Self::with_registry(registry)
    }

    /// Create a new metrics collector with custom registry
    pub fn with_registry(registry: Arc<Registry>) -> Result<Self> {
        let service_metrics = ServiceMetrics::new(&registry)?;
        let standings_metrics = StandingsMetrics::new(&registry)?;

        Ok(Self {
            registry,
            service_metrics,
            standings_metrics,
        })
    }

    /// Get the Prometheus registry
    pub fn registry(&self) -> Arc<Registry> {
        self.registry.clone()
    }

    /// Get service metrics
    pub fn service(&self) -> &ServiceMetrics {
        &self.service_metrics
    }

    /// Get standings metrics
    pub fn standings(&self) -> &StandingsMetrics {
        &self.standings_metrics
    }

    /// Record a game being stored
    pub fn record_game_recorded(&self) {
        self.standings_metrics.games_recorded_total.inc();
    }

    /// Record a handled request
    pub fn record_request(&self, operation: &str, success: bool, duration: Duration) {
        let status = if success { "success" } else { "error" };

        self.standings_metrics
            .requests_total
            .with_label_values(&[operation, status])
            .inc();

        self.standings_metrics
            .request_duration_seconds
            .with_label_values(&[operation])
            .observe(duration.as_secs_f64());
    }

    /// Record the size of a freshly computed league table
    pub fn record_league_table(&self, teams: usize) {
        self.standings_metrics.teams_ranked.set(teams as i64);
    }

    /// Update uptime
    pub fn update_uptime(&self, uptime: Duration) {
        self.service_metrics
            .uptime_seconds
            .set(uptime.as_secs() as i64);
    }

    /// Update health status
    pub fn update_health_status(&self, status: u8) {
        self.service_metrics.health_status.set(status as i64);
    }

    /// Update component health
    pub fn update_component_health(&self, component: &str, healthy: bool) {
        let status = if healthy { 1 } else { 0 };
        self.service_metrics
            .component_health
            .with_label_values(&[component])
            .set(status);
    }

    /// Encode every registered metric in the Prometheus text format
    pub fn render(&self) -> Result<String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Create a timer for measuring operation duration
    pub fn start_timer(&self) -> MetricsTimer {
        MetricsTimer::new()
    }
}

/// Timer for measuring operation durations
pub struct MetricsTimer {
    start: Instant,
}

impl MetricsTimer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get the elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and return the duration
    pub fn stop(self) -> Duration {
        self.elapsed()
    }
}

impl ServiceMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let uptime_seconds =
            IntGauge::new("tournament_uptime_seconds", "Service uptime in seconds")?;
        registry.register(Box::new(uptime_seconds.clone()))?;

        let health_status = IntGauge::new(
            "tournament_health_status",
            "Health status (0=unhealthy, 1=degraded, 2=healthy)",
        )?;
        registry.register(Box::new(health_status.clone()))?;

        let component_health = IntGaugeVec::new(
            Opts::new("tournament_component_health", "Component health status"),
            &["component"],
        )?;
        registry.register(Box::new(component_health.clone()))?;

        Ok(Self {
            uptime_seconds,
            health_status,
            component_health,
        })
    }
}

impl StandingsMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let games_recorded_total = IntCounter::new(
            "tournament_games_recorded_total",
            "Total games recorded",
        )?;
        registry.register(Box::new(games_recorded_total.clone()))?;

        let requests_total = IntCounterVec::new(
            Opts::new("tournament_requests_total", "Total standings requests"),
            &["operation", "status"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "tournament_request_duration_seconds",
                "Standings request duration",
            )
            .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
            &["operation"],
        )?;
        registry.register(Box::new(request_duration_seconds.clone()))?;

        let teams_ranked = IntGauge::new(
            "tournament_teams_ranked",
            "Teams in the last computed league table",
        )?;
        registry.register(Box::new(teams_ranked.clone()))?;

        Ok(Self {
            games_recorded_total,
            requests_total,
            request_duration_seconds,
            teams_ranked,
        })
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new().expect("Failed to create default metrics collector")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_collector_creation() {
        let collector = MetricsCollector::new().expect("Failed to create metrics collector");

        let _service = collector.service();
        let _standings = collector.standings();
    }

    #[test]
    fn test_request_recording() {
        let collector = MetricsCollector::new().unwrap();

        collector.record_game_recorded();
        collector.record_request("play", true, Duration::from_millis(3));
        collector.record_request("team_stats", false, Duration::from_millis(1));

        assert_eq!(collector.standings().games_recorded_total.get(), 1);
        assert_eq!(
            collector
                .standings()
                .requests_total
                .with_label_values(&["team_stats", "error"])
                .get(),
            1
        );
    }

    #[test]
    fn test_render_contains_metric_names() {
        let collector = MetricsCollector::new().unwrap();
        collector.record_league_table(4);
        collector.update_health_status(2);

        let output = collector.render().unwrap();
        assert!(output.contains("tournament_teams_ranked 4"));
        assert!(output.contains("tournament_health_status 2"));
    }

    #[test]
    fn test_timer() {
        let collector = MetricsCollector::new().unwrap();
        let timer = collector.start_timer();
        std::thread::sleep(Duration::from_millis(5));
        assert!(timer.stop() >= Duration::from_millis(5));
    }
}
