//! Health checks for the tournament service
//!
//! Readiness and liveness probes plus a detailed report covering the
//! game store.

use crate::service::app::AppState;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, warn};

/// Store pings slower than this report the store as degraded
pub const SLOW_STORE_PING: Duration = Duration::from_millis(250);

/// Health check status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    /// Numeric form used by the health gauge
    pub fn as_gauge(&self) -> u8 {
        match self {
            HealthStatus::Healthy => 2,
            HealthStatus::Degraded => 1,
            HealthStatus::Unhealthy => 0,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "✅ healthy"),
            HealthStatus::Degraded => write!(f, "⚠️  degraded"),
            HealthStatus::Unhealthy => write!(f, "❌ unhealthy"),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Overall service status
    pub status: HealthStatus,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
    /// Current timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Detailed component checks
    pub checks: Vec<ComponentCheck>,
    /// Service statistics
    pub stats: ServiceStats,
}

/// Individual component health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentCheck {
    /// Component name
    pub name: String,
    /// Component status
    pub status: HealthStatus,
    /// Optional error message if unhealthy
    pub message: Option<String>,
    /// Check duration in milliseconds
    pub duration_ms: u64,
}

/// Service statistics for health reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStats {
    /// Game store backend in use
    pub storage_backend: String,
    /// Games recorded since service start
    pub games_recorded: u64,
    /// Seconds since service start
    pub uptime_seconds: u64,
}

impl HealthCheck {
    /// Perform a full health check of the service
    pub async fn check(app_state: Arc<AppState>) -> Result<Self> {
        let mut checks = Vec::new();
        let mut overall_status = HealthStatus::Healthy;

        let service_check = Self::check_service_running(&app_state).await;
        if service_check.status != HealthStatus::Healthy {
            overall_status = HealthStatus::Unhealthy;
        }
        checks.push(service_check);

        let store_check = Self::check_game_store(&app_state).await;
        match store_check.status {
            HealthStatus::Unhealthy => overall_status = HealthStatus::Unhealthy,
            HealthStatus::Degraded if overall_status == HealthStatus::Healthy => {
                overall_status = HealthStatus::Degraded
            }
            _ => {}
        }
        checks.push(store_check);

        let metrics = app_state.metrics();
        metrics.update_health_status(overall_status.as_gauge());
        for check in &checks {
            metrics.update_component_health(&check.name, check.status == HealthStatus::Healthy);
        }
        metrics.update_uptime(app_state.uptime());

        Ok(HealthCheck {
            status: overall_status,
            service: app_state.config().service.name.clone(),
            version: crate::VERSION.to_string(),
            timestamp: chrono::Utc::now(),
            checks,
            stats: Self::gather_service_stats(&app_state),
        })
    }

    /// Simple liveness check - just verify service is running
    pub async fn liveness_check(app_state: Arc<AppState>) -> Result<HealthStatus> {
        if app_state.is_running().await {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Unhealthy)
        }
    }

    /// Readiness check - verify the game store answers
    pub async fn readiness_check(app_state: Arc<AppState>) -> Result<HealthStatus> {
        if !app_state.is_running().await {
            return Ok(HealthStatus::Unhealthy);
        }

        Ok(Self::check_game_store(&app_state).await.status)
    }

    /// Check if service is running
    async fn check_service_running(app_state: &AppState) -> ComponentCheck {
        let start = std::time::Instant::now();

        let (status, message) = if app_state.is_running().await {
            (HealthStatus::Healthy, None)
        } else {
            (
                HealthStatus::Unhealthy,
                Some("Service is not running".to_string()),
            )
        };

        ComponentCheck {
            name: "service_running".to_string(),
            status,
            message,
            duration_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Check that the game store answers a ping, and answers it quickly
    async fn check_game_store(app_state: &AppState) -> ComponentCheck {
        let start = std::time::Instant::now();
        let store = app_state.tournament().store();
        let ping = store.ping().await;
        let elapsed = start.elapsed();

        let (status, message) = match ping {
            Ok(()) if elapsed > SLOW_STORE_PING => {
                warn!("Game store ping took {:?}", elapsed);
                (
                    HealthStatus::Degraded,
                    Some(format!("Store ping took {}ms", elapsed.as_millis())),
                )
            }
            Ok(()) => (HealthStatus::Healthy, None),
            Err(e) => {
                error!("Game store health check failed: {}", e);
                (
                    HealthStatus::Unhealthy,
                    Some(format!("Store ping failed: {}", e)),
                )
            }
        };

        ComponentCheck {
            name: format!("game_store_{}", store.backend_name()),
            status,
            message,
            duration_ms: elapsed.as_millis() as u64,
        }
    }

    fn gather_service_stats(app_state: &AppState) -> ServiceStats {
        ServiceStats {
            storage_backend: app_state.tournament().store().backend_name().to_string(),
            games_recorded: app_state.metrics().standings().games_recorded_total.get(),
            uptime_seconds: app_state.uptime().as_secs(),
        }
    }
}

/// Convert health check to JSON string
impl HealthCheck {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize health check: {}", e))
    }
}
