//! Health check and Prometheus metrics endpoints

use crate::service::{AppState, HealthCheck, HealthStatus};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error};

/// Root endpoint handler - shows service information
pub async fn root_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "service": state.config().service.name,
        "version": crate::VERSION,
        "endpoints": [
            "POST /games",
            "GET /stats",
            "GET /stats/{team}",
            "/health",
            "/ready",
            "/alive",
            "/metrics"
        ]
    }))
}

/// Full health report
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    debug!("Health check requested");

    match HealthCheck::check(state).await {
        Ok(health) => {
            let status = match health.status {
                HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::OK,
            };
            (status, Json(json!(health)))
        }
        Err(e) => {
            error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "version": crate::VERSION,
                    "error": e.to_string()
                })),
            )
        }
    }
}

/// Readiness check endpoint handler
pub async fn ready_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    debug!("Readiness check requested");

    match HealthCheck::readiness_check(state).await {
        Ok(HealthStatus::Healthy) => (StatusCode::OK, "Ready"),
        Ok(HealthStatus::Degraded) => (StatusCode::OK, "Degraded but ready"),
        Ok(HealthStatus::Unhealthy) => (StatusCode::SERVICE_UNAVAILABLE, "Not ready"),
        Err(e) => {
            error!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not ready")
        }
    }
}

/// Liveness check endpoint handler
pub async fn alive_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match HealthCheck::liveness_check(state).await {
        Ok(HealthStatus::Healthy) => (StatusCode::OK, "Alive"),
        _ => (StatusCode::SERVICE_UNAVAILABLE, "Not alive"),
    }
}

/// Prometheus metrics endpoint handler
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    debug!("Metrics endpoint requested");

    let metrics = state.metrics();
    metrics.update_uptime(state.uptime());

    match metrics.render() {
        Ok(output) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            output,
        ),
        Err(e) => {
            error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain")],
                "Failed to encode metrics".to_string(),
            )
        }
    }
}
