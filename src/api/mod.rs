//! HTTP API for the tournament service
//!
//! Routes for recording games and reading standings, plus health and
//! metrics endpoints, served with Axum.

pub mod error;
pub mod handlers;
pub mod health;

pub use error::{ApiError, ErrorResponse};

use crate::service::AppState;
use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::info;

/// Build the router with every API route
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/games", post(handlers::record_game))
        .route("/stats", get(handlers::get_all_stats))
        .route("/stats/{team}", get(handlers::get_team_stats))
        .route("/health", get(health::health_handler))
        .route("/ready", get(health::ready_handler))
        .route("/alive", get(health::alive_handler))
        .route("/metrics", get(health::metrics_handler))
        .with_state(state)
}

/// HTTP server for the API
pub struct ApiServer {
    state: Arc<AppState>,
    shutdown_tx: watch::Sender<bool>,
}

impl ApiServer {
    pub fn new(state: Arc<AppState>) -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self { state, shutdown_tx }
    }

    /// Bind and serve until [`ApiServer::stop`] is called
    pub async fn start(&self) -> Result<()> {
        let addr: SocketAddr = self
            .state
            .config()
            .bind_address()
            .parse()
            .context("Invalid HTTP server address")?;

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind to {}", addr))?;

        info!("API server listening on http://{}", addr);

        let mut shutdown_rx = self.shutdown_tx.subscribe();

        axum::serve(listener, router(self.state.clone()))
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.wait_for(|stopping| *stopping).await;
                info!("API server shutdown signal received");
            })
            .await?;

        info!("API server stopped");
        Ok(())
    }

    /// Ask a running server to finish in-flight requests and exit
    pub fn stop(&self) {
        self.shutdown_tx.send_replace(true);
    }
}
