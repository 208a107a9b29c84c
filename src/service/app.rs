//! Main application state and service coordination
//!
//! This module contains the AppState that wires the configured game
//! store, the tournament and the metrics collector together.

use crate::config::{AppConfig, StorageBackend};
use crate::metrics::MetricsCollector;
use crate::standings::Tournament;
use crate::store::{GameStore, InMemoryGameStore, SqliteGameStore};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

/// Service-level errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Game store error: {message}")]
    Storage { message: String },

    #[error("Service initialization error: {message}")]
    Initialization { message: String },
}

/// Main application state containing all service components
pub struct AppState {
    /// Application configuration
    config: AppConfig,

    /// Standings over the configured game store
    tournament: Tournament,

    /// Prometheus metrics
    metrics: Arc<MetricsCollector>,

    /// When the state was created
    started_at: Instant,

    /// Service status
    is_running: Arc<RwLock<bool>>,
}

impl AppState {
    /// Initialize the application, opening the configured game store
    pub async fn new(config: AppConfig) -> Result<Self, ServiceError> {
        info!("Initializing tournament service");
        info!(
            "Configuration: service={}, storage={}",
            config.service.name, config.storage.backend
        );

        let store = Self::initialize_store(&config).await?;
        Self::with_store(config, store)
    }

    /// Initialize the application around an already-open store
    pub fn with_store(config: AppConfig, store: Arc<dyn GameStore>) -> Result<Self, ServiceError> {
        let metrics = MetricsCollector::new().map_err(|e| ServiceError::Initialization {
            message: format!("Failed to create metrics collector: {}", e),
        })?;

        Ok(Self {
            config,
            tournament: Tournament::new(store),
            metrics: Arc::new(metrics),
            started_at: Instant::now(),
            is_running: Arc::new(RwLock::new(false)),
        })
    }

    async fn initialize_store(config: &AppConfig) -> Result<Arc<dyn GameStore>, ServiceError> {
        match config.storage.backend {
            StorageBackend::Memory => {
                info!("Using in-memory game store; results are lost on restart");
                Ok(Arc::new(InMemoryGameStore::new()))
            }
            StorageBackend::Sqlite => {
                info!("Opening SQLite game store at {}", config.storage.database_url);
                let store = SqliteGameStore::connect(&config.sqlite_options())
                    .await
                    .map_err(|e| ServiceError::Storage {
                        message: format!("Failed to open SQLite store: {}", e),
                    })?;
                Ok(Arc::new(store))
            }
        }
    }

    /// Mark the service as accepting requests
    pub async fn start(&self) {
        *self.is_running.write().await = true;
        info!("✅ Tournament service started");
    }

    /// Mark the service as stopped
    pub async fn shutdown(&self) {
        *self.is_running.write().await = false;
        info!(
            "Tournament service stopped after {} games recorded",
            self.metrics.standings().games_recorded_total.get()
        );
    }

    /// Get service configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the tournament
    pub fn tournament(&self) -> &Tournament {
        &self.tournament
    }

    /// Get the metrics collector
    pub fn metrics(&self) -> Arc<MetricsCollector> {
        self.metrics.clone()
    }

    /// Check if service is running
    pub async fn is_running(&self) -> bool {
        *self.is_running.read().await
    }

    /// Time since the state was created
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
