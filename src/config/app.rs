//! Main application configuration
//!
//! This module defines the configuration structures for the tournament
//! service, including TOML file loading, environment variable overrides
//! and validation.

use crate::store::sqlite::SqliteStoreOptions;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub storage: StorageSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging and metrics
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Interface the HTTP server binds to
    pub host: String,
    /// Port for the HTTP API
    pub http_port: u16,
    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout_seconds: u64,
}

/// Which game store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Sqlite,
}

impl std::str::FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "sqlite" => Ok(StorageBackend::Sqlite),
            other => Err(anyhow!("Unknown storage backend: {}", other)),
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Game store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    /// sqlx connection URL, used by the sqlite backend
    pub database_url: String,
    /// Maximum pooled connections
    pub max_connections: u32,
    /// How many times to try connecting before giving up
    pub connect_attempts: u32,
    /// Delay between connection attempts in milliseconds
    pub connect_retry_delay_ms: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "tournament".to_string(),
            log_level: "info".to_string(),
            host: "0.0.0.0".to_string(),
            http_port: 3000,
            shutdown_timeout_seconds: 30,
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            database_url: "sqlite://tournament.db".to_string(),
            max_connections: 5,
            connect_attempts: 5,
            connect_retry_delay_ms: 1000,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&contents)?;

        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from TOML text without touching the environment
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse TOML configuration")
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }
        if let Ok(host) = env::var("HTTP_HOST") {
            self.service.host = host;
        }
        if let Ok(port) = env::var("HTTP_PORT") {
            self.service.http_port = port
                .parse()
                .map_err(|_| anyhow!("Invalid HTTP_PORT value: {}", port))?;
        }
        if let Ok(timeout) = env::var("SHUTDOWN_TIMEOUT_SECONDS") {
            self.service.shutdown_timeout_seconds = timeout
                .parse()
                .map_err(|_| anyhow!("Invalid SHUTDOWN_TIMEOUT_SECONDS value: {}", timeout))?;
        }

        // Storage settings
        if let Ok(backend) = env::var("STORAGE_BACKEND") {
            self.storage.backend = backend.parse()?;
        }
        if let Ok(url) = env::var("DATABASE_URL") {
            self.storage.database_url = url;
        }
        if let Ok(max) = env::var("DB_MAX_CONNECTIONS") {
            self.storage.max_connections = max
                .parse()
                .map_err(|_| anyhow!("Invalid DB_MAX_CONNECTIONS value: {}", max))?;
        }
        if let Ok(attempts) = env::var("DB_CONNECT_ATTEMPTS") {
            self.storage.connect_attempts = attempts
                .parse()
                .map_err(|_| anyhow!("Invalid DB_CONNECT_ATTEMPTS value: {}", attempts))?;
        }
        if let Ok(delay) = env::var("DB_CONNECT_RETRY_DELAY_MS") {
            self.storage.connect_retry_delay_ms = delay
                .parse()
                .map_err(|_| anyhow!("Invalid DB_CONNECT_RETRY_DELAY_MS value: {}", delay))?;
        }

        Ok(())
    }

    /// Get shutdown timeout as Duration
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.service.shutdown_timeout_seconds)
    }

    /// Get connection retry delay as Duration
    pub fn connect_retry_delay(&self) -> Duration {
        Duration::from_millis(self.storage.connect_retry_delay_ms)
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service.host, self.service.http_port)
    }

    /// Options for opening the SQLite store
    pub fn sqlite_options(&self) -> SqliteStoreOptions {
        SqliteStoreOptions {
            database_url: self.storage.database_url.clone(),
            max_connections: self.storage.max_connections,
            connect_attempts: self.storage.connect_attempts,
            retry_delay: self.connect_retry_delay(),
        }
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }
    if config.service.host.is_empty() {
        return Err(anyhow!("HTTP host cannot be empty"));
    }
    if config.service.http_port == 0 {
        return Err(anyhow!("HTTP port cannot be 0"));
    }
    if config.service.shutdown_timeout_seconds == 0 {
        return Err(anyhow!("Shutdown timeout must be greater than 0"));
    }

    // Validate storage settings
    if config.storage.backend == StorageBackend::Sqlite {
        if config.storage.database_url.is_empty() {
            return Err(anyhow!("Database URL cannot be empty"));
        }
        if !config.storage.database_url.starts_with("sqlite:") {
            return Err(anyhow!(
                "Database URL must start with 'sqlite:': {}",
                config.storage.database_url
            ));
        }
        if config.storage.max_connections == 0 {
            return Err(anyhow!("Max connections must be greater than 0"));
        }
        if config.storage.connect_attempts == 0 {
            return Err(anyhow!("Connect attempts must be greater than 0"));
        }
    }

    Ok(())
}
