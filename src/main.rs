//! Main entry point for the tournament standings service
//!
//! Loads configuration, opens the game store and serves the HTTP API
//! until SIGINT or SIGTERM.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tournament::api::ApiServer;
use tournament::config::{validate_config, AppConfig, StorageBackend};
use tournament::service::AppState;
use tracing::{error, info, warn};

/// Tournament Service - match results and league standings
#[derive(Parser)]
#[command(
    name = "tournament",
    version,
    about = "Records match results and serves league standings over HTTP"
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Host override
    #[arg(long, value_name = "HOST", help = "Override the interface to bind")]
    host: Option<String>,

    /// HTTP port override
    #[arg(short, long, value_name = "PORT", help = "Port to run this service on")]
    port: Option<u16>,

    /// Database URL override
    #[arg(long, value_name = "URL", help = "Override the SQLite database URL")]
    database_url: Option<String>,

    /// Storage backend override
    #[arg(long, value_name = "BACKEND", help = "Game store to use (memory, sqlite)")]
    storage: Option<StorageBackend>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(
        long,
        help = "Validate configuration and exit without starting service"
    )]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C) signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}

/// Display startup banner with service information
fn display_startup_banner(config: &AppConfig) {
    info!("🚀 Tournament Standings Service");
    info!("   Service: {}", config.service.name);
    info!("   Log level: {}", config.service.log_level);
    info!("   Listening on: {}", config.bind_address());
    info!("   Storage: {}", config.storage.backend);
    if config.storage.backend == StorageBackend::Sqlite {
        info!("   Database: {}", config.storage.database_url);
    }
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

/// Load and merge configuration from file or environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(host) = &args.host {
        config.service.host = host.clone();
    }

    if let Some(port) = args.port {
        config.service.http_port = port;
    }

    if let Some(database_url) = &args.database_url {
        config.storage.database_url = database_url.clone();
    }

    if let Some(storage) = args.storage {
        config.storage.backend = storage;
    }

    validate_config(&config)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        info!("Configuration validation successful");
        display_startup_banner(&config);
        info!("Dry run completed - exiting without starting service");
        return Ok(());
    }

    display_startup_banner(&config);

    info!("Initializing service components...");
    let app_state = match AppState::new(config.clone()).await {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    app_state.start().await;

    let server = Arc::new(ApiServer::new(app_state.clone()));
    let mut server_task = {
        let server = server.clone();
        tokio::spawn(async move { server.start().await })
    };

    info!("✅ Tournament service is running");
    info!("Press Ctrl+C to shutdown gracefully...");

    tokio::select! {
        _ = wait_for_shutdown_signal() => {
            info!("🛑 Shutdown signal received, beginning graceful shutdown...");
        }
        result = &mut server_task => {
            // The server only returns on its own when it failed to start
            app_state.shutdown().await;
            match result {
                Ok(Ok(())) => warn!("API server exited unexpectedly"),
                Ok(Err(e)) => error!("API server failed: {:#}", e),
                Err(e) => error!("API server task panicked: {}", e),
            }
            std::process::exit(1);
        }
    }

    server.stop();
    app_state.shutdown().await;

    match tokio::time::timeout(config.shutdown_timeout(), server_task).await {
        Ok(Ok(Ok(()))) => info!("✅ Graceful shutdown completed successfully"),
        Ok(Ok(Err(e))) => error!("API server failed during shutdown: {:#}", e),
        Ok(Err(e)) => error!("API server task panicked: {}", e),
        Err(_) => warn!("⚠️  Shutdown timeout exceeded, forcing exit"),
    }

    info!("🛑 Tournament service stopped");
    Ok(())
}
