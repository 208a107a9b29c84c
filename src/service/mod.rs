//! Service layer for the tournament service
//!
//! This module contains the main application state and the health checks
//! run against it.

pub mod app;
pub mod health;

pub use app::{AppState, ServiceError};
pub use health::{HealthCheck, HealthStatus};
