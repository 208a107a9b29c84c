//! Tournament - league standings microservice
//!
//! This crate records football-style match results and computes per-team
//! and league-wide standings over a pluggable game store.

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod service;
pub mod standings;
pub mod store;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Result, StandingsError};
pub use types::*;

// Re-export key components
pub use standings::Tournament;
pub use store::{GameStore, InMemoryGameStore, SqliteGameStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
