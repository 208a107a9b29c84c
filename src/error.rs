//! Error types for the standings service
//!
//! Library operations return [`StandingsError`] so callers can tell a
//! missing team apart from a storage failure. Startup and configuration
//! plumbing uses anyhow instead.

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, StandingsError>;

/// Errors raised by the standings engine, the tournament and the game stores
#[derive(Debug, thiserror::Error)]
pub enum StandingsError {
    #[error("Team not found: {team}")]
    TeamNotFound { team: String },

    #[error("Invalid game: {reason}")]
    Validation { reason: String },

    #[error("Game store failure: {message}")]
    Store { message: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal service error: {message}")]
    Internal { message: String },
}

impl StandingsError {
    /// Shorthand for a missing team
    pub fn team_not_found(team: impl Into<String>) -> Self {
        StandingsError::TeamNotFound { team: team.into() }
    }

    /// Shorthand for a rejected submission
    pub fn validation(reason: impl Into<String>) -> Self {
        StandingsError::Validation {
            reason: reason.into(),
        }
    }

    /// True for failures that originate in the persistence layer
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            StandingsError::Store { .. } | StandingsError::Database(_)
        )
    }
}
