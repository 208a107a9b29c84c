//! Game storage interface and implementations
//!
//! The standings engine only ever sees games through [`GameStore`]; the
//! backend is chosen at startup from configuration.

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryGameStore;
pub use sqlite::SqliteGameStore;

use crate::error::Result;
use crate::types::Game;
use async_trait::async_trait;

/// Trait for game persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Persist one game
    async fn save(&self, game: &Game) -> Result<()>;

    /// All games where the team appears on either side.
    /// Fails with `TeamNotFound` when there are none.
    async fn find_by_team(&self, team: &str) -> Result<Vec<Game>>;

    /// Every recorded game, in no particular order
    async fn find_all(&self) -> Result<Vec<Game>>;

    /// Cheap liveness probe for health checks
    async fn ping(&self) -> Result<()>;

    /// Short backend name for logs and health reports
    fn backend_name(&self) -> &'static str;
}
