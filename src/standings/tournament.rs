//! Tournament coordination
//!
//! Ties the standings engine to a game store: recording a game writes
//! through to the store, reading stats folds a fresh snapshot of games.

use crate::error::Result;
use crate::standings::engine;
use crate::store::GameStore;
use crate::types::{Game, Stats};
use std::sync::Arc;
use tracing::{debug, info};

/// Entry point for recording games and reading standings
#[derive(Clone)]
pub struct Tournament {
    store: Arc<dyn GameStore>,
}

impl Tournament {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    /// The store this tournament reads from and writes to
    pub fn store(&self) -> Arc<dyn GameStore> {
        self.store.clone()
    }

    /// Record a game result
    pub async fn play(&self, game: Game) -> Result<()> {
        game.validate()?;
        self.store.save(&game).await?;

        info!("Recorded game {}", game);
        Ok(())
    }

    /// Current stats for one team
    pub async fn team_stats(&self, team: &str) -> Result<Stats> {
        let games = self.store.find_by_team(team).await?;
        debug!("Folding {} games for team '{}'", games.len(), team);

        let table = engine::compute_stats(&games);
        engine::stats_for_team(&table, team)
    }

    /// League table for every team that has played
    pub async fn all_stats(&self) -> Result<Vec<Stats>> {
        let games = self.store.find_all().await?;
        debug!("Folding {} games for the league table", games.len());

        let table = engine::compute_stats(&games);
        Ok(engine::rank_all(&table))
    }
}

impl std::fmt::Debug for Tournament {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tournament")
            .field("store", &self.store.backend_name())
            .finish()
    }
}
