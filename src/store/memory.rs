//! List-backed game store kept entirely in memory

use crate::error::{Result, StandingsError};
use crate::store::GameStore;
use crate::types::Game;
use async_trait::async_trait;
use std::sync::RwLock;

/// In-memory game storage implementation
#[derive(Debug, Default)]
pub struct InMemoryGameStore {
    games: RwLock<Vec<Game>>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with games
    pub fn with_games(games: Vec<Game>) -> Self {
        Self {
            games: RwLock::new(games),
        }
    }

    /// Number of stored games
    pub fn len(&self) -> Result<usize> {
        Ok(self.read_games()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn read_games(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Game>>> {
        self.games.read().map_err(|_| StandingsError::Internal {
            message: "Failed to acquire games read lock".to_string(),
        })
    }
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn save(&self, game: &Game) -> Result<()> {
        let mut games = self.games.write().map_err(|_| StandingsError::Internal {
            message: "Failed to acquire games write lock".to_string(),
        })?;

        games.push(game.clone());
        Ok(())
    }

    async fn find_by_team(&self, team: &str) -> Result<Vec<Game>> {
        let team_games: Vec<Game> = self
            .read_games()?
            .iter()
            .filter(|game| game.involves(team))
            .cloned()
            .collect();

        if team_games.is_empty() {
            return Err(StandingsError::team_not_found(team));
        }

        Ok(team_games)
    }

    async fn find_all(&self) -> Result<Vec<Game>> {
        Ok(self.read_games()?.clone())
    }

    async fn ping(&self) -> Result<()> {
        self.read_games().map(|_| ())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_games() -> (Game, Game, Game) {
        (
            Game::new("A", 1, "B", 0),
            Game::new("B", 2, "C", 2),
            Game::new("C", 3, "A", 4),
        )
    }

    #[tokio::test]
    async fn test_find_by_team_matches_either_side() {
        let store = InMemoryGameStore::new();
        let (g1, g2, g3) = sample_games();
        store.save(&g1).await.unwrap();
        store.save(&g2).await.unwrap();
        store.save(&g3).await.unwrap();

        let a_games = store.find_by_team("A").await.unwrap();
        assert_eq!(a_games, vec![g1, g3]);
    }

    #[tokio::test]
    async fn test_find_by_team_not_found() {
        let store = InMemoryGameStore::new();
        store.save(&Game::new("A", 1, "B", 0)).await.unwrap();

        let err = store.find_by_team("YOU_SHOULD_NOT_FIND_ME").await.unwrap_err();
        assert!(matches!(err, StandingsError::TeamNotFound { .. }));
    }

    #[tokio::test]
    async fn test_find_all_returns_everything() {
        let (g1, g2, g3) = sample_games();
        let store = InMemoryGameStore::with_games(vec![g1.clone(), g2.clone()]);
        store.save(&g3).await.unwrap();

        assert_eq!(store.find_all().await.unwrap(), vec![g1, g2, g3]);
        assert_eq!(store.len().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_identical_games_are_kept() {
        let store = InMemoryGameStore::new();
        let game = Game::new("A", 1, "B", 1);
        store.save(&game).await.unwrap();
        store.save(&game).await.unwrap();

        assert_eq!(store.find_by_team("B").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = InMemoryGameStore::new();
        assert!(store.is_empty().unwrap());
        assert!(store.find_all().await.unwrap().is_empty());
        assert!(store.ping().await.is_ok());
    }
}
