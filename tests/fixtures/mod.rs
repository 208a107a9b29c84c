//! Test fixtures and store implementations for integration testing

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tournament::config::{AppConfig, StorageBackend};
use tournament::service::AppState;
use tournament::store::{GameStore, InMemoryGameStore};
use tournament::{Game, Result, StandingsError};

/// The three-game league used throughout the scenarios
pub fn three_game_league() -> Vec<Game> {
    vec![
        Game::new("a", 1, "b", 0),
        Game::new("a", 3, "c", 3),
        Game::new("b", 0, "c", 1),
    ]
}

/// Config that keeps everything in memory
pub fn memory_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.storage.backend = StorageBackend::Memory;
    config
}

/// Running app state over a fresh in-memory store
pub async fn running_state() -> Arc<AppState> {
    running_state_with_store(Arc::new(InMemoryGameStore::new())).await
}

/// Running app state over the given store
pub async fn running_state_with_store(store: Arc<dyn GameStore>) -> Arc<AppState> {
    let state = AppState::with_store(memory_config(), store).expect("Failed to build app state");
    state.start().await;
    Arc::new(state)
}

/// Store whose every operation fails, counting the calls it receives
#[derive(Debug, Default)]
pub struct UnavailableGameStore {
    calls: AtomicUsize,
}

impl UnavailableGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StandingsError::Store {
            message: "database unavailable".to_string(),
        })
    }
}

#[async_trait]
impl GameStore for UnavailableGameStore {
    async fn save(&self, _game: &Game) -> Result<()> {
        self.fail()
    }

    async fn find_by_team(&self, _team: &str) -> Result<Vec<Game>> {
        self.fail()
    }

    async fn find_all(&self) -> Result<Vec<Game>> {
        self.fail()
    }

    async fn ping(&self) -> Result<()> {
        self.fail()
    }

    fn backend_name(&self) -> &'static str {
        "unavailable"
    }
}
