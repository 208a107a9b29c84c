//! SQLite-backed game store
//!
//! Games live in a single `games` table. The table is created on connect
//! if it does not exist yet.

use crate::error::{Result, StandingsError};
use crate::store::GameStore;
use crate::types::Game;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

const CREATE_GAMES_TABLE: &str = r#"CREATE TABLE IF NOT EXISTS games (
    team_a TEXT NOT NULL,
    score_a INTEGER NOT NULL,
    team_b TEXT NOT NULL,
    score_b INTEGER NOT NULL
)"#;

/// Connection settings for [`SqliteGameStore::connect`]
#[derive(Debug, Clone)]
pub struct SqliteStoreOptions {
    pub database_url: String,
    pub max_connections: u32,
    pub connect_attempts: u32,
    pub retry_delay: Duration,
}

impl Default for SqliteStoreOptions {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 5,
            connect_attempts: 5,
            retry_delay: Duration::from_secs(1),
        }
    }
}

/// Row from the games table
#[derive(Debug, sqlx::FromRow)]
struct GameRow {
    team_a: String,
    score_a: i64,
    team_b: String,
    score_b: i64,
}

impl GameRow {
    fn into_game(self) -> Result<Game> {
        let score_a = stored_score(self.score_a)?;
        let score_b = stored_score(self.score_b)?;
        Ok(Game::new(self.team_a, score_a, self.team_b, score_b))
    }
}

fn stored_score(score: i64) -> Result<u32> {
    u32::try_from(score).map_err(|_| StandingsError::Store {
        message: format!("stored score {} is out of range", score),
    })
}

/// SQLite game storage implementation
#[derive(Debug, Clone)]
pub struct SqliteGameStore {
    pool: SqlitePool,
}

impl SqliteGameStore {
    /// Wrap an existing pool and make sure the games table exists
    pub async fn new(pool: SqlitePool) -> Result<Self> {
        sqlx::query(CREATE_GAMES_TABLE).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Connect to the database, retrying while it is unavailable
    pub async fn connect(options: &SqliteStoreOptions) -> Result<Self> {
        let attempts = options.connect_attempts.max(1);
        let mut last_error = None;

        for attempt in 1..=attempts {
            match Self::open_pool(options).await {
                Ok(pool) => {
                    info!(
                        "Connected to SQLite database at {} (attempt {}/{})",
                        options.database_url, attempt, attempts
                    );
                    return Self::new(pool).await;
                }
                Err(e) => {
                    warn!(
                        "SQLite connection attempt {}/{} failed: {}",
                        attempt, attempts, e
                    );
                    last_error = Some(e);
                    if attempt < attempts {
                        tokio::time::sleep(options.retry_delay).await;
                    }
                }
            }
        }

        Err(last_error.map(StandingsError::from).unwrap_or_else(|| {
            StandingsError::Store {
                message: "no connection attempt was made".to_string(),
            }
        }))
    }

    async fn open_pool(options: &SqliteStoreOptions) -> std::result::Result<SqlitePool, sqlx::Error> {
        let connect_options =
            SqliteConnectOptions::from_str(&options.database_url)?.create_if_missing(true);

        let pool_options = if is_memory_url(&options.database_url) {
            // Every connection to :memory: gets its own database
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(options.max_connections)
        };

        pool_options.connect_with(connect_options).await
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the pool, waiting for open connections to finish
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[async_trait]
impl GameStore for SqliteGameStore {
    async fn save(&self, game: &Game) -> Result<()> {
        sqlx::query(
            r#"INSERT INTO games (team_a, score_a, team_b, score_b) VALUES (?, ?, ?, ?)"#,
        )
        .bind(&game.team_a)
        .bind(i64::from(game.score_a))
        .bind(&game.team_b)
        .bind(i64::from(game.score_b))
        .execute(&self.pool)
        .await?;

        debug!("Stored game {}", game);
        Ok(())
    }

    async fn find_by_team(&self, team: &str) -> Result<Vec<Game>> {
        let rows = sqlx::query_as::<_, GameRow>(
            r#"SELECT team_a, score_a, team_b, score_b FROM games
               WHERE team_a = ? OR team_b = ?"#,
        )
        .bind(team)
        .bind(team)
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Err(StandingsError::team_not_found(team));
        }

        rows.into_iter().map(GameRow::into_game).collect()
    }

    async fn find_all(&self) -> Result<Vec<Game>> {
        let rows = sqlx::query_as::<_, GameRow>(
            r#"SELECT team_a, score_a, team_b, score_b FROM games"#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(GameRow::into_game).collect()
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
