//! Integration tests for the tournament standings service
//!
//! These tests drive the tournament through its public API against the
//! in-memory store:
//! - Recording games and reading single-team stats
//! - League table ordering and tie-breaks
//! - Error propagation from the store

mod fixtures;

use std::sync::Arc;
use tournament::store::InMemoryGameStore;
use tournament::{Game, StandingsError, Stats, Tournament};

use fixtures::{three_game_league, UnavailableGameStore};

fn stats(team: &str, played: u32, won: u32, drawn: u32, lost: u32, points: u32) -> Stats {
    Stats {
        team: team.to_string(),
        played,
        won,
        drawn,
        lost,
        points,
    }
}

async fn tournament_with(games: Vec<Game>) -> Tournament {
    let tournament = Tournament::new(Arc::new(InMemoryGameStore::new()));
    for game in games {
        tournament.play(game).await.unwrap();
    }
    tournament
}

#[tokio::test]
async fn test_single_game() {
    let tournament = tournament_with(vec![Game::new("a", 2, "b", 1)]).await;

    assert_eq!(
        tournament.team_stats("a").await.unwrap(),
        stats("a", 1, 1, 0, 0, 3)
    );
    assert_eq!(
        tournament.team_stats("b").await.unwrap(),
        stats("b", 1, 0, 0, 1, 0)
    );
}

#[tokio::test]
async fn test_drawn_game() {
    let tournament = tournament_with(vec![Game::new("a", 1, "b", 1)]).await;

    assert_eq!(
        tournament.team_stats("a").await.unwrap(),
        stats("a", 1, 0, 1, 0, 1)
    );
    assert_eq!(
        tournament.team_stats("b").await.unwrap(),
        stats("b", 1, 0, 1, 0, 1)
    );
}

#[tokio::test]
async fn test_multiple_games() {
    let tournament = tournament_with(three_game_league()).await;

    assert_eq!(
        tournament.team_stats("a").await.unwrap(),
        stats("a", 2, 1, 1, 0, 4)
    );
    assert_eq!(
        tournament.team_stats("b").await.unwrap(),
        stats("b", 2, 0, 0, 2, 0)
    );
    assert_eq!(
        tournament.team_stats("c").await.unwrap(),
        stats("c", 2, 1, 1, 0, 4)
    );
}

#[tokio::test]
async fn test_get_all_stats_ranked() {
    let tournament = tournament_with(three_game_league()).await;

    let all = tournament.all_stats().await.unwrap();
    assert_eq!(
        all,
        vec![
            stats("a", 2, 1, 1, 0, 4),
            stats("c", 2, 1, 1, 0, 4),
            stats("b", 2, 0, 0, 2, 0),
        ]
    );

    // Asking again gives the same table
    assert_eq!(tournament.all_stats().await.unwrap(), all);
}

#[tokio::test]
async fn test_insertion_order_does_not_change_table() {
    let mut games = three_game_league();
    let forward = tournament_with(games.clone()).await.all_stats().await.unwrap();

    games.reverse();
    let backward = tournament_with(games).await.all_stats().await.unwrap();

    assert_eq!(forward, backward);
}

#[tokio::test]
async fn test_get_stats_for_team_that_never_played() {
    let tournament = tournament_with(three_game_league()).await;

    let err = tournament.team_stats("unknown").await.unwrap_err();
    assert!(matches!(err, StandingsError::TeamNotFound { team } if team == "unknown"));
}

#[tokio::test]
async fn test_empty_league() {
    let tournament = tournament_with(Vec::new()).await;
    assert!(tournament.all_stats().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_game_is_not_stored() {
    let store = Arc::new(InMemoryGameStore::new());
    let tournament = Tournament::new(store.clone());

    let err = tournament
        .play(Game::new("", 1, "b", 0))
        .await
        .unwrap_err();
    assert!(matches!(err, StandingsError::Validation { .. }));
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn test_store_failure_surfaces_to_caller() {
    let store = Arc::new(UnavailableGameStore::new());
    let tournament = Tournament::new(store.clone());

    assert!(tournament.all_stats().await.unwrap_err().is_store_failure());
    assert!(tournament.team_stats("a").await.unwrap_err().is_store_failure());
    assert!(tournament
        .play(Game::new("a", 1, "b", 0))
        .await
        .unwrap_err()
        .is_store_failure());

    assert_eq!(store.call_count(), 3);
}

#[tokio::test]
async fn test_concurrent_submissions() {
    let tournament = Arc::new(tournament_with(Vec::new()).await);

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let tournament = tournament.clone();
            tokio::spawn(async move {
                let game = if i % 2 == 0 {
                    Game::new("home", 2, "away", 0)
                } else {
                    Game::new("home", 1, "away", 1)
                };
                tournament.play(game).await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let home = tournament.team_stats("home").await.unwrap();
    assert_eq!(home, stats("home", 20, 10, 10, 0, 40));
}
