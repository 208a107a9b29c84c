//! Standings route handlers

use crate::api::error::ApiError;
use crate::service::AppState;
use crate::types::{Game, GameSubmission, Stats};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;

// POST /games - Record a game result
pub async fn record_game(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GameSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let metrics = state.metrics();
    let timer = metrics.start_timer();

    let result = async {
        let Json(submission) = payload?;
        let game = submission.validate()?;
        state.tournament().play(game.clone()).await?;
        Ok::<_, ApiError>(game)
    }
    .await;

    metrics.record_request("play", result.is_ok(), timer.stop());

    let game = result?;
    metrics.record_game_recorded();
    Ok((StatusCode::CREATED, Json(game)))
}

// GET /stats - League table
pub async fn get_all_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Stats>>, ApiError> {
    let metrics = state.metrics();
    let timer = metrics.start_timer();

    let result = state.tournament().all_stats().await;
    metrics.record_request("all_stats", result.is_ok(), timer.stop());

    let table = result?;
    metrics.record_league_table(table.len());
    debug!("Serving league table with {} teams", table.len());
    Ok(Json(table))
}

// GET /stats/{team} - One team's standing
pub async fn get_team_stats(
    State(state): State<Arc<AppState>>,
    Path(team): Path<String>,
) -> Result<Json<Stats>, ApiError> {
    let metrics = state.metrics();
    let timer = metrics.start_timer();

    let result = state.tournament().team_stats(&team).await;
    metrics.record_request("team_stats", result.is_ok(), timer.stop());

    Ok(Json(result?))
}
