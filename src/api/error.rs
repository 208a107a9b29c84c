//! Mapping from standings errors to HTTP responses

use crate::error::StandingsError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

/// JSON error body returned by every failing API route
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

/// Error returned from API handlers
#[derive(Debug)]
pub struct ApiError(pub StandingsError);

impl From<StandingsError> for ApiError {
    fn from(err: StandingsError) -> Self {
        ApiError(err)
    }
}

// Malformed bodies are reported like any other invalid game
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(StandingsError::validation(rejection.body_text()))
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            StandingsError::TeamNotFound { .. } => StatusCode::NOT_FOUND,
            StandingsError::Validation { .. } => StatusCode::BAD_REQUEST,
            StandingsError::Store { .. }
            | StandingsError::Database(_)
            | StandingsError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self.0 {
            StandingsError::TeamNotFound { team } => format!("Team '{}' not found", team),
            other => other.to_string(),
        };

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        let body = Json(ErrorResponse {
            code: status.as_u16(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError(StandingsError::team_not_found("a")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError(StandingsError::validation("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(StandingsError::Store {
                message: "down".to_string()
            })
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
