//! Handler error type.

use axum::{
    http::{StatusCode, header::InvalidHeaderValue},
    response::{Html, IntoResponse, Response},
};
use hangman::{scores::ScoreError, session::SessionError};
use thiserror::Error;

use super::views;

/// Operational failures surfaced by handlers
///
/// Game-rule outcomes never get here; they live in the round state.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Round token could not be issued
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Leaderboard could not be read or written
    #[error("Score store error: {0}")]
    Scores(#[from] ScoreError),

    /// Cookie could not be encoded as a header value
    #[error("Invalid header value: {0}")]
    Header(#[from] InvalidHeaderValue),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Scores(ScoreError::RoundNotFinished) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            ApiError::Session(_) | ApiError::Header(_) => "Could not save the round".to_string(),
            ApiError::Scores(e) => e.client_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Html(views::error_page(&self.client_message()))).into_response()
    }
}
