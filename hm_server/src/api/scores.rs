//! Leaderboard handlers.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use hangman::scores::{ScoreRecord, leaderboard};

use super::{AppState, errors::ApiError, session::CurrentRound, views};
use crate::{logging, metrics};

/// Ranked leaderboard.
///
/// # Response
///
/// - `200 OK`: every saved round, wins first then most attempts left
/// - `500 Internal Server Error`: the score file could not be read
pub async fn list_scores(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let records = state.scores.load_all().await.inspect_err(|_| {
        metrics::score_store_errors_total("load");
    })?;

    Ok(Html(views::scores_page(&leaderboard(&records))))
}

/// Record the finished round carried by the cookie.
///
/// # Response
///
/// - `303 See Other` to `/scores` once the record is stored
/// - `303 See Other` to `/` when no finished round is carried
/// - `500 Internal Server Error`: the score file could not be written
pub async fn save_score(
    State(state): State<AppState>,
    round: CurrentRound,
) -> Result<Response, ApiError> {
    let Some(round) = round.finished() else {
        return Ok(Redirect::to("/").into_response());
    };

    let record = ScoreRecord::from_finished(&round, Utc::now())?;
    state.scores.append(record).await.inspect_err(|_| {
        metrics::score_store_errors_total("append");
    })?;

    metrics::scores_saved_total();
    logging::log_round_event(
        "score_saved",
        round.player.as_str(),
        &round.difficulty,
        "Score saved",
    );

    Ok(Redirect::to("/scores").into_response())
}
