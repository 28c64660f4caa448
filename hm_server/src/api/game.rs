//! Round handlers: start form, game page, guesses, hints, and the end page.
//!
//! Every mutating handler follows the same shape: decode the round from the
//! cookie, apply one transition, write the new round back into the cookie,
//! and answer with a `303 See Other` so a browser refresh never replays a
//! form submission.

use axum::{
    Form,
    extract::State,
    http::header::SET_COOKIE,
    response::{Html, IntoResponse, Redirect, Response},
};
use hangman::{Feedback, GameError, GameState};
use serde::Deserialize;

use super::{
    AppState,
    errors::ApiError,
    session::{CurrentRound, round_cookie},
    views,
};
use crate::{logging, metrics};

/// Shown when the start form is submitted with a blank field
const MISSING_FIELDS: &str = "please fill in all fields";

/// Start form body
#[derive(Debug, Deserialize)]
pub struct StartForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub difficulty: String,
}

/// Guess form body
#[derive(Debug, Deserialize)]
pub struct GuessForm {
    #[serde(default)]
    pub guess: String,
}

/// Start form.
///
/// # Response
///
/// - `200 OK`: HTML form listing the catalog difficulties
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(views::index_page(&state.engine.catalog().difficulties(), None))
}

/// Start a new round.
///
/// Any round carried by the request is discarded.
///
/// # Response
///
/// - `303 See Other` to `/game` with a fresh round cookie
/// - `200 OK`: the start form again with an error when a field is blank
pub async fn start_round(
    State(state): State<AppState>,
    Form(form): Form<StartForm>,
) -> Result<Response, ApiError> {
    let round = match state.engine.start_round(&form.username, &form.difficulty) {
        Ok(round) => round,
        Err(GameError::MissingInput(field)) => {
            tracing::debug!(field = %field, "Start form incomplete");
            let difficulties = state.engine.catalog().difficulties();
            return Ok(Html(views::index_page(&difficulties, Some(MISSING_FIELDS))).into_response());
        }
        Err(GameError::RoundOver) => return Ok(Redirect::to("/").into_response()),
    };

    metrics::rounds_started_total(&round.difficulty);
    logging::log_round_event(
        "round_started",
        round.player.as_str(),
        &round.difficulty,
        "New round",
    );

    let cookie = round_cookie(&state, &round)?;
    Ok(([(SET_COOKIE, cookie)], Redirect::to("/game")).into_response())
}

/// Round in progress.
///
/// # Response
///
/// - `200 OK`: masked word, attempts, tried letters, and last feedback
/// - `303 See Other` to `/` when there is no round to play
pub async fn show_game(round: CurrentRound) -> Response {
    match round.in_progress() {
        Some(round) => Html(views::game_page(&round)).into_response(),
        None => Redirect::to("/").into_response(),
    }
}

/// Guess a letter or the whole word.
///
/// # Response
///
/// - `303 See Other` to `/end` when the guess finished the round, else `/game`
/// - `303 See Other` to `/` when there is no round to play
pub async fn play(
    State(state): State<AppState>,
    round: CurrentRound,
    Form(form): Form<GuessForm>,
) -> Result<Response, ApiError> {
    let Some(mut round) = round.in_progress() else {
        return Ok(Redirect::to("/").into_response());
    };

    match round.apply_guess(&form.guess) {
        Ok(feedback) => {
            metrics::moves_total("guess");
            after_move(&state, &round, feedback)
        }
        Err(_) => Ok(Redirect::to("/").into_response()),
    }
}

/// Spend an attempt to reveal one letter.
///
/// # Response
///
/// - `303 See Other` to `/end` when the hint finished the round, else `/game`
pub async fn hint(State(state): State<AppState>, round: CurrentRound) -> Result<Response, ApiError> {
    let Some(mut round) = round.in_progress() else {
        return Ok(Redirect::to("/game").into_response());
    };

    match round.apply_hint() {
        Ok(feedback) => {
            metrics::moves_total("hint");
            after_move(&state, &round, feedback)
        }
        Err(_) => Ok(Redirect::to("/game").into_response()),
    }
}

/// Finished round.
///
/// # Response
///
/// - `200 OK`: outcome, secret word, and the save-score form
/// - `303 See Other` to `/` when no finished round is carried
pub async fn show_end(round: CurrentRound) -> Response {
    match round.finished() {
        Some(round) => Html(views::end_page(&round)).into_response(),
        None => Redirect::to("/").into_response(),
    }
}

/// `GET` on a form target goes back to the game page.
pub async fn redirect_to_game() -> Redirect {
    Redirect::to("/game")
}

/// Store the updated round and send the player to the next page
fn after_move(state: &AppState, round: &GameState, feedback: Feedback) -> Result<Response, ApiError> {
    let cookie = round_cookie(state, round)?;

    let target = if round.is_finished() {
        metrics::rounds_finished_total(round.is_won());
        logging::log_round_event(
            "round_finished",
            round.player.as_str(),
            &round.difficulty,
            if round.is_won() { "Round won" } else { "Round lost" },
        );
        "/end"
    } else {
        tracing::debug!(player = %round.player.as_str(), %feedback, "Move applied");
        "/game"
    };

    Ok(([(SET_COOKIE, cookie)], Redirect::to(target)).into_response())
}
