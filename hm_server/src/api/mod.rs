//! HTTP API for the hangman server.
//!
//! Server-rendered HTML pages backed by the [`hangman`] engine. The server
//! keeps no per-player state: the current round rides in a signed `game`
//! cookie and finished rounds can be appended to the leaderboard.
//!
//! # Modules
//!
//! - [`game`]: Start form, game page, guesses, hints, end page
//! - [`scores`]: Leaderboard page and score saving
//! - [`session`]: Round cookie extractor and `Set-Cookie` builder
//! - [`views`]: HTML rendering with escaping
//! - [`request_id`]: Request correlation, tracing spans, HTTP metrics
//!
//! # Endpoints Overview
//!
//! ```text
//! GET  /            - Start form
//! POST /            - Start a round (form: username, difficulty)
//! GET  /game        - Round in progress
//! POST /play        - Guess a letter or the word (form: guess)
//! POST /hint        - Reveal a letter for one attempt
//! GET  /end         - Finished round
//! GET  /scores      - Ranked leaderboard
//! POST /save-score  - Save the finished round
//! GET  /static/*    - Stylesheet and other assets
//! GET  /health      - Health check (JSON)
//! ```
//!
//! Anything else gets the 404 page.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use hm_server::api::{AppState, create_router};
//! use hangman::{
//!     Engine,
//!     catalog::{SeededRandom, WordCatalog},
//!     scores::JsonFileStore,
//!     session::SessionCodec,
//! };
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = WordCatalog::load("words/words.txt").await?;
//! let state = AppState {
//!     engine: Arc::new(Engine::new(catalog, "facile", SeededRandom::new())?),
//!     codec: Arc::new(SessionCodec::new("an_example_secret_of_32_characters!!")),
//!     scores: Arc::new(JsonFileStore::new("scores/scores.json")),
//!     static_dir: "static".into(),
//! };
//!
//! let app = create_router(state);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod game;
pub mod request_id;
pub mod scores;
pub mod session;
pub mod views;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
};
use hangman::{Engine, scores::ScoreStore, session::SessionCodec};
use serde_json::json;
use std::{path::PathBuf, sync::Arc};
use tower_http::services::ServeDir;

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
    pub codec: Arc<SessionCodec>,
    pub scores: Arc<dyn ScoreStore>,
    pub static_dir: PathBuf,
}

/// Create the router with every page, the static files, and middleware.
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(game::index).post(game::start_round))
        .route("/game", get(game::show_game))
        .route("/play", get(game::redirect_to_game).post(game::play))
        .route("/hint", get(game::redirect_to_game).post(game::hint))
        .route("/end", get(game::show_end))
        .route("/scores", get(scores::list_scores))
        .route("/save-score", post(scores::save_score))
        .route("/health", get(health_check))
        .route("/404", get(not_found))
        .nest_service("/static", static_files)
        .fallback(not_found)
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .with_state(state)
}

/// Health check endpoint for monitoring and load balancers.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/health
/// # {"status":"healthy","version":"1.0.0","difficulties":3,"words":42,"timestamp":"2026-10-18T10:30:00Z"}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.engine.catalog();

    let response = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "difficulties": catalog.difficulties().len(),
        "words": catalog.len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(response))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(views::not_found_page()))
}
