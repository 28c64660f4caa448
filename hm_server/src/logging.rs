//! Structured logging configuration.
//!
//! This module provides structured logging with request correlation and
//! round lifecycle events.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging
///
/// Features:
/// - Request ID correlation
/// - Round lifecycle events
/// - Records from the `log` facade (used by the game library) forwarded
/// - Configurable log levels via RUST_LOG env var
///
/// # Example
///
/// ```no_run
/// use hm_server::logging;
///
/// #[tokio::main]
/// async fn main() {
///     logging::init();
///     tracing::info!("Server starting");
/// }
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=warn,hyper=warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Structured logging initialized");
}

/// Log a round lifecycle event with structured data
///
/// # Arguments
///
/// * `event_type` - Type of event (`round_started`, `round_finished`, `score_saved`)
/// * `player` - Player name
/// * `difficulty` - Difficulty key of the round
/// * `message` - Event message
///
/// # Example
///
/// ```
/// use hm_server::logging::log_round_event;
///
/// log_round_event("round_started", "alice", "facile", "New round");
/// ```
pub fn log_round_event(event_type: &str, player: &str, difficulty: &str, message: &str) {
    tracing::info!(
        event_type = event_type,
        player = player,
        difficulty = difficulty,
        "ROUND: {}",
        message
    );
}

/// Log API request/response
///
/// # Arguments
///
/// * `method` - HTTP method
/// * `path` - Request path
/// * `status_code` - Response status code
/// * `duration_ms` - Request duration in milliseconds
///
pub fn log_api_request(method: &str, path: &str, status_code: u16, duration_ms: u64) {
    if status_code >= 500 {
        tracing::warn!(
            http_method = method,
            http_path = path,
            http_status = status_code,
            duration_ms = duration_ms,
            "API request failed"
        );
    } else {
        tracing::debug!(
            http_method = method,
            http_path = path,
            http_status = status_code,
            duration_ms = duration_ms,
            "API request completed"
        );
    }
}
