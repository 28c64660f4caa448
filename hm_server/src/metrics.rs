//! Prometheus metrics for monitoring the game server.
//!
//! Metrics are recorded through the `metrics` facade and, when an exporter
//! address is configured, exposed in Prometheus text format.
//!
//! # Metrics Categories
//!
//! - **HTTP Metrics**: Request counts, duration, status codes
//! - **Game Metrics**: Rounds started and finished, guesses, hints
//! - **Leaderboard Metrics**: Scores saved, store failures
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use hm_server::metrics;
//! use std::net::SocketAddr;
//!
//! // Initialize metrics exporter
//! let addr: SocketAddr = "127.0.0.1:9090".parse().unwrap();
//! metrics::init_metrics(addr).unwrap();
//!
//! // Record a round start
//! metrics::rounds_started_total("facile");
//! ```

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Metrics will be available at `http://<addr>/metrics`.
///
/// # Arguments
///
/// - `addr`: Address to bind the metrics server to (e.g., `0.0.0.0:9090`)
///
/// # Returns
///
/// Result indicating success or error message
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request.
pub fn http_requests_total(method: &str, path: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record HTTP request duration in milliseconds.
pub fn http_request_duration_ms(method: &str, path: &str, duration_ms: f64) {
    metrics::histogram!("http_request_duration_ms",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(duration_ms);
}

// ============================================================================
// Game Metrics
// ============================================================================

/// Increment rounds started counter.
pub fn rounds_started_total(difficulty: &str) {
    metrics::counter!("rounds_started_total",
        "difficulty" => difficulty.to_string()
    )
    .increment(1);
}

/// Increment guesses counter by move kind (`guess` or `hint`).
pub fn moves_total(kind: &'static str) {
    metrics::counter!("moves_total", "kind" => kind).increment(1);
}

/// Increment rounds finished counter.
pub fn rounds_finished_total(won: bool) {
    metrics::counter!("rounds_finished_total",
        "won" => won.to_string()
    )
    .increment(1);
}

// ============================================================================
// Leaderboard Metrics
// ============================================================================

/// Increment saved scores counter.
pub fn scores_saved_total() {
    metrics::counter!("scores_saved_total").increment(1);
}

/// Increment leaderboard store failures counter.
pub fn score_store_errors_total(operation: &'static str) {
    metrics::counter!("score_store_errors_total", "operation" => operation).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_exporter_is_noop() {
        http_requests_total("GET", "/", 200);
        http_request_duration_ms("GET", "/", 1.5);
        rounds_started_total("facile");
        moves_total("guess");
        rounds_finished_total(true);
        scores_saved_total();
        score_store_errors_total("append");
    }
}
