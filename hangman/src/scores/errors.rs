//! Leaderboard error types.

use thiserror::Error;

/// Leaderboard errors
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Score file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Score file holds something other than a list of records
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Only finished rounds can be recorded
    #[error("Round is not finished")]
    RoundNotFinished,
}

impl ScoreError {
    /// Get a client-safe error message that doesn't leak file paths
    pub fn client_message(&self) -> String {
        match self {
            ScoreError::Io(_) | ScoreError::Serde(_) => "Leaderboard unavailable".to_string(),
            ScoreError::RoundNotFinished => self.to_string(),
        }
    }
}

/// Result type for leaderboard operations
pub type ScoreResult<T> = Result<T, ScoreError>;
