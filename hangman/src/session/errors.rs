//! Round token error types.

use thiserror::Error;

/// Round token errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// Token could not be signed, or failed signature/expiry checks
    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    /// No token was presented
    #[error("No active round")]
    Missing,
}

impl SessionError {
    /// Get a client-safe error message that doesn't leak token internals
    pub fn client_message(&self) -> String {
        match self {
            SessionError::JwtError(_) => "No active round".to_string(),
            SessionError::Missing => self.to_string(),
        }
    }
}

/// Result type for round token operations
pub type SessionResult<T> = Result<T, SessionError>;
