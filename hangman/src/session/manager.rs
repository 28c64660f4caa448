//! Signs and verifies round tokens.

use super::{
    errors::{SessionError, SessionResult},
    models::RoundClaims,
};
use crate::game::GameState;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Default token lifetime in hours
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Round token codec
#[derive(Clone)]
pub struct SessionCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl SessionCodec {
    /// Create a codec with the default 24 hour lifetime
    ///
    /// # Arguments
    ///
    /// * `secret` - HMAC signing secret
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, Duration::hours(DEFAULT_TOKEN_TTL_HOURS))
    }

    /// Create a codec with a custom token lifetime
    pub fn with_ttl(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Token lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign a round into a token
    ///
    /// # Arguments
    ///
    /// * `state` - Round to carry
    ///
    /// # Returns
    ///
    /// * `SessionResult<String>` - Compact JWT or error
    pub fn encode(&self, state: &GameState) -> SessionResult<String> {
        let now = Utc::now();
        let claims = RoundClaims {
            game: state.clone(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Verify a token and recover its round
    ///
    /// # Arguments
    ///
    /// * `token` - Token previously produced by [`SessionCodec::encode`]
    ///
    /// # Returns
    ///
    /// * `SessionResult<GameState>` - Round or error if the token is blank,
    ///   malformed, signed with another secret, or expired
    pub fn decode(&self, token: &str) -> SessionResult<GameState> {
        if token.trim().is_empty() {
            return Err(SessionError::Missing);
        }

        let token_data = decode::<RoundClaims>(token, &self.decoding_key, &Validation::default())?;
        Ok(token_data.claims.game)
    }
}

impl std::fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCodec")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
