//! Round cookie handling.
//!
//! The current round travels in a `game` cookie holding a signed token.
//! Handlers take a [`CurrentRound`] extractor, which is `None` whenever the
//! cookie is missing, tampered with, or expired. That always reads as "no
//! active round"; it never fails the request.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, HeaderValue, header::COOKIE, request::Parts},
};
use hangman::GameState;
use std::convert::Infallible;

use super::{AppState, errors::ApiError};

/// Cookie name carrying the round token
pub const GAME_COOKIE: &str = "game";

/// Round decoded from the request cookie, if any
#[derive(Debug, Clone)]
pub struct CurrentRound(pub Option<GameState>);

impl CurrentRound {
    /// Round still being played
    pub fn in_progress(self) -> Option<GameState> {
        self.0.filter(|round| !round.is_finished())
    }

    /// Round that has ended
    pub fn finished(self) -> Option<GameState> {
        self.0.filter(GameState::is_finished)
    }
}

impl FromRequestParts<AppState> for CurrentRound {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = cookie_value(&parts.headers, GAME_COOKIE) else {
            return Ok(Self(None));
        };

        match state.codec.decode(token) {
            Ok(round) => Ok(Self(Some(round))),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring unusable round cookie");
                Ok(Self(None))
            }
        }
    }
}

/// Find a cookie by name across every `Cookie` header
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Build the `Set-Cookie` value carrying `round`
pub fn round_cookie(state: &AppState, round: &GameState) -> Result<HeaderValue, ApiError> {
    let token = state.codec.encode(round)?;
    let cookie = format!(
        "{GAME_COOKIE}={token}; Path=/; HttpOnly; SameSite=Strict; Max-Age={}",
        state.codec.ttl().num_seconds()
    );

    Ok(HeaderValue::from_str(&cookie)?)
}
