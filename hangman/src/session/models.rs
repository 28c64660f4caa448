//! Round token claims.

use crate::game::GameState;
use serde::{Deserialize, Serialize};

/// JWT claims carrying a whole round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundClaims {
    pub game: GameState,
    pub exp: i64, // Expiration timestamp
    pub iat: i64, // Issued at timestamp
}
