//! Leaderboard records.

use super::errors::{ScoreError, ScoreResult};
use crate::game::GameState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// One finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub username: String,
    pub difficulty: String,
    pub word: String,
    pub won: bool,
    /// Attempts left when the round ended
    pub attempts: i32,
    pub date: DateTime<Utc>,
}

impl ScoreRecord {
    /// Build a record from a finished round
    ///
    /// # Arguments
    ///
    /// * `state` - Round to record
    /// * `date` - Time the score is saved
    ///
    /// # Returns
    ///
    /// * `ScoreResult<ScoreRecord>` - Record, or `RoundNotFinished`
    pub fn from_finished(state: &GameState, date: DateTime<Utc>) -> ScoreResult<Self> {
        if !state.is_finished() {
            return Err(ScoreError::RoundNotFinished);
        }

        Ok(Self {
            username: state.player.to_string(),
            difficulty: state.difficulty.clone(),
            word: state.secret().to_string(),
            won: state.is_won(),
            attempts: state.attempts_remaining(),
            date,
        })
    }
}

/// Rank records for display: wins first, then most attempts left, then
/// whoever got there first.
pub fn leaderboard(records: &[ScoreRecord]) -> Vec<&ScoreRecord> {
    let mut ranked: Vec<&ScoreRecord> = records.iter().collect();
    ranked.sort_by_key(|record| (Reverse(record.won), Reverse(record.attempts), record.date));
    ranked
}
