use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::constants::{self, MAX_ATTEMPTS, PLACEHOLDER};

/// Player name shown on the game pages and the leaderboard.
///
/// Surrounding whitespace is dropped and the name is capped at
/// [`constants::MAX_PLAYER_NAME_LENGTH`] characters. The engine never looks
/// inside it.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Username(String);

impl Username {
    pub fn new(s: &str) -> Self {
        Self(
            s.trim()
                .chars()
                .take(constants::MAX_PLAYER_NAME_LENGTH)
                .collect(),
        )
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for Username {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}

impl From<String> for Username {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

/// Feedback left on the state by the last transition.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    EmptyGuess,
    LetterAlreadyTried,
    CorrectLetter,
    WrongLetter,
    CorrectWord,
    WrongWord,
    InvalidEntry,
    HintUsed,
    NothingToReveal,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::EmptyGuess => "please enter a letter or word",
            Self::LetterAlreadyTried => "letter already tried",
            Self::CorrectLetter => "correct letter",
            Self::WrongLetter => "wrong letter",
            Self::CorrectWord => "correct word",
            Self::WrongWord => "wrong word",
            Self::InvalidEntry => "invalid entry",
            Self::HintUsed => "hint used",
            Self::NothingToReveal => "no letter to reveal",
        };
        write!(f, "{repr}")
    }
}

/// Everything there is to know about one round.
///
/// The value travels with the client between requests; the engine keeps
/// no copy of it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GameState {
    pub player: Username,
    pub difficulty: String,
    /// Uppercased target word. Never changes once the round exists.
    pub(crate) secret: String,
    /// One slot per character of `secret`; `None` is still hidden.
    pub(crate) reveal: Vec<Option<char>>,
    pub(crate) attempts_remaining: i32,
    /// Letters in the order they were tried, without duplicates.
    pub(crate) tried_letters: Vec<char>,
    pub(crate) message: Option<Feedback>,
    pub(crate) finished: bool,
    pub(crate) won: bool,
}

impl GameState {
    /// Fresh round for `secret`, with every slot hidden.
    #[must_use]
    pub fn new(player: Username, difficulty: &str, secret: &str) -> Self {
        let secret = secret.to_uppercase();
        let reveal = vec![None; secret.chars().count()];
        Self {
            player,
            difficulty: difficulty.to_string(),
            secret,
            reveal,
            attempts_remaining: MAX_ATTEMPTS,
            tried_letters: Vec::new(),
            message: None,
            finished: false,
            won: false,
        }
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[must_use]
    pub fn reveal(&self) -> &[Option<char>] {
        &self.reveal
    }

    /// Revealed characters and placeholders separated by single spaces,
    /// e.g. `C _ _ _`.
    #[must_use]
    pub fn reveal_string(&self) -> String {
        let slots: Vec<String> = self
            .reveal
            .iter()
            .map(|slot| slot.unwrap_or(PLACEHOLDER).to_string())
            .collect();
        slots.join(" ")
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> i32 {
        self.attempts_remaining
    }

    #[must_use]
    pub fn attempts_used(&self) -> i32 {
        MAX_ATTEMPTS - self.attempts_remaining
    }

    #[must_use]
    pub fn tried_letters(&self) -> &[char] {
        &self.tried_letters
    }

    #[must_use]
    pub fn message(&self) -> Option<Feedback> {
        self.message
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Only meaningful once [`GameState::is_finished`] is true.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.reveal.iter().all(Option::is_some)
    }

    pub(crate) fn has_tried(&self, letter: char) -> bool {
        self.tried_letters.contains(&letter)
    }

    /// Shows `letter` in every slot where the secret has it. Returns how
    /// many slots changed.
    pub(crate) fn reveal_letter(&mut self, letter: char) -> usize {
        let mut revealed = 0;
        for (slot, c) in self.reveal.iter_mut().zip(self.secret.chars()) {
            if c == letter && slot.is_none() {
                *slot = Some(c);
                revealed += 1;
            }
        }
        revealed
    }

    pub(crate) fn reveal_all(&mut self) {
        for (slot, c) in self.reveal.iter_mut().zip(self.secret.chars()) {
            *slot = Some(c);
        }
    }

    pub(crate) fn finish(&mut self, won: bool) {
        self.finished = true;
        self.won = won;
    }
}

/// Uppercases the first character, leaving the rest untouched.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
