//! Guess and hint transitions.
//!
//! A raw guess is classified into one of a closed set of moves; each move
//! knows how to apply itself to a [`GameState`]. Rule outcomes (wrong
//! letter, lost round, repeated letter) end up in the state. The only
//! error is touching a round that is already over.

use enum_dispatch::enum_dispatch;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{Feedback, GameState};

/// Errors raised before a transition is attempted
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum GameError {
    #[error("round already over")]
    RoundOver,
    #[error("missing {0}")]
    MissingInput(String),
}

pub type GameResult<T> = Result<T, GameError>;

/// A single state change
#[enum_dispatch]
pub trait Transition {
    fn apply(&self, state: &mut GameState) -> Feedback;
}

/// Nothing was typed.
#[derive(Debug)]
pub struct Blank;

/// Input that is neither a letter nor a word of the right length.
#[derive(Debug)]
pub struct Invalid;

#[derive(Debug)]
pub struct LetterGuess {
    letter: char,
}

#[derive(Debug)]
pub struct WordGuess {
    word: String,
}

/// Reveals the first hidden, untried character at the cost of an attempt.
#[derive(Debug)]
pub struct Hint;

#[enum_dispatch(Transition)]
#[derive(Debug)]
pub enum Move {
    Blank,
    Invalid,
    LetterGuess,
    WordGuess,
    Hint,
}

impl Move {
    /// Classifies a raw guess against a secret of `secret_len` characters.
    ///
    /// First match wins: empty, single letter, whole word, anything else.
    #[must_use]
    pub fn classify(raw: &str, secret_len: usize) -> Self {
        let guess = raw.trim().to_uppercase();
        let mut chars = guess.chars();

        match (chars.next(), chars.next()) {
            (None, _) => Blank.into(),
            (Some(letter), None) if letter.is_alphabetic() => LetterGuess { letter }.into(),
            _ if guess.chars().count() == secret_len && guess.chars().all(char::is_alphabetic) => {
                WordGuess { word: guess }.into()
            }
            _ => Invalid.into(),
        }
    }
}

impl Transition for Blank {
    fn apply(&self, _state: &mut GameState) -> Feedback {
        Feedback::EmptyGuess
    }
}

impl Transition for Invalid {
    fn apply(&self, _state: &mut GameState) -> Feedback {
        Feedback::InvalidEntry
    }
}

impl Transition for LetterGuess {
    fn apply(&self, state: &mut GameState) -> Feedback {
        if state.has_tried(self.letter) {
            return Feedback::LetterAlreadyTried;
        }

        state.tried_letters.push(self.letter);
        if state.secret.contains(self.letter) {
            state.reveal_letter(self.letter);
            if state.is_fully_revealed() {
                state.finish(true);
            }
            Feedback::CorrectLetter
        } else {
            consume_attempt(state);
            Feedback::WrongLetter
        }
    }
}

impl Transition for WordGuess {
    fn apply(&self, state: &mut GameState) -> Feedback {
        if self.word == state.secret {
            state.reveal_all();
            state.finish(true);
            Feedback::CorrectWord
        } else {
            consume_attempt(state);
            Feedback::WrongWord
        }
    }
}

impl Transition for Hint {
    fn apply(&self, state: &mut GameState) -> Feedback {
        let candidate = state
            .secret
            .chars()
            .zip(state.reveal.iter())
            .find(|&(c, slot)| slot.is_none() && !state.tried_letters.contains(&c))
            .map(|(c, _)| c);

        let feedback = match candidate {
            Some(letter) => {
                state.tried_letters.push(letter);
                state.reveal_letter(letter);
                // Spending the last attempt on a hint does not lose the round.
                state.attempts_remaining -= 1;
                Feedback::HintUsed
            }
            None => Feedback::NothingToReveal,
        };

        if state.is_fully_revealed() {
            state.finish(true);
        }
        feedback
    }
}

/// Wrong letter or wrong word: one attempt down, lost at zero.
fn consume_attempt(state: &mut GameState) {
    state.attempts_remaining -= 1;
    if state.attempts_remaining <= 0 {
        state.finish(false);
    }
}

impl GameState {
    /// Applies a raw letter or word guess.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RoundOver`] without touching the state when the
    /// round is already finished.
    pub fn apply_guess(&mut self, raw: &str) -> GameResult<Feedback> {
        let next = Move::classify(raw, self.reveal.len());
        self.step(&next)
    }

    /// Spends an attempt to reveal the next hidden character.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RoundOver`] when the round is already finished.
    pub fn apply_hint(&mut self) -> GameResult<Feedback> {
        self.step(&Hint.into())
    }

    fn step(&mut self, next: &Move) -> GameResult<Feedback> {
        if self.finished {
            return Err(GameError::RoundOver);
        }

        let feedback = next.apply(self);
        self.message = Some(feedback);
        debug!(
            "{} played {next:?}: {feedback} ({} attempts left)",
            self.player, self.attempts_remaining
        );
        Ok(feedback)
    }
}
