//! # Hangman
//!
//! A word-guessing game engine built around a pure per-round state value.
//!
//! A round picks a secret word from a difficulty-keyed catalog. The player
//! then guesses letters or the whole word, or spends an attempt on a hint,
//! until the word is revealed or the six attempts run out. The engine keeps
//! nothing between calls: every transition takes a [`GameState`], mutates
//! it, and hands it back.
//!
//! ## Core Modules
//!
//! - [`game`]: Round state, guess/hint transitions, and round creation
//! - [`catalog`]: Word lists per difficulty and the random source
//! - [`session`]: Signed tokens that carry a round between requests
//! - [`scores`]: Append-only leaderboard of finished rounds
//!
//! ## Example
//!
//! ```
//! use hangman::{Engine, Feedback, catalog::{SeededRandom, WordCatalog}};
//!
//! let catalog = WordCatalog::parse("facile:chat\n");
//! let engine = Engine::new(catalog, "facile", SeededRandom::new()).unwrap();
//!
//! let mut round = engine.start_round("alice", "facile").unwrap();
//! assert_eq!(round.apply_guess("c").unwrap(), Feedback::CorrectLetter);
//! assert_eq!(round.reveal_string(), "C _ _ _");
//! ```

/// Word lists and random word selection.
pub mod catalog;

/// Core game logic, entities, and state machine.
pub mod game;
pub use game::{
    Engine, Feedback, GameError, GameResult, GameState, Username,
    constants::{self, DEFAULT_DIFFICULTY, MAX_ATTEMPTS, PLACEHOLDER},
};

/// Leaderboard records and storage.
pub mod scores;

/// Round tokens for client-held state.
pub mod session;
