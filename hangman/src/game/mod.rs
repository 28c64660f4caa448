//! Hangman game engine.
//!
//! This module provides:
//! - The per-round [`GameState`] carried by the client between requests
//! - Guess and hint transitions dispatched over a closed set of moves
//! - Round creation from a word catalog and an injected random source

pub mod constants;
pub mod engine;
pub mod entities;
pub mod state_machine;

pub use engine::Engine;
pub use entities::{Feedback, GameState, Username, title_case};
pub use state_machine::{GameError, GameResult, Move, Transition};
