//! Hangman web server.
//!
//! Serves the [`hangman`] engine as server-rendered HTML pages.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
