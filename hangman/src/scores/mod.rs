//! Leaderboard of finished rounds.
//!
//! Records are append-only and never edited after creation. Storage goes
//! through the [`ScoreStore`] trait:
//! - [`JsonFileStore`] keeps a pretty-printed JSON array on disk, with
//!   writers serialized behind a lock
//! - [`MemoryStore`] keeps records in process
//!
//! ## Example
//!
//! ```
//! use hangman::game::{GameState, Username};
//! use hangman::scores::{MemoryStore, ScoreRecord, ScoreStore};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut state = GameState::new(Username::new("alice"), "facile", "chat");
//! state.apply_guess("chat")?;
//!
//! let store = MemoryStore::new();
//! store.append(ScoreRecord::from_finished(&state, chrono::Utc::now())?).await?;
//! assert_eq!(store.load_all().await?.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod models;
pub mod store;

pub use errors::{ScoreError, ScoreResult};
pub use models::{ScoreRecord, leaderboard};
pub use store::{JsonFileStore, MemoryStore, ScoreStore};
