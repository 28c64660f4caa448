//! Word catalog and random source.
//!
//! The catalog maps a difficulty key to the words a round may be played
//! with. It is loaded once at startup from a text file with one
//! `difficulty:word` entry per line and handed to the engine as immutable
//! configuration.
//!
//! ## Example
//!
//! ```
//! use hangman::catalog::WordCatalog;
//!
//! let catalog = WordCatalog::parse("facile: chat\nfacile: chien\ndifficile: xylophone\n");
//! assert_eq!(catalog.words_for("facile").len(), 2);
//! assert!(catalog.words_for("moyen").is_empty());
//! ```

pub mod errors;
pub mod random;
pub mod words;

pub use errors::{CatalogError, CatalogResult};
pub use random::{RandomSource, SeededRandom};
pub use words::WordCatalog;
