//! Round transport between requests.
//!
//! The server keeps no per-round storage. Each response hands the client a
//! signed token holding the full [`GameState`](crate::game::GameState), and
//! the next request hands it back:
//! - HS256 JWT signed with a server secret
//! - Expiry (24 hours by default)
//! - Any malformed, tampered or expired token reads as "no active round"
//!
//! ## Example
//!
//! ```
//! use hangman::game::{GameState, Username};
//! use hangman::session::SessionCodec;
//!
//! let codec = SessionCodec::new("an_example_secret_of_32_characters!!");
//! let state = GameState::new(Username::new("alice"), "facile", "chat");
//!
//! let token = codec.encode(&state).unwrap();
//! assert_eq!(codec.decode(&token).unwrap(), state);
//! ```

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{SessionError, SessionResult};
pub use manager::SessionCodec;
pub use models::RoundClaims;
