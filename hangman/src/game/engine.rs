//! Round creation.

use log::info;
use std::sync::{Mutex, PoisonError};

use super::{
    entities::{GameState, Username},
    state_machine::{GameError, GameResult},
};
use crate::catalog::{CatalogError, CatalogResult, RandomSource, WordCatalog};

/// Starts rounds from a word catalog and a random source.
///
/// The catalog is fixed at construction. The random source is owned for
/// the life of the engine and shared by every round it starts.
pub struct Engine {
    catalog: WordCatalog,
    default_difficulty: String,
    rng: Mutex<Box<dyn RandomSource>>,
}

impl Engine {
    /// Create an engine
    ///
    /// # Arguments
    ///
    /// * `catalog` - Words to pick from
    /// * `default_difficulty` - Catalog key used when a requested difficulty has no words
    /// * `rng` - Random source used for every pick
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyDefault`] when the default difficulty has
    /// no words, since no request could then be guaranteed a word.
    pub fn new(
        catalog: WordCatalog,
        default_difficulty: &str,
        rng: impl RandomSource + 'static,
    ) -> CatalogResult<Self> {
        if catalog.words_for(default_difficulty).is_empty() {
            return Err(CatalogError::EmptyDefault {
                difficulty: default_difficulty.to_string(),
            });
        }

        Ok(Self {
            catalog,
            default_difficulty: default_difficulty.to_string(),
            rng: Mutex::new(Box::new(rng)),
        })
    }

    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    pub fn default_difficulty(&self) -> &str {
        &self.default_difficulty
    }

    /// Start a round for `player` at `difficulty`
    ///
    /// Unknown or empty difficulties fall back to the default list; the
    /// state still records the difficulty that was asked for.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MissingInput`] when either argument is blank.
    pub fn start_round(&self, player: &str, difficulty: &str) -> GameResult<GameState> {
        let player = Username::new(player);
        let difficulty = difficulty.trim();
        if player.is_empty() {
            return Err(GameError::MissingInput("player".to_string()));
        }
        if difficulty.is_empty() {
            return Err(GameError::MissingInput("difficulty".to_string()));
        }

        let word = self.pick_word(difficulty);
        info!("{player} started a round at difficulty {difficulty}");
        Ok(GameState::new(player, difficulty, word))
    }

    fn pick_word(&self, difficulty: &str) -> &str {
        let mut words = self.catalog.words_for(difficulty);
        if words.is_empty() {
            words = self.catalog.words_for(&self.default_difficulty);
        }

        let index = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pick(words.len());
        &words[index]
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("catalog", &self.catalog)
            .field("default_difficulty", &self.default_difficulty)
            .finish_non_exhaustive()
    }
}
