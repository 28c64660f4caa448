//! Difficulty-keyed word lists.

use super::errors::{CatalogError, CatalogResult};
use log::{info, warn};
use std::{collections::HashMap, path::Path};

/// Immutable difficulty → words mapping
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordCatalog {
    words: HashMap<String, Vec<String>>,
}

impl WordCatalog {
    /// Load a catalog from a word file
    ///
    /// # Arguments
    ///
    /// * `path` - File with one `difficulty:word` entry per line
    ///
    /// # Returns
    ///
    /// * `CatalogResult<WordCatalog>` - Parsed catalog or I/O error
    pub async fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let catalog = Self::parse(&contents);
        info!(
            "Loaded {} words in {} difficulties from {}",
            catalog.len(),
            catalog.words.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse catalog entries
    ///
    /// Lines that don't split into exactly two parts on `:` are skipped, as
    /// are entries with a blank difficulty or word.
    pub fn parse(contents: &str) -> Self {
        let mut words: HashMap<String, Vec<String>> = HashMap::new();

        for (number, line) in contents.lines().enumerate() {
            let parts: Vec<&str> = line.split(':').collect();
            let [difficulty, word] = parts.as_slice() else {
                if !line.trim().is_empty() {
                    warn!("Skipping malformed word entry on line {}", number + 1);
                }
                continue;
            };

            let (difficulty, word) = (difficulty.trim(), word.trim());
            if difficulty.is_empty() || word.is_empty() {
                continue;
            }

            words
                .entry(difficulty.to_string())
                .or_default()
                .push(word.to_string());
        }

        Self { words }
    }

    /// Words for `difficulty`, empty when the difficulty is unknown
    pub fn words_for(&self, difficulty: &str) -> &[String] {
        self.words.get(difficulty).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Known difficulties in sorted order
    pub fn difficulties(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.words.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Total number of words across all difficulties
    pub fn len(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<D, W> FromIterator<(D, W)> for WordCatalog
where
    D: Into<String>,
    W: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (D, W)>>(iter: I) -> Self {
        let mut words: HashMap<String, Vec<String>> = HashMap::new();
        for (difficulty, word) in iter {
            words.entry(difficulty.into()).or_default().push(word.into());
        }
        Self { words }
    }
}
