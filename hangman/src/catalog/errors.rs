//! Word catalog error types.

use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Word file could not be read
    #[error("Failed to read word file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The fallback difficulty has nothing to pick from
    #[error("No words available for default difficulty '{difficulty}'")]
    EmptyDefault { difficulty: String },
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
