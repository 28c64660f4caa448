//! Leaderboard storage backends.

use super::{errors::ScoreResult, models::ScoreRecord};
use async_trait::async_trait;
use log::{debug, info};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::sync::Mutex;

/// Append-only leaderboard storage
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Persist one more record
    async fn append(&self, record: ScoreRecord) -> ScoreResult<()>;

    /// Every record in insertion order. A store that was never written to
    /// is empty, not an error.
    async fn load_all(&self) -> ScoreResult<Vec<ScoreRecord>>;
}

/// Leaderboard kept as a pretty-printed JSON array in a single file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store backed by `path`
    ///
    /// The file and its parent directory are created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_records(&self) -> ScoreResult<Vec<ScoreRecord>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    async fn write_records(&self, records: &[ScoreRecord]) -> ScoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut json = serde_json::to_string_pretty(records)?;
        json.push('\n');

        // Readers never see a half-written file.
        let staging = self.path.with_extension("json.tmp");
        tokio::fs::write(&staging, json).await?;
        tokio::fs::rename(&staging, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ScoreStore for JsonFileStore {
    async fn append(&self, record: ScoreRecord) -> ScoreResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        info!(
            "Saving score for {} ({}, won: {})",
            record.username, record.difficulty, record.won
        );
        records.push(record);
        self.write_records(&records).await?;

        debug!("{} scores stored in {}", records.len(), self.path.display());
        Ok(())
    }

    async fn load_all(&self) -> ScoreResult<Vec<ScoreRecord>> {
        self.read_records().await
    }
}

/// Leaderboard kept in memory for the life of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<ScoreRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScoreStore for MemoryStore {
    async fn append(&self, record: ScoreRecord) -> ScoreResult<()> {
        self.records.lock().await.push(record);
        Ok(())
    }

    async fn load_all(&self) -> ScoreResult<Vec<ScoreRecord>> {
        Ok(self.records.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(username: &str) -> ScoreRecord {
        ScoreRecord {
            username: username.to_string(),
            difficulty: "facile".to_string(),
            word: "CHAT".to_string(),
            won: true,
            attempts: 4,
            date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_memory_store_keeps_order() {
        let store = MemoryStore::new();
        store.append(record("alice")).await.unwrap();
        store.append(record("bob")).await.unwrap();

        let records = store.load_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].username, "alice");
        assert_eq!(records[1].username, "bob");
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let store = JsonFileStore::new("/definitely/not/here/scores.json");
        assert!(store.load_all().await.unwrap().is_empty());
    }
}
