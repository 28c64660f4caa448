/// Integration tests for the JSON file leaderboard
///
/// These tests verify the on-disk format, lossless round trips, tolerance
/// of missing/empty files, and that concurrent writers don't lose records.
use chrono::{TimeZone, Utc};
use hangman::{
    GameState, Username,
    scores::{JsonFileStore, ScoreError, ScoreRecord, ScoreStore},
};
use std::{path::PathBuf, sync::Arc};

/// Unique scratch path under the system temp dir
fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("hangman_scores_{}", uuid::Uuid::new_v4()))
        .join(name)
}

fn record(username: &str, won: bool, attempts: i32) -> ScoreRecord {
    ScoreRecord {
        username: username.to_string(),
        difficulty: "moyen".to_string(),
        word: "BONJOUR".to_string(),
        won,
        attempts,
        date: Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap(),
    }
}

#[tokio::test]
async fn test_append_creates_file_and_directory() {
    let path = scratch_path("scores.json");
    let store = JsonFileStore::new(&path);

    store.append(record("alice", true, 4)).await.unwrap();

    assert!(path.exists());
    let records = store.load_all().await.unwrap();
    assert_eq!(records, vec![record("alice", true, 4)]);
}

#[tokio::test]
async fn test_records_round_trip_losslessly() {
    let path = scratch_path("scores.json");
    let store = JsonFileStore::new(&path);

    let mut state = GameState::new(Username::new("bob"), "difficile", "xylophone");
    for letter in ["a", "b", "c", "d", "f", "g"] {
        state.apply_guess(letter).unwrap();
    }
    let lost = ScoreRecord::from_finished(&state, Utc::now()).unwrap();

    store.append(record("alice", true, 4)).await.unwrap();
    store.append(lost.clone()).await.unwrap();

    // A fresh store over the same file sees the same records.
    let reopened = JsonFileStore::new(&path);
    let records = reopened.load_all().await.unwrap();
    assert_eq!(records, vec![record("alice", true, 4), lost]);
    assert!(!records[1].won);
    assert_eq!(records[1].attempts, 0);
}

#[tokio::test]
async fn test_file_is_pretty_printed_json_array() {
    let path = scratch_path("scores.json");
    let store = JsonFileStore::new(&path);
    store.append(record("alice", true, 4)).await.unwrap();

    let contents = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(contents.starts_with("[\n  {"));
    assert!(contents.contains("\"username\": \"alice\""));
    assert!(contents.contains("\"attempts\": 4"));

    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(value.is_array());
}

#[tokio::test]
async fn test_empty_file_is_empty_leaderboard() {
    let path = scratch_path("scores.json");
    tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
    tokio::fs::write(&path, "  \n").await.unwrap();

    let store = JsonFileStore::new(&path);
    assert!(store.load_all().await.unwrap().is_empty());

    store.append(record("alice", true, 4)).await.unwrap();
    assert_eq!(store.load_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_corrupt_file_is_reported() {
    let path = scratch_path("scores.json");
    tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
    tokio::fs::write(&path, "{ not json").await.unwrap();

    let store = JsonFileStore::new(&path);
    let err = store.load_all().await.unwrap_err();
    assert!(matches!(err, ScoreError::Serde(_)));
    assert_eq!(err.client_message(), "Leaderboard unavailable");

    // A failed append leaves the file as it was.
    assert!(store.append(record("alice", true, 4)).await.is_err());
    let contents = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(contents, "{ not json");
}

#[tokio::test]
async fn test_concurrent_appends_keep_every_record() {
    let path = scratch_path("scores.json");
    let store = Arc::new(JsonFileStore::new(&path));

    let handles: Vec<_> = (0..25)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move { store.append(record(&format!("player{i}"), i % 2 == 0, i)).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let records = store.load_all().await.unwrap();
    assert_eq!(records.len(), 25);
    for i in 0..25 {
        let name = format!("player{i}");
        assert!(records.iter().any(|r| r.username == name), "missing {name}");
    }
}
