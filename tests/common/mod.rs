//! Shared fixtures: a fresh file-backed store per test.

#![allow(dead_code)]

use app_lib::app::initialize;
use app_lib::infra::Store;
use tempfile::TempDir;

/// Empty store; the directory must outlive the store.
pub fn test_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("data.db")).unwrap();
    (dir, store)
}

/// Store bootstrapped with the default catalog.
pub fn seeded_store() -> (TempDir, Store) {
    let (dir, store) = test_store();
    initialize(&store).unwrap();
    (dir, store)
}

/// Add an activity directly; the API never creates activities.
pub fn insert_activity(store: &Store, name: &str, max_participants: Option<i64>) {
    store
        .connect()
        .unwrap()
        .execute(
            "INSERT INTO activities (name, description, schedule, max_participants) VALUES (?1, 'test', 'anytime', ?2)",
            rusqlite::params![name, max_participants],
        )
        .unwrap();
}
