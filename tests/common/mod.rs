//! Shared test utilities for tracker integration tests

#![allow(dead_code)]

use std::path::Path;

use chrono::NaiveDate;
use ecotrack::WasteInput;
use ecotrack::stats::achievements::StreakPolicy;
use ecotrack::stats::{LogOutcome, WasteTracker};
use ecotrack::store::{BlobStore, JsonDirStore, SqliteStore};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Tracker over a JSON blob directory
pub fn json_tracker(dir: &Path) -> WasteTracker<JsonDirStore> {
    let store = JsonDirStore::open(dir).expect("Failed to open JSON store");
    WasteTracker::open(store, StreakPolicy::Consecutive).expect("Failed to open tracker")
}

/// Tracker over a SQLite file inside `dir`
pub fn sqlite_tracker(dir: &Path) -> WasteTracker<SqliteStore> {
    let store = SqliteStore::open(&dir.join("ecotrack.db")).expect("Failed to open SQLite store");
    WasteTracker::open(store, StreakPolicy::Consecutive).expect("Failed to open tracker")
}

/// Log one entry dated `on`, with `on` as today
pub fn log<S: BlobStore>(
    tracker: &mut WasteTracker<S>,
    category: &str,
    waste_type: &str,
    quantity: &str,
    on: &str,
) -> LogOutcome {
    tracker
        .log_waste(&WasteInput::new(category, waste_type, quantity).on(on), date(on))
        .expect("Failed to log waste")
}
