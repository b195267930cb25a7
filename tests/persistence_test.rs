//! Persistence tests: reload from disk, fail-soft loading and both backends

mod common;

use std::fs;

use common::{json_tracker, log, sqlite_tracker};
use ecotrack::stats::achievements::{AchievementId, StreakPolicy};
use ecotrack::stats::{DerivedStats, WasteTracker};
use ecotrack::store::{BlobKey, BlobStore, JsonDirStore, StorageBackend, open_store};
use tempfile::TempDir;

#[test]
fn test_json_state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut tracker = json_tracker(dir.path());
        log(&mut tracker, "recyclable", "White Paper", "10", "2024-08-01");
        log(&mut tracker, "organic", "Peels", "2", "2024-08-02");
    }

    for key in BlobKey::ALL {
        assert!(
            dir.path().join(format!("{}.json", key.as_str())).exists(),
            "missing {}",
            key.as_str()
        );
    }

    let tracker = json_tracker(dir.path());
    assert_eq!(tracker.events().len(), 2);
    assert!((tracker.stats().impact.trees_saved - 0.2).abs() < 1e-9);
    assert!(tracker.earned_achievements().contains(AchievementId::FirstRecycle));
    assert!(tracker.earned_achievements().contains(AchievementId::ZeroWaste));
    // first_log, first_recycle and zero_waste all unlock on the first entry
    assert_eq!(tracker.points_ledger().points(), 60 + 10 + 300);
}

#[test]
fn test_sqlite_state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut tracker = sqlite_tracker(dir.path());
        log(&mut tracker, "hazardous", "Batteries", "20", "2024-08-01");
    }

    let tracker = sqlite_tracker(dir.path());
    assert_eq!(tracker.events().len(), 1);
    assert_eq!(tracker.stats().total_waste, 20.0);
    assert_eq!(tracker.points_ledger().points(), 110);
}

#[test]
fn test_open_store_by_backend() {
    let dir = TempDir::new().unwrap();
    for backend in [StorageBackend::Json, StorageBackend::Sqlite] {
        let store = open_store(backend, &dir.path().join(backend.as_str())).unwrap();
        store.put(BlobKey::Achievements, r#"["first_log"]"#.to_string()).unwrap();
        assert_eq!(
            store.get(BlobKey::Achievements).unwrap().as_deref(),
            Some(r#"["first_log"]"#)
        );
    }
    assert!(dir.path().join("sqlite/ecotrack.db").exists());
    assert!(dir.path().join("json/achievements.json").exists());
}

#[test]
fn test_corrupt_files_load_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("wasteLogs.json"), "not json at all").unwrap();
    fs::write(dir.path().join("achievements.json"), "{").unwrap();
    fs::write(dir.path().join("userPoints.json"), "\"lots\"").unwrap();

    let mut tracker = json_tracker(dir.path());
    assert!(tracker.events().is_empty());
    assert!(tracker.earned_achievements().is_empty());
    assert_eq!(tracker.points_ledger().points(), 0);

    // Still usable, and the next save replaces the garbage
    log(&mut tracker, "general", "Bags", "1", "2024-08-01");
    let reopened = json_tracker(dir.path());
    assert_eq!(reopened.events().len(), 1);
}

#[test]
fn test_malformed_event_skipped_on_load() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("wasteLogs.json"),
        r#"[
            {"id": 1, "date": "2024-08-01", "category": "recyclable", "type": "Cans", "quantity": 2, "unit": "kg"},
            {"id": 2, "date": "2024-08-01", "category": "plutonium", "type": "Rods", "quantity": 1, "unit": "kg"},
            {"id": 3, "date": "2024-08-02", "category": "organic", "type": "Peels", "quantity": 20, "unit": "pieces"}
        ]"#,
    )
    .unwrap();

    let tracker = json_tracker(dir.path());
    let ids: Vec<u64> = tracker.events().all().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!((tracker.stats().total_waste - 3.0).abs() < 1e-9);
}

#[test]
fn test_cached_stats_are_rebuilt() {
    let dir = TempDir::new().unwrap();
    let store = JsonDirStore::open(dir.path()).unwrap();
    store
        .put_all(&[
            (
                BlobKey::WasteLogs,
                r#"[{"id": 5, "date": "2024-08-01", "category": "general", "type": "Bags", "quantity": 4}]"#
                    .to_string(),
            ),
            (
                BlobKey::UserStats,
                r#"{"totalWaste": 999, "totalRecycled": 999, "byCategory": {}, "recyclingRate": 100,
                    "co2Saved": 1, "energySaved": 1, "treesSaved": 1, "waterSaved": 1}"#
                    .to_string(),
            ),
        ])
        .unwrap();

    let tracker = WasteTracker::open(store, StreakPolicy::Consecutive).unwrap();
    assert_eq!(tracker.stats().total_waste, 4.0);
    assert_eq!(tracker.stats().recycling_rate, 0.0);

    let cached: Option<DerivedStats> = tracker.repository().load_cached_stats().unwrap();
    assert_eq!(cached.map(|s| s.total_waste), Some(999.0));
}

#[test]
fn test_unknown_achievement_ids_are_kept() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("achievements.json"),
        r#"["first_log", "legacy_badge", "first_log"]"#,
    )
    .unwrap();

    let mut tracker = json_tracker(dir.path());
    assert_eq!(tracker.earned_achievements().ids(), ["first_log", "legacy_badge"]);

    log(&mut tracker, "recyclable", "Cans", "1", "2024-08-01");
    let saved = fs::read_to_string(dir.path().join("achievements.json")).unwrap();
    let ids: Vec<String> = serde_json::from_str(&saved).unwrap();
    assert_eq!(ids, vec!["first_log", "legacy_badge", "first_recycle", "zero_waste"]);
}

#[test]
fn test_negative_quantity_skipped_on_load() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("wasteLogs.json"),
        r#"[
            {"id": 1, "date": "2024-08-01", "category": "recyclable", "type": "Cans", "quantity": -10, "unit": "kg"},
            {"id": 2, "date": "2024-08-01", "category": "general", "type": "Bags", "quantity": 2, "unit": "kg"}
        ]"#,
    )
    .unwrap();

    let tracker = json_tracker(dir.path());
    let ids: Vec<u64> = tracker.events().all().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2]);

    let stats = tracker.stats();
    assert_eq!(stats.total_waste, 2.0);
    assert_eq!(stats.total_recycled, 0.0);
    assert_eq!(stats.recycling_rate, 0.0);
    assert!(stats.impact.co2_saved >= 0.0);
    assert!(stats.impact.energy_saved >= 0.0);
    assert!(stats.impact.trees_saved >= 0.0);
    assert!(stats.impact.water_saved >= 0.0);
}
