//! Typed access to the persisted blobs
//!
//! Loading is fail-soft: a missing or unparsable blob yields its empty value
//! and a single malformed record inside a list is skipped. Nothing here ever
//! refuses to start because of bad data on disk.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::{BlobKey, BlobStore, StoreError};
use crate::domain::{CollectionEntry, CollectionSchedule, EventStore, WasteEvent};
use crate::stats::DerivedStats;
use crate::stats::achievements::{EarnedAchievements, PointsLedger};

/// Everything read back from a store
#[derive(Debug, Clone, Default)]
pub struct LoadedState {
    pub events: EventStore,
    pub earned: EarnedAchievements,
    pub ledger: PointsLedger,
    pub schedule: CollectionSchedule,
}

/// Borrowed view of the state to persist in one commit
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub events: &'a EventStore,
    pub stats: &'a DerivedStats,
    pub earned: &'a EarnedAchievements,
    pub ledger: &'a PointsLedger,
    pub schedule: &'a CollectionSchedule,
}

/// Reads and writes domain state through a [`BlobStore`]
#[derive(Debug, Clone)]
pub struct Repository<S> {
    store: S,
}

impl<S: BlobStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Result<LoadedState, StoreError> {
        Ok(LoadedState {
            events: self.load_events()?,
            earned: self.load_earned()?,
            ledger: self.load_ledger()?,
            schedule: self.load_schedule()?,
        })
    }

    pub fn load_events(&self) -> Result<EventStore, StoreError> {
        let events: Vec<WasteEvent> = self.load_records(BlobKey::WasteLogs)?;
        Ok(EventStore::from_events(events))
    }

    pub fn load_earned(&self) -> Result<EarnedAchievements, StoreError> {
        let ids: Vec<String> = self.load_blob(BlobKey::Achievements)?.unwrap_or_default();
        Ok(EarnedAchievements::from_ids(ids))
    }

    pub fn load_ledger(&self) -> Result<PointsLedger, StoreError> {
        Ok(self.load_blob(BlobKey::UserPoints)?.unwrap_or_default())
    }

    pub fn load_schedule(&self) -> Result<CollectionSchedule, StoreError> {
        let entries: Vec<CollectionEntry> = self.load_records(BlobKey::CollectionSchedule)?;
        Ok(CollectionSchedule::from_entries(entries))
    }

    /// Cached stats as last written. Callers should recompute instead of
    /// trusting this.
    pub fn load_cached_stats(&self) -> Result<Option<DerivedStats>, StoreError> {
        self.load_blob(BlobKey::UserStats)
    }

    /// Write every blob in one `put_all`
    pub fn save(&self, snapshot: &Snapshot<'_>) -> Result<(), StoreError> {
        let entries = [
            (BlobKey::WasteLogs, to_json(snapshot.events.all())?),
            (BlobKey::UserStats, to_json(snapshot.stats)?),
            (BlobKey::Achievements, to_json(snapshot.earned)?),
            (BlobKey::UserPoints, to_json(snapshot.ledger)?),
            (BlobKey::CollectionSchedule, to_json(snapshot.schedule.entries())?),
        ];
        self.store.put_all(&entries)
    }

    /// Parse a whole blob, treating garbage as absent
    fn load_blob<T: DeserializeOwned>(&self, key: BlobKey) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key = key.as_str(), "Ignoring unreadable blob: {}", e);
                Ok(None)
            }
        }
    }

    /// Parse a JSON array record by record, skipping records that don't parse
    fn load_records<T: DeserializeOwned>(&self, key: BlobKey) -> Result<Vec<T>, StoreError> {
        let Some(values) = self.load_blob::<Vec<serde_json::Value>>(key)? else {
            return Ok(Vec::new());
        };

        let total = values.len();
        let records: Vec<T> = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(key = key.as_str(), index, "Skipping malformed record: {}", e);
                    None
                }
            })
            .collect();

        if records.len() < total {
            warn!(
                key = key.as_str(),
                skipped = total - records.len(),
                "Loaded blob with malformed records"
            );
        }
        Ok(records)
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, StoreError> {
    Ok(serde_json::to_string(value)?)
}
