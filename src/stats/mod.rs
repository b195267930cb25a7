//! Derived statistics and the tracker that keeps them current
//!
//! Every number shown to the user is derived from the waste log. Stats,
//! streaks and achievement progress are recomputed from the full event list
//! after each change; only the earned set and the points ledger carry state of
//! their own.
//!
//! # Architecture
//!
//! ```text
//!   WasteInput ──► WasteTracker::log_waste
//!                      │
//!                      ├─ EventStore::append
//!                      ├─ AchievementManager::award_for_log
//!                      ├─ compute_stats / current_streak
//!                      ├─ AchievementManager::check
//!                      ▼
//!                  Repository::save ──► BlobStore (json | sqlite | memory)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let store = open_store(StorageBackend::Json, &data_dir)?;
//! let mut tracker = WasteTracker::open(store, StreakPolicy::Consecutive)?;
//!
//! let outcome = tracker.log_waste(&WasteInput::new("recyclable", "Cans", "2"), today())?;
//! println!("+{} points", outcome.points_awarded());
//! ```

pub mod achievements;
mod aggregate;
mod impact;
mod models;
mod queries;
mod recorder;
pub mod time_bucket;

pub use aggregate::{compute_stats, recycling_rate};
pub use impact::{ImpactEstimate, ImpactFactors};
pub use models::{DerivedStats, LogOutcome, TimeRange};
pub use queries::AchievementStatus;
pub use time_bucket::{day_bucket, today};

use tracing::{debug, info};

use crate::domain::{CollectionSchedule, EventStore, IdExhausted, ScheduleError, ValidationError};
use crate::store::{BlobStore, Repository, Snapshot, StoreError};
use achievements::{AchievementManager, StreakPolicy};

/// Errors from tracker commands
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Waste log {0} not found")]
    EventNotFound(u64),

    #[error("Collection {0} not found")]
    CollectionNotFound(u64),

    #[error(transparent)]
    Ids(#[from] IdExhausted),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl From<ScheduleError> for TrackerError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::Invalid(e) => Self::Validation(e),
            ScheduleError::Ids(e) => Self::Ids(e),
        }
    }
}

/// Mutable tracker state. Cloned before every command so a failed save
/// leaves the live copy untouched.
#[derive(Debug, Clone, Default)]
struct TrackerState {
    events: EventStore,
    stats: DerivedStats,
    gamification: AchievementManager,
    schedule: CollectionSchedule,
}

impl TrackerState {
    fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            events: &self.events,
            stats: &self.stats,
            earned: self.gamification.earned(),
            ledger: self.gamification.ledger(),
            schedule: &self.schedule,
        }
    }
}

/// Command handler over the waste log and everything derived from it
pub struct WasteTracker<S: BlobStore> {
    repo: Repository<S>,
    state: TrackerState,
    policy: StreakPolicy,
}

impl<S: BlobStore> WasteTracker<S> {
    /// Load persisted state. Cached stats are ignored and rebuilt from the log.
    pub fn open(store: S, policy: StreakPolicy) -> Result<Self, TrackerError> {
        let repo = Repository::new(store);
        let loaded = repo.load()?;

        let stats = compute_stats(loaded.events.all());
        info!(
            events = loaded.events.len(),
            achievements = loaded.earned.len(),
            points = loaded.ledger.points(),
            policy = policy.as_str(),
            "Opened waste tracker"
        );

        Ok(Self {
            repo,
            state: TrackerState {
                events: loaded.events,
                stats,
                gamification: AchievementManager::new(loaded.earned, loaded.ledger),
                schedule: loaded.schedule,
            },
            policy,
        })
    }

    pub fn policy(&self) -> StreakPolicy {
        self.policy
    }

    pub fn repository(&self) -> &Repository<S> {
        &self.repo
    }

    /// Run `f` against a copy of the state, persist the copy, then adopt it.
    ///
    /// If `f` or the save fails, nothing changes in memory.
    fn commit<T>(
        &mut self,
        f: impl FnOnce(&mut TrackerState) -> Result<T, TrackerError>,
    ) -> Result<T, TrackerError> {
        let mut next = self.state.clone();
        let value = f(&mut next)?;
        self.repo.save(&next.snapshot())?;
        debug!(events = next.events.len(), "Committed tracker state");
        self.state = next;
        Ok(value)
    }
}
