//! Tracker commands that change state
//!
//! Each command validates first, then runs inside [`WasteTracker::commit`] so
//! the in-memory state and the store only ever move together.

use chrono::NaiveDate;
use tracing::{debug, info};

use super::achievements::{AchievementMetrics, GamificationEvent, current_streak};
use super::models::LogOutcome;
use super::time_bucket::now_ms;
use super::{TrackerError, TrackerState, WasteTracker, compute_stats};
use crate::domain::{CollectionEntry, ScheduleInput, WasteEvent, WasteInput};
use crate::store::BlobStore;

impl<S: BlobStore> WasteTracker<S> {
    /// Validate and record one waste log, award points and unlock achievements.
    ///
    /// On a validation error nothing is appended, awarded or written.
    pub fn log_waste(&mut self, input: &WasteInput, today: NaiveDate) -> Result<LogOutcome, TrackerError> {
        let new_event = input.validate(today)?;
        let policy = self.policy;

        let outcome = self.commit(|state| {
            let event = state.events.append(new_event, now_ms())?;
            debug!(id = event.id, category = event.category.as_str(), "Appended waste log");

            let mut gamification = state.gamification.award_for_log(&event);
            state.stats = compute_stats(state.events.all());
            let streak_days = current_streak(state.events.all(), today, policy);
            gamification.extend(evaluate(state, streak_days));

            Ok(LogOutcome {
                event,
                stats: state.stats.clone(),
                streak_days,
                gamification,
            })
        })?;

        info!(
            id = outcome.event.id,
            points = outcome.points_awarded(),
            streak = outcome.streak_days,
            "Logged waste"
        );
        Ok(outcome)
    }

    /// Remove a waste log and recompute stats.
    ///
    /// Points and earned achievements are kept.
    pub fn delete_event(&mut self, id: u64) -> Result<WasteEvent, TrackerError> {
        let removed = self.commit(|state| {
            let removed = state.events.delete(id).ok_or(TrackerError::EventNotFound(id))?;
            state.stats = compute_stats(state.events.all());
            Ok(removed)
        })?;
        info!(id, "Deleted waste log");
        Ok(removed)
    }

    /// Re-check achievements against the current log without logging anything.
    ///
    /// Persists only when something new was unlocked, so calling it on every
    /// start is cheap and idempotent.
    pub fn refresh(&mut self, today: NaiveDate) -> Result<Vec<GamificationEvent>, TrackerError> {
        let streak_days = current_streak(self.state.events.all(), today, self.policy);

        let mut pending = self.state.gamification.clone();
        let metrics = AchievementMetrics::collect(self.state.events.all(), &self.state.stats, streak_days);
        if pending.check(&metrics).is_empty() {
            return Ok(Vec::new());
        }

        self.commit(|state| Ok(evaluate(state, streak_days)))
    }

    /// Add a collection pickup to the schedule
    pub fn add_collection(&mut self, input: &ScheduleInput) -> Result<CollectionEntry, TrackerError> {
        let entry = self.commit(|state| Ok(state.schedule.add(input, now_ms())?))?;
        info!(id = entry.id, date = %entry.date, "Scheduled collection");
        Ok(entry)
    }

    pub fn remove_collection(&mut self, id: u64) -> Result<CollectionEntry, TrackerError> {
        self.commit(|state| {
            state
                .schedule
                .remove(id)
                .ok_or(TrackerError::CollectionNotFound(id))
        })
    }
}

/// Check achievements against freshly derived stats
fn evaluate(state: &mut TrackerState, streak_days: u32) -> Vec<GamificationEvent> {
    let metrics = AchievementMetrics::collect(state.events.all(), &state.stats, streak_days);
    state.gamification.check(&metrics)
}
