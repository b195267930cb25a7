//! Read-only views over the tracker state

use chrono::NaiveDate;

use super::achievements::{
    ACHIEVEMENTS, Achievement, AchievementMetrics, EarnedAchievements, LevelProgress,
    PointsLedger, current_streak, longest_streak,
};
use super::models::{DerivedStats, TimeRange};
use super::{WasteTracker, compute_stats};
use crate::domain::{CollectionEntry, EventFilter, EventStore, WasteEvent};
use crate::store::BlobStore;

/// One row of the achievement board
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementStatus {
    pub achievement: &'static Achievement,
    pub earned: bool,
    pub current: f64,
    pub target: f64,
}

impl AchievementStatus {
    /// Progress towards the target, 0.0 - 100.0
    pub fn percent(&self) -> f64 {
        if self.earned {
            return 100.0;
        }
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.current / self.target * 100.0).clamp(0.0, 100.0)
    }
}

impl<S: BlobStore> WasteTracker<S> {
    pub fn events(&self) -> &EventStore {
        &self.state.events
    }

    /// Events matching `filter`, in creation order
    pub fn list_events(&self, filter: &EventFilter) -> Vec<&WasteEvent> {
        self.state.events.query(filter)
    }

    /// Most recent events first
    pub fn recent_events(&self, limit: usize) -> Vec<&WasteEvent> {
        self.state.events.recent(limit)
    }

    /// Filter first, then keep the `limit` most recent matches
    pub fn recent_matching(&self, filter: &EventFilter, limit: usize) -> Vec<&WasteEvent> {
        self.state.events.recent_matching(filter, limit)
    }

    /// Stats over the whole log
    pub fn stats(&self) -> &DerivedStats {
        &self.state.stats
    }

    /// Stats over the events inside `range`
    pub fn stats_for(&self, range: TimeRange, today: NaiveDate) -> DerivedStats {
        match range {
            TimeRange::AllTime => self.state.stats.clone(),
            _ => compute_stats(self.state.events.query(&range.filter(today))),
        }
    }

    pub fn streak(&self, today: NaiveDate) -> u32 {
        current_streak(self.state.events.all(), today, self.policy)
    }

    pub fn longest_streak(&self, today: NaiveDate) -> u32 {
        longest_streak(self.state.events.all(), today)
    }

    pub fn metrics(&self, today: NaiveDate) -> AchievementMetrics {
        AchievementMetrics::collect(self.state.events.all(), &self.state.stats, self.streak(today))
    }

    pub fn earned_achievements(&self) -> &EarnedAchievements {
        self.state.gamification.earned()
    }

    /// Every achievement definition with its earned flag and progress
    pub fn achievement_board(&self, today: NaiveDate) -> Vec<AchievementStatus> {
        let metrics = self.metrics(today);
        let earned = self.earned_achievements();

        ACHIEVEMENTS
            .iter()
            .map(|achievement| {
                let (current, target) = achievement.requirement.progress(&metrics);
                AchievementStatus {
                    achievement,
                    earned: earned.contains(achievement.id),
                    current,
                    target,
                }
            })
            .collect()
    }

    pub fn points_ledger(&self) -> &PointsLedger {
        self.state.gamification.ledger()
    }

    pub fn level_progress(&self) -> LevelProgress {
        self.points_ledger().progress()
    }

    pub fn upcoming_collections(&self, today: NaiveDate) -> Vec<&CollectionEntry> {
        self.state.schedule.upcoming(today)
    }
}
