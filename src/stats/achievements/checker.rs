//! Achievement checking logic
//!
//! Evaluates the rule table against current metrics and the earned set.

use serde::{Deserialize, Serialize};

use super::definitions::{ACHIEVEMENTS, Achievement, AchievementId};
use crate::domain::WasteEvent;
use crate::stats::DerivedStats;

/// Inputs every achievement requirement is evaluated against
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AchievementMetrics {
    pub total_logs: u64,
    pub total_recycles: u64,
    pub streak_days: u32,
    pub recycling_rate: f64,
}

impl AchievementMetrics {
    pub fn collect(events: &[WasteEvent], stats: &DerivedStats, streak_days: u32) -> Self {
        Self {
            total_logs: events.len() as u64,
            total_recycles: events.iter().filter(|e| e.is_recyclable()).count() as u64,
            streak_days,
            recycling_rate: stats.recycling_rate,
        }
    }
}

/// Set of earned achievement IDs, in the order they were earned.
///
/// Append-only: nothing is ever removed, even if the metric that unlocked an
/// achievement later drops. IDs this build does not know are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EarnedAchievements {
    ids: Vec<String>,
}

impl EarnedAchievements {
    pub fn from_ids(ids: Vec<String>) -> Self {
        let mut earned = Self::default();
        for id in ids {
            if !earned.contains_str(&id) {
                earned.ids.push(id);
            }
        }
        earned
    }

    pub fn contains(&self, id: AchievementId) -> bool {
        self.contains_str(id.as_str())
    }

    pub fn contains_str(&self, id: &str) -> bool {
        self.ids.iter().any(|e| e == id)
    }

    /// Insert an id. Returns false if it was already earned.
    pub fn insert(&mut self, id: AchievementId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.as_str().to_string());
        true
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Known definitions among the earned ids, in earning order
    pub fn achievements(&self) -> Vec<&'static Achievement> {
        self.ids.iter().filter_map(|id| Achievement::by_str(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Check every not-yet-earned achievement against `metrics`.
///
/// Newly met achievements are inserted into `earned` and returned in table
/// order. Calling this again with the same inputs returns nothing.
pub fn check_achievements(
    metrics: &AchievementMetrics,
    earned: &mut EarnedAchievements,
) -> Vec<&'static Achievement> {
    let mut newly_unlocked = Vec::new();

    for achievement in ACHIEVEMENTS {
        if earned.contains(achievement.id) {
            continue;
        }
        if achievement.requirement.is_met(metrics) && earned.insert(achievement.id) {
            newly_unlocked.push(achievement);
        }
    }

    newly_unlocked
}
