//! Achievement Manager - Core gamification logic
//!
//! Owns the earned set and the points ledger, and turns a logged event or a
//! metrics snapshot into gamification events.

use tracing::info;

use super::checker::{AchievementMetrics, EarnedAchievements, check_achievements};
use super::definitions::Achievement;
use super::levels::{LevelUp, PointRewards, PointsLedger};
use crate::domain::WasteEvent;

/// Events that can happen during gamification checks
#[derive(Debug, Clone, PartialEq)]
pub enum GamificationEvent {
    PointsAwarded { amount: u64, reason: String },
    AchievementUnlocked(&'static Achievement),
    LevelUp(LevelUp),
}

/// Main manager for all gamification state
#[derive(Debug, Clone, Default)]
pub struct AchievementManager {
    earned: EarnedAchievements,
    ledger: PointsLedger,
}

impl AchievementManager {
    pub fn new(earned: EarnedAchievements, ledger: PointsLedger) -> Self {
        Self { earned, ledger }
    }

    pub fn earned(&self) -> &EarnedAchievements {
        &self.earned
    }

    pub fn ledger(&self) -> &PointsLedger {
        &self.ledger
    }

    /// Award points and record the resulting events
    pub fn award(&mut self, amount: u64, reason: impl Into<String>) -> Vec<GamificationEvent> {
        let mut events = vec![GamificationEvent::PointsAwarded {
            amount,
            reason: reason.into(),
        }];
        if let Some(level_up) = self.ledger.award(amount) {
            info!(
                old_level = level_up.old_level,
                new_level = level_up.new_level,
                "Level up"
            );
            events.push(GamificationEvent::LevelUp(level_up));
        }
        events
    }

    /// Base points for a freshly logged event
    pub fn award_for_log(&mut self, event: &WasteEvent) -> Vec<GamificationEvent> {
        let mut events = self.award(PointRewards::LOG, "Logged waste");
        if event.is_recyclable() {
            events.extend(self.award(PointRewards::RECYCLE_BONUS, "Recycling bonus"));
        }
        events
    }

    /// Unlock every achievement newly met by `metrics`, each with a one-time bonus
    pub fn check(&mut self, metrics: &AchievementMetrics) -> Vec<GamificationEvent> {
        let mut events = Vec::new();

        for achievement in check_achievements(metrics, &mut self.earned) {
            info!(id = achievement.id.as_str(), name = achievement.name, "Achievement unlocked");
            events.push(GamificationEvent::AchievementUnlocked(achievement));
            events.extend(self.award(
                PointRewards::ACHIEVEMENT,
                format!("Achievement: {}", achievement.name),
            ));
        }

        events
    }
}
