//! Gamification system: achievements, points, levels and streaks
//!
//! This module provides the gamification layer on top of the waste stats.

mod checker;
mod definitions;
mod levels;
mod manager;
mod streaks;

pub use checker::{AchievementMetrics, EarnedAchievements, check_achievements};
pub use definitions::{ACHIEVEMENTS, Achievement, AchievementId, Requirement};
pub use levels::{
    LevelProgress, LevelUp, POINTS_PER_LEVEL, PointRewards, PointsLedger, level_for_points,
};
pub use manager::{AchievementManager, GamificationEvent};
pub use streaks::{StreakPolicy, current_streak, longest_streak};
