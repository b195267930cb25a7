//! Points and level system
//!
//! Levels come in fixed bands of 100 points: 0-99 is level 1, 100-199 is
//! level 2, and so on.

use serde::{Deserialize, Serialize};

use crate::domain::{Category, WasteEvent};

/// Width of one level band
pub const POINTS_PER_LEVEL: u64 = 100;

/// Level for a points total
pub fn level_for_points(points: u64) -> u64 {
    (points / POINTS_PER_LEVEL + 1).max(1)
}

/// Points rewards for various actions
pub struct PointRewards;

impl PointRewards {
    /// Points for logging any waste event
    pub const LOG: u64 = 10;

    /// Extra points for a recyclable event
    pub const RECYCLE_BONUS: u64 = 50;

    /// Points for each newly earned achievement
    pub const ACHIEVEMENT: u64 = 100;

    /// Points earned by logging `event`, excluding achievement bonuses
    pub fn for_event(event: &WasteEvent) -> u64 {
        match event.category {
            Category::Recyclable => Self::LOG + Self::RECYCLE_BONUS,
            _ => Self::LOG,
        }
    }
}

/// A level up event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub old_level: u64,
    pub new_level: u64,
}

/// Accumulated points. Only ever grows.
///
/// The persisted `level` is informational; it is recomputed from `points` on
/// load so a hand-edited or stale level can't drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredLedger")]
pub struct PointsLedger {
    points: u64,
    level: u64,
}

#[derive(Deserialize)]
struct StoredLedger {
    #[serde(default)]
    points: u64,
}

impl From<StoredLedger> for PointsLedger {
    fn from(stored: StoredLedger) -> Self {
        Self::with_points(stored.points)
    }
}

impl Default for PointsLedger {
    fn default() -> Self {
        Self::with_points(0)
    }
}

impl PointsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_points(points: u64) -> Self {
        Self {
            points,
            level: level_for_points(points),
        }
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn level(&self) -> u64 {
        self.level
    }

    /// Add points and report a level change, if any
    pub fn award(&mut self, amount: u64) -> Option<LevelUp> {
        let old_level = self.level;
        self.points = self.points.saturating_add(amount);
        self.level = level_for_points(self.points);

        (self.level > old_level).then_some(LevelUp {
            old_level,
            new_level: self.level,
        })
    }

    pub fn progress(&self) -> LevelProgress {
        let level_floor = (self.level - 1) * POINTS_PER_LEVEL;
        let next_level_at = self.level.saturating_mul(POINTS_PER_LEVEL);
        let into_level = self.points - level_floor;

        LevelProgress {
            level: self.level,
            points: self.points,
            level_floor,
            next_level_at,
            points_to_next: next_level_at.saturating_sub(self.points),
            percent: (into_level as f64 / POINTS_PER_LEVEL as f64 * 100.0).min(100.0),
        }
    }
}

/// Progress through the current level band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProgress {
    pub level: u64,
    pub points: u64,
    /// Points at which the current level started
    pub level_floor: u64,
    /// Points at which the next level starts
    pub next_level_at: u64,
    pub points_to_next: u64,
    /// 0.0 - 100.0
    pub percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_points() {
        assert_eq!(level_for_points(0), 1);
        assert_eq!(level_for_points(99), 1);
        assert_eq!(level_for_points(100), 2);
        assert_eq!(level_for_points(250), 3);
    }

    #[test]
    fn test_award_reports_level_up() {
        let mut ledger = PointsLedger::new();
        assert_eq!(ledger.award(60), None);
        assert_eq!(
            ledger.award(60),
            Some(LevelUp {
                old_level: 1,
                new_level: 2
            })
        );
        assert_eq!(ledger.points(), 120);
        assert_eq!(
            ledger.award(200),
            Some(LevelUp {
                old_level: 2,
                new_level: 4
            })
        );
        assert_eq!(ledger.award(0), None);
    }

    #[test]
    fn test_progress() {
        let progress = PointsLedger::with_points(250).progress();
        assert_eq!(progress.level, 3);
        assert_eq!(progress.level_floor, 200);
        assert_eq!(progress.next_level_at, 300);
        assert_eq!(progress.points_to_next, 50);
        assert!((progress.percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_stored_level_is_recomputed() {
        let ledger: PointsLedger = serde_json::from_str(r#"{"points":340,"level":1}"#).unwrap();
        assert_eq!(ledger.level(), 4);

        let json = serde_json::to_value(ledger).unwrap();
        assert_eq!(json, serde_json::json!({"points": 340, "level": 4}));
    }
}
