//! Achievement definitions and metadata
//!
//! The rule table is fixed and evaluated in declaration order, so several
//! achievements unlocked by the same log are always reported in the same order.

use super::checker::AchievementMetrics;

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    FirstLog,
    FirstRecycle,
    WeekWarrior,
    EcoChampion,
    WasteTracker,
    RecyclingMaster,
    MonthWarrior,
    ZeroWaste,
}

impl AchievementId {
    /// Get the string ID for storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstLog => "first_log",
            Self::FirstRecycle => "first_recycle",
            Self::WeekWarrior => "week_warrior",
            Self::EcoChampion => "eco_champion",
            Self::WasteTracker => "waste_tracker",
            Self::RecyclingMaster => "recycling_master",
            Self::MonthWarrior => "month_warrior",
            Self::ZeroWaste => "zero_waste",
        }
    }

    /// Parse from storage string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_log" => Some(Self::FirstLog),
            "first_recycle" => Some(Self::FirstRecycle),
            "week_warrior" => Some(Self::WeekWarrior),
            "eco_champion" => Some(Self::EcoChampion),
            "waste_tracker" => Some(Self::WasteTracker),
            "recycling_master" => Some(Self::RecyclingMaster),
            "month_warrior" => Some(Self::MonthWarrior),
            "zero_waste" => Some(Self::ZeroWaste),
            _ => None,
        }
    }
}

/// Unlock condition, checked against the current metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Requirement {
    /// Total logged events
    Logs(u64),
    /// Logged events in the recyclable category
    Recycles(u64),
    /// Consecutive logging days
    Streak(u32),
    /// Recycling rate in percent
    RecyclingRate(f64),
}

impl Requirement {
    pub fn is_met(&self, metrics: &AchievementMetrics) -> bool {
        match *self {
            Self::Logs(n) => metrics.total_logs >= n,
            Self::Recycles(n) => metrics.total_recycles >= n,
            Self::Streak(days) => metrics.streak_days >= days,
            Self::RecyclingRate(rate) => metrics.recycling_rate >= rate,
        }
    }

    /// Current value and target, for progress display
    pub fn progress(&self, metrics: &AchievementMetrics) -> (f64, f64) {
        match *self {
            Self::Logs(n) => (metrics.total_logs as f64, n as f64),
            Self::Recycles(n) => (metrics.total_recycles as f64, n as f64),
            Self::Streak(days) => (f64::from(metrics.streak_days), f64::from(days)),
            Self::RecyclingRate(rate) => (metrics.recycling_rate, rate),
        }
    }
}

/// Achievement definition with all metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requirement: Requirement,
}

/// All achievement definitions, in evaluation order
pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: AchievementId::FirstLog,
        name: "First Step",
        description: "Log your first waste entry",
        icon: "🌱",
        requirement: Requirement::Logs(1),
    },
    Achievement {
        id: AchievementId::FirstRecycle,
        name: "First Recycle",
        description: "Recycle your first item",
        icon: "♻️",
        requirement: Requirement::Recycles(1),
    },
    Achievement {
        id: AchievementId::WeekWarrior,
        name: "Week Warrior",
        description: "Log waste for 7 consecutive days",
        icon: "📅",
        requirement: Requirement::Streak(7),
    },
    Achievement {
        id: AchievementId::EcoChampion,
        name: "Eco Champion",
        description: "Recycle 50 items",
        icon: "🏆",
        requirement: Requirement::Recycles(50),
    },
    Achievement {
        id: AchievementId::WasteTracker,
        name: "Waste Tracker",
        description: "Log 10 waste entries",
        icon: "📊",
        requirement: Requirement::Logs(10),
    },
    Achievement {
        id: AchievementId::RecyclingMaster,
        name: "Recycling Master",
        description: "Recycle 100 items",
        icon: "⭐",
        requirement: Requirement::Recycles(100),
    },
    Achievement {
        id: AchievementId::MonthWarrior,
        name: "Month Warrior",
        description: "Log 30 waste entries",
        icon: "📆",
        requirement: Requirement::Logs(30),
    },
    Achievement {
        id: AchievementId::ZeroWaste,
        name: "Zero Waste Hero",
        description: "Reach an 80% recycling rate",
        icon: "🌍",
        requirement: Requirement::RecyclingRate(80.0),
    },
];

impl Achievement {
    /// Get achievement definition by ID
    pub fn get(id: AchievementId) -> Option<&'static Achievement> {
        ACHIEVEMENTS.iter().find(|a| a.id == id)
    }

    /// Look up a definition by its stored string ID
    pub fn by_str(id: &str) -> Option<&'static Achievement> {
        AchievementId::from_str(id).and_then(Self::get)
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }
}
