//! Data models for derived statistics
//!
//! These structures are recomputed from the event log and handed to renderers.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::achievements::GamificationEvent;
use super::impact::ImpactEstimate;
use crate::domain::{Category, EventFilter, WasteEvent};

/// Statistics derived from the complete event log.
///
/// Never patched incrementally: always the output of
/// [`compute_stats`](super::compute_stats) over the current events. The
/// persisted copy is a cache and is rebuilt on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    /// All waste, in kg
    pub total_waste: f64,
    /// Waste in the recyclable category, in kg
    pub total_recycled: f64,
    /// kg per category. Always contains every category.
    pub by_category: BTreeMap<Category, f64>,
    /// Percentage of waste recycled, one decimal place
    pub recycling_rate: f64,
    #[serde(flatten)]
    pub impact: ImpactEstimate,
}

impl Default for DerivedStats {
    fn default() -> Self {
        Self {
            total_waste: 0.0,
            total_recycled: 0.0,
            by_category: Category::ALL.iter().map(|c| (*c, 0.0)).collect(),
            recycling_rate: 0.0,
            impact: ImpactEstimate::default(),
        }
    }
}

impl DerivedStats {
    pub fn category_kg(&self, category: Category) -> f64 {
        self.by_category.get(&category).copied().unwrap_or(0.0)
    }

    /// Largest per-category weight, used to scale bar charts
    pub fn max_category_kg(&self) -> f64 {
        self.by_category.values().copied().fold(0.0, f64::max)
    }
}

/// Time range for dashboard views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Last7Days,
    Last30Days,
    Last90Days,
    #[default]
    AllTime,
}

impl TimeRange {
    /// Get the number of days to look back (None for all time)
    pub fn days(&self) -> Option<u32> {
        match self {
            Self::Last7Days => Some(7),
            Self::Last30Days => Some(30),
            Self::Last90Days => Some(90),
            Self::AllTime => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::Last90Days => "Last 90 days",
            Self::AllTime => "All time",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "7d" | "week" => Some(Self::Last7Days),
            "30d" | "month" => Some(Self::Last30Days),
            "90d" | "quarter" => Some(Self::Last90Days),
            "all" => Some(Self::AllTime),
            _ => None,
        }
    }

    /// Event filter covering this range, ending at `today` (inclusive)
    pub fn filter(&self, today: NaiveDate) -> EventFilter {
        match self.days() {
            Some(days) => EventFilter {
                start_date: Some(today - Duration::days(i64::from(days) - 1)),
                end_date: Some(today),
                ..EventFilter::default()
            },
            None => EventFilter::default(),
        }
    }
}

/// Result of logging one waste event
#[derive(Debug, Clone)]
pub struct LogOutcome {
    pub event: WasteEvent,
    pub stats: DerivedStats,
    pub streak_days: u32,
    pub gamification: Vec<GamificationEvent>,
}

impl LogOutcome {
    pub fn points_awarded(&self) -> u64 {
        self.gamification
            .iter()
            .map(|e| match e {
                GamificationEvent::PointsAwarded { amount, .. } => *amount,
                _ => 0,
            })
            .sum()
    }
}
