//! Streak tracking
//!
//! A streak is a run of consecutive calendar days that each have at least one
//! logged event, ending today or yesterday.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::WasteEvent;
use crate::stats::time_bucket::previous_day;

/// How the current streak is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakPolicy {
    /// Full run of consecutive logging days
    #[default]
    Consecutive,
    /// Only looks at today and yesterday, so never exceeds 2
    TwoDay,
}

impl StreakPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consecutive => "consecutive",
            Self::TwoDay => "two_day",
        }
    }
}

/// Current streak in days as of `today`
pub fn current_streak(events: &[WasteEvent], today: NaiveDate, policy: StreakPolicy) -> u32 {
    let days = logged_days(events, today);
    let yesterday = previous_day(today);

    match policy {
        StreakPolicy::TwoDay => match (days.contains(&today), days.contains(&yesterday)) {
            (true, true) => 2,
            (true, false) => 1,
            _ => 0,
        },
        StreakPolicy::Consecutive => {
            let anchor = if days.contains(&today) {
                today
            } else if days.contains(&yesterday) {
                yesterday
            } else {
                return 0;
            };
            run_ending_at(&days, anchor)
        }
    }
}

/// Longest run of consecutive logging days ever, up to `today`
pub fn longest_streak(events: &[WasteEvent], today: NaiveDate) -> u32 {
    let days = logged_days(events, today);
    let mut best = 0;
    let mut run = 0;
    let mut last: Option<NaiveDate> = None;

    for day in days {
        run = match last {
            Some(prev) if prev.succ_opt() == Some(day) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        last = Some(day);
    }
    best
}

/// Distinct days with at least one event, ignoring future-dated entries
fn logged_days(events: &[WasteEvent], today: NaiveDate) -> BTreeSet<NaiveDate> {
    events
        .iter()
        .map(|e| e.date)
        .filter(|d| *d <= today)
        .collect()
}

fn run_ending_at(days: &BTreeSet<NaiveDate>, anchor: NaiveDate) -> u32 {
    let mut count = 0;
    let mut day = anchor;
    while days.contains(&day) {
        count += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewWasteEvent, WasteInput};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn events_on(days: &[u32]) -> Vec<WasteEvent> {
        days.iter()
            .enumerate()
            .map(|(i, d)| {
                let new: NewWasteEvent = WasteInput::new("general", "Bag", "1")
                    .validate(day(*d))
                    .unwrap();
                new.with_id(i as u64 + 1)
            })
            .collect()
    }

    #[test]
    fn test_empty_log_has_no_streak() {
        assert_eq!(current_streak(&[], day(10), StreakPolicy::Consecutive), 0);
        assert_eq!(longest_streak(&[], day(10)), 0);
    }

    #[test]
    fn test_consecutive_counts_full_run() {
        let events = events_on(&[1, 3, 4, 5, 6, 7, 8, 9, 10, 10]);
        assert_eq!(current_streak(&events, day(10), StreakPolicy::Consecutive), 8);
        assert_eq!(current_streak(&events, day(10), StreakPolicy::TwoDay), 2);
    }

    #[test]
    fn test_streak_can_end_yesterday() {
        let events = events_on(&[7, 8, 9]);
        assert_eq!(current_streak(&events, day(10), StreakPolicy::Consecutive), 3);
        assert_eq!(current_streak(&events, day(10), StreakPolicy::TwoDay), 0);
        assert_eq!(current_streak(&events, day(11), StreakPolicy::Consecutive), 0);
    }

    #[test]
    fn test_two_day_only_today() {
        let events = events_on(&[8, 10]);
        assert_eq!(current_streak(&events, day(10), StreakPolicy::TwoDay), 1);
        assert_eq!(current_streak(&events, day(10), StreakPolicy::Consecutive), 1);
    }

    #[test]
    fn test_future_days_are_ignored() {
        let events = events_on(&[9, 10, 11, 12]);
        assert_eq!(current_streak(&events, day(10), StreakPolicy::Consecutive), 2);
        assert_eq!(longest_streak(&events, day(10)), 2);
    }

    #[test]
    fn test_longest_streak() {
        let events = events_on(&[1, 2, 3, 4, 8, 9, 15]);
        assert_eq!(longest_streak(&events, day(20)), 4);
    }

    #[test]
    fn test_policy_serde_names() {
        let policy: StreakPolicy = serde_json::from_str("\"two_day\"").unwrap();
        assert_eq!(policy, StreakPolicy::TwoDay);
        assert_eq!(StreakPolicy::default().as_str(), "consecutive");
    }
}
