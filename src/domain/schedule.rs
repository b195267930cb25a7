//! Waste collection schedule
//!
//! Upcoming pickups the user wants to be reminded of. Entries are independent of
//! the waste log and do not affect stats or points.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::events::{IdExhausted, next_id};
use super::waste::{ValidationError, non_blank};
use crate::stats::time_bucket::parse_day_bucket;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub id: u64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub waste_type: String,
    /// "HH:MM", if the pickup has a known time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Raw schedule input
#[derive(Debug, Clone, Default)]
pub struct ScheduleInput {
    pub date: Option<String>,
    pub waste_type: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

/// Why a pickup could not be added
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Ids(#[from] IdExhausted),
}

#[derive(Debug, Clone, Default)]
pub struct CollectionSchedule {
    entries: Vec<CollectionEntry>,
}

impl CollectionSchedule {
    pub fn from_entries(entries: Vec<CollectionEntry>) -> Self {
        Self { entries }
    }

    pub fn add(&mut self, input: &ScheduleInput, now_ms: i64) -> Result<CollectionEntry, ScheduleError> {
        let raw_date = non_blank(&input.date).ok_or(ValidationError::MissingField("date"))?;
        let date = parse_day_bucket(raw_date)
            .ok_or_else(|| ValidationError::InvalidDate(raw_date.to_string()))?;
        let waste_type = non_blank(&input.waste_type).ok_or(ValidationError::MissingField("type"))?;

        let time = match non_blank(&input.time) {
            Some(raw) => {
                let parsed = NaiveTime::parse_from_str(raw, "%H:%M")
                    .map_err(|_| ValidationError::InvalidTime(raw.to_string()))?;
                Some(parsed.format("%H:%M").to_string())
            }
            None => None,
        };

        let id = next_id(self.entries.iter().map(|e| e.id).max(), now_ms)?;

        let entry = CollectionEntry {
            id,
            date,
            waste_type: waste_type.to_string(),
            time,
            notes: non_blank(&input.notes).map(str::to_string),
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }

    pub fn remove(&mut self, id: u64) -> Option<CollectionEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Pickups on or after `today`, soonest first
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&CollectionEntry> {
        let mut upcoming: Vec<_> = self.entries.iter().filter(|e| e.date >= today).collect();
        upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
        upcoming
    }

    pub fn entries(&self) -> &[CollectionEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(date: &str, time: Option<&str>) -> ScheduleInput {
        ScheduleInput {
            date: Some(date.to_string()),
            waste_type: Some("recyclable".to_string()),
            time: time.map(str::to_string),
            notes: None,
        }
    }

    #[test]
    fn test_upcoming_is_sorted_and_skips_past() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut schedule = CollectionSchedule::default();
        schedule.add(&input("2024-06-12", Some("09:00")), 1).unwrap();
        schedule.add(&input("2024-06-01", None), 2).unwrap();
        schedule.add(&input("2024-06-10", Some("7:30")), 3).unwrap();
        schedule.add(&input("2024-06-12", Some("08:00")), 4).unwrap();

        let upcoming: Vec<(String, Option<String>)> = schedule
            .upcoming(today)
            .iter()
            .map(|e| (e.date.to_string(), e.time.clone()))
            .collect();
        assert_eq!(
            upcoming,
            vec![
                ("2024-06-10".to_string(), Some("07:30".to_string())),
                ("2024-06-12".to_string(), Some("08:00".to_string())),
                ("2024-06-12".to_string(), Some("09:00".to_string())),
            ]
        );
    }

    #[test]
    fn test_add_validates() {
        let mut schedule = CollectionSchedule::default();
        assert_eq!(
            schedule.add(&ScheduleInput::default(), 1),
            Err(ScheduleError::Invalid(ValidationError::MissingField("date")))
        );
        assert!(matches!(
            schedule.add(&input("2024-06-12", Some("noon")), 1),
            Err(ScheduleError::Invalid(ValidationError::InvalidTime(_)))
        ));
        assert!(schedule.entries().is_empty());
    }

    #[test]
    fn test_remove() {
        let mut schedule = CollectionSchedule::default();
        let entry = schedule.add(&input("2024-06-12", None), 50).unwrap();
        let second = schedule.add(&input("2024-06-13", None), 50).unwrap();
        assert_eq!(second.id, 51);
        assert_eq!(schedule.remove(entry.id), Some(entry));
        assert_eq!(schedule.remove(999), None);
        assert_eq!(schedule.entries().len(), 1);
    }

    #[test]
    fn test_add_after_max_id() {
        let mut schedule = CollectionSchedule::from_entries(vec![CollectionEntry {
            id: u64::MAX,
            date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
            waste_type: "Glass".to_string(),
            time: None,
            notes: None,
        }]);
        assert_eq!(
            schedule.add(&input("2024-06-13", None), 5),
            Err(ScheduleError::Ids(IdExhausted(u64::MAX)))
        );
        assert_eq!(schedule.entries().len(), 1);
    }
}
