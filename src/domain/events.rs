//! In-memory event log with append, delete and filtered queries

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::warn;

use super::waste::{Category, NewWasteEvent, WasteEvent};

/// Filter for listing waste events. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
    /// Inclusive lower bound
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound
    pub end_date: Option<NaiveDate>,
}

impl EventFilter {
    pub fn category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, event: &WasteEvent) -> bool {
        if self.category.is_some_and(|c| c != event.category) {
            return false;
        }
        if self.date.is_some_and(|d| d != event.date) {
            return false;
        }
        if self.start_date.is_some_and(|d| event.date < d) {
            return false;
        }
        if self.end_date.is_some_and(|d| event.date > d) {
            return false;
        }
        true
    }
}

/// No id is left above the highest one in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("No ids left after {0}")]
pub struct IdExhausted(pub u64);

/// Next id: the creation timestamp, bumped past `last` if the clock has not
/// moved forward.
pub(crate) fn next_id(last: Option<u64>, now_ms: i64) -> Result<u64, IdExhausted> {
    let candidate = u64::try_from(now_ms).unwrap_or(0);
    match last {
        Some(last) if candidate <= last => last.checked_add(1).ok_or(IdExhausted(last)),
        _ => Ok(candidate),
    }
}

/// Owns all waste events, kept in creation (id) order.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<WasteEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from persisted events. Events are ordered by id and
    /// duplicate ids are dropped (first one wins).
    pub fn from_events(mut events: Vec<WasteEvent>) -> Self {
        events.sort_by_key(|e| e.id);
        let mut seen = HashSet::new();
        events.retain(|e| {
            let fresh = seen.insert(e.id);
            if !fresh {
                warn!(id = e.id, "Dropping waste log with duplicate id");
            }
            fresh
        });
        Self { events }
    }

    pub fn next_id(&self, now_ms: i64) -> Result<u64, IdExhausted> {
        next_id(self.events.last().map(|e| e.id), now_ms)
    }

    /// Append a validated event and return the stored copy
    pub fn append(&mut self, new: NewWasteEvent, now_ms: i64) -> Result<WasteEvent, IdExhausted> {
        let event = new.with_id(self.next_id(now_ms)?);
        self.events.push(event.clone());
        Ok(event)
    }

    /// Delete an event by id, returning it if it existed
    pub fn delete(&mut self, id: u64) -> Option<WasteEvent> {
        let index = self.events.iter().position(|e| e.id == id)?;
        Some(self.events.remove(index))
    }

    pub fn get(&self, id: u64) -> Option<&WasteEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn query(&self, filter: &EventFilter) -> Vec<&WasteEvent> {
        self.events.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Last `limit` events, most recent first
    pub fn recent(&self, limit: usize) -> Vec<&WasteEvent> {
        self.events.iter().rev().take(limit).collect()
    }

    /// The `limit` most recent events that match `filter`, newest first
    pub fn recent_matching(&self, filter: &EventFilter, limit: usize) -> Vec<&WasteEvent> {
        self.events
            .iter()
            .rev()
            .filter(|e| filter.matches(e))
            .take(limit)
            .collect()
    }

    pub fn all(&self) -> &[WasteEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of logged events in the recyclable category
    pub fn recycle_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_recyclable()).count()
    }
}
