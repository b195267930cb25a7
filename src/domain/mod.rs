//! Core domain types: waste events, the event log, collection schedule and
//! the segregation guide and reading material.

mod events;
mod guide;
mod learn;
mod schedule;
mod waste;

pub use events::{EventFilter, EventStore, IdExhausted};
pub use guide::{GUIDE, GuideItem, guide_for, lookup};
pub use learn::{Article, EDUCATIONAL_CONTENT, InfoCard, RECYCLING_INFO, articles_about, topics};
pub use schedule::{CollectionEntry, CollectionSchedule, ScheduleError, ScheduleInput};
pub use waste::{
    Category, NewWasteEvent, PIECE_WEIGHT_KG, Unit, ValidationError, WasteEvent, WasteInput,
    parse_quantity,
};
