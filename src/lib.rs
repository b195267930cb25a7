//! ecotrack - household waste tracking
//!
//! Logs what you throw away, derives totals, recycling rate and the
//! environmental savings of what you recycled, and keeps you at it with
//! points, levels, streaks and achievements.
//!
//! ## Layout
//!
//! - [`domain`]: waste events, validation, the collection schedule and the
//!   segregation guide
//! - [`stats`]: derived stats, gamification and the [`WasteTracker`](stats::WasteTracker)
//!   command handler
//! - [`store`]: keyed JSON blob persistence (JSON files or SQLite)
//! - [`config`]: `~/.ecotrack/config.toml`

pub mod config;
pub mod domain;
pub mod stats;
pub mod store;

pub use domain::*;
