//! Settings sections of the config file

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::stats::achievements::StreakPolicy;
use crate::store::StorageBackend;

/// Where and how state is persisted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Blob backend: "json" (default) or "sqlite"
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory holding the blobs. Defaults to `~/.ecotrack/data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Tracking behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingSettings {
    /// "consecutive" counts the whole run of logging days,
    /// "two_day" only looks at today and yesterday
    #[serde(default)]
    pub streak_policy: StreakPolicy,

    /// Number of entries shown by `list` when no filter is given
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_recent_limit() -> usize {
    5
}

impl Default for TrackingSettings {
    fn default() -> Self {
        Self {
            streak_policy: StreakPolicy::default(),
            recent_limit: default_recent_limit(),
        }
    }
}
