//! Navigator configuration
//!
//! Fixed at construction. Every field is optional in JSON; unknown fields
//! are rejected:
//!
//! ```json
//! { "cache": true, "reset_axis": true, "duplicate_policy": "reject" }
//! ```
//!
//! `reset_axis` is also accepted as `resetAxis` or `reset`.

use gridnav_grid::DuplicatePolicy;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::Result;

/// When the column being left is written to the row cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisMemory {
    /// Record on every row change attempt, before the destination is
    /// checked for an occupant. A rejected move still updates the cache.
    #[default]
    RecordAlways,
    /// Record only when the move commits
    RecordOnCommit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Remember the last visited column of each row
    pub cache: bool,
    /// Force the column to 0 on every row change (cache still wins)
    #[serde(alias = "resetAxis", alias = "reset")]
    pub reset_axis: bool,
    /// Behavior for a second registration at an occupied position
    pub duplicate_policy: DuplicatePolicy,
    pub axis_memory: AxisMemory,
}

impl Config {
    pub fn new() -> Self {
        Self {
            cache: false,
            reset_axis: true,
            duplicate_policy: DuplicatePolicy::FirstWins,
            axis_memory: AxisMemory::RecordAlways,
        }
    }

    /// Parse a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Err(CoreError::Config("empty configuration".to_string()));
        }
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache = enabled;
        self
    }

    pub fn with_reset_axis(mut self, enabled: bool) -> Self {
        self.reset_axis = enabled;
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn with_axis_memory(mut self, axis_memory: AxisMemory) -> Self {
        self.axis_memory = axis_memory;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
