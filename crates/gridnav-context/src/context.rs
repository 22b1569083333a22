//! Navigation Context

use std::collections::BTreeMap;

use gridnav_grid::Position;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavContext {
    position: Position,
    /// Last visited column, keyed by row
    cached_columns: BTreeMap<u32, u32>,
}

impl NavContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Remember the column last visited on `row`
    pub fn cache_column(&mut self, row: u32, column: u32) {
        self.cached_columns.insert(row, column);
    }

    pub fn cached_column(&self, row: u32) -> Option<u32> {
        self.cached_columns.get(&row).copied()
    }

    pub fn cached_columns(&self) -> &BTreeMap<u32, u32> {
        &self.cached_columns
    }

    pub fn clear_cache(&mut self) {
        self.cached_columns.clear();
    }
}
