//! Serializable view of navigator state

use std::collections::BTreeMap;

use gridnav_context::ContextId;
use gridnav_grid::Position;
use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorSnapshot {
    /// Active context id
    pub context: ContextId,
    /// Cursor of the active context
    pub position: Position,
    /// Row → column memory of the active context
    pub cached_columns: BTreeMap<u32, u32>,
    /// Registration entries, duplicates included
    pub elements: usize,
}

impl NavigatorSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
