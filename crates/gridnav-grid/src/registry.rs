//! Position Registry
//!
//! Registration entries are appended in mount order and looked up by
//! position. Lookup always returns the first entry registered at a cell.

use serde::{Deserialize, Serialize};

use crate::element::{same_element, ElementHandle};
use crate::error::GridError;
use crate::position::{Axis, Position};
use crate::Result;

/// What to do when a second element registers at an occupied position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Accept the registration. The earlier element keeps the cell and the
    /// later one stays unreachable until the earlier one unregisters.
    #[default]
    FirstWins,
    /// Refuse the registration with [`GridError::Occupied`]
    Reject,
}

struct Entry {
    position: Position,
    handle: ElementHandle,
}

#[derive(Default)]
pub struct Registry {
    entries: Vec<Entry>,
    duplicate_policy: DuplicatePolicy,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(duplicate_policy: DuplicatePolicy) -> Self {
        Self {
            entries: Vec::new(),
            duplicate_policy,
        }
    }

    /// Register an element at a position
    pub fn register(&mut self, position: Position, handle: ElementHandle) -> Result<()> {
        if self.exists(position) {
            match self.duplicate_policy {
                DuplicatePolicy::Reject => return Err(GridError::Occupied(position)),
                DuplicatePolicy::FirstWins => {
                    tracing::warn!(
                        x = position.x,
                        y = position.y,
                        "Position already occupied, new element is shadowed"
                    );
                }
            }
        }

        self.entries.push(Entry { position, handle });

        tracing::debug!(x = position.x, y = position.y, "Registered element");

        Ok(())
    }

    /// Remove every entry for an element. Returns how many were removed.
    pub fn unregister(&mut self, handle: &ElementHandle) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !same_element(&entry.handle, handle));
        let removed = before - self.entries.len();

        if removed > 0 {
            tracing::debug!(removed, "Unregistered element");
        }

        removed
    }

    /// First element registered at a position
    pub fn lookup(&self, position: Position) -> Option<&ElementHandle> {
        self.entries
            .iter()
            .find(|entry| entry.position == position)
            .map(|entry| &entry.handle)
    }

    pub fn exists(&self, position: Position) -> bool {
        self.lookup(position).is_some()
    }

    /// Highest registered coordinate along an axis.
    ///
    /// `None` on an empty registry, which bounds every directional move to
    /// "never advance".
    pub fn axis_extent(&self, axis: Axis) -> Option<u32> {
        self.entries
            .iter()
            .map(|entry| entry.position.coord(axis))
            .max()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered positions in registration order (duplicates included)
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.entries.iter().map(|entry| entry.position)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("positions", &self.positions().collect::<Vec<_>>())
            .field("duplicate_policy", &self.duplicate_policy)
            .finish()
    }
}
