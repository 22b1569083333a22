//! Context Manager
//!
//! Holds the active context inline and parks the rest by id. Contexts are
//! created on first use and live as long as the manager.

use std::collections::HashMap;

use crate::context::NavContext;

pub type ContextId = usize;

#[derive(Debug, Clone, Default)]
pub struct ContextManager {
    active_id: ContextId,
    active: NavContext,
    /// Inactive contexts
    parked: HashMap<ContextId, NavContext>,
}

impl ContextManager {
    /// Start with context 0 active
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_id(&self) -> ContextId {
        self.active_id
    }

    pub fn active(&self) -> &NavContext {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut NavContext {
        &mut self.active
    }

    /// Switch contexts, creating the target at the origin if unseen
    pub fn set_active(&mut self, id: ContextId) {
        if id == self.active_id {
            return;
        }

        let next = self.parked.remove(&id).unwrap_or_else(|| {
            tracing::debug!(context = id, "Created navigation context");
            NavContext::new()
        });
        let previous = std::mem::replace(&mut self.active, next);
        self.parked.insert(self.active_id, previous);

        tracing::info!(from = self.active_id, to = id, "Switched navigation context");

        self.active_id = id;
    }

    pub fn get(&self, id: ContextId) -> Option<&NavContext> {
        if id == self.active_id {
            Some(&self.active)
        } else {
            self.parked.get(&id)
        }
    }

    /// Number of contexts created so far
    pub fn len(&self) -> usize {
        self.parked.len() + 1
    }

    pub fn contains(&self, id: ContextId) -> bool {
        self.get(id).is_some()
    }
}
