//! Navigator
//!
//! One navigator per navigable surface. It owns the registry shared by all
//! contexts and runs every cursor change through [`Navigator::attempt_move`].
//!
//! Move pipeline for a target cell:
//! 1. Row change? Remember the column being left (cache on, not restoring),
//!    reset the column to 0 (reset on), then prefer the target row's
//!    remembered column (cache on).
//! 2. No element at the resulting cell → nothing happens.
//! 3. Otherwise commit the new position, then fire `on_deactivate` on the
//!    element left behind and `on_activate` on the one arrived at.
//!
//! Directional handlers pick their target cell inside the same write lock
//! that commits the move, so concurrent clones never step from a stale
//! cursor. The lock is released before any hook runs, so hooks may call
//! back into the navigator and always see the committed position.

use parking_lot::RwLock;
use std::sync::Arc;

use gridnav_context::{ContextId, ContextManager, NavContext};
use gridnav_grid::{Axis, ElementHandle, Hook, Position, Registry};
use gridnav_input::{Action, KeyMap};

use crate::config::{AxisMemory, Config};
use crate::snapshot::NavigatorSnapshot;
use crate::Result;

#[derive(Debug)]
struct NavigatorState {
    registry: Registry,
    contexts: ContextManager,
}

/// Navigation engine handle. Clones share the same state.
#[derive(Debug, Clone)]
pub struct Navigator {
    config: Config,
    state: Arc<RwLock<NavigatorState>>,
}

impl Navigator {
    pub fn new(config: Config) -> Self {
        tracing::info!(
            cache = config.cache,
            reset_axis = config.reset_axis,
            "Created navigator"
        );

        Self {
            config,
            state: Arc::new(RwLock::new(NavigatorState {
                registry: Registry::with_policy(config.duplicate_policy),
                contexts: ContextManager::new(),
            })),
        }
    }

    pub fn is_cache_enabled(&self) -> bool {
        self.config.cache
    }

    pub fn should_reset_axis(&self) -> bool {
        self.config.reset_axis
    }

    // === Registration ===

    /// Register an element at a position (on mount)
    pub fn register(&self, position: impl Into<Position>, handle: ElementHandle) -> Result<()> {
        Ok(self.state.write().registry.register(position.into(), handle)?)
    }

    /// Remove every registration of an element (on unmount)
    pub fn unregister(&self, handle: &ElementHandle) -> usize {
        self.state.write().registry.unregister(handle)
    }

    pub fn element_at(&self, position: Position) -> Option<ElementHandle> {
        self.state.read().registry.lookup(position).cloned()
    }

    pub fn exists(&self, position: Position) -> bool {
        self.state.read().registry.exists(position)
    }

    pub fn axis_extent(&self, axis: Axis) -> Option<u32> {
        self.state.read().registry.axis_extent(axis)
    }

    pub fn element_count(&self) -> usize {
        self.state.read().registry.len()
    }

    // === Contexts ===

    pub fn active_context(&self) -> ContextId {
        self.state.read().contexts.active_id()
    }

    pub fn set_active_context(&self, id: ContextId) {
        self.state.write().contexts.set_active(id);
    }

    pub fn current_position(&self) -> Position {
        self.state.read().contexts.active().position()
    }

    /// Remembered column for a row in the active context
    pub fn cached_column(&self, row: u32) -> Option<u32> {
        self.state.read().contexts.active().cached_column(row)
    }

    // === Movement ===

    /// Programmatic jump. Row changes still follow the axis policy, but the
    /// column being left is not remembered.
    pub fn update_position(&self, position: impl Into<Position>) -> bool {
        self.attempt_move(position.into(), true)
    }

    /// Re-run the current cell through the move pipeline
    pub fn restore_position(&self) -> bool {
        self.commit_move(true, |_, context| Some(context.position()))
    }

    /// Forget the active context's axis memory and re-evaluate the current
    /// row from column 0
    pub fn clear_cache(&self) -> bool {
        self.commit_move(true, |_, context| {
            context.clear_cache();
            tracing::debug!("Cleared axis memory");
            Some(Position::new(0, context.position().y))
        })
    }

    /// Move the active cursor toward `target`. Returns whether it moved.
    pub fn attempt_move(&self, target: Position, restoring: bool) -> bool {
        self.commit_move(restoring, |_, _| Some(target))
    }

    /// Run the move pipeline for the target picked by `candidate`.
    ///
    /// The candidate is computed under the same write lock that commits the
    /// move, so it always starts from the committed cursor.
    fn commit_move<F>(&self, restoring: bool, candidate: F) -> bool
    where
        F: FnOnce(&Registry, &mut NavContext) -> Option<Position>,
    {
        let (outgoing, incoming) = {
            let mut state = self.state.write();
            let NavigatorState { registry, contexts } = &mut *state;
            let context_id = contexts.active_id();
            let context = contexts.active_mut();

            let Some(target) = candidate(&*registry, &mut *context) else {
                return false;
            };
            let current = context.position();

            let mut column = target.x;
            let mut pending = None;

            if target.y != current.y {
                if !restoring && self.config.cache {
                    match self.config.axis_memory {
                        AxisMemory::RecordAlways => context.cache_column(current.y, current.x),
                        AxisMemory::RecordOnCommit => pending = Some((current.y, current.x)),
                    }
                }

                if self.config.reset_axis {
                    column = 0;
                }

                // Memory wins over the reset
                if self.config.cache {
                    if let Some(cached) = context.cached_column(target.y) {
                        column = cached;
                    }
                }
            }

            let destination = Position::new(column, target.y);
            let Some(incoming) = registry.lookup(destination).cloned() else {
                tracing::trace!(
                    x = destination.x,
                    y = destination.y,
                    "Move rejected, no element at destination"
                );
                return false;
            };
            let outgoing = registry.lookup(current).cloned();

            if let Some((row, column)) = pending {
                context.cache_column(row, column);
            }
            context.set_position(destination);

            tracing::debug!(
                context = context_id,
                from = %current,
                to = %destination,
                "Moved cursor"
            );

            (outgoing, incoming)
        };

        if let Some(outgoing) = outgoing {
            Self::fire(Hook::Deactivate, &outgoing);
        }
        Self::fire(Hook::Activate, &incoming);

        true
    }

    // === Directional handlers ===

    pub fn move_up(&self) -> bool {
        self.commit_move(false, |_, context| {
            let Position { x, y } = context.position();
            y.checked_sub(1).map(|row| Position::new(x, row))
        })
    }

    pub fn move_down(&self) -> bool {
        self.commit_move(false, |registry, context| {
            let Position { x, y } = context.position();
            match registry.axis_extent(Axis::Y) {
                Some(extent) if y < extent => Some(Position::new(x, y + 1)),
                _ => None,
            }
        })
    }

    pub fn move_left(&self) -> bool {
        self.commit_move(false, |_, context| {
            let Position { x, y } = context.position();
            x.checked_sub(1).map(|column| Position::new(column, y))
        })
    }

    pub fn move_right(&self) -> bool {
        self.commit_move(false, |registry, context| {
            let Position { x, y } = context.position();
            match registry.axis_extent(Axis::X) {
                Some(extent) if x < extent => Some(Position::new(x + 1, y)),
                _ => None,
            }
        })
    }

    // === Selection handlers ===

    /// Select the element under the cursor
    pub fn enter(&self) -> bool {
        self.fire_hook(Hook::Enter, self.current_position())
    }

    /// Deselect the element under the cursor
    pub fn back(&self) -> bool {
        self.fire_hook(Hook::Leave, self.current_position())
    }

    /// Invoke one hook on whatever element occupies `position`
    pub fn fire_hook(&self, hook: Hook, position: Position) -> bool {
        let Some(element) = self.element_at(position) else {
            return false;
        };
        Self::fire(hook, &element);
        true
    }

    fn fire(hook: Hook, element: &ElementHandle) {
        tracing::trace!(hook = %hook, "Invoking element hook");
        hook.invoke(element.as_ref());
    }

    // === Dispatch ===

    /// Run the handler for an action. Returns whether anything happened.
    pub fn dispatch(&self, action: Action) -> bool {
        match action {
            Action::Up => self.move_up(),
            Action::Down => self.move_down(),
            Action::Left => self.move_left(),
            Action::Right => self.move_right(),
            Action::Enter => self.enter(),
            Action::Back | Action::Esc => self.back(),
        }
    }

    /// Dispatch a textual action token. Unknown tokens are ignored.
    pub fn dispatch_token(&self, token: &str) -> bool {
        match token.parse::<Action>() {
            Ok(action) => self.dispatch(action),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring action token");
                false
            }
        }
    }

    /// Translate a key code and dispatch it. Unmapped codes are ignored.
    pub fn dispatch_key(&self, keymap: &KeyMap, code: u32) -> bool {
        keymap
            .resolve(code)
            .is_some_and(|action| self.dispatch(action))
    }

    pub fn snapshot(&self) -> NavigatorSnapshot {
        let state = self.state.read();
        let context = state.contexts.active();

        NavigatorSnapshot {
            context: state.contexts.active_id(),
            position: context.position(),
            cached_columns: context.cached_columns().clone(),
            elements: state.registry.len(),
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
