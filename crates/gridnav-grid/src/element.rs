//! Element capability interface
//!
//! Elements opt into lifecycle callbacks by overriding the hooks they care
//! about. Every hook defaults to a no-op, so an element that implements none
//! of them is still a valid navigation target.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub trait Element: Send + Sync {
    /// The cursor arrived on this element
    fn on_activate(&self) {}

    /// The cursor left this element
    fn on_deactivate(&self) {}

    /// The element was selected (Enter)
    fn on_enter(&self) {}

    /// The element was deselected (Back / Esc)
    fn on_leave(&self) {}
}

/// Shared handle to a registered element. Identity is the allocation.
pub type ElementHandle = Arc<dyn Element>;

/// True when both handles point at the same element
pub fn same_element(a: &ElementHandle, b: &ElementHandle) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hook {
    Activate,
    Deactivate,
    Enter,
    Leave,
}

impl Hook {
    /// Invoke this hook on an element
    pub fn invoke(self, element: &dyn Element) {
        match self {
            Hook::Activate => element.on_activate(),
            Hook::Deactivate => element.on_deactivate(),
            Hook::Enter => element.on_enter(),
            Hook::Leave => element.on_leave(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Hook::Activate => "activate",
            Hook::Deactivate => "deactivate",
            Hook::Enter => "enter",
            Hook::Leave => "leave",
        }
    }
}

impl std::fmt::Display for Hook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Element that tracks its own active/selected flags for rendering.
#[derive(Debug, Default)]
pub struct StatusElement {
    active: AtomicBool,
    selected: AtomicBool,
}

impl StatusElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    pub fn is_selected(&self) -> bool {
        self.selected.load(Ordering::Relaxed)
    }
}

impl Element for StatusElement {
    fn on_activate(&self) {
        self.active.store(true, Ordering::Relaxed);
    }

    fn on_deactivate(&self) {
        self.active.store(false, Ordering::Relaxed);
    }

    fn on_enter(&self) {
        self.selected.store(true, Ordering::Relaxed);
    }

    fn on_leave(&self) {
        self.selected.store(false, Ordering::Relaxed);
    }
}
