//! Key code translation
//!
//! Maps raw key codes (DOM `keyCode` numbering) and key names to action
//! tokens. Unmapped keys produce no token.

use std::collections::HashMap;

use crate::action::Action;

pub const KEY_BACKSPACE: u32 = 8;
pub const KEY_ENTER: u32 = 13;
pub const KEY_ESCAPE: u32 = 27;
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;

#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<u32, Action>,
}

impl KeyMap {
    /// Standard arrow / Enter / Backspace / Escape bindings
    pub fn new() -> Self {
        let bindings = [
            (KEY_BACKSPACE, Action::Back),
            (KEY_ENTER, Action::Enter),
            (KEY_ESCAPE, Action::Esc),
            (KEY_LEFT, Action::Left),
            (KEY_UP, Action::Up),
            (KEY_RIGHT, Action::Right),
            (KEY_DOWN, Action::Down),
        ]
        .into_iter()
        .collect();

        Self { bindings }
    }

    /// A map with no bindings at all
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn bind(&mut self, code: u32, action: Action) {
        self.bindings.insert(code, action);
    }

    pub fn with_binding(mut self, code: u32, action: Action) -> Self {
        self.bind(code, action);
        self
    }

    pub fn unbind(&mut self, code: u32) -> Option<Action> {
        self.bindings.remove(&code)
    }

    /// Resolve a key code into an action token
    pub fn resolve(&self, code: u32) -> Option<Action> {
        let action = self.bindings.get(&code).copied();
        if action.is_none() {
            tracing::trace!(code, "Unmapped key code");
        }
        action
    }

    /// Resolve a DOM-style key name ("ArrowUp", "Backspace", ...)
    pub fn resolve_name(&self, name: &str) -> Option<Action> {
        Self::code_for_name(name).and_then(|code| self.resolve(code))
    }

    fn code_for_name(name: &str) -> Option<u32> {
        match name {
            "Backspace" => Some(KEY_BACKSPACE),
            "Enter" => Some(KEY_ENTER),
            "Escape" | "Esc" => Some(KEY_ESCAPE),
            "ArrowLeft" | "Left" => Some(KEY_LEFT),
            "ArrowUp" | "Up" => Some(KEY_UP),
            "ArrowRight" | "Right" => Some(KEY_RIGHT),
            "ArrowDown" | "Down" => Some(KEY_DOWN),
            _ => None,
        }
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}
