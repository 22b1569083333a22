//! gridnav Input
//!
//! The seven abstract navigation commands and the translation from raw
//! key codes to them:
//! - Arrow keys → `Up` / `Down` / `Left` / `Right`
//! - Enter → `Enter`
//! - Backspace → `Back`
//! - Escape → `Esc`

mod action;
mod error;
mod keymap;

pub use action::Action;
pub use error::InputError;
pub use keymap::{
    KeyMap, KEY_BACKSPACE, KEY_DOWN, KEY_ENTER, KEY_ESCAPE, KEY_LEFT, KEY_RIGHT, KEY_UP,
};
