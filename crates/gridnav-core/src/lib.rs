//! gridnav Core
//!
//! Directional navigation over a sparse grid of addressable elements.
//! Input arrives as one of seven action tokens; the navigator moves the
//! active context's cursor and fires lifecycle hooks on the elements it
//! lands on and leaves.

mod config;
mod error;
mod navigator;
mod snapshot;

pub use config::{AxisMemory, Config};
pub use error::CoreError;
pub use navigator::Navigator;
pub use snapshot::NavigatorSnapshot;

// Re-export the building blocks
pub use gridnav_context::{ContextId, ContextManager, NavContext};
pub use gridnav_grid::{
    same_element, Axis, DuplicatePolicy, Element, ElementHandle, GridError, Hook, Position,
    Registry, StatusElement,
};
pub use gridnav_input::{Action, InputError, KeyMap};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
