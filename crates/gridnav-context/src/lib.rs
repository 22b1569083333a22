//! gridnav Contexts
//!
//! A context is one independent cursor over the shared grid: where it
//! currently sits, and which column it last visited on each row.
//! Several contexts (menu levels, screens) can share one registry while
//! each remembers its own cursor.

mod context;
mod manager;

pub use context::NavContext;
pub use manager::{ContextId, ContextManager};
