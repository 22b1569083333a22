//! gridnav Grid
//!
//! The shared coordinate space every navigation context moves over.
//! Positions are caller-assigned integer cells, never derived from layout.

mod element;
mod error;
mod position;
mod registry;

pub use element::{same_element, Element, ElementHandle, Hook, StatusElement};
pub use error::GridError;
pub use position::{Axis, Position};
pub use registry::{DuplicatePolicy, Registry};

pub type Result<T> = std::result::Result<T, GridError>;
