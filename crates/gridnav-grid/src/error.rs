//! Grid error types

use thiserror::Error;

use crate::position::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Position already occupied: {0}")]
    Occupied(Position),
}
