//! Input error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}
