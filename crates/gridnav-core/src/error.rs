//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Grid error: {0}")]
    Grid(#[from] gridnav_grid::GridError),

    #[error("Input error: {0}")]
    Input(#[from] gridnav_input::InputError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
