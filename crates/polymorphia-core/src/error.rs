//! Error Types
//!
//! Errors raised while building a maze or writing simulation output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazeError {
    /// Bad parameters: zero-sized layouts, rooms outside the maze, self-connections
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The maze is not in a state that allows the operation
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
