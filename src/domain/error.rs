//! Error taxonomy for the grid engine.
//!
//! Every variant is local and recoverable: the operation that produced it
//! left the grid and history exactly as they were.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell index {index} is outside the grid (0..{len})")]
    OutOfRange { index: usize, len: usize },

    #[error("snapshot holds {actual} cells but the grid has {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
