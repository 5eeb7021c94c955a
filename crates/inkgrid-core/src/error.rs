//! Error types for the canvas model.

use crate::shapes::ShapeId;
use thiserror::Error;

/// Errors produced by canvas and shape operations.
#[derive(Debug, Error)]
pub enum GridError {
    /// A raw bound could not be coerced to an integer.
    #[error("invalid bounds: {0:?} is not an integer")]
    InvalidBounds(String),
    /// A translation axis token other than `x` or `y`.
    #[error("invalid axis: expected 'x' or 'y', got {0:?}")]
    InvalidAxis(String),
    /// No shape with the given id is tracked by the canvas.
    #[error("no shape with id {0}")]
    ShapeNotFound(ShapeId),
    /// JSON round-trip failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for canvas operations.
pub type GridResult<T> = Result<T, GridError>;
