//! Error types.
//!
//! Shape generators never fail: degenerate input produces an empty path.
//! Errors only come from the configuration side (scene files, colours).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid value for field '{0}': {1}")]
    InvalidValue(String, String),
}

/// Result type alias for scene and colour operations.
pub type ShapeResult<T> = Result<T, ShapeError>;
