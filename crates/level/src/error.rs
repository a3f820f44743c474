//! Level error types.

use thiserror::Error;

/// Errors that can occur while loading or validating level data.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("Failed to read level file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed level JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid world size {width}x{height}")]
    InvalidWorld { width: f32, height: f32 },

    #[error("Level index {index} out of range (pack has {len} levels)")]
    LevelIndexOutOfRange { index: usize, len: usize },

    #[error("Level pack contains no levels")]
    EmptyPack,
}
