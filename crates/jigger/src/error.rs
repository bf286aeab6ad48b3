//! Error types for the Jigger library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Jigger operations.
///
/// Only catalog loading can fail; the measurement, naming, search, and
/// attribution functions are total and return plain values.
#[derive(Debug, Error)]
pub enum JiggerError {
    /// Error reading or accessing a catalog file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Jigger operations.
pub type Result<T> = std::result::Result<T, JiggerError>;
