//! Error types for playground link processing.

use std::path::PathBuf;

/// Error returned while validating options or rewriting playground links.
///
/// Every variant is fatal for the document being processed.
#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    /// Missing or invalid `directory` option.
    #[error("configuration error: {0}")]
    Config(String),

    /// A referenced source file does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Invalid link reference (e.g., more than one JavaScript file).
    #[error("validation error: {0}")]
    Validation(String),

    /// Reading or writing a file failed.
    #[error("I/O error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing CodeSandbox parameters failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
