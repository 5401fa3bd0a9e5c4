//! Error types for template materialization and substitution.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core errors. Every variant is fatal for the current run.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The template root does not exist
    #[error("Templates directory not found at {}. Package may be corrupted.", .0.display())]
    SourceMissing(PathBuf),

    /// Filesystem failure on a specific path
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path the operation was acting on
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl CoreError {
    /// Attach a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CoreError::Io {
            path: path.into(),
            source,
        }
    }
}
