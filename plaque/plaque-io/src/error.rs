//! Error types for plaque export operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for plaque export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while exporting a plaque.
///
/// Mesh generation and serialization themselves are infallible; only the
/// filesystem boundary can fail.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output file could not be created.
    #[error("cannot create output file: {path}")]
    Create {
        /// Path that could not be created.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
