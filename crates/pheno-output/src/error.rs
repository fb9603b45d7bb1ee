//! Error types for output generation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

/// Errors raised while writing output artifacts.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {path} as CSV: {message}")]
    Csv { path: PathBuf, message: String },
}

impl OutputError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
