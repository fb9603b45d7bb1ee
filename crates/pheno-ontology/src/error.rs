//! Error types for ontology loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a validation set.
///
/// All of these are fatal to the load: without a validation set no
/// meaningful conversion can run.
#[derive(Debug, Error)]
pub enum OntologyError {
    /// The source could not be opened or read as UTF-8 text.
    #[error("ontology source unreadable {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The delimited source could not be parsed.
    #[error("failed to parse ontology source {path}: {message}")]
    SourceMalformed { path: PathBuf, message: String },

    /// The source parsed but contained no phenotype code at all.
    #[error("no phenotype codes found in {path}")]
    EmptyVocabulary { path: PathBuf },
}

impl OntologyError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            source,
        }
    }
}

/// Result type for ontology operations.
pub type Result<T> = std::result::Result<T, OntologyError>;
