use polars::prelude::PolarsError;
use thiserror::Error;

/// Frame-level failures while rewriting a table.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to rewrite column '{column}': {source}")]
    ColumnRewrite {
        column: String,
        #[source]
        source: PolarsError,
    },
}

pub type Result<T> = std::result::Result<T, TransformError>;
