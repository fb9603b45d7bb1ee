//! Normalization passes over a loaded table.
//!
//! - **datetime**: date parsing with an explicit month/day order policy
//! - **phenotype**: `HP:` code extraction and validation

pub mod datetime;
pub mod phenotype;

use polars::prelude::{Column, DataFrame};

use crate::error::{Result, TransformError};

pub use datetime::{DateCell, normalize_date_cell, normalize_dates, parse_date_cell};
pub use phenotype::{CodeNormalization, extract_codes, normalize_codes};

/// Replace a column with rewritten string values, keeping its position.
pub(crate) fn replace_column(df: &mut DataFrame, name: &str, values: Vec<String>) -> Result<()> {
    df.with_column(Column::new(name.into(), values))
        .map_err(|source| TransformError::ColumnRewrite {
            column: name.to_string(),
            source,
        })?;
    Ok(())
}
