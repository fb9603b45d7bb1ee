//! Conversion pipeline: date pass, then phenotype-code pass.

use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use pheno_model::{ConversionOptions, ConversionSummary, InvalidCodeIncident, ValidationSet};

use crate::error::Result;
use crate::normalization::{normalize_codes, normalize_dates};

/// Cleaned table plus everything the caller needs to report on it.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Copy of the input with date and phenotype columns rewritten.
    pub table: DataFrame,
    /// Rows whose phenotype cell held codes outside the validation set.
    pub incidents: Vec<InvalidCodeIncident>,
    pub summary: ConversionSummary,
}

/// Normalize a copy of `df`.
///
/// The input frame is not modified. Every input row appears in the output in
/// the same order; cell and row problems are reported through the marker
/// string and the incident list rather than as errors. The validation set is
/// only read, so one set can serve any number of calls.
pub fn run_conversion(
    df: &DataFrame,
    options: &ConversionOptions,
    valid: &ValidationSet,
) -> Result<Conversion> {
    let span = info_span!(
        "conversion",
        rows = df.height(),
        phenotype_column = %options.phenotype_column
    );
    let _guard = span.enter();
    let start = Instant::now();

    let mut table = df.clone();
    let dates = normalize_dates(&mut table, &options.date_columns, options.date_order)?;
    let codes = normalize_codes(
        &mut table,
        &options.phenotype_column,
        &options.sample_id_column,
        valid,
    )?;

    let summary = ConversionSummary {
        rows: table.height(),
        dates,
        phenotype_column_found: codes.column_found,
        kept_codes: codes.kept_codes,
        incident_rows: codes.incidents.len(),
        invalid_codes: codes.invalid_code_count(),
    };

    info!(
        rows = summary.rows,
        date_columns = summary.dates.columns,
        dates_failed = summary.dates.failed,
        incident_rows = summary.incident_rows,
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );

    Ok(Conversion {
        table,
        incidents: codes.incidents,
        summary,
    })
}
