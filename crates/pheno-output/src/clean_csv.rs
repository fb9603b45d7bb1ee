//! Cleaned-table CSV writer.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use polars::prelude::{AnyValue, DataFrame};
use tracing::info;

use pheno_common::any_to_string;

use crate::error::{OutputError, Result};

/// First cell of the marker line expected by the LIMS import.
pub const DATA_MARKER: &str = "[DATA]";

/// Write `df` as UTF-8 CSV with `\n` line endings.
///
/// With `data_marker` set, the file starts with `[DATA]` followed by one
/// empty field per remaining column, then the header line and the rows.
/// Nulls and empty strings are both written as empty fields. Missing parent
/// directories are created.
pub fn write_clean_csv(df: &DataFrame, path: &Path, data_marker: bool) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::io(parent, source))?;
    }

    let file = File::create(path).map_err(|source| OutputError::io(path, source))?;
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(BufWriter::new(file));
    let csv_error = |err: csv::Error| OutputError::Csv {
        path: path.to_path_buf(),
        message: err.to_string(),
    };

    if data_marker {
        writer
            .write_record(marker_record(df.width()))
            .map_err(csv_error)?;
    }
    writer
        .write_record(df.get_column_names().iter().map(|name| name.as_str()))
        .map_err(csv_error)?;

    let columns = df.get_columns();
    for idx in 0..df.height() {
        let record = columns
            .iter()
            .map(|column| any_to_string(column.get(idx).unwrap_or(AnyValue::Null)));
        writer.write_record(record).map_err(csv_error)?;
    }
    writer
        .flush()
        .map_err(|source| OutputError::io(path, source))?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        data_marker,
        "clean table written"
    );
    Ok(())
}

fn marker_record(width: usize) -> Vec<&'static str> {
    let mut record = vec![DATA_MARKER];
    record.resize(width.max(1), "");
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_record_width() {
        assert_eq!(marker_record(3), vec!["[DATA]", "", ""]);
        assert_eq!(marker_record(1), vec!["[DATA]"]);
        assert_eq!(marker_record(0), vec!["[DATA]"]);
    }
}
