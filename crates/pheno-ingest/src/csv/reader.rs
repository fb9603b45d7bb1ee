//! CSV file reading with explicit header row configuration.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::{debug, info};

use pheno_common::sniff_delimiter;

use crate::error::{IngestError, Result};

use super::header::trim_column_names;

/// Header row used by the clinician spreadsheets (a title line sits above it).
pub const DEFAULT_HEADER_ROW: usize = 2;

/// Data lines sampled after the header for delimiter detection.
const SNIFF_DATA_LINES: usize = 20;

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Reads the first N lines from a file.
fn read_first_lines(path: &Path, n: usize) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::with_capacity(n);

    for line_result in reader.lines().take(n) {
        let line = line_result.map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        // Skip BOM if present
        let cleaned = line.strip_prefix('\u{feff}').unwrap_or(&line).to_string();
        lines.push(cleaned);
    }

    Ok(lines)
}

/// Reads a delimited export into a DataFrame.
///
/// - `header_row` is 1-based; the lines above it are skipped
/// - the delimiter is sniffed from the header and the first data lines
/// - every column is read as a string and column names are trimmed
///
/// Rows are kept in file order.
pub fn read_input_table(path: &Path, header_row: usize) -> Result<DataFrame> {
    let lines = read_first_lines(path, header_row.max(1) + SNIFF_DATA_LINES)?;
    if lines.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    if header_row == 0 || header_row > lines.len() {
        return Err(IngestError::InvalidHeaderRow {
            path: path.to_path_buf(),
            header_row,
            line_count: lines.len(),
        });
    }

    let delimiter = sniff_delimiter(&lines[header_row - 1..]);
    debug!(
        path = %path.display(),
        header_row,
        delimiter = %char::from(delimiter).escape_default(),
        "reading input table"
    );

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_skip_rows(header_row - 1)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|options| options.with_separator(delimiter))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    trim_column_names(&mut df)?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "input table loaded"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_single_header() {
        let file = create_temp_csv("A,B,C\n1,2,3\n4,5,6\n");
        let df = read_input_table(file.path(), 1).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn test_header_row_zero_rejected() {
        let file = create_temp_csv("A,B\n1,2\n");
        let result = read_input_table(file.path(), 0);
        assert!(matches!(result, Err(IngestError::InvalidHeaderRow { .. })));
    }

    #[test]
    fn test_header_row_past_end_rejected() {
        let file = create_temp_csv("A,B\n");
        let result = read_input_table(file.path(), 3);
        assert!(matches!(
            result,
            Err(IngestError::InvalidHeaderRow {
                header_row: 3,
                line_count: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_file() {
        let file = create_temp_csv("");
        let result = read_input_table(file.path(), 1);
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }
}
