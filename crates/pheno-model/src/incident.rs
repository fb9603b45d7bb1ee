//! Invalid phenotype code incidents.

use serde::{Deserialize, Serialize};

/// One row's phenotype codes that are absent from the validation set.
///
/// `row_index` is the zero-based position in the processed table. Callers
/// that show spreadsheet line numbers add their own header offset, see
/// [`InvalidCodeIncident::report_line`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidCodeIncident {
    /// Zero-based row position within the processed table.
    pub row_index: usize,
    /// Value of the sample-identifier column, or `"unknown"` if the column is absent.
    pub sample_id: String,
    /// Invalid codes in order of first appearance in the cell.
    pub invalid_codes: Vec<String>,
}

impl InvalidCodeIncident {
    pub fn new(row_index: usize, sample_id: impl Into<String>, invalid_codes: Vec<String>) -> Self {
        Self {
            row_index,
            sample_id: sample_id.into(),
            invalid_codes,
        }
    }

    /// Render the `Row <n> | Sample: <id> | Invalid: <codes>` report line.
    ///
    /// ```
    /// use pheno_model::InvalidCodeIncident;
    ///
    /// let incident = InvalidCodeIncident::new(
    ///     0,
    ///     "S001",
    ///     vec!["HP:9999999".to_string(), "HP:8888888".to_string()],
    /// );
    /// assert_eq!(
    ///     incident.report_line(2),
    ///     "Row 2 | Sample: S001 | Invalid: HP:9999999, HP:8888888"
    /// );
    /// ```
    pub fn report_line(&self, row_offset: usize) -> String {
        format!(
            "Row {} | Sample: {} | Invalid: {}",
            self.row_index + row_offset,
            self.sample_id,
            self.invalid_codes.join(", ")
        )
    }
}
