//! Counters describing a conversion run.

use serde::{Deserialize, Serialize};

/// Outcome counts of the date pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateStats {
    /// Date columns that were present and rewritten.
    pub columns: usize,
    /// Cells rewritten to `YYYY-MM-DD`.
    pub converted: usize,
    /// Cells that were empty or missing.
    pub empty: usize,
    /// Cells replaced with the `WRONG_DATE_CONVERSION` marker.
    pub failed: usize,
}

impl DateStats {
    pub fn merge(&mut self, other: DateStats) {
        self.columns += other.columns;
        self.converted += other.converted;
        self.empty += other.empty;
        self.failed += other.failed;
    }
}

/// Summary of a whole conversion, suitable for display or JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSummary {
    /// Rows in the input and output table (always equal).
    pub rows: usize,
    pub dates: DateStats,
    /// Whether the phenotype column was present and rewritten.
    pub phenotype_column_found: bool,
    /// Codes kept across all rows.
    pub kept_codes: usize,
    /// Rows with at least one invalid code.
    pub incident_rows: usize,
    /// Invalid codes across all rows.
    pub invalid_codes: usize,
}

impl ConversionSummary {
    pub fn has_incidents(&self) -> bool {
        self.incident_rows > 0
    }
}
