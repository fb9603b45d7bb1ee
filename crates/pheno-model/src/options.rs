//! Configuration options for a conversion run.

use serde::{Deserialize, Serialize};

/// Column holding the phenotype codes in clinician spreadsheets.
pub const DEFAULT_PHENOTYPE_COLUMN: &str = "Phenotypes Id";

/// Column holding the sample identifier.
pub const DEFAULT_SAMPLE_ID_COLUMN: &str = "BioSample Name";

/// Date columns selected when the caller does not choose any.
pub const DEFAULT_DATE_COLUMNS: [&str; 4] = [
    "Date Of Birth",
    "Due Date",
    "DataRichiesta",
    "DataRicezioneCampione",
];

/// How ambiguous numeric dates such as `03/04/2020` are read.
///
/// Only the general parse stage honors this; the explicit fallback formats
/// keep their fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `03/04/2020` is March 4th.
    #[default]
    MonthFirst,
    /// `03/04/2020` is April 3rd.
    DayFirst,
}

impl DateOrder {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MonthFirst => "month-first",
            Self::DayFirst => "day-first",
        }
    }
}

/// Per-run column selections and policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Column whose cells contain phenotype codes.
    pub phenotype_column: String,
    /// Column used to label incidents.
    pub sample_id_column: String,
    /// Columns to rewrite as `YYYY-MM-DD`. Absent columns are skipped.
    pub date_columns: Vec<String>,
    pub date_order: DateOrder,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            phenotype_column: DEFAULT_PHENOTYPE_COLUMN.to_string(),
            sample_id_column: DEFAULT_SAMPLE_ID_COLUMN.to_string(),
            date_columns: DEFAULT_DATE_COLUMNS.iter().map(ToString::to_string).collect(),
            date_order: DateOrder::default(),
        }
    }
}

impl ConversionOptions {
    pub fn new(phenotype_column: impl Into<String>) -> Self {
        Self {
            phenotype_column: phenotype_column.into(),
            ..Self::default()
        }
    }

    /// Set the sample-id column. A blank name keeps the default.
    #[must_use]
    pub fn with_sample_id_column(mut self, column: impl Into<String>) -> Self {
        let column = column.into();
        let trimmed = column.trim();
        self.sample_id_column = if trimmed.is_empty() {
            DEFAULT_SAMPLE_ID_COLUMN.to_string()
        } else {
            trimmed.to_string()
        };
        self
    }

    #[must_use]
    pub fn with_date_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.date_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }
}
