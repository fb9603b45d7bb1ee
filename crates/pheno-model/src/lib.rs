//! Data model shared by the phenotype converter crates.
//!
//! - **vocabulary**: the validation set of recognized phenotype codes
//! - **incident**: per-row invalid-code records and their report lines
//! - **options**: per-run conversion settings, including the date-order policy
//! - **summary**: counters describing what a conversion did

pub mod incident;
pub mod options;
pub mod summary;
pub mod vocabulary;

pub use incident::InvalidCodeIncident;
pub use options::{
    ConversionOptions, DEFAULT_DATE_COLUMNS, DEFAULT_PHENOTYPE_COLUMN, DEFAULT_SAMPLE_ID_COLUMN,
    DateOrder,
};
pub use summary::{ConversionSummary, DateStats};
pub use vocabulary::{HPO_PREFIX, ValidationSet, is_phenotype_code};

/// Marker written into a date cell that no parse strategy could read.
pub const WRONG_DATE_CONVERSION: &str = "WRONG_DATE_CONVERSION";

/// Sample identifier reported when the sample-id column is absent.
pub const UNKNOWN_SAMPLE: &str = "unknown";

/// Separator between kept codes in a rewritten phenotype cell.
pub const CODE_SEPARATOR: &str = "; ";
