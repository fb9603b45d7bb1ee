//! Record normalization for clinician phenotype tables.
//!
//! This crate provides the transformation applied to a loaded table before it
//! is handed to the genomic-analysis pipeline:
//!
//! - **normalization::datetime**: date cells rewritten to `YYYY-MM-DD`, or the
//!   `WRONG_DATE_CONVERSION` marker when no strategy reads them
//! - **normalization::phenotype**: phenotype-code cells reduced to the codes
//!   present in the validation set, with the rest reported as incidents
//! - **pipeline**: [`run_conversion`], both passes over a copy of the table
//!
//! Cell- and row-level problems never abort a conversion; only frame-level
//! failures surface as [`TransformError`].

mod error;
pub mod normalization;
pub mod pipeline;

pub use error::{Result, TransformError};
pub use normalization::{
    CodeNormalization, DateCell, extract_codes, normalize_codes, normalize_date_cell,
    normalize_dates, parse_date_cell,
};
pub use pipeline::{Conversion, run_conversion};
