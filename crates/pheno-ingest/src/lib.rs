//! Clinician table ingestion.
//!
//! Loads a spreadsheet export (comma, semicolon or tab separated) into a
//! Polars [`DataFrame`](polars::prelude::DataFrame) ready for normalization.
//!
//! # Features
//!
//! - **Explicit header row**: clinician sheets often carry a title line above
//!   the header; the 1-based header row is chosen by the caller
//! - **Text-only schema**: every column is read as a string so free text and
//!   dates reach the normalizers exactly as typed
//! - **Header cleanup**: column names are whitespace-trimmed
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pheno_ingest::{read_input_table, list_columns, DEFAULT_HEADER_ROW};
//!
//! let df = read_input_table(Path::new("patients.csv"), DEFAULT_HEADER_ROW)?;
//! for column in list_columns(&df) {
//!     println!("{column}");
//! }
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{DEFAULT_HEADER_ROW, list_columns, normalize_header, read_input_table};
