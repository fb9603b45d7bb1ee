//! Output generation for converted phenotype tables.
//!
//! Two artifacts are written next to the input file:
//! - `<stem>_CLEAN.csv`: the converted table, optionally preceded by a
//!   `[DATA]` marker line for downstream LIMS import
//! - `<stem>_HPO_ERROR_REPORT.txt`: one line per row with codes outside the
//!   validation set, only written when such rows exist

mod clean_csv;
mod error;
mod paths;
mod report;

pub use clean_csv::{DATA_MARKER, write_clean_csv};
pub use error::{OutputError, Result};
pub use paths::{CLEAN_SUFFIX, REPORT_SUFFIX, clean_output_path, report_output_path};
pub use report::{REPORT_HEADER, render_incident_report, write_incident_report};
