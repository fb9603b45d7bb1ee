//! CSV reading utilities.

mod header;
mod reader;

pub use header::{list_columns, normalize_header};
pub use reader::{DEFAULT_HEADER_ROW, read_input_table};
