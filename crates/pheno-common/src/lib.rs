//! Shared utilities for the phenotype converter crates.
//!
//! This crate provides helpers used by more than one loader or normalizer:
//! Polars value coercion and delimiter sniffing for loosely-formatted text tables.

pub mod delimiter;
pub mod polars;

pub use delimiter::{CANDIDATE_DELIMITERS, sniff_delimiter};
pub use polars::{any_to_string, column_strings, format_numeric};
