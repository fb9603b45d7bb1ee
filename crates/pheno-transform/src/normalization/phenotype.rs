//! Phenotype code validation.
//!
//! A phenotype cell is free text that may mix several `HP:` codes with notes,
//! e.g. `"HP:0001250 and also HP:0012345 but malformed HP:A99"`. Only tokens
//! of the exact `HP:<digits>` shape are extracted; malformed tokens are
//! neither kept nor reported. Extracted codes missing from the validation set
//! are dropped from the cell and reported as one incident per row.

use std::sync::LazyLock;

use polars::prelude::DataFrame;
use regex::Regex;
use tracing::{debug, warn};

use pheno_common::column_strings;
use pheno_model::{CODE_SEPARATOR, InvalidCodeIncident, UNKNOWN_SAMPLE, ValidationSet};

use super::replace_column;
use crate::error::Result;

/// `HP:` followed by ASCII digits. `\d` would also accept non-ASCII digits.
static HPO_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"HP:[0-9]+").expect("HPO code pattern is valid"));

/// Result of the phenotype-code pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeNormalization {
    /// Whether the code column existed; when false nothing was touched.
    pub column_found: bool,
    /// Codes kept across all rows.
    pub kept_codes: usize,
    /// One entry per row that had at least one invalid code, in row order.
    pub incidents: Vec<InvalidCodeIncident>,
}

impl CodeNormalization {
    pub fn invalid_code_count(&self) -> usize {
        self.incidents
            .iter()
            .map(|incident| incident.invalid_codes.len())
            .sum()
    }
}

/// Extract every `HP:<digits>` token, in order of appearance.
///
/// ```
/// use pheno_transform::extract_codes;
///
/// assert_eq!(
///     extract_codes("HP:0001250 and also HP:0012345 but malformed HP:A99"),
///     vec!["HP:0001250", "HP:0012345"]
/// );
/// ```
pub fn extract_codes(text: &str) -> Vec<String> {
    HPO_CODE_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split extracted codes into (kept, invalid), each in original order.
pub fn partition_codes(codes: Vec<String>, valid: &ValidationSet) -> (Vec<String>, Vec<String>) {
    codes.into_iter().partition(|code| valid.contains(code))
}

/// Rewrite the phenotype column of `df` in place.
///
/// Each cell becomes its valid codes joined with `"; "`. Rows with invalid
/// codes yield an [`InvalidCodeIncident`] labelled with the row's value in
/// `sample_id_column`, or `"unknown"` if that column is absent. A missing
/// `code_column` is a no-op.
pub fn normalize_codes(
    df: &mut DataFrame,
    code_column: &str,
    sample_id_column: &str,
    valid: &ValidationSet,
) -> Result<CodeNormalization> {
    let Some(cells) = column_strings(df, code_column) else {
        debug!(column = %code_column, "phenotype column not present, skipping");
        return Ok(CodeNormalization::default());
    };
    let sample_ids = column_strings(df, sample_id_column);
    if sample_ids.is_none() {
        debug!(column = %sample_id_column, "sample id column not present, incidents labelled unknown");
    }

    let mut outcome = CodeNormalization {
        column_found: true,
        ..CodeNormalization::default()
    };
    let mut rewritten = Vec::with_capacity(cells.len());

    for (row_index, cell) in cells.iter().enumerate() {
        let (kept, invalid) = partition_codes(extract_codes(cell), valid);
        if !invalid.is_empty() {
            debug!(row_index, invalid = ?invalid, "invalid phenotype codes in row");
            let sample_id = sample_ids
                .as_ref()
                .and_then(|ids| ids.get(row_index).cloned())
                .unwrap_or_else(|| UNKNOWN_SAMPLE.to_string());
            outcome
                .incidents
                .push(InvalidCodeIncident::new(row_index, sample_id, invalid));
        }
        outcome.kept_codes += kept.len();
        rewritten.push(kept.join(CODE_SEPARATOR));
    }

    replace_column(df, code_column, rewritten)?;

    if !outcome.incidents.is_empty() {
        warn!(
            column = %code_column,
            rows = outcome.incidents.len(),
            invalid_codes = outcome.invalid_code_count(),
            "invalid phenotype codes dropped"
        );
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(codes: &[&str]) -> ValidationSet {
        codes.iter().copied().collect()
    }

    #[test]
    fn test_extract_ignores_malformed_and_lowercase() {
        assert_eq!(extract_codes("hp:0001250, HP:A99, HP:"), Vec::<String>::new());
        assert_eq!(extract_codes("HP:0001250;HP:0000118"), vec!["HP:0001250", "HP:0000118"]);
    }

    #[test]
    fn test_extract_non_ascii_digits_excluded() {
        assert!(extract_codes("HP:\u{0661}\u{0662}").is_empty());
    }

    #[test]
    fn test_partition_keeps_order_and_duplicates() {
        let set = valid(&["HP:0000001"]);
        let codes = vec![
            "HP:0000002".to_string(),
            "HP:0000001".to_string(),
            "HP:0000003".to_string(),
            "HP:0000001".to_string(),
        ];
        let (kept, invalid) = partition_codes(codes, &set);
        assert_eq!(kept, vec!["HP:0000001", "HP:0000001"]);
        assert_eq!(invalid, vec!["HP:0000002", "HP:0000003"]);
    }
}
