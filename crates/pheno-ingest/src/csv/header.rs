//! Column header normalization.

use polars::prelude::DataFrame;

/// Normalizes a header value: strips a byte-order mark and surrounding whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim_matches('\u{feff}').trim().to_string()
}

/// Column names in table order.
pub fn list_columns(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.as_str().to_string())
        .collect()
}

/// Trims every column name of a freshly read frame in place.
pub(crate) fn trim_column_names(df: &mut DataFrame) -> polars::prelude::PolarsResult<()> {
    let trimmed: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| normalize_header(name.as_str()))
        .collect();
    df.set_column_names(trimmed.iter().map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Date Of Birth "), "Date Of Birth");
        assert_eq!(normalize_header("\u{feff}BioSample Name"), "BioSample Name");
        assert_eq!(normalize_header("\t"), "");
    }
}
