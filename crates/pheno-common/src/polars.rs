//! Polars AnyValue utility functions.
//!
//! Spreadsheet cells arrive as strings, numbers, dates or nulls. The
//! normalizers only ever reason about text, so every cell goes through
//! [`any_to_string`] first.

use polars::prelude::{AnyValue, DataFrame};

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`, formats floats without a trailing `.0`
/// and renders temporal values in their ISO display form.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use pheno_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::Float64(3.0)), "3");
/// assert_eq!(any_to_string(AnyValue::String("HP:0000001")), "HP:0000001");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number without insignificant trailing zeros.
///
/// ```
/// use pheno_common::format_numeric;
///
/// assert_eq!(format_numeric(100.0), "100");
/// assert_eq!(format_numeric(2.50), "2.5");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Extracts every cell of a column as a string, in row order.
///
/// Returns `None` when the column does not exist. Null cells become `""`.
pub fn column_strings(df: &DataFrame, name: &str) -> Option<Vec<String>> {
    let column = df.column(name).ok()?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_string(column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Some(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, NamedFrom};

    #[test]
    fn test_format_numeric_keeps_integer_zeros() {
        assert_eq!(format_numeric(1990.0), "1990");
        assert_eq!(format_numeric(10.0), "10");
        assert_eq!(format_numeric(0.25), "0.25");
    }

    #[test]
    fn test_column_strings_handles_nulls() {
        let df = DataFrame::new(vec![Column::new(
            "Sample".into(),
            vec![Some("S1"), None, Some("S3")],
        )])
        .unwrap();

        let values = column_strings(&df, "Sample").unwrap();
        assert_eq!(values, vec!["S1", "", "S3"]);
        assert!(column_strings(&df, "Missing").is_none());
        assert!(column_strings(&df, "sample").is_none());
    }

    #[test]
    fn test_column_strings_numeric_column() {
        let df = DataFrame::new(vec![Column::new("Age".into(), vec![34i64, 7])]).unwrap();
        assert_eq!(column_strings(&df, "Age").unwrap(), vec!["34", "7"]);
    }
}
