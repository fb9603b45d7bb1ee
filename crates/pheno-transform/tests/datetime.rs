//! Tests for date normalization.
#![allow(missing_docs)]

use chrono::NaiveDate;
use polars::prelude::{Column, DataFrame};
use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

use pheno_common::column_strings;
use pheno_model::{DateOrder, WRONG_DATE_CONVERSION};
use pheno_transform::{normalize_date_cell, normalize_dates};

fn is_iso_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

#[test]
fn normalize_dates_rewrites_column_in_place() {
    let mut df = DataFrame::new(vec![Column::new(
        "DOB".into(),
        vec![Some("5/19/1991"), Some("2020-01-03"), Some("01-02-2001"), None],
    )])
    .unwrap();

    let stats = normalize_dates(&mut df, &["DOB".to_string()], DateOrder::MonthFirst).unwrap();

    assert_eq!(
        column_strings(&df, "DOB").unwrap(),
        vec!["1991-05-19", "2020-01-03", "2001-01-02", ""]
    );
    assert_eq!(stats.columns, 1);
    assert_eq!(stats.converted, 3);
    assert_eq!(stats.empty, 1);
    assert_eq!(stats.failed, 0);
}

#[test]
fn normalize_dates_skips_absent_columns() {
    let mut df = DataFrame::new(vec![Column::new("Name".into(), vec!["a", "b"])]).unwrap();

    let stats = normalize_dates(
        &mut df,
        &["Due Date".to_string()],
        DateOrder::MonthFirst,
    )
    .unwrap();

    assert_eq!(stats.columns, 0);
    assert_eq!(column_strings(&df, "Name").unwrap(), vec!["a", "b"]);
}

#[test]
fn normalize_dates_keeps_marker_visible() {
    let mut df = DataFrame::new(vec![
        Column::new("Sample".into(), vec!["S1", "S2"]),
        Column::new("Due Date".into(), vec!["next week", "2024-02-29"]),
    ])
    .unwrap();

    let stats = normalize_dates(
        &mut df,
        &["Due Date".to_string()],
        DateOrder::MonthFirst,
    )
    .unwrap();

    assert_eq!(
        column_strings(&df, "Due Date").unwrap(),
        vec![WRONG_DATE_CONVERSION, "2024-02-29"]
    );
    assert_eq!(stats.failed, 1);
    // Column order is unchanged.
    assert_eq!(df.get_column_names()[1].as_str(), "Due Date");
}

#[test]
fn normalize_dates_numeric_cells() {
    let mut df = DataFrame::new(vec![Column::new("Visit".into(), vec![20200103i64, 7])]).unwrap();

    normalize_dates(&mut df, &["Visit".to_string()], DateOrder::MonthFirst).unwrap();

    assert_eq!(
        column_strings(&df, "Visit").unwrap(),
        vec!["2020-01-03", WRONG_DATE_CONVERSION]
    );
}

#[test]
fn month_name_dates_keep_their_year() {
    let mut df = DataFrame::new(vec![Column::new(
        "Due Date".into(),
        vec!["May 1991", "Jan 2020", "Dec 1985", "19 May 91", "Sunday, May 19, 1991"],
    )])
    .unwrap();

    let stats = normalize_dates(&mut df, &["Due Date".to_string()], DateOrder::MonthFirst).unwrap();

    assert_eq!(
        column_strings(&df, "Due Date").unwrap(),
        vec!["1991-05-01", "2020-01-01", "1985-12-01", "1991-05-19", "1991-05-19"]
    );
    assert_eq!(stats.failed, 0);
}

#[test]
fn year_and_year_month_cells() {
    assert_eq!(normalize_date_cell("1991", DateOrder::MonthFirst), "1991-01-01");
    assert_eq!(normalize_date_cell("1991-05", DateOrder::DayFirst), "1991-05-01");
}

proptest! {
    #[test]
    fn output_is_iso_empty_or_marker(value in "\\PC{0,24}") {
        let out = normalize_date_cell(&value, DateOrder::MonthFirst);
        if value.trim().is_empty() {
            prop_assert_eq!(out, "");
        } else {
            prop_assert!(out == WRONG_DATE_CONVERSION || is_iso_date(&out), "unexpected output {out:?}");
        }
    }

    #[test]
    fn numeric_dates_always_resolve(month in 1u32..=12, day in 1u32..=28, year in 1900i32..=2099) {
        let value = format!("{month}/{day}/{year}");
        let out = normalize_date_cell(&value, DateOrder::DayFirst);
        prop_assert!(is_iso_date(&out));
    }

    #[test]
    fn iso_dates_are_idempotent(year in 0i32..=9999, month in 1u32..=12, day in 1u32..=28) {
        let iso = NaiveDate::from_ymd_opt(year, month, day).unwrap().format("%Y-%m-%d").to_string();
        prop_assert_eq!(normalize_date_cell(&iso, DateOrder::MonthFirst), iso.clone());
        prop_assert_eq!(normalize_date_cell(&iso, DateOrder::DayFirst), iso);
    }
}
