//! Date normalization to ISO 8601 `YYYY-MM-DD`.
//!
//! Every cell is read independently with this precedence:
//!
//! 1. empty or missing cells stay empty
//! 2. a flexible parse that understands ISO dates (optionally with a time of
//!    day), numeric dates separated by `-`, `/` or `.`, compact `YYYYMMDD`,
//!    year-only and year-month dates, and month names with an optional
//!    leading weekday; ambiguous numeric dates follow the [`DateOrder`] policy
//! 3. a fixed list of explicit formats, tried in order; the year must be
//!    written with four digits
//! 4. otherwise the cell becomes [`WRONG_DATE_CONVERSION`], left visible for
//!    manual correction
//!
//! Re-normalizing an ISO date yields the same string.

use chrono::{Datelike, NaiveDate};
use polars::prelude::DataFrame;
use tracing::debug;

use pheno_common::column_strings;
use pheno_model::{DateOrder, DateStats, WRONG_DATE_CONVERSION};

use super::replace_column;
use crate::error::Result;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Explicit formats tried after the flexible parse, first match wins.
const FALLBACK_FORMATS: [&str; 5] = ["%Y-%m-%d", "%m-%d-%Y", "%d-%m-%Y", "%m/%d/%Y", "%d/%m/%Y"];

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Two-digit years below this are read as 20xx, the rest as 19xx.
const TWO_DIGIT_YEAR_PIVOT: i32 = 70;

/// Outcome of reading one date cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCell {
    /// Missing or blank input.
    Empty,
    /// A calendar date within `0000..=9999`.
    Parsed(NaiveDate),
    /// No strategy could read the input.
    Unparseable,
}

impl DateCell {
    /// Render the cell as it appears in the cleaned table.
    pub fn to_output(self) -> String {
        match self {
            DateCell::Empty => String::new(),
            DateCell::Parsed(date) => date.format(ISO_DATE_FORMAT).to_string(),
            DateCell::Unparseable => WRONG_DATE_CONVERSION.to_string(),
        }
    }
}

/// Read a single date cell.
pub fn parse_date_cell(value: &str, order: DateOrder) -> DateCell {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return DateCell::Empty;
    }
    parse_flexible(trimmed, order)
        .or_else(|| parse_explicit(trimmed))
        .filter(|date| (0..=9999).contains(&date.year()))
        .map_or(DateCell::Unparseable, DateCell::Parsed)
}

/// Rewrite a single date cell: `YYYY-MM-DD`, `""` or `WRONG_DATE_CONVERSION`.
///
/// ```
/// use pheno_model::DateOrder;
/// use pheno_transform::normalize_date_cell;
///
/// assert_eq!(normalize_date_cell("5/19/1991", DateOrder::MonthFirst), "1991-05-19");
/// assert_eq!(normalize_date_cell("03/04/2020", DateOrder::DayFirst), "2020-04-03");
/// assert_eq!(normalize_date_cell("", DateOrder::MonthFirst), "");
/// assert_eq!(normalize_date_cell("soon", DateOrder::MonthFirst), "WRONG_DATE_CONVERSION");
/// ```
pub fn normalize_date_cell(value: &str, order: DateOrder) -> String {
    parse_date_cell(value, order).to_output()
}

/// Rewrite every designated date column of `df` in place.
///
/// Columns that are not in the table are skipped. Cell failures are written
/// as the marker string and counted, never raised.
pub fn normalize_dates(df: &mut DataFrame, columns: &[String], order: DateOrder) -> Result<DateStats> {
    let mut stats = DateStats::default();
    for name in columns {
        let Some(values) = column_strings(df, name) else {
            debug!(column = %name, "date column not present, skipping");
            continue;
        };

        let mut column_stats = DateStats {
            columns: 1,
            ..DateStats::default()
        };
        let rewritten: Vec<String> = values
            .iter()
            .map(|value| {
                let cell = parse_date_cell(value, order);
                match cell {
                    DateCell::Empty => column_stats.empty += 1,
                    DateCell::Parsed(_) => column_stats.converted += 1,
                    DateCell::Unparseable => column_stats.failed += 1,
                }
                cell.to_output()
            })
            .collect();
        replace_column(df, name, rewritten)?;

        debug!(
            column = %name,
            order = order.label(),
            converted = column_stats.converted,
            empty = column_stats.empty,
            failed = column_stats.failed,
            "date column normalized"
        );
        stats.merge(column_stats);
    }
    Ok(stats)
}

/// Flexible parse stage.
fn parse_flexible(value: &str, order: DateOrder) -> Option<NaiveDate> {
    let date_part = strip_time_of_day(value);
    parse_numeric_date(date_part, order).or_else(|| parse_textual_date(date_part))
}

/// Explicit-format stage.
///
/// chrono's `%Y` accepts any digit count, so a match only counts when the
/// year appears in the input as four digits.
fn parse_explicit(value: &str) -> Option<NaiveDate> {
    FALLBACK_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .filter(|date| value.contains(&format!("{:04}", date.year())))
}

/// Drop a trailing time of day (`1991-05-19T10:30`, `1991-05-19 00:00:00`).
fn strip_time_of_day(value: &str) -> &str {
    if let Some((date, time)) = value.split_once('T')
        && looks_like_time(time)
    {
        return date.trim_end();
    }
    let Some(colon) = value.find(':') else {
        return value;
    };
    match value[..colon].rfind(char::is_whitespace) {
        Some(space) => value[..space].trim_end(),
        None => value,
    }
}

fn looks_like_time(value: &str) -> bool {
    value.starts_with(|c: char| c.is_ascii_digit()) && value.contains(':')
}

fn parse_numeric_date(value: &str, order: DateOrder) -> Option<NaiveDate> {
    let tokens: Vec<&str> = value.split(['-', '/', '.']).collect();
    let all_digits = tokens
        .iter()
        .all(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()));
    if !all_digits {
        return None;
    }

    match tokens.as_slice() {
        [compact] if compact.len() == 8 => {
            ymd(number(&compact[..4])?, &compact[4..6], &compact[6..])
        }
        [year] if year.len() == 4 => NaiveDate::from_ymd_opt(number(year)?, 1, 1),
        [year, month] if year.len() == 4 && month.len() <= 2 => ymd(number(year)?, month, "1"),
        [month, year] if month.len() <= 2 && year.len() == 4 => ymd(number(year)?, month, "1"),
        [year, month, day] if year.len() == 4 && month.len() <= 2 && day.len() <= 2 => {
            ymd(number(year)?, month, day)
        }
        [first, second, year] if first.len() <= 2 && second.len() <= 2 => {
            let year = expand_year(year)?;
            let month_first = || ymd(year, first, second);
            let day_first = || ymd(year, second, first);
            match order {
                DateOrder::MonthFirst => month_first().or_else(day_first),
                DateOrder::DayFirst => day_first().or_else(month_first),
            }
        }
        _ => None,
    }
}

/// Dates written with a month name: `19 May 1991`, `May 19, 1991`,
/// `19-may-91`, `1991 May 19`, `Sunday, May 19, 1991`, and month-year forms
/// such as `May 1991` (read as the first of the month).
fn parse_textual_date(value: &str) -> Option<NaiveDate> {
    let mut tokens: Vec<&str> = value
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '-' | '/' | '.'))
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.first().is_some_and(|token| is_weekday(token)) {
        tokens.remove(0);
    }

    let month_at = tokens.iter().position(|token| month_number(token).is_some())?;
    let month = month_number(tokens[month_at])?;
    let numbers: Vec<&str> = tokens
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != month_at)
        .map(|(_, token)| *token)
        .collect();
    if !numbers
        .iter()
        .all(|token| token.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    match (month_at, numbers.as_slice()) {
        (0 | 1, [year]) if year.len() == 4 => NaiveDate::from_ymd_opt(number(year)?, month, 1),
        (0 | 1, [day, year]) if day.len() <= 2 => {
            NaiveDate::from_ymd_opt(expand_year(year)?, month, number(day)?)
        }
        (1, [year, day]) if year.len() == 4 && day.len() <= 2 => {
            NaiveDate::from_ymd_opt(number(year)?, month, number(day)?)
        }
        _ => None,
    }
}

/// `1..=12` for a full or three-letter month name (`Sept` included).
fn month_number(token: &str) -> Option<u32> {
    let lower = token.to_ascii_lowercase();
    if lower.len() < 3 {
        return None;
    }
    let idx = MONTH_NAMES.iter().position(|name| {
        *name == lower || name[..3] == lower || (*name == "september" && lower == "sept")
    })?;
    u32::try_from(idx + 1).ok()
}

fn is_weekday(token: &str) -> bool {
    let lower = token.to_ascii_lowercase();
    lower.len() >= 3 && WEEKDAY_NAMES.iter().any(|name| *name == lower || name[..3] == lower)
}

fn ymd(year: i32, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, number(month)?, number(day)?)
}

fn expand_year(token: &str) -> Option<i32> {
    let year: i32 = number(token)?;
    match token.len() {
        4 => Some(year),
        2 if year < TWO_DIGIT_YEAR_PIVOT => Some(2000 + year),
        2 => Some(1900 + year),
        _ => None,
    }
}

fn number<T: std::str::FromStr>(token: &str) -> Option<T> {
    token.parse().ok()
}
