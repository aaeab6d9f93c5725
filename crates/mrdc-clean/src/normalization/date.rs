//! Date-format reconciliation.
//!
//! Date columns in the extracts mix four layouts. The whole column is parsed
//! under each layout in priority order and the attempts are coalesced: the
//! first layout that parses a row wins, and a row no layout parses is null.

use chrono::NaiveDate;
use polars::prelude::{DataFrame, DataType, NamedFrom, Series};

use crate::error::Result;
use crate::values::{column_text, replace_column, require_column};

/// Recognised date layouts, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `2006-10-15`
    IsoDash,
    /// `October 2006 15`
    MonthYearDay,
    /// `2006 October 15`
    YearMonthDay,
    /// `2006/10/15`
    IsoSlash,
}

impl DateFormat {
    pub const PRIORITY: [DateFormat; 4] = [
        DateFormat::IsoDash,
        DateFormat::MonthYearDay,
        DateFormat::YearMonthDay,
        DateFormat::IsoSlash,
    ];

    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::IsoDash => "%Y-%m-%d",
            DateFormat::MonthYearDay => "%B %Y %d",
            DateFormat::YearMonthDay => "%Y %B %d",
            DateFormat::IsoSlash => "%Y/%m/%d",
        }
    }

    /// Parse `value` strictly under this layout.
    ///
    /// Surrounding whitespace is rejected, and the textual layouts accept
    /// only full month names (case-insensitive), never abbreviations.
    pub fn parse(self, value: &str) -> Option<NaiveDate> {
        if value.trim() != value {
            return None;
        }
        let date = NaiveDate::parse_from_str(value, self.pattern()).ok()?;
        match self.month_token(value) {
            Some(token) if !date.format("%B").to_string().eq_ignore_ascii_case(token) => None,
            _ => Some(date),
        }
    }

    /// The month-name token of a textual layout.
    fn month_token(self, value: &str) -> Option<&str> {
        let mut tokens = value.split_whitespace();
        match self {
            DateFormat::MonthYearDay => tokens.next(),
            DateFormat::YearMonthDay => tokens.nth(1),
            DateFormat::IsoDash | DateFormat::IsoSlash => None,
        }
    }

    pub fn format(self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

/// Parse a single value under the first layout that accepts it.
pub fn normalize_date(value: &str) -> Option<NaiveDate> {
    DateFormat::PRIORITY
        .iter()
        .find_map(|format| format.parse(value))
}

/// Parse every value under one layout; failures are `None`.
fn parse_column(values: &[Option<String>], format: DateFormat) -> Vec<Option<NaiveDate>> {
    values
        .iter()
        .map(|value| value.as_deref().and_then(|v| format.parse(v)))
        .collect()
}

/// Parse a column under all layouts and coalesce in priority order.
pub fn normalize_dates(values: &[Option<String>]) -> Vec<Option<NaiveDate>> {
    let attempts: Vec<Vec<Option<NaiveDate>>> = DateFormat::PRIORITY
        .iter()
        .map(|format| parse_column(values, *format))
        .collect();

    (0..values.len())
        .map(|row| attempts.iter().find_map(|attempt| attempt[row]))
        .collect()
}

/// Normalize a date column in place to calendar dates.
///
/// A column that already holds dates is left alone. Returns the number of
/// non-null values no layout could parse.
pub fn clean_dates(df: &mut DataFrame, column: &str) -> Result<usize> {
    if matches!(require_column(df, column)?.dtype(), DataType::Date) {
        return Ok(0);
    }

    let values = column_text(df, column)?;
    let dates = normalize_dates(&values);
    let unparsed = values
        .iter()
        .zip(&dates)
        .filter(|(raw, date)| raw.is_some() && date.is_none())
        .count();

    if unparsed > 0 {
        tracing::debug!(column, unparsed, "Unparseable dates set to null");
    }

    replace_column(df, Series::new(column.into(), dates))?;
    Ok(unparsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_each_layout() {
        assert_eq!(normalize_date("2006-10-15"), Some(ymd(2006, 10, 15)));
        assert_eq!(normalize_date("October 2006 15"), Some(ymd(2006, 10, 15)));
        assert_eq!(normalize_date("2006 October 15"), Some(ymd(2006, 10, 15)));
        assert_eq!(normalize_date("2006/10/15"), Some(ymd(2006, 10, 15)));
    }

    #[test]
    fn test_unrecognised_is_none() {
        assert_eq!(normalize_date("15/10/2006"), None);
        assert_eq!(normalize_date("GFWQ3QKD4H"), None);
        assert_eq!(normalize_date(""), None);
    }

    #[test]
    fn test_abbreviated_month_rejected() {
        assert_eq!(normalize_date("Oct 2006 15"), None);
        assert_eq!(normalize_date("2006 Oct 15"), None);
        assert_eq!(DateFormat::MonthYearDay.parse("Sept 2006 15"), None);
    }

    #[test]
    fn test_full_month_name_any_case() {
        assert_eq!(normalize_date("OCTOBER 2006 15"), Some(ymd(2006, 10, 15)));
        assert_eq!(normalize_date("2006 october 15"), Some(ymd(2006, 10, 15)));
    }

    #[test]
    fn test_padded_value_rejected() {
        assert_eq!(normalize_date(" 2006-10-15"), None);
        assert_eq!(normalize_date("2006/10/15 "), None);
    }

    #[test]
    fn test_time_component_rejected() {
        assert_eq!(normalize_date("2006-10-15 10:12:00"), None);
    }

    #[test]
    fn test_coalesce_keeps_row_alignment() {
        let values = vec![
            Some("2001/02/03".to_string()),
            None,
            Some("bad".to_string()),
            Some("March 1999 09".to_string()),
        ];
        assert_eq!(
            normalize_dates(&values),
            vec![Some(ymd(2001, 2, 3)), None, None, Some(ymd(1999, 3, 9))]
        );
    }
}
