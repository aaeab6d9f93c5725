//! Column value access shared by the filters and normalizers.
//!
//! Raw extracts carry whatever dtypes their source produced (card numbers
//! read from a PDF may be integers, phone numbers from a database are text).
//! Every transform reads a column through a text view where null stays null.

use polars::prelude::{AnyValue, Column, DataFrame, DataType, NamedFrom, Series};

use crate::error::{CleanError, Result};

/// Look up a column, reporting its absence as a cleaning error.
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| CleanError::ColumnNotFound {
        column: name.to_string(),
    })
}

/// Convert a Polars AnyValue to text, keeping null distinct from "".
pub fn any_to_text(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(v.to_string()),
        AnyValue::Int16(v) => Some(v.to_string()),
        AnyValue::Int32(v) => Some(v.to_string()),
        AnyValue::Int64(v) => Some(v.to_string()),
        AnyValue::UInt8(v) => Some(v.to_string()),
        AnyValue::UInt16(v) => Some(v.to_string()),
        AnyValue::UInt32(v) => Some(v.to_string()),
        AnyValue::UInt64(v) => Some(v.to_string()),
        AnyValue::Float32(v) => Some(format_numeric(f64::from(v))),
        AnyValue::Float64(v) => Some(format_numeric(v)),
        AnyValue::String(s) => Some(s.to_string()),
        AnyValue::StringOwned(s) => Some(s.to_string()),
        other => Some(other.to_string()),
    }
}

/// Format a float without a spurious fractional part.
///
/// Whole values (e.g. card numbers that went through a float column) print
/// as integers.
pub fn format_numeric(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e18 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// Read a column as text values.
pub fn column_text(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = require_column(df, name)?;
    if let Ok(ca) = column.str() {
        return Ok(ca.into_iter().map(|v| v.map(str::to_string)).collect());
    }
    let mut values = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        values.push(any_to_text(column.get(idx)?));
    }
    Ok(values)
}

/// Replace a column with new values under the same name.
pub fn replace_column(df: &mut DataFrame, series: Series) -> Result<()> {
    df.with_column(series)?;
    Ok(())
}

/// Rewrite a column through `f`, storing the result as text.
///
/// Null inputs stay null. Returns how many non-null inputs `f` mapped to
/// null.
pub fn map_text<F>(df: &mut DataFrame, column: &str, f: F) -> Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let values = column_text(df, column)?;
    let mut nulled = 0;
    let mapped: Vec<Option<String>> = values
        .iter()
        .map(|value| {
            let raw = value.as_deref()?;
            let out = f(raw);
            if out.is_none() {
                nulled += 1;
            }
            out
        })
        .collect();
    replace_column(df, Series::new(column.into(), mapped))?;
    Ok(nulled)
}

/// Ensure a column is stored as text, converting other dtypes in place.
pub fn ensure_text(df: &mut DataFrame, column: &str) -> Result<()> {
    if matches!(require_column(df, column)?.dtype(), DataType::String) {
        return Ok(());
    }
    let values = column_text(df, column)?;
    replace_column(df, Series::new(column.into(), values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::IntoColumn;

    #[test]
    fn test_format_numeric_whole_float() {
        assert_eq!(format_numeric(4_971_858_637_664_481.0), "4971858637664481");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(1.5), "1.5");
    }

    #[test]
    fn test_column_text_stringifies_integers() {
        let df = DataFrame::new(vec![
            Series::new("card_number".into(), vec![Some(30_601_234i64), None]).into_column(),
        ])
        .unwrap();
        let values = column_text(&df, "card_number").unwrap();
        assert_eq!(values, vec![Some("30601234".to_string()), None]);
    }

    #[test]
    fn test_map_text_counts_nulled_values() {
        let mut df = DataFrame::new(vec![
            Series::new("staff".into(), vec![Some("12"), Some("n/a"), None]).into_column(),
        ])
        .unwrap();
        let nulled = map_text(&mut df, "staff", |s| s.parse::<u32>().ok().map(|n| n.to_string()))
            .unwrap();
        assert_eq!(nulled, 1);
        assert_eq!(
            column_text(&df, "staff").unwrap(),
            vec![Some("12".to_string()), None, None]
        );
    }

    #[test]
    fn test_require_column_reports_name() {
        let df = DataFrame::empty();
        let err = require_column(&df, "weight").unwrap_err();
        assert_eq!(err.to_string(), "column 'weight' not found");
    }
}
