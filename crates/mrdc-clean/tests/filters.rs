//! Tests for the whole-table row filters.

use mrdc_clean::values::column_text;
use mrdc_clean::{clean_null_values, filter_by_group_frequency};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

fn test_df(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| {
            Series::new(
                name.into(),
                values.iter().copied().map(String::from).collect::<Vec<_>>(),
            )
            .into_column()
        })
        .collect();
    DataFrame::new(cols).unwrap()
}

fn texts(values: &[&str]) -> Vec<Option<String>> {
    values.iter().map(|v| Some((*v).to_string())).collect()
}

#[test]
fn group_frequency_drops_singleton_country_code() {
    let df = test_df(vec![
        ("country_code", vec!["GB", "GB", "GB", "XX"]),
        ("store_code", vec!["A", "B", "C", "D"]),
    ]);

    let out = filter_by_group_frequency(&df, &["country_code"], 1).unwrap();

    assert_eq!(out.height(), 3);
    assert_eq!(
        column_text(&out, "store_code").unwrap(),
        texts(&["A", "B", "C"])
    );
}

#[test]
fn group_frequency_compound_key() {
    let df = test_df(vec![
        (
            "card_provider",
            vec!["VISA", "VISA", "VISA", "VISA", "VISA", "AMEX"],
        ),
        ("len", vec!["16", "16", "16", "16", "13", "15"]),
    ]);

    let out = filter_by_group_frequency(&df, &["card_provider", "len"], 3).unwrap();

    assert_eq!(out.height(), 4);
    assert_eq!(
        column_text(&out, "len").unwrap(),
        texts(&["16", "16", "16", "16"])
    );
}

#[test]
fn null_drop_removes_only_sentinel_rows_in_order() {
    let df = test_df(vec![
        ("first_name", vec!["Ann", "NULL", "Bob", "NULL", "Cy"]),
        ("last_name", vec!["A", "B", "NULL", "D", "E"]),
    ]);

    let out = clean_null_values(df, "first_name", "NULL").unwrap();

    assert_eq!(
        column_text(&out, "first_name").unwrap(),
        texts(&["Ann", "Bob", "Cy"])
    );
    // The sentinel is nulled table-wide, but only first_name drives the drop.
    assert_eq!(
        column_text(&out, "last_name").unwrap(),
        vec![Some("A".to_string()), None, Some("E".to_string())]
    );
}

#[test]
fn null_drop_on_absent_column_is_an_error() {
    let df = test_df(vec![("first_name", vec!["Ann"])]);
    let err = clean_null_values(df, "store_code", "NULL").unwrap_err();
    assert_eq!(err.to_string(), "column 'store_code' not found");
}

#[test]
fn null_drop_custom_sentinel() {
    let df = test_df(vec![("date_uuid", vec!["a", "N/A", "b"])]);
    let out = clean_null_values(df, "date_uuid", "N/A").unwrap();
    assert_eq!(out.height(), 2);
}
