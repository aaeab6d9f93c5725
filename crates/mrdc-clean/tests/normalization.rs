//! Tests for the date, phone and weight normalizers.

use chrono::NaiveDate;
use mrdc_clean::normalization::normalize_dates;
use mrdc_clean::values::column_text;
use mrdc_clean::{
    DateFormat, clean_dates, clean_phone_numbers, convert_product_weights, normalize_date,
    normalize_phone, normalize_weight,
};
use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;

fn test_df(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    DataFrame::new(cols).unwrap()
}

#[test]
fn date_priority_order_is_fixed() {
    assert_eq!(
        DateFormat::PRIORITY,
        [
            DateFormat::IsoDash,
            DateFormat::MonthYearDay,
            DateFormat::YearMonthDay,
            DateFormat::IsoSlash,
        ]
    );
}

#[test]
fn clean_dates_converts_column_to_date_dtype() {
    let mut df = test_df(vec![(
        "join_date",
        vec![
            Some("2016-05-28"),
            Some("May 2016 28"),
            Some("2016 May 28"),
            Some("2016/05/28"),
            Some("NULL"),
            None,
        ],
    )]);

    let unparsed = clean_dates(&mut df, "join_date").unwrap();

    assert_eq!(unparsed, 1);
    let column = df.column("join_date").unwrap();
    assert_eq!(column.dtype(), &DataType::Date);
    assert_eq!(column.null_count(), 2);
}

#[test]
fn clean_dates_nulls_abbreviated_months() {
    let mut df = test_df(vec![(
        "date_of_birth",
        vec![Some("Oct 2006 15"), Some("2006 Oct 15"), Some("October 2006 15")],
    )]);

    let unparsed = clean_dates(&mut df, "date_of_birth").unwrap();

    assert_eq!(unparsed, 2);
    assert_eq!(df.column("date_of_birth").unwrap().null_count(), 2);
}

#[test]
fn clean_dates_missing_column() {
    let mut df = test_df(vec![("opening_date", vec![Some("2001-01-01")])]);
    assert!(clean_dates(&mut df, "date_added").is_err());
}

#[test]
fn clean_phone_numbers_uses_country_column() {
    let mut df = test_df(vec![
        (
            "phone_number",
            vec![
                Some("07911 123456"),
                Some("(555) 123-4567"),
                Some("030 901820"),
                Some("call me"),
                None,
            ],
        ),
        (
            "country_code",
            vec![Some("GB"), Some("US"), Some("DE"), Some("GB"), Some("US")],
        ),
    ]);

    let unparsed = clean_phone_numbers(&mut df, "phone_number", "country_code").unwrap();

    assert_eq!(unparsed, 1);
    assert_eq!(
        column_text(&df, "phone_number").unwrap(),
        vec![
            Some("+447911123456".to_string()),
            Some("+15551234567".to_string()),
            Some("+4930901820".to_string()),
            None,
            None,
        ]
    );
}

#[test]
fn convert_product_weights_to_float_kilograms() {
    let mut df = test_df(vec![(
        "weight",
        vec![Some("12 x 100g"), Some("34oz"), Some("2kg"), Some("?"), None],
    )]);

    let unparsed = convert_product_weights(&mut df, "weight").unwrap();

    assert_eq!(unparsed, 1);
    let weights: Vec<Option<f64>> = df
        .column("weight")
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(weights, vec![Some(1.2), Some(0.964), Some(2.0), None, None]);
}

#[test]
fn weight_properties_from_examples() {
    assert_eq!(normalize_weight("12 x 100g"), Some(1.2));
    assert_eq!(normalize_weight("34oz"), Some(0.964));
    assert_eq!(normalize_weight("2kg"), Some(2.0));
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn any_format() -> impl Strategy<Value = DateFormat> {
    prop::sample::select(DateFormat::PRIORITY.to_vec())
}

proptest! {
    #[test]
    fn date_formats_round_trip(date in any_date(), format in any_format()) {
        let text = format.format(date);
        prop_assert_eq!(format.parse(&text), Some(date));
        prop_assert_eq!(normalize_date(&text), Some(date));
        prop_assert_eq!(format.format(normalize_date(&text).unwrap()), text);
    }

    #[test]
    fn unrecognised_dates_are_null(day in 1u32..=28, month in 1u32..=12, year in 1900i32..2100) {
        let text = format!("{day:02}.{month:02}.{year}");
        prop_assert_eq!(normalize_dates(&[Some(text)]), vec![None]);
    }

    #[test]
    fn us_normalized_numbers_are_fixed_points(digits in "[2-9][0-9]{9}") {
        let normalized = format!("+1{digits}");
        prop_assert_eq!(normalize_phone(&normalized, Some("US")), Some(normalized.clone()));
    }

    #[test]
    fn gb_normalized_numbers_are_fixed_points(digits in "[1-9][0-9]{9}") {
        let normalized = format!("+44{digits}");
        prop_assert_eq!(normalize_phone(&normalized, Some("GB")), Some(normalized.clone()));
    }

    #[test]
    fn normalized_phones_are_plus_and_digits(
        raw in "[0-9 ().+-]{1,16}",
        country in prop::sample::select(vec!["US", "GB", "DE", "FR"]),
    ) {
        if let Some(phone) = normalize_phone(&raw, Some(country)) {
            prop_assert!(phone.starts_with('+'));
            prop_assert!(phone[1..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    // The DE short-number branch is not idempotent: while the digits stay
    // under 10 long, every pass re-attaches "49".
    #[test]
    fn de_short_number_branch(rest in "[1-9][0-9]{2,6}") {
        let raw = format!("49{rest}");
        let once = normalize_phone(&raw, Some("DE")).unwrap();
        prop_assert_eq!(&once, &format!("+4949{rest}"));
        let twice = normalize_phone(&once, Some("DE")).unwrap();
        if once.len() - 1 < 10 {
            prop_assert_eq!(twice, format!("+494949{rest}"));
        } else {
            prop_assert_eq!(twice, once);
        }
    }
}
