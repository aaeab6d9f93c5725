//! Integration tests for entity schemas.

use mrdc_model::{ColumnKind, EntityKind, ModelError};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

fn string_frame(columns: &[&str]) -> DataFrame {
    let cols: Vec<Column> = columns
        .iter()
        .map(|name| Series::new((*name).into(), vec!["x"]).into_column())
        .collect();
    DataFrame::new(cols).unwrap()
}

#[test]
fn entity_names_round_trip() {
    for entity in EntityKind::ALL {
        let parsed: EntityKind = entity.as_str().parse().unwrap();
        assert_eq!(parsed, entity);
    }
    assert_eq!("Store".parse::<EntityKind>().unwrap(), EntityKind::Stores);
    assert!("customers".parse::<EntityKind>().is_err());
}

#[test]
fn default_destinations_are_warehouse_tables() {
    assert_eq!(EntityKind::Users.default_destination(), "dim_users");
    assert_eq!(EntityKind::Orders.default_destination(), "orders_table");
    assert_eq!(EntityKind::Events.default_destination(), "dim_date_times");
}

#[test]
fn validate_input_accepts_complete_event_table() {
    let df = string_frame(&["date_uuid", "time_period", "timestamp"]);
    EntityKind::Events.schema().validate_input(&df).unwrap();
}

#[test]
fn validate_input_names_first_missing_column() {
    let df = string_frame(&["card_number", "date_payment_confirmed"]);
    let err = EntityKind::Cards.schema().validate_input(&df).unwrap_err();
    match err {
        ModelError::MissingColumn { entity, column } => {
            assert_eq!(entity, EntityKind::Cards);
            assert_eq!(column, "card_provider");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn validate_output_rejects_wrong_kind() {
    // weight left as text instead of kilograms
    let df = string_frame(&[
        "index",
        "product_name",
        "category",
        "weight",
        "date_added",
        "removed",
    ]);
    let err = EntityKind::Products.schema().validate_output(&df).unwrap_err();
    assert!(matches!(
        err,
        ModelError::ColumnKind {
            expected: ColumnKind::Date | ColumnKind::Float,
            ..
        }
    ));
}

#[test]
fn kind_of_reports_declared_kind() {
    let schema = EntityKind::Stores.schema();
    assert_eq!(schema.kind_of("continent"), Some(ColumnKind::Category));
    assert_eq!(schema.kind_of("lat"), None);
}
