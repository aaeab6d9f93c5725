//! Per-entity cleaning pipelines.
//!
//! Each cleaner is a free function over a raw table: validate the schema,
//! run the filters and normalizers in a fixed order, apply the entity's
//! literal corrections, then set the index. Cleaners share nothing but the
//! helpers in this module.

mod cards;
mod events;
mod orders;
mod products;
mod stores;
mod users;

pub use cards::clean_card_data;
pub use events::clean_event_data;
pub use orders::clean_order_data;
pub use products::clean_product_data;
pub use stores::clean_store_data;
pub use users::clean_user_data;

use mrdc_model::{CleanedTable, CleaningReport, EntityKind, EntitySchema, expect_kind};
use polars::prelude::DataFrame;

use crate::error::Result;
use crate::filters::{clean_null_values, filter_by_group_frequency};
use crate::options::CleaningOptions;
use crate::values::ensure_text;

/// Clean a raw table with the pipeline for `entity`.
pub fn clean_entity(
    entity: EntityKind,
    df: DataFrame,
    options: &CleaningOptions,
) -> Result<CleanedTable> {
    match entity {
        EntityKind::Users => clean_user_data(df, options),
        EntityKind::Cards => clean_card_data(df, options),
        EntityKind::Stores => clean_store_data(df, options),
        EntityKind::Products => clean_product_data(df, options),
        EntityKind::Orders => clean_order_data(df, options),
        EntityKind::Events => clean_event_data(df, options),
    }
}

/// Validate the raw table and open a report for it.
fn begin(schema: &EntitySchema, df: &DataFrame) -> Result<CleaningReport> {
    schema.validate_input(df)?;
    tracing::debug!(
        entity = %schema.entity,
        rows = df.height(),
        columns = df.width(),
        "Cleaning table"
    );
    Ok(CleaningReport::new(schema.entity, df.height()))
}

/// Drop rows missing the schema's designated non-null column, if it has one.
fn drop_null_rows(
    df: DataFrame,
    schema: &EntitySchema,
    options: &CleaningOptions,
    report: &mut CleaningReport,
) -> Result<DataFrame> {
    let Some(column) = schema.non_null else {
        return Ok(df);
    };
    let before = df.height();
    let df = clean_null_values(df, column, &options.null_sentinel)?;
    let dropped = before - df.height();
    report.null_dropped += dropped;
    tracing::debug!(entity = %report.entity, column, dropped, "Dropped rows with missing values");
    Ok(df)
}

fn drop_rare_groups(
    df: &DataFrame,
    keys: &[&str],
    threshold: usize,
    report: &mut CleaningReport,
) -> Result<DataFrame> {
    let before = df.height();
    let df = filter_by_group_frequency(df, keys, threshold)?;
    let dropped = before - df.height();
    report.outlier_dropped += dropped;
    tracing::debug!(
        entity = %report.entity,
        keys = ?keys,
        threshold,
        dropped,
        "Dropped rows in undersized groups"
    );
    Ok(df)
}

/// Check a column against the kind its schema declares for it.
fn expect_declared(schema: &EntitySchema, df: &DataFrame, column: &str) -> Result<()> {
    if let Some(kind) = schema.kind_of(column) {
        expect_kind(df, column, kind)?;
    }
    Ok(())
}

/// Store a category column as text and check it against its schema.
fn as_category(schema: &EntitySchema, df: &mut DataFrame, column: &str) -> Result<()> {
    ensure_text(df, column)?;
    expect_declared(schema, df, column)
}

/// Validate the cleaned table and set its index.
fn finish(
    schema: &EntitySchema,
    df: DataFrame,
    mut report: CleaningReport,
) -> Result<CleanedTable> {
    schema.validate_output(&df)?;
    report.rows_out = df.height();
    tracing::info!(
        entity = %schema.entity,
        rows_in = report.rows_in,
        rows_out = report.rows_out,
        nulled_fields = report.nulled_fields(),
        "Cleaned table"
    );
    Ok(CleanedTable::with_index(
        schema.entity,
        df,
        schema.index,
        report,
    )?)
}
