use mrdc_model::{CleanedTable, EntityKind};
use polars::prelude::DataFrame;

use super::{as_category, begin, drop_null_rows, drop_rare_groups, expect_declared, finish};
use crate::corrections::{apply_corrections, corrections_for};
use crate::error::Result;
use crate::normalization::{clean_dates, convert_product_weights};
use crate::options::CleaningOptions;

/// Anonymous index column written by the object-store export.
const UNNAMED_INDEX: &str = "Unnamed: 0";

/// Clean a products table, indexed by `index`.
pub fn clean_product_data(df: DataFrame, options: &CleaningOptions) -> Result<CleanedTable> {
    let schema = EntityKind::Products.schema();
    let mut report = begin(schema, &df)?;

    // Schema repair comes first: every later step expects `index`.
    let mut df = df;
    df.rename(UNNAMED_INDEX, "index".into())?;

    let df = drop_null_rows(df, schema, options, &mut report)?;

    let mut df = drop_rare_groups(
        &df,
        &["category"],
        options.category_min_group,
        &mut report,
    )?;
    as_category(schema, &mut df, "category")?;

    report.unparsed_weights += convert_product_weights(&mut df, "weight")?;
    expect_declared(schema, &df, "weight")?;

    report.unparsed_dates += clean_dates(&mut df, "date_added")?;

    report.corrections_applied += apply_corrections(&mut df, corrections_for(schema.entity))?;
    as_category(schema, &mut df, "removed")?;

    finish(schema, df, report)
}
