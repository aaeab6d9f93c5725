use mrdc_model::{CleanedTable, EntityKind};
use polars::prelude::DataFrame;

use super::{as_category, begin, drop_null_rows, drop_rare_groups, finish};
use crate::corrections::{apply_corrections, corrections_for};
use crate::error::Result;
use crate::normalization::clean_dates;
use crate::options::CleaningOptions;
use crate::values::map_text;

/// Clean a store details table, indexed by `index`.
pub fn clean_store_data(df: DataFrame, options: &CleaningOptions) -> Result<CleanedTable> {
    let schema = EntityKind::Stores.schema();
    let mut report = begin(schema, &df)?;

    let df = drop_null_rows(df, schema, options, &mut report)?;

    let mut df = drop_rare_groups(
        &df,
        &["country_code"],
        options.category_min_group,
        &mut report,
    )?;
    as_category(schema, &mut df, "country_code")?;

    report.corrections_applied += apply_corrections(&mut df, corrections_for(schema.entity))?;
    as_category(schema, &mut df, "continent")?;

    // `lat` duplicates `latitude` and is mostly empty.
    let mut df = df.drop("lat")?;

    map_text(&mut df, "staff_numbers", |staff| {
        Some(staff.chars().filter(char::is_ascii_digit).collect())
    })?;

    report.unparsed_dates += clean_dates(&mut df, "opening_date")?;

    finish(schema, df, report)
}
