use mrdc_model::{CleanedTable, EntityKind};
use polars::prelude::DataFrame;

use super::{as_category, begin, drop_null_rows, drop_rare_groups, finish};
use crate::error::Result;
use crate::options::CleaningOptions;

/// Clean a sale date/time events table, indexed by `date_uuid`.
pub fn clean_event_data(df: DataFrame, options: &CleaningOptions) -> Result<CleanedTable> {
    let schema = EntityKind::Events.schema();
    let mut report = begin(schema, &df)?;

    let df = drop_null_rows(df, schema, options, &mut report)?;

    let mut df = drop_rare_groups(
        &df,
        &["time_period"],
        options.category_min_group,
        &mut report,
    )?;
    as_category(schema, &mut df, "time_period")?;

    finish(schema, df, report)
}
