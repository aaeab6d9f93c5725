use mrdc_model::{CleanedTable, EntityKind};
use polars::prelude::DataFrame;

use super::{begin, expect_declared, finish};
use crate::error::Result;
use crate::options::CleaningOptions;
use crate::values::ensure_text;

/// Join leftovers from the source table that the warehouse does not keep.
const REDUNDANT_COLUMNS: [&str; 5] = ["index", "level_0", "first_name", "last_name", "1"];

/// Clean an orders table, indexed by `(date_uuid, user_uuid)`.
///
/// Orders need no value-level cleaning beyond storing card numbers as text.
pub fn clean_order_data(df: DataFrame, _options: &CleaningOptions) -> Result<CleanedTable> {
    let schema = EntityKind::Orders.schema();
    let report = begin(schema, &df)?;

    let mut df = df;
    for column in REDUNDANT_COLUMNS {
        df = df.drop(column)?;
    }

    ensure_text(&mut df, "card_number")?;
    expect_declared(schema, &df, "card_number")?;

    finish(schema, df, report)
}
