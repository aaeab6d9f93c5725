use mrdc_model::{CleanedTable, EntityKind};
use polars::prelude::{DataFrame, NamedFrom, Series};

use super::{as_category, begin, drop_null_rows, drop_rare_groups, expect_declared, finish};
use crate::error::Result;
use crate::normalization::clean_dates;
use crate::options::CleaningOptions;
use crate::values::{column_text, map_text};

/// Temporary grouping column for the card-number length check.
const CARD_NUMBER_LENGTH: &str = "card_number_length";

/// Clean a card details table, indexed by `card_number`.
///
/// Card numbers whose length is rare for their provider are treated as
/// corrupt and dropped.
pub fn clean_card_data(df: DataFrame, options: &CleaningOptions) -> Result<CleanedTable> {
    let schema = EntityKind::Cards.schema();
    let mut report = begin(schema, &df)?;

    let mut df = drop_null_rows(df, schema, options, &mut report)?;

    // PDF extraction leaves stray question marks in card numbers.
    map_text(&mut df, "card_number", |number| Some(number.replace('?', "")))?;
    expect_declared(schema, &df, "card_number")?;

    let mut df = drop_rare_groups(
        &df,
        &["card_provider"],
        options.category_min_group,
        &mut report,
    )?;
    as_category(schema, &mut df, "card_provider")?;

    let lengths: Vec<Option<u32>> = column_text(&df, "card_number")?
        .iter()
        .map(|number| {
            number
                .as_deref()
                .map(|n| u32::try_from(n.chars().count()).unwrap_or(u32::MAX))
        })
        .collect();
    df.with_column(Series::new(CARD_NUMBER_LENGTH.into(), lengths))?;
    let df = drop_rare_groups(
        &df,
        &["card_provider", CARD_NUMBER_LENGTH],
        options.card_length_min_group,
        &mut report,
    )?;
    let mut df = df.drop(CARD_NUMBER_LENGTH)?;

    report.unparsed_dates += clean_dates(&mut df, "date_payment_confirmed")?;

    finish(schema, df, report)
}
