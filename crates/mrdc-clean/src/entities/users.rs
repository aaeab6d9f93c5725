use mrdc_model::{CleanedTable, EntityKind};
use polars::prelude::DataFrame;

use super::{as_category, begin, drop_null_rows, finish};
use crate::corrections::{apply_corrections, corrections_for};
use crate::error::Result;
use crate::filters::retain_rows;
use crate::normalization::{clean_dates, clean_phone_numbers};
use crate::options::CleaningOptions;
use crate::values::column_text;

/// Clean a user table, indexed by `index`.
pub fn clean_user_data(df: DataFrame, options: &CleaningOptions) -> Result<CleanedTable> {
    let schema = EntityKind::Users.schema();
    let mut report = begin(schema, &df)?;

    let df = drop_null_rows(df, schema, options, &mut report)?;

    let valid_email: Vec<bool> = column_text(&df, "email_address")?
        .iter()
        .map(|email| email.as_deref().is_some_and(|e| e.contains('@')))
        .collect();
    let before = df.height();
    let mut df = retain_rows(&df, &valid_email)?;
    report.invalid_dropped += before - df.height();

    as_category(schema, &mut df, "country")?;
    report.corrections_applied += apply_corrections(&mut df, corrections_for(schema.entity))?;
    as_category(schema, &mut df, "country_code")?;

    report.unparsed_dates += clean_dates(&mut df, "date_of_birth")?;
    report.unparsed_dates += clean_dates(&mut df, "join_date")?;
    report.unparsed_phones += clean_phone_numbers(&mut df, "phone_number", "country_code")?;

    finish(schema, df, report)
}
