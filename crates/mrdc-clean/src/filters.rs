//! Whole-table row filters.
//!
//! Both filters need the full table: the null-drop rewrites a sentinel in
//! every text column, and the group-frequency filter needs complete group
//! sizes before it can decide on any row.

use std::collections::HashMap;

use polars::prelude::{BooleanChunked, DataFrame, DataType, NamedFrom, Series};

use crate::error::Result;
use crate::values::{column_text, replace_column, require_column};

/// Replace `sentinel` with null in every text column.
///
/// Returns the number of values replaced.
pub fn replace_sentinel(df: &mut DataFrame, sentinel: &str) -> Result<usize> {
    let text_columns: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|column| matches!(column.dtype(), DataType::String))
        .map(|column| column.name().to_string())
        .collect();

    let mut replaced = 0;
    for name in text_columns {
        let values = column_text(df, &name)?;
        if !values.iter().any(|v| v.as_deref() == Some(sentinel)) {
            continue;
        }
        let cleaned: Vec<Option<String>> = values
            .into_iter()
            .map(|v| match v {
                Some(s) if s == sentinel => {
                    replaced += 1;
                    None
                }
                other => other,
            })
            .collect();
        replace_column(df, Series::new(name.as_str().into(), cleaned))?;
    }
    Ok(replaced)
}

/// Drop every row where `column` is missing, treating `sentinel` as missing.
///
/// The sentinel is replaced across the whole table, not only in `column`.
/// Row order of the remainder is preserved.
pub fn clean_null_values(mut df: DataFrame, column: &str, sentinel: &str) -> Result<DataFrame> {
    require_column(&df, column)?;
    replace_sentinel(&mut df, sentinel)?;
    let mask = require_column(&df, column)?.is_not_null();
    Ok(df.filter(&mask)?)
}

/// Drop every row whose group under `keys` has `threshold` rows or fewer.
///
/// This is an outlier heuristic for corrupt category values, not a
/// validator: a valid value that happens to be rare is dropped too. Rows
/// with a null in any key column belong to no group and are dropped.
pub fn filter_by_group_frequency(
    df: &DataFrame,
    keys: &[&str],
    threshold: usize,
) -> Result<DataFrame> {
    let key_columns = keys
        .iter()
        .map(|key| column_text(df, key))
        .collect::<Result<Vec<_>>>()?;

    let row_key = |idx: usize| {
        key_columns
            .iter()
            .map(|values| values[idx].as_deref())
            .collect::<Option<Vec<&str>>>()
    };

    let mut group_sizes: HashMap<Vec<&str>, usize> = HashMap::new();
    for idx in 0..df.height() {
        if let Some(key) = row_key(idx) {
            *group_sizes.entry(key).or_insert(0) += 1;
        }
    }

    let keep: Vec<bool> = (0..df.height())
        .map(|idx| {
            row_key(idx)
                .and_then(|key| group_sizes.get(&key).copied())
                .is_some_and(|size| size > threshold)
        })
        .collect();
    let mask = BooleanChunked::new("keep".into(), keep.as_slice());

    Ok(df.filter(&mask)?)
}

/// Keep only the rows for which `keep` is true.
pub fn retain_rows(df: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    let mask = BooleanChunked::new("keep".into(), keep);
    Ok(df.filter(&mask)?)
}
