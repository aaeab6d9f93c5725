//! Declarative literal-value corrections.
//!
//! Known-bad values seen in the extracts are rewritten by exact equality.
//! Adding a correction is a data change to one of the tables below.

use mrdc_model::EntityKind;

use polars::prelude::{DataFrame, NamedFrom, Series};

use crate::error::Result;
use crate::values::{column_text, replace_column};

/// Rewrite `from` to `to` wherever it is the whole value of `column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueCorrection {
    pub column: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

const fn rewrite(column: &'static str, from: &'static str, to: &'static str) -> ValueCorrection {
    ValueCorrection { column, from, to }
}

pub const USER_CORRECTIONS: &[ValueCorrection] = &[rewrite("country_code", "GGB", "GB")];

pub const STORE_CORRECTIONS: &[ValueCorrection] = &[
    rewrite("continent", "eeAmerica", "America"),
    rewrite("continent", "eeEurope", "Europe"),
];

pub const PRODUCT_CORRECTIONS: &[ValueCorrection] =
    &[rewrite("removed", "Still_avaliable", "Still_available")];

pub fn corrections_for(entity: EntityKind) -> &'static [ValueCorrection] {
    match entity {
        EntityKind::Users => USER_CORRECTIONS,
        EntityKind::Stores => STORE_CORRECTIONS,
        EntityKind::Products => PRODUCT_CORRECTIONS,
        EntityKind::Cards | EntityKind::Orders | EntityKind::Events => &[],
    }
}

/// Apply corrections in order. Returns the number of values rewritten.
pub fn apply_corrections(df: &mut DataFrame, corrections: &[ValueCorrection]) -> Result<usize> {
    let mut applied = 0;
    for correction in corrections {
        let values = column_text(df, correction.column)?;
        let hits = values
            .iter()
            .filter(|v| v.as_deref() == Some(correction.from))
            .count();
        if hits == 0 {
            continue;
        }
        let rewritten: Vec<Option<String>> = values
            .into_iter()
            .map(|v| match v {
                Some(s) if s == correction.from => Some(correction.to.to_string()),
                other => other,
            })
            .collect();
        replace_column(df, Series::new(correction.column.into(), rewritten))?;
        tracing::debug!(
            column = correction.column,
            from = correction.from,
            to = correction.to,
            hits,
            "Applied value correction"
        );
        applied += hits;
    }
    Ok(applied)
}
