//! Product weight normalization to kilograms.
//!
//! Handles `"200g"`, `"1.5kg"`, `"34oz"`, `"250ml"` and multipacks such as
//! `"12 x 100g"`. Millilitres count as grams.

use polars::prelude::{DataFrame, NamedFrom, Series};

use crate::error::Result;
use crate::values::{column_text, replace_column};

const GRAMS_PER_KILOGRAM: f64 = 1000.0;
const OUNCES_PER_KILOGRAM: f64 = 35.274;
const MULTIPACK_SEPARATOR: &str = " x ";

/// Unit a raw weight is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Kilograms,
    Ounces,
    Grams,
}

impl WeightUnit {
    /// Classify a raw weight (after `ml` has become `g`).
    pub fn detect(value: &str) -> Self {
        if value.contains("kg") {
            WeightUnit::Kilograms
        } else if value.contains("oz") {
            WeightUnit::Ounces
        } else {
            WeightUnit::Grams
        }
    }

    pub fn to_kilograms(self, amount: f64) -> f64 {
        match self {
            WeightUnit::Kilograms => amount,
            WeightUnit::Ounces => round3(amount / OUNCES_PER_KILOGRAM),
            WeightUnit::Grams => amount / GRAMS_PER_KILOGRAM,
        }
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Convert one raw weight to kilograms, rounded to 3 decimal places.
///
/// Returns `None` when the amount or the multipack count does not parse.
///
/// # Examples
///
/// ```
/// use mrdc_clean::normalize_weight;
///
/// assert_eq!(normalize_weight("12 x 100g"), Some(1.2));
/// assert_eq!(normalize_weight("34oz"), Some(0.964));
/// assert_eq!(normalize_weight("2kg"), Some(2.0));
/// assert_eq!(normalize_weight("heavy"), None);
/// ```
pub fn normalize_weight(raw: &str) -> Option<f64> {
    let value = raw.replace("ml", "g");
    let unit = WeightUnit::detect(&value);

    let (multiplier, amount) = match value.split_once(MULTIPACK_SEPARATOR) {
        Some((count, amount)) => (count.trim().parse::<u32>().ok()?, amount),
        None => (1, value.as_str()),
    };

    let digits: String = amount
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let amount: f64 = digits.parse().ok()?;

    Some(round3(unit.to_kilograms(amount) * f64::from(multiplier)))
}

/// Convert a weight column in place to kilograms as floats.
///
/// Returns the number of non-null values that could not be parsed.
pub fn convert_product_weights(df: &mut DataFrame, column: &str) -> Result<usize> {
    let values = column_text(df, column)?;

    let mut unparsed = 0;
    let weights: Vec<Option<f64>> = values
        .iter()
        .map(|value| {
            let raw = value.as_deref()?;
            let kg = normalize_weight(raw);
            if kg.is_none() {
                unparsed += 1;
            }
            kg
        })
        .collect();

    if unparsed > 0 {
        tracing::debug!(column, unparsed, "Unparseable weights set to null");
    }

    replace_column(df, Series::new(column.into(), weights))?;
    Ok(unparsed)
}
