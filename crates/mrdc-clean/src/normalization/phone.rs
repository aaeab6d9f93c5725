//! Phone number normalization.
//!
//! Numbers arrive in national and international layouts with assorted
//! punctuation. Output is `+` followed by digits, with the country calling
//! code prefixed for the countries the business operates in.

use polars::prelude::{DataFrame, NamedFrom, Series};

use crate::error::Result;
use crate::values::{column_text, replace_column};

/// Punctuation removed before any other step.
const STRIPPED_CHARS: [char; 6] = [' ', '(', ')', '.', '-', '+'];

/// At most this many leading zeros are removed.
const MAX_LEADING_ZEROS: usize = 5;

/// German numbers shorter than this that already start with `49` get the
/// area code re-attached.
const DE_SHORT_NUMBER_LEN: usize = 10;

/// Normalize one phone number for the given 2-letter country code.
///
/// Returns `None` when the number has no digits or keeps non-digit
/// characters (extensions, letters) after punctuation is stripped.
///
/// # Examples
///
/// ```
/// use mrdc_clean::normalize_phone;
///
/// assert_eq!(normalize_phone("07911 123456", Some("GB")).as_deref(), Some("+447911123456"));
/// assert_eq!(normalize_phone("+1-555-123-4567", Some("US")).as_deref(), Some("+15551234567"));
/// assert_eq!(normalize_phone("555.123.4567 x89", Some("US")), None);
/// ```
pub fn normalize_phone(raw: &str, country_code: Option<&str>) -> Option<String> {
    let stripped: String = raw.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect();
    if stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut number = stripped.as_str();
    for _ in 0..MAX_LEADING_ZEROS {
        match number.strip_prefix('0') {
            Some(rest) => number = rest,
            None => break,
        }
    }
    let mut number = number.to_string();

    // Each rule is checked independently against the current string. The
    // DE short-number rule leaves a "49" prefix, so the DE long rule below
    // never fires for the same number.
    if country_code == Some("US") && !number.starts_with('1') {
        number.insert_str(0, "+1");
    }
    if country_code == Some("GB") && !number.starts_with("44") {
        number.insert_str(0, "+44");
    }
    if country_code == Some("DE") && number.starts_with("49") && number.len() < DE_SHORT_NUMBER_LEN
    {
        number.insert_str(0, "49");
    }
    if country_code == Some("DE") && !number.starts_with("49") {
        number.insert_str(0, "+49");
    }

    if !number.starts_with('+') {
        number.insert(0, '+');
    }
    Some(number)
}

/// Normalize a phone column in place using a sibling country-code column.
///
/// Returns the number of non-null values that could not be normalized.
pub fn clean_phone_numbers(df: &mut DataFrame, column: &str, country_column: &str) -> Result<usize> {
    let numbers = column_text(df, column)?;
    let countries = column_text(df, country_column)?;

    let mut unparsed = 0;
    let normalized: Vec<Option<String>> = numbers
        .iter()
        .zip(&countries)
        .map(|(number, country)| {
            let raw = number.as_deref()?;
            let out = normalize_phone(raw, country.as_deref());
            if out.is_none() {
                unparsed += 1;
            }
            out
        })
        .collect();

    if unparsed > 0 {
        tracing::debug!(column, unparsed, "Non-numeric phone numbers set to null");
    }

    replace_column(df, Series::new(column.into(), normalized))?;
    Ok(unparsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gb_national_number() {
        assert_eq!(
            normalize_phone("07911 123456", Some("GB")).as_deref(),
            Some("+447911123456")
        );
    }

    #[test]
    fn test_gb_international_with_trunk_zero() {
        assert_eq!(
            normalize_phone("+44(0)1632 960 123", Some("GB")).as_deref(),
            Some("+4401632960123")
        );
    }

    #[test]
    fn test_us_already_normalized() {
        assert_eq!(
            normalize_phone("+15551234567", Some("US")).as_deref(),
            Some("+15551234567")
        );
    }

    #[test]
    fn test_us_missing_country_code() {
        assert_eq!(
            normalize_phone("(555) 123-4567", Some("US")).as_deref(),
            Some("+15551234567")
        );
    }

    #[test]
    fn test_de_national_number() {
        assert_eq!(
            normalize_phone("030 901820", Some("DE")).as_deref(),
            Some("+4930901820")
        );
    }

    #[test]
    fn test_de_short_number_starting_with_49() {
        // 10 digits: long enough, only "+" is added
        assert_eq!(
            normalize_phone("4989123456", Some("DE")).as_deref(),
            Some("+4989123456")
        );
        // 8 digits starting with 49: "49" is re-attached
        assert_eq!(
            normalize_phone("49891234", Some("DE")).as_deref(),
            Some("+4949891234")
        );
    }

    #[test]
    fn test_at_most_five_leading_zeros() {
        assert_eq!(
            normalize_phone("0000001234", None).as_deref(),
            Some("+01234")
        );
    }

    #[test]
    fn test_other_country_only_gets_plus() {
        assert_eq!(
            normalize_phone("0612 345 678", Some("NL")).as_deref(),
            Some("+612345678")
        );
        assert_eq!(normalize_phone("612345678", None).as_deref(), Some("+612345678"));
    }

    #[test]
    fn test_residue_is_none() {
        assert_eq!(normalize_phone("ext. 42a", Some("GB")), None);
        assert_eq!(normalize_phone("() -", Some("GB")), None);
    }
}
