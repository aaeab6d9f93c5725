//! Tuning surface for the cleaning pipelines.

use serde::{Deserialize, Serialize};

/// Literal the extracts use for a missing value.
pub const DEFAULT_NULL_SENTINEL: &str = "NULL";

/// Single-column category groups of this size or smaller are dropped.
///
/// Applies to `country_code`, `card_provider`, `category` and `time_period`.
pub const DEFAULT_CATEGORY_MIN_GROUP: usize = 1;

/// `(card_provider, card_number_length)` groups of this size or smaller are
/// dropped as invalid card numbers.
pub const DEFAULT_CARD_LENGTH_MIN_GROUP: usize = 3;

/// Options for the entity cleaners.
///
/// The group thresholds are heuristics: a legitimately rare but valid value
/// is dropped along with the corrupt ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningOptions {
    /// Literal treated as a missing value anywhere in a table.
    pub null_sentinel: String,

    /// Exclusive lower bound on single-column category group size.
    pub category_min_group: usize,

    /// Exclusive lower bound on `(card_provider, card_number_length)` group size.
    pub card_length_min_group: usize,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            null_sentinel: DEFAULT_NULL_SENTINEL.to_string(),
            category_min_group: DEFAULT_CATEGORY_MIN_GROUP,
            card_length_min_group: DEFAULT_CARD_LENGTH_MIN_GROUP,
        }
    }
}

impl CleaningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_null_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.null_sentinel = sentinel.into();
        self
    }

    #[must_use]
    pub fn with_category_min_group(mut self, threshold: usize) -> Self {
        self.category_min_group = threshold;
        self
    }

    #[must_use]
    pub fn with_card_length_min_group(mut self, threshold: usize) -> Self {
        self.card_length_min_group = threshold;
        self
    }
}
