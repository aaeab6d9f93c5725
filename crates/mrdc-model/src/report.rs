//! Attrition and corruption counts for one cleaning run.

use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;

/// What happened to an entity table while it was cleaned.
///
/// Dropped rows are expected attrition, not failures: the counts exist so
/// the loss is visible, not so it can be reported as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub entity: EntityKind,
    pub rows_in: usize,
    pub rows_out: usize,
    /// Rows dropped because the designated required column was missing.
    pub null_dropped: usize,
    /// Rows dropped by group-frequency filters.
    pub outlier_dropped: usize,
    /// Rows dropped by entity-specific validity checks (e.g. email).
    pub invalid_dropped: usize,
    pub unparsed_dates: usize,
    pub unparsed_weights: usize,
    pub unparsed_phones: usize,
    /// Values rewritten by literal corrections.
    pub corrections_applied: usize,
}

impl CleaningReport {
    pub fn new(entity: EntityKind, rows_in: usize) -> Self {
        Self {
            entity,
            rows_in,
            rows_out: rows_in,
            null_dropped: 0,
            outlier_dropped: 0,
            invalid_dropped: 0,
            unparsed_dates: 0,
            unparsed_weights: 0,
            unparsed_phones: 0,
            corrections_applied: 0,
        }
    }

    pub fn dropped(&self) -> usize {
        self.rows_in.saturating_sub(self.rows_out)
    }

    /// Fields that resolved to null instead of a value.
    pub fn nulled_fields(&self) -> usize {
        self.unparsed_dates + self.unparsed_weights + self.unparsed_phones
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropped_tracks_rows_out() {
        let mut report = CleaningReport::new(EntityKind::Cards, 10);
        report.rows_out = 7;
        assert_eq!(report.dropped(), 3);
    }

    #[test]
    fn test_report_serializes_entity_lowercase() {
        let report = CleaningReport::new(EntityKind::Events, 0);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["entity"], "events");
    }
}
