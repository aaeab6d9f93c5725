//! Error types for the cleaning core.

use mrdc_model::ModelError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that halt an entity pipeline.
///
/// Malformed values never surface here; they become nulls.
#[derive(Debug, Error)]
pub enum CleanError {
    /// Schema violation: missing column or wrong column kind.
    #[error(transparent)]
    Schema(#[from] ModelError),

    /// A normalizer or filter was pointed at a column the table lacks.
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    #[error("DataFrame operation failed: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, CleanError>;

#[cfg(test)]
mod tests {
    use super::*;
    use mrdc_model::EntityKind;

    #[test]
    fn test_schema_error_is_transparent() {
        let err: CleanError = ModelError::MissingColumn {
            entity: EntityKind::Products,
            column: "weight".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "products table is missing required column 'weight'"
        );
    }
}
