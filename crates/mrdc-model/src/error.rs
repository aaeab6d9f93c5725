use polars::prelude::PolarsError;
use thiserror::Error;

use crate::entity::EntityKind;
use crate::schema::ColumnKind;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A table handed to a cleaner lacks a column its schema requires.
    #[error("{entity} table is missing required column '{column}'")]
    MissingColumn { entity: EntityKind, column: String },

    /// A column does not hold the kind of values its schema declares.
    #[error("column '{column}' should hold {expected} values but has dtype {found}")]
    ColumnKind {
        column: String,
        expected: ColumnKind,
        found: String,
    },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<PolarsError> for ModelError {
    fn from(err: PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = ModelError::MissingColumn {
            entity: EntityKind::Stores,
            column: "store_code".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "stores table is missing required column 'store_code'"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = PolarsError::ColumnNotFound("weight".into());
        let model_err: ModelError = polars_err.into();
        assert!(matches!(model_err, ModelError::DataFrame { .. }));
    }
}
