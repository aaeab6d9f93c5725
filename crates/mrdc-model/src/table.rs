//! Cleaned table hand-off type.

use polars::prelude::DataFrame;

use crate::entity::EntityKind;
use crate::error::{ModelError, Result};
use crate::report::CleaningReport;
use crate::schema::has_column;

/// A fully cleaned entity table with its designated index.
///
/// DataFrames have no row index of their own, so the index is carried as
/// ordinary leading columns plus their names. Sinks persist those columns
/// like any other.
#[derive(Debug, Clone)]
pub struct CleanedTable {
    pub entity: EntityKind,
    pub frame: DataFrame,
    pub index: Vec<String>,
    pub report: CleaningReport,
}

impl CleanedTable {
    /// Set `index` as the table index, moving those columns to the front.
    pub fn with_index(
        entity: EntityKind,
        frame: DataFrame,
        index: &[&str],
        report: CleaningReport,
    ) -> Result<Self> {
        for column in index {
            if !has_column(&frame, column) {
                return Err(ModelError::MissingColumn {
                    entity,
                    column: (*column).to_string(),
                });
            }
        }

        let mut order: Vec<String> = index.iter().map(|c| (*c).to_string()).collect();
        for name in frame.get_column_names() {
            if !index.contains(&name.as_str()) {
                order.push(name.to_string());
            }
        }
        let frame = frame.select(order)?;

        Ok(Self {
            entity,
            frame,
            index: index.iter().map(|c| (*c).to_string()).collect(),
            report,
        })
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }
}
