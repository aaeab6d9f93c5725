//! Data model for the retail data centralisation pipeline.
//!
//! - **entity**: the six business entities and their warehouse destinations
//! - **schema**: declared column kinds and per-entity schemas
//! - **table**: the cleaned, indexed table handed to a sink
//! - **report**: row attrition and corruption counts per cleaning run

pub mod entity;
pub mod error;
pub mod report;
pub mod schema;
pub mod table;

pub use entity::EntityKind;
pub use error::{ModelError, Result};
pub use report::CleaningReport;
pub use schema::{ColumnKind, ColumnSpec, EntitySchema, expect_kind, has_column};
pub use table::CleanedTable;
