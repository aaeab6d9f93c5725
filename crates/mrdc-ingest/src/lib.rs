//! Source and sink collaborators for the cleaning core.
//!
//! Sources produce raw tables with the columns the entity cleaners expect;
//! sinks persist cleaned tables. Both are thin: retries, pagination and
//! credentials belong to whatever produced the extract files.

pub mod error;
pub mod sink;
pub mod source;

pub use error::{IngestError, Result};
pub use sink::{CsvDirectorySink, Sink};
pub use source::{CsvSource, JsonRecordSource, Source, TableDirectorySource, list_tables};
