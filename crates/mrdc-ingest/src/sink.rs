//! Destinations for cleaned tables.

use std::fs::{self, File};
use std::path::PathBuf;

use mrdc_model::CleanedTable;
use polars::prelude::{CsvWriter, SerWriter};

use crate::error::{IngestError, Result};

/// Persists a cleaned table under a destination name.
///
/// Writing replaces any existing destination contents wholesale. The index
/// columns are persisted like any other column.
pub trait Sink {
    fn write(&self, table: &CleanedTable, destination: &str) -> Result<()>;
}

/// Writes each destination as `<dir>/<destination>.csv`.
#[derive(Debug, Clone)]
pub struct CsvDirectorySink {
    pub dir: PathBuf,
}

impl CsvDirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, destination: &str) -> PathBuf {
        self.dir.join(format!("{destination}.csv"))
    }
}

impl Sink for CsvDirectorySink {
    fn write(&self, table: &CleanedTable, destination: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| IngestError::Write {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path_for(destination);
        let mut file = File::create(&path).map_err(|source| IngestError::Write {
            path: path.clone(),
            source,
        })?;

        let mut frame = table.frame.clone();
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut frame)?;

        tracing::info!(
            entity = %table.entity,
            destination,
            path = %path.display(),
            rows = frame.height(),
            "Wrote cleaned table"
        );
        Ok(())
    }
}
