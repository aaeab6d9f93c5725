//! Extract sources.
//!
//! Every source reads values as text: phone numbers keep their leading
//! zeros and card numbers keep their digits, and typing is the cleaners' job.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::{Column, CsvReadOptions, DataFrame, IntoColumn, NamedFrom, SerReader, Series};
use serde_json::Value;

use crate::error::{IngestError, Result, open_error};

/// Produces one raw table.
pub trait Source {
    /// Human-readable origin, for logs.
    fn describe(&self) -> String;

    fn read(&self) -> Result<DataFrame>;
}

/// A CSV file, such as an object-store export.
#[derive(Debug, Clone)]
pub struct CsvSource {
    pub path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Source for CsvSource {
    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }

    fn read(&self) -> Result<DataFrame> {
        read_csv_as_text(&self.path)
    }
}

/// Read a CSV file with every column as text.
pub fn read_csv_as_text(path: &Path) -> Result<DataFrame> {
    fs::metadata(path).map_err(|e| open_error(path, e))?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Read CSV extract"
    );
    Ok(df)
}

/// A JSON array of flat records, such as a dump of store API responses.
///
/// Columns appear in first-seen key order; a key missing from a record is
/// null for that row.
#[derive(Debug, Clone)]
pub struct JsonRecordSource {
    pub path: PathBuf,
}

impl JsonRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Source for JsonRecordSource {
    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }

    fn read(&self) -> Result<DataFrame> {
        let content = fs::read_to_string(&self.path).map_err(|e| open_error(&self.path, e))?;
        let value: Value =
            serde_json::from_str(&content).map_err(|source| IngestError::JsonParse {
                path: self.path.clone(),
                source,
            })?;
        let df = records_to_frame(&value).map_err(|reason| IngestError::JsonShape {
            path: self.path.clone(),
            reason,
        })?;
        tracing::debug!(
            path = %self.path.display(),
            rows = df.height(),
            "Read JSON records"
        );
        Ok(df)
    }
}

fn json_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn records_to_frame(value: &Value) -> std::result::Result<DataFrame, String> {
    let Value::Array(records) = value else {
        return Err("expected an array of records".to_string());
    };

    let mut order: Vec<String> = Vec::new();
    let mut columns: BTreeMap<String, Vec<Option<String>>> = BTreeMap::new();
    for (row, record) in records.iter().enumerate() {
        let Value::Object(fields) = record else {
            return Err(format!("record {row} is not an object"));
        };
        for (key, field) in fields {
            let values = columns.entry(key.clone()).or_insert_with(|| {
                order.push(key.clone());
                vec![None; row]
            });
            values.push(json_to_text(field));
        }
        for values in columns.values_mut() {
            values.resize(row + 1, None);
        }
    }

    let cols: Vec<Column> = order
        .into_iter()
        .map(|name| {
            let values = columns.remove(&name).unwrap_or_default();
            Series::new(name.as_str().into(), values).into_column()
        })
        .collect();
    DataFrame::new(cols).map_err(|e| e.to_string())
}

/// A named table in a directory of CSV exports, standing in for a
/// relational source.
///
/// A table that does not exist yields an empty frame, not an error.
#[derive(Debug, Clone)]
pub struct TableDirectorySource {
    pub dir: PathBuf,
    pub table: String,
}

impl TableDirectorySource {
    pub fn new(dir: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            table: table.into(),
        }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.csv", self.table))
    }
}

impl Source for TableDirectorySource {
    fn describe(&self) -> String {
        format!("table:{}/{}", self.dir.display(), self.table)
    }

    fn read(&self) -> Result<DataFrame> {
        let tables = list_tables(&self.dir)?;
        if !tables.contains(&self.table) {
            tracing::warn!(
                dir = %self.dir.display(),
                table = %self.table,
                "Table not found, returning empty result"
            );
            return Ok(DataFrame::empty());
        }
        read_csv_as_text(&self.path())
    }
}

/// List the table names (CSV file stems) in a directory, sorted.
pub fn list_tables(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| open_error(dir, e))?;
    let mut tables = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IngestError::FileRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv && let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            tables.push(stem.to_string());
        }
    }
    tables.sort();
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_fill_missing_keys() {
        let value = json!([
            {"store_code": "LO-1", "staff_numbers": 34},
            {"store_code": "WEB-1", "lat": null},
            {"continent": "eeEurope"}
        ]);
        let df = records_to_frame(&value).unwrap();
        assert_eq!(df.height(), 3);
        let mut names: Vec<String> = df
            .get_column_names()
            .into_iter()
            .map(|n| n.to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["continent", "lat", "staff_numbers", "store_code"]);
        let staff = df.column("staff_numbers").unwrap();
        assert_eq!(staff.null_count(), 2);
        assert_eq!(df.column("continent").unwrap().null_count(), 2);
    }

    #[test]
    fn test_records_reject_non_array() {
        assert!(records_to_frame(&json!({"store_code": "LO-1"})).is_err());
        assert!(records_to_frame(&json!([1, 2])).is_err());
    }
}
