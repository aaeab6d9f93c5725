//! Pipeline config file.
//!
//! ```toml
//! output_dir = "warehouse"
//!
//! [cleaning]
//! card_length_min_group = 3
//!
//! [[job]]
//! entity = "users"
//! source = { kind = "table", dir = "extracts/rds", table = "legacy_users" }
//!
//! [[job]]
//! entity = "stores"
//! source = { kind = "json", path = "extracts/stores.json" }
//! destination = "dim_store_details"
//! ```
//!
//! Relative paths are resolved against the directory holding the config file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mrdc_clean::CleaningOptions;
use mrdc_ingest::{CsvSource, JsonRecordSource, Source, TableDirectorySource};
use mrdc_model::EntityKind;
use serde::Deserialize;

const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    #[serde(default)]
    pub cleaning: CleaningOptions,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default, rename = "job")]
    pub jobs: Vec<JobConfig>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// One entity to extract, clean and load.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    pub entity: EntityKind,
    pub source: SourceConfig,
    /// Defaults to the entity's warehouse table name.
    #[serde(default)]
    pub destination: Option<String>,
}

impl JobConfig {
    pub fn destination(&self) -> &str {
        self.destination
            .as_deref()
            .unwrap_or_else(|| self.entity.default_destination())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub enum SourceConfig {
    Csv { path: PathBuf },
    Json { path: PathBuf },
    Table { dir: PathBuf, table: String },
}

impl SourceConfig {
    pub fn to_source(&self) -> Box<dyn Source> {
        match self {
            SourceConfig::Csv { path } => Box::new(CsvSource::new(path)),
            SourceConfig::Json { path } => Box::new(JsonRecordSource::new(path)),
            SourceConfig::Table { dir, table } => {
                Box::new(TableDirectorySource::new(dir, table.as_str()))
            }
        }
    }

    fn resolve(&mut self, base: &Path) {
        match self {
            SourceConfig::Csv { path } | SourceConfig::Json { path } => {
                *path = resolve_path(base, path);
            }
            SourceConfig::Table { dir, .. } => *dir = resolve_path(base, dir),
        }
    }
}

fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

impl PipelineConfig {
    /// Parse a config, resolving relative paths against `base`.
    pub fn from_toml_str(content: &str, base: &Path) -> Result<Self> {
        let mut config: PipelineConfig =
            toml::from_str(content).context("parse pipeline config")?;
        config.output_dir = resolve_path(base, &config.output_dir);
        for job in &mut config.jobs {
            job.source.resolve(base);
        }
        Ok(config)
    }
}

/// Load a pipeline config file.
pub fn load_config(path: &Path) -> Result<PipelineConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read pipeline config {}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let config = PipelineConfig::from_toml_str(&content, base)
        .with_context(|| format!("load pipeline config {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        jobs = config.jobs.len(),
        output_dir = %config.output_dir.display(),
        "Loaded pipeline config"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::from_toml_str("", Path::new("/etl")).unwrap();
        assert_eq!(config.cleaning, CleaningOptions::default());
        assert_eq!(config.output_dir, PathBuf::from("/etl/output"));
        assert!(config.jobs.is_empty());
    }

    #[test]
    fn test_job_destination_fallback() {
        let config = PipelineConfig::from_toml_str(
            r#"
            [[job]]
            entity = "cards"
            source = { kind = "csv", path = "card_details.csv" }

            [[job]]
            entity = "card"
            source = { kind = "csv", path = "/data/cards.csv" }
            destination = "cards_backfill"
            "#,
            Path::new("/etl"),
        )
        .unwrap();
        assert_eq!(config.jobs[0].destination(), "dim_card_details");
        assert_eq!(config.jobs[1].destination(), "cards_backfill");
        assert_eq!(
            config.jobs[0].source,
            SourceConfig::Csv {
                path: PathBuf::from("/etl/card_details.csv")
            }
        );
        assert_eq!(
            config.jobs[1].source,
            SourceConfig::Csv {
                path: PathBuf::from("/data/cards.csv")
            }
        );
    }

    #[test]
    fn test_unknown_source_kind_rejected() {
        let result = PipelineConfig::from_toml_str(
            r#"
            [[job]]
            entity = "users"
            source = { kind = "s3", path = "users.csv" }
            "#,
            Path::new("."),
        );
        assert!(result.is_err());
    }
}
