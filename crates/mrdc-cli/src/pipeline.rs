//! Extract, clean and load stages for one or more jobs.
//!
//! Jobs are independent: a job that fails is recorded in its summary and
//! the remaining jobs still run.

use std::time::Instant;

use anyhow::{Context, Result};
use mrdc_clean::{CleaningOptions, clean_entity};
use mrdc_ingest::{CsvDirectorySink, Sink, Source};
use mrdc_model::{CleanedTable, EntityKind};
use tracing::{error, info, info_span};

use crate::config::PipelineConfig;
use crate::types::{JobSummary, RunResult};

/// Read a raw table from `source` and clean it as `entity`.
pub fn clean_from_source(
    entity: EntityKind,
    source: &dyn Source,
    options: &CleaningOptions,
) -> Result<CleanedTable> {
    let raw = source
        .read()
        .with_context(|| format!("read {}", source.describe()))?;
    clean_entity(entity, raw, options).with_context(|| format!("clean {entity} table"))
}

/// Run one job end to end. Failures are captured in the summary.
pub fn run_job(
    entity: EntityKind,
    source: &dyn Source,
    destination: &str,
    options: &CleaningOptions,
    sink: &CsvDirectorySink,
) -> JobSummary {
    let span = info_span!("job", entity = %entity, destination);
    let _guard = span.enter();
    let start = Instant::now();

    let mut summary = JobSummary {
        entity,
        source: source.describe(),
        destination: destination.to_string(),
        report: None,
        output: None,
        error: None,
    };

    let outcome = clean_from_source(entity, source, options).and_then(|table| {
        summary.report = Some(table.report.clone());
        sink.write(&table, destination)
            .with_context(|| format!("write {destination}"))?;
        Ok(sink.path_for(destination))
    });

    match outcome {
        Ok(path) => {
            info!(
                rows = summary.report.as_ref().map_or(0, |report| report.rows_out),
                duration_ms = start.elapsed().as_millis(),
                "Job complete"
            );
            summary.output = Some(path);
        }
        Err(err) => {
            error!(error = %format!("{err:#}"), "Job failed");
            summary.error = Some(format!("{entity}: {err:#}"));
        }
    }
    summary
}

/// Run every job in `config`, in order.
pub fn run_pipeline(config: &PipelineConfig) -> RunResult {
    let sink = CsvDirectorySink::new(&config.output_dir);
    let jobs = config
        .jobs
        .iter()
        .map(|job| {
            let source = job.source.to_source();
            run_job(
                job.entity,
                source.as_ref(),
                job.destination(),
                &config.cleaning,
                &sink,
            )
        })
        .collect();
    RunResult::from_jobs(config.output_dir.clone(), jobs)
}
