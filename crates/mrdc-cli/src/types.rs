use std::path::PathBuf;

use mrdc_model::{CleaningReport, EntityKind};

#[derive(Debug)]
pub struct RunResult {
    pub output_dir: PathBuf,
    pub jobs: Vec<JobSummary>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct JobSummary {
    pub entity: EntityKind,
    pub source: String,
    pub destination: String,
    /// Present when the entity was cleaned.
    pub report: Option<CleaningReport>,
    /// Present when the cleaned table was written.
    pub output: Option<PathBuf>,
    pub error: Option<String>,
}

impl RunResult {
    pub fn from_jobs(output_dir: PathBuf, jobs: Vec<JobSummary>) -> Self {
        let has_errors = jobs.iter().any(|job| job.error.is_some());
        Self {
            output_dir,
            jobs,
            has_errors,
        }
    }
}
