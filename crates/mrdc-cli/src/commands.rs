use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use mrdc_clean::CleaningOptions;
use mrdc_cli::config::load_config;
use mrdc_cli::pipeline::{run_job, run_pipeline};
use mrdc_cli::types::RunResult;
use mrdc_ingest::{CsvDirectorySink, CsvSource, JsonRecordSource, Source};
use mrdc_model::EntityKind;

use crate::cli::{CleanArgs, InputFormatArg, RunArgs};
use crate::summary::apply_table_style;

pub fn run_entities() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Entity", "Destination", "Index", "Required Columns"]);
    apply_table_style(&mut table);
    for entity in EntityKind::ALL {
        let schema = entity.schema();
        table.add_row(vec![
            entity.as_str().to_string(),
            entity.default_destination().to_string(),
            schema.index.join(", "),
            schema.required.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_config(args: &RunArgs) -> Result<RunResult> {
    let mut config = load_config(&args.config).context("load pipeline config")?;
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    let span = info_span!("run", config = %args.config.display());
    let _guard = span.enter();
    Ok(run_pipeline(&config))
}

pub fn run_clean(args: &CleanArgs) -> Result<RunResult> {
    let mut options = CleaningOptions::default();
    if let Some(sentinel) = &args.null_sentinel {
        options = options.with_null_sentinel(sentinel.as_str());
    }
    if let Some(threshold) = args.category_min_group {
        options = options.with_category_min_group(threshold);
    }
    if let Some(threshold) = args.card_length_min_group {
        options = options.with_card_length_min_group(threshold);
    }

    let source: Box<dyn Source> = match args.format {
        InputFormatArg::Csv => Box::new(CsvSource::new(&args.input)),
        InputFormatArg::Json => Box::new(JsonRecordSource::new(&args.input)),
    };
    let destination = args
        .destination
        .as_deref()
        .unwrap_or_else(|| args.entity.default_destination());
    let sink = CsvDirectorySink::new(&args.output_dir);

    let summary = run_job(args.entity, source.as_ref(), destination, &options, &sink);
    Ok(RunResult::from_jobs(args.output_dir.clone(), vec![summary]))
}
