//! CLI argument definitions for the retail data cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use mrdc_model::EntityKind;

#[derive(Parser)]
#[command(
    name = "mrdc",
    version,
    about = "Clean retail extracts into warehouse-ready tables",
    long_about = "Clean raw user, card, store, product, order and event extracts.\n\n\
                  Drops rows with missing keys and undersized category groups,\n\
                  normalizes dates, phone numbers and weights, and writes one\n\
                  indexed CSV table per entity."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run every job in a pipeline config file.
    Run(RunArgs),

    /// Clean a single extract file.
    Clean(CleanArgs),

    /// List the supported entities and their default destinations.
    Entities,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Pipeline config (TOML) listing the jobs to run.
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub config: PathBuf,

    /// Output directory (overrides `output_dir` in the config).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Entity the extract holds (users, cards, stores, products, orders, events).
    #[arg(value_name = "ENTITY")]
    pub entity: EntityKind,

    /// Extract file to clean.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Layout of the extract file.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: InputFormatArg,

    /// Output directory for the cleaned table.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Destination name (default: the entity's warehouse table).
    #[arg(long = "destination", value_name = "NAME")]
    pub destination: Option<String>,

    /// Literal treated as a missing value.
    #[arg(long = "null-sentinel", value_name = "TEXT")]
    pub null_sentinel: Option<String>,

    /// Drop category groups with this many rows or fewer.
    #[arg(long = "category-min-group", value_name = "N")]
    pub category_min_group: Option<usize>,

    /// Drop (provider, card length) groups with this many rows or fewer.
    #[arg(long = "card-length-min-group", value_name = "N")]
    pub card_length_min_group: Option<usize>,
}

/// Extract file layouts.
#[derive(Clone, Copy, ValueEnum)]
pub enum InputFormatArg {
    Csv,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
