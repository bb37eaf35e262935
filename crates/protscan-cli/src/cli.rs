use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Protscan Developers",
    version,
    about = "Protscan CLI - Validate protein sequences, compute molecular weight, GRAVY, net charge and isoelectric point, and score sequence similarity.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Path to an analysis configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S isoelectric.max-iterations=200
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a sequence and print its derived properties.
    Analyze(AnalyzeArgs),
    /// Score the similarity of two sequences.
    Compare(CompareArgs),
    /// Score every protein of a CSV dataset.
    Batch(BatchArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Sequence fragments, concatenated in order (e.g., MKV LLI).
    #[arg(required = true, value_name = "FRAGMENT")]
    pub fragments: Vec<String>,
}

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First sequence; use commas to separate fragments.
    #[arg(value_name = "SEQ_A")]
    pub first: String,

    /// Second sequence; use commas to separate fragments.
    #[arg(value_name = "SEQ_B")]
    pub second: String,

    /// Ignore letter case when scoring, overriding `similarity.case` from the config file.
    #[arg(long)]
    pub ignore_case: bool,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Path to the input dataset (CSV with a header row).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output CSV. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Only write proteins at least this long.
    #[arg(long, value_name = "INT")]
    pub min_length: Option<usize>,

    /// Only write proteins at most this long.
    #[arg(long, value_name = "INT")]
    pub max_length: Option<usize>,

    /// Only write proteins whose molecular weight is at least this (Da).
    #[arg(long, value_name = "FLOAT")]
    pub min_weight: Option<f64>,

    /// Only write proteins whose molecular weight is at most this (Da).
    #[arg(long, value_name = "FLOAT")]
    pub max_weight: Option<f64>,

    /// Only write proteins whose gene name contains this text (case-insensitive).
    #[arg(long, value_name = "TEXT")]
    pub gene: Option<String>,

    /// Only write proteins whose family contains this text (case-insensitive).
    #[arg(long, value_name = "TEXT")]
    pub family: Option<String>,

    /// Sort output rows by this property.
    #[arg(long, value_enum, default_value_t = SortField::Id)]
    pub sort_by: SortField,

    /// Sort in descending order.
    #[arg(long)]
    pub descending: bool,

    /// Write a single page of at most this many rows (capped at 100).
    #[arg(long, value_name = "INT")]
    pub limit: Option<usize>,

    /// Skip this many matching rows before the page starts. Only used with --limit.
    #[arg(long, value_name = "INT", default_value_t = 0, requires = "limit")]
    pub offset: usize,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Length,
    MolecularWeight,
    IsoelectricPoint,
    Hydrophobicity,
}
