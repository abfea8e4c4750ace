//! CLI argument definitions for the correlation analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "corr",
    version,
    about = "Correlation analysis - rank numeric predictors of a target column",
    long_about = "Correlate one numeric target column of a CSV file with every other\n\
                  eligible numeric column and assemble a report.\n\n\
                  Identifier-like, constant and non-numeric columns are excluded.\n\
                  Reports are written as Markdown or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Correlate a target column with every eligible column and write a report.
    Analyze(AnalyzeArgs),

    /// List the columns of a CSV file and whether they can be analysed.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// CSV file with a header row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Dependent variable (default: SatisfactionScore_100 when present,
    /// otherwise the first numeric column).
    #[arg(long = "target", short = 't', value_name = "NAME")]
    pub target: Option<String>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "markdown")]
    pub format: ReportFormatArg,

    /// Write the report here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Rows kept in the sample-data table.
    #[arg(long = "max-sample-rows", value_name = "N")]
    pub max_sample_rows: Option<usize>,

    /// Report title.
    #[arg(long = "title")]
    pub title: Option<String>,

    /// JSON file with `analysis` and `report` option sections.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Extra identifier suffix (repeatable).
    #[arg(long = "id-suffix", value_name = "SUFFIX")]
    pub id_suffixes: Vec<String>,

    /// Keep identifier-like columns as candidates.
    #[arg(long = "no-id-filter")]
    pub no_id_filter: bool,

    /// Do not draw a progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// CSV file with a header row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Target used to decide eligibility (same default as `analyze`).
    #[arg(long = "target", short = 't', value_name = "NAME")]
    pub target: Option<String>,

    /// JSON config file; only the `analysis` section is used.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Markdown,
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
