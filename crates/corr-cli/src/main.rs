//! Correlation analyzer CLI.

use clap::{ColorChoice, Parser};
use corr_cli::logging::{LogConfig, LogFormat, init_logging};
use corr_model::AnalysisError;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_analyze, run_columns};
use crate::summary::{analyze_summary, columns_summary};

/// Exit code when every column was excluded and nothing could be analysed.
const EXIT_EMPTY_RESULT: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Analyze(args) => match run_analyze(&args) {
            Ok(outcome) => {
                let summary = analyze_summary(&outcome);
                // Keep stdout clean when the report itself went there.
                if outcome.report_path.is_some() {
                    println!("{summary}");
                } else {
                    eprintln!("{summary}");
                }
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Columns(args) => match run_columns(&args) {
            Ok(outcome) => {
                println!("{}", columns_summary(&outcome));
                0
            }
            Err(error) => report_error(&error),
        },
    };
    std::process::exit(exit_code);
}

fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    match error.downcast_ref::<AnalysisError>() {
        Some(AnalysisError::EmptyResult(empty)) => {
            for exclusion in &empty.excluded {
                eprintln!("  - {}: {}", exclusion.name, exclusion.reason);
            }
            eprintln!(
                "hint: choose another --target, or pass --no-id-filter to keep identifier-like columns"
            );
            EXIT_EMPTY_RESULT
        }
        _ => 1,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config = config
        .with_timestamps(cli.log_timestamps)
        .with_target(cli.log_target);
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_decoration_flags_reach_config() {
        let cli = Cli::try_parse_from([
            "corr",
            "--log-timestamps",
            "--log-target",
            "columns",
            "data.csv",
        ])
        .unwrap();
        let config = log_config_from_cli(&cli);
        assert!(config.with_timestamps);
        assert!(config.with_target);

        let plain = Cli::try_parse_from(["corr", "columns", "data.csv"]).unwrap();
        let plain = log_config_from_cli(&plain);
        assert!(!plain.with_timestamps);
        assert!(!plain.with_target);
    }
}
