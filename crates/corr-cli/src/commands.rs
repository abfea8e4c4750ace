use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use corr_cli::config::{Overrides, RunConfig};
use corr_cli::progress::ProgressBarObserver;
use corr_core::{AnalysisSession, Classification};
use corr_ingest::read_csv_dataset;
use corr_model::{AnalysisRun, Column};
use corr_report::{ReportBuilder, render_json, render_markdown, write_json, write_markdown};

use crate::cli::{AnalyzeArgs, ColumnsArgs, ReportFormatArg};

/// What `analyze` produced.
pub struct AnalyzeOutcome {
    pub run: AnalysisRun,
    /// `None` when the report went to stdout.
    pub report_path: Option<PathBuf>,
}

/// Column listing with eligibility against the resolved target.
pub struct ColumnsOutcome {
    pub target: String,
    pub classification: Classification,
    pub missing: Vec<usize>,
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeOutcome> {
    let span = info_span!("analyze", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let config = RunConfig::load_or_default(args.config.as_deref())?.with_overrides(Overrides {
        title: args.title.clone(),
        max_sample_rows: args.max_sample_rows,
        id_suffixes: args.id_suffixes.clone(),
        no_id_filter: args.no_id_filter,
    });
    let dataset = read_csv_dataset(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let sample = dataset.to_sample_rows();

    let mut session = AnalysisSession::new(dataset, config.analysis);
    if let Some(target) = &args.target {
        session.select_target(target)?;
    }
    let target = session
        .target()
        .ok_or_else(|| anyhow!("no numeric column available as a target"))?
        .to_string();

    let mut observer = if args.no_progress || !io::stderr().is_terminal() {
        ProgressBarObserver::hidden()
    } else {
        ProgressBarObserver::new()
    };
    let outcome = session.run_with_progress(&mut observer).map(|_| ());
    observer.finish();
    outcome.with_context(|| format!("analyze target '{target}'"))?;
    let run = session
        .take_run()
        .ok_or_else(|| anyhow!("analysis finished without a run"))?;

    let document = ReportBuilder::new(config.report)
        .build(&run, &sample)
        .context("build report")?;
    match (&args.output, args.format) {
        (Some(path), ReportFormatArg::Markdown) => write_markdown(&document, path)?,
        (Some(path), ReportFormatArg::Json) => write_json(&document, path)?,
        (None, ReportFormatArg::Markdown) => print!("{}", render_markdown(&document)),
        (None, ReportFormatArg::Json) => println!("{}", render_json(&document)?),
    }

    info!(
        target_column = %run.target,
        findings = document.findings.len(),
        duration_ms = start.elapsed().as_millis(),
        "analyze complete"
    );
    Ok(AnalyzeOutcome {
        run,
        report_path: args.output.clone(),
    })
}

pub fn run_columns(args: &ColumnsArgs) -> Result<ColumnsOutcome> {
    let config =
        RunConfig::load_or_default(args.config.as_deref())?.with_overrides(Overrides::default());
    let dataset = read_csv_dataset(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let missing = dataset
        .columns()
        .iter()
        .map(Column::missing_count)
        .collect();

    let mut session = AnalysisSession::new(dataset, config.analysis);
    if let Some(target) = &args.target {
        session.select_target(target)?;
    }
    let classification = session.classify()?;
    let target = session.target().unwrap_or_default().to_string();
    Ok(ColumnsOutcome {
        target,
        classification,
        missing,
    })
}
