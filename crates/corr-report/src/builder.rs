//! Assembles a [`ReportDocument`] from a completed analysis run.

use chrono::Utc;
use tracing::{debug, info};

use corr_model::{AnalysisRun, CellValue, PairedValues, SampleRows};

use crate::document::{
    Finding, ReportDocument, SampleTable, ScatterChart, StrongestRelationship, SummarySection,
};
use crate::error::{ReportError, Result};
use crate::interpretation;
use crate::options::ReportOptions;

/// Builds reports with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    options: ReportOptions,
}

impl ReportBuilder {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Builds the document. Findings follow the run's result order.
    pub fn build(&self, run: &AnalysisRun, sample_rows: &SampleRows) -> Result<ReportDocument> {
        let sample = sample_table(sample_rows, self.options.max_sample_rows)?;

        let mut findings = Vec::with_capacity(run.results.len());
        let mut charts = Vec::with_capacity(run.results.len());
        for (idx, result) in run.results.iter().enumerate() {
            let number = idx + 1;
            let chart_id = format!("figure-1-{number}");
            let points = run
                .paired_values(&result.candidate)
                .map(PairedValues::points)
                .unwrap_or_default();
            debug!(
                candidate = %result.candidate,
                chart_id = %chart_id,
                points = points.len(),
                "finding assembled"
            );
            let r_label = result
                .r
                .map_or_else(|| "indeterminate".to_string(), interpretation::format_r);
            charts.push(ScatterChart {
                id: chart_id.clone(),
                title: format!(
                    "Scatter Plot: {} vs. {} (r = {r_label})",
                    result.candidate, result.target
                ),
                x_label: result.candidate.clone(),
                y_label: result.target.clone(),
                points,
            });
            findings.push(Finding {
                number,
                heading: interpretation::heading(result),
                result: result.clone(),
                interpretation: interpretation::interpret(result),
                chart_id,
                caption: interpretation::caption(number, result),
                sample: column_sample(
                    sample_rows,
                    [&result.candidate, &result.target],
                    self.options.max_sample_rows,
                )?,
            });
        }

        let counts = run.strength_counts();
        let strongest = run.strongest();
        let summary = SummarySection {
            target: run.target.clone(),
            shape: run.shape,
            candidates_analysed: run.results.len(),
            counts,
            strongest: strongest.and_then(|result| {
                result.r.map(|r| StrongestRelationship {
                    candidate: result.candidate.clone(),
                    r,
                })
            }),
            excluded: run.excluded.clone(),
            indeterminate: run
                .indeterminate()
                .map(|result| result.candidate.clone())
                .collect(),
            overview: interpretation::overview(
                &run.target,
                run.shape.rows,
                counts,
                strongest,
                run.excluded.len(),
            ),
        };

        info!(
            target_column = %run.target,
            findings = findings.len(),
            sample_rows = sample.rows.len(),
            "report built"
        );

        Ok(ReportDocument {
            title: self.options.title.clone(),
            generated_at: Utc::now(),
            dependent_variable: run.target.clone(),
            summary,
            findings,
            charts,
            sample,
        })
    }
}

/// Builds a report with the default title.
pub fn build(
    run: &AnalysisRun,
    sample_rows: &SampleRows,
    max_sample_rows: usize,
) -> Result<ReportDocument> {
    ReportBuilder::new(ReportOptions::default().with_max_sample_rows(max_sample_rows))
        .build(run, sample_rows)
}

fn sample_table(sample_rows: &SampleRows, max_rows: usize) -> Result<SampleTable> {
    let expected = sample_rows.headers.len();
    if let Some((row, cells)) = sample_rows
        .rows
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != expected)
    {
        return Err(ReportError::MalformedSampleRow {
            row,
            expected,
            actual: cells.len(),
        });
    }
    Ok(SampleTable {
        headers: sample_rows.headers.clone(),
        rows: sample_rows.rows.iter().take(max_rows).cloned().collect(),
        total_rows: sample_rows.rows.len(),
    })
}

/// Projects the sample rows onto `names`, keeping the first `max_rows`.
/// Expects rows already checked by [`sample_table`].
fn column_sample(
    sample_rows: &SampleRows,
    names: [&String; 2],
    max_rows: usize,
) -> Result<SampleTable> {
    let mut indices = Vec::with_capacity(names.len());
    for name in names {
        let idx = sample_rows
            .headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| ReportError::MissingSampleColumn { name: name.clone() })?;
        indices.push(idx);
    }
    let rows = sample_rows
        .rows
        .iter()
        .take(max_rows)
        .map(|row| {
            indices
                .iter()
                .map(|&idx| row.get(idx).cloned().unwrap_or(CellValue::Missing))
                .collect()
        })
        .collect();
    Ok(SampleTable {
        headers: names.into_iter().cloned().collect(),
        rows,
        total_rows: sample_rows.rows.len(),
    })
}
