//! Markdown rendering of a report document.

use std::path::Path;

use corr_model::CellValue;

use crate::document::{Finding, ReportDocument, SampleTable, SummarySection};
use crate::error::{ReportError, Result};
use crate::interpretation::{format_percent, format_r};

/// Renders the document as Markdown. Charts are referenced by id from the
/// figure captions; the point data lives in the JSON output.
pub fn render_markdown(document: &ReportDocument) -> String {
    let mut lines = Vec::new();
    lines.push(format!("# {}", escape_text(&document.title)));
    lines.push(String::new());
    lines.push(format!(
        "Generated: {}",
        document.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.push(String::new());
    lines.push(format!(
        "## Dependent Variable: {}",
        escape_text(&document.dependent_variable)
    ));
    lines.push(String::new());
    push_summary(&mut lines, &document.summary);

    lines.push("## Findings".to_string());
    lines.push(String::new());
    for finding in &document.findings {
        push_finding(&mut lines, finding, document);
    }

    push_sample(&mut lines, &document.sample);

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Renders and writes the document to `path`.
pub fn write_markdown(document: &ReportDocument, path: &Path) -> Result<()> {
    std::fs::write(path, render_markdown(document)).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn push_summary(lines: &mut Vec<String>, summary: &SummarySection) {
    lines.push("### Summary".to_string());
    lines.push(String::new());
    lines.push(summary.overview.clone());
    lines.push(String::new());

    let mut rows = vec![
        ("Rows".to_string(), summary.shape.rows.to_string()),
        ("Columns".to_string(), summary.shape.columns.to_string()),
        (
            "Candidates analysed".to_string(),
            summary.candidates_analysed.to_string(),
        ),
        ("Strong".to_string(), summary.counts.strong.to_string()),
        ("Moderate".to_string(), summary.counts.moderate.to_string()),
        ("Weak".to_string(), summary.counts.weak.to_string()),
        (
            "Indeterminate".to_string(),
            summary.counts.indeterminate.to_string(),
        ),
    ];
    if let Some(strongest) = &summary.strongest {
        rows.push((
            "Strongest".to_string(),
            format!("{} (r = {})", strongest.candidate, format_r(strongest.r)),
        ));
    }
    lines.push("| Metric | Value |".to_string());
    lines.push("| --- | --- |".to_string());
    for (metric, value) in rows {
        lines.push(format!("| {metric} | {} |", escape_cell(&value)));
    }
    lines.push(String::new());

    if !summary.excluded.is_empty() {
        lines.push("**Excluded columns**".to_string());
        lines.push(String::new());
        for exclusion in &summary.excluded {
            lines.push(format!(
                "- {}: {}",
                escape_text(&exclusion.name),
                exclusion.reason
            ));
        }
        lines.push(String::new());
    }

    if !summary.indeterminate.is_empty() {
        lines.push("**Indeterminate relationships**".to_string());
        lines.push(String::new());
        for name in &summary.indeterminate {
            lines.push(format!("- {}", escape_text(name)));
        }
        lines.push(String::new());
    }
}

fn push_finding(lines: &mut Vec<String>, finding: &Finding, document: &ReportDocument) {
    let result = &finding.result;
    lines.push(format!(
        "### {}. {}",
        finding.number,
        escape_text(&finding.heading)
    ));
    lines.push(String::new());
    lines.push("| r | R² | n | Strength | Direction |".to_string());
    lines.push("| --- | --- | --- | --- | --- |".to_string());
    lines.push(format!(
        "| {} | {} | {} | {} | {} |",
        result.r.map_or_else(|| "n/a".to_string(), format_r),
        result
            .r_squared
            .map_or_else(|| "n/a".to_string(), format_percent),
        result.n,
        result.strength,
        result.direction
    ));
    lines.push(String::new());
    lines.push(finding.interpretation.clone());
    lines.push(String::new());
    let points = document
        .chart(&finding.chart_id)
        .map_or(0, |chart| chart.points.len());
    lines.push(format!(
        "*{}* (chart `{}`, {points} point(s))",
        escape_text(&finding.caption),
        finding.chart_id
    ));
    lines.push(String::new());
    if !finding.sample.headers.is_empty() {
        lines.push("**Numeric Output (Sample Data Head)**".to_string());
        lines.push(String::new());
        push_table(lines, &finding.sample);
        lines.push(String::new());
    }
}

fn push_sample(lines: &mut Vec<String>, sample: &SampleTable) {
    if sample.headers.is_empty() {
        return;
    }
    lines.push("## Sample Data".to_string());
    lines.push(String::new());
    push_table(lines, sample);
}

fn push_table(lines: &mut Vec<String>, sample: &SampleTable) {
    lines.push(format!(
        "| {} |",
        sample
            .headers
            .iter()
            .map(|header| escape_cell(header))
            .collect::<Vec<_>>()
            .join(" | ")
    ));
    lines.push(format!("|{}", " --- |".repeat(sample.headers.len())));
    for row in &sample.rows {
        lines.push(format!(
            "| {} |",
            row.iter().map(render_cell).collect::<Vec<_>>().join(" | ")
        ));
    }
    if sample.is_truncated() {
        lines.push(String::new());
        lines.push(format!(
            "Showing {} of {} rows.",
            sample.rows.len(),
            sample.total_rows
        ));
    }
}

fn render_cell(cell: &CellValue) -> String {
    escape_cell(&cell.to_string())
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

fn escape_text(value: &str) -> String {
    value.replace('\n', " ")
}
