//! Backend-agnostic report document.
//!
//! A [`ReportDocument`] holds only primitives, strings and numeric point
//! sequences, so any renderer can consume it without touching the analysis
//! types again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use corr_model::{CellValue, CorrelationResult, DatasetShape, Exclusion, StrengthCounts};

/// A complete report, built once from an analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    /// The run's target column.
    pub dependent_variable: String,
    pub summary: SummarySection,
    /// One finding per result, in run order.
    pub findings: Vec<Finding>,
    pub charts: Vec<ScatterChart>,
    pub sample: SampleTable,
}

impl ReportDocument {
    /// Looks up a chart block by id.
    pub fn chart(&self, id: &str) -> Option<&ScatterChart> {
        self.charts.iter().find(|chart| chart.id == id)
    }
}

/// Run-level overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySection {
    pub target: String,
    pub shape: DatasetShape,
    pub candidates_analysed: usize,
    pub counts: StrengthCounts,
    pub strongest: Option<StrongestRelationship>,
    pub excluded: Vec<Exclusion>,
    /// Candidates whose coefficient is undefined.
    pub indeterminate: Vec<String>,
    pub overview: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrongestRelationship {
    pub candidate: String,
    pub r: f64,
}

/// One analysed candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// 1-based position in the report.
    pub number: usize,
    pub heading: String,
    pub result: CorrelationResult,
    pub interpretation: String,
    /// Id of the [`ScatterChart`] for this finding.
    pub chart_id: String,
    pub caption: String,
    /// Leading rows of the candidate and target columns.
    pub sample: SampleTable,
}

/// Scatter-plot data: candidate on x, target on y.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub id: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<[f64; 2]>,
}

/// Leading rows of the input, copied verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    /// Rows available before truncation.
    pub total_rows: usize,
}

impl SampleTable {
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.total_rows
    }
}
