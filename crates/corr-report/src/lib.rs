//! Report assembly for correlation analyses.
//!
//! [`build`] turns a completed [`corr_model::AnalysisRun`] into a
//! [`ReportDocument`]: a summary section, one finding per result with a
//! plain-language interpretation and figure caption, scatter-chart point
//! data, and a snapshot of the leading input rows. The document can be
//! rendered to Markdown or serialized to JSON for an external renderer.

mod builder;
mod document;
mod error;
mod interpretation;
mod json;
mod markdown;
mod options;

pub use builder::{ReportBuilder, build};
pub use document::{
    Finding, ReportDocument, SampleTable, ScatterChart, StrongestRelationship, SummarySection,
};
pub use error::{ReportError, Result};
pub use interpretation::{caption, format_percent, format_r, heading, interpret, overview};
pub use json::{render_json, write_json};
pub use markdown::{render_markdown, write_markdown};
pub use options::{DEFAULT_MAX_SAMPLE_ROWS, DEFAULT_TITLE, ReportOptions};
