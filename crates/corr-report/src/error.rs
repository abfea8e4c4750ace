//! Error types for report building and writing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A sample row does not have one cell per header.
    #[error("sample row {row} has {actual} cell(s) but the header has {expected}")]
    MalformedSampleRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// An analysed column is absent from the sample rows.
    #[error("sample rows have no column '{name}'")]
    MissingSampleColumn { name: String },

    /// Failed to write the report file.
    #[error("failed to write report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the report.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
