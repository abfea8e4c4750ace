//! Report options.

use serde::{Deserialize, Serialize};

/// Title used when none is configured.
pub const DEFAULT_TITLE: &str = "Comprehensive Scientific Analysis Report";

/// Rows kept in the sample-data snapshot by default.
pub const DEFAULT_MAX_SAMPLE_ROWS: usize = 5;

/// Options controlling report assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    pub title: String,
    pub max_sample_rows: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            max_sample_rows: DEFAULT_MAX_SAMPLE_ROWS,
        }
    }
}

impl ReportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_max_sample_rows(mut self, rows: usize) -> Self {
        self.max_sample_rows = rows;
        self
    }
}
