//! Run configuration: an optional JSON file overlaid with command-line flags.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use corr_model::{AnalysisOptions, IdentifierNameRules};
use corr_report::ReportOptions;

/// Target chosen when none is given and the dataset has this column.
pub const DEFAULT_PREFERRED_TARGET: &str = "SatisfactionScore_100";

/// Contents of a `--config` file. Every section is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub analysis: AnalysisOptions,
    pub report: ReportOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            analysis: AnalysisOptions::new().with_preferred_target(DEFAULT_PREFERRED_TARGET),
            report: ReportOptions::default(),
        }
    }
}

/// Flag values that override the file. `None` and empty mean "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub title: Option<String>,
    pub max_sample_rows: Option<usize>,
    pub id_suffixes: Vec<String>,
    pub no_id_filter: bool,
}

impl RunConfig {
    /// Reads a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))
    }

    /// Loads `path` when given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Applies command-line overrides on top of the file values.
    ///
    /// A config without a preferred target falls back to
    /// [`DEFAULT_PREFERRED_TARGET`].
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(title) = overrides.title {
            self.report.title = title;
        }
        if let Some(rows) = overrides.max_sample_rows {
            self.report.max_sample_rows = rows;
        }
        let mut rules = self.analysis.identifier_rules;
        for suffix in overrides.id_suffixes {
            rules = rules.with_suffix(suffix);
        }
        if overrides.no_id_filter {
            rules = IdentifierNameRules::disabled();
        }
        self.analysis.identifier_rules = rules;
        if self.analysis.preferred_target.is_none() {
            self.analysis.preferred_target = Some(DEFAULT_PREFERRED_TARGET.to_string());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_prefer_satisfaction_score() {
        let config = RunConfig::default();
        assert_eq!(
            config.analysis.preferred_target.as_deref(),
            Some(DEFAULT_PREFERRED_TARGET)
        );
        assert_eq!(config.report.max_sample_rows, 5);
    }

    #[test]
    fn flags_override_file_values() {
        let config = RunConfig::default().with_overrides(Overrides {
            title: Some("Quarterly".to_string()),
            max_sample_rows: Some(2),
            id_suffixes: vec!["_key".to_string()],
            no_id_filter: false,
        });
        assert_eq!(config.report.title, "Quarterly");
        assert_eq!(config.report.max_sample_rows, 2);
        assert!(config.analysis.identifier_rules.matches("order_key"));
        assert!(config.analysis.identifier_rules.matches("ObservationID"));
    }

    #[test]
    fn no_id_filter_disables_rules() {
        let config = RunConfig::default().with_overrides(Overrides {
            no_id_filter: true,
            ..Overrides::default()
        });
        assert!(!config.analysis.identifier_rules.matches("ObservationID"));
    }

    #[test]
    fn file_without_preferred_target_gets_default() {
        let config: RunConfig =
            serde_json::from_str(r#"{"analysis": {"identifier_rules": {"enabled": false}}}"#)
                .unwrap();
        assert_eq!(config.analysis.preferred_target, None);
        assert_eq!(config.report.max_sample_rows, 5);

        let config = config.with_overrides(Overrides::default());
        assert_eq!(
            config.analysis.preferred_target.as_deref(),
            Some(DEFAULT_PREFERRED_TARGET)
        );
        assert!(!config.analysis.identifier_rules.enabled);
    }
}
