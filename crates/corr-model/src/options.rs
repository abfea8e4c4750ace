//! Configuration options for correlation analysis.

use serde::{Deserialize, Serialize};

/// Minimum number of rows an analysable dataset must have.
pub const MIN_DATASET_ROWS: usize = 2;

/// Name-based rules for spotting identifier-like columns.
///
/// This is a heuristic. A measured quantity whose name happens to end in
/// `ID` (for example `VALID`) is a false positive, and a sequential row
/// counter named `Seq` is a false negative. Both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierNameRules {
    /// Disable to keep identifier-like columns as candidates.
    pub enabled: bool,
    /// Whole names matched case-insensitively.
    pub exact_names: Vec<String>,
    /// Name suffixes matched case-sensitively.
    pub suffixes: Vec<String>,
}

impl Default for IdentifierNameRules {
    fn default() -> Self {
        Self {
            enabled: true,
            exact_names: ["id", "observationid", "rowid", "index"]
                .into_iter()
                .map(String::from)
                .collect(),
            suffixes: ["ID", "Id", "_id"].into_iter().map(String::from).collect(),
        }
    }
}

impl IdentifierNameRules {
    /// Rules that never match.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffixes.push(suffix.into());
        self
    }

    #[must_use]
    pub fn with_exact_name(mut self, name: impl Into<String>) -> Self {
        self.exact_names.push(name.into());
        self
    }

    /// Whether `name` looks like a row identifier under these rules.
    pub fn matches(&self, name: &str) -> bool {
        if !self.enabled {
            return false;
        }
        let trimmed = name.trim();
        self.exact_names
            .iter()
            .any(|exact| exact.eq_ignore_ascii_case(trimmed))
            || self
                .suffixes
                .iter()
                .any(|suffix| !suffix.is_empty() && trimmed.ends_with(suffix.as_str()))
    }
}

/// Options controlling an analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Identifier-name heuristic applied by the column classifier.
    pub identifier_rules: IdentifierNameRules,
    /// Target offered first when the caller has not chosen one.
    pub preferred_target: Option<String>,
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_identifier_rules(mut self, rules: IdentifierNameRules) -> Self {
        self.identifier_rules = rules;
        self
    }

    #[must_use]
    pub fn with_preferred_target(mut self, target: impl Into<String>) -> Self {
        self.preferred_target = Some(target.into());
        self
    }
}
