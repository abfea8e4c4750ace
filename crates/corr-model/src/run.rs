use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::correlation::{CorrelationResult, PairedValues, Strength};
use crate::descriptor::Exclusion;

/// Rows and columns of the analysed dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetShape {
    pub rows: usize,
    pub columns: usize,
}

/// Counts of results per strength category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthCounts {
    pub strong: usize,
    pub moderate: usize,
    pub weak: usize,
    pub indeterminate: usize,
}

impl StrengthCounts {
    pub fn record(&mut self, strength: Strength) {
        match strength {
            Strength::Strong => self.strong += 1,
            Strength::Moderate => self.moderate += 1,
            Strength::Weak => self.weak += 1,
            Strength::Indeterminate => self.indeterminate += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.strong + self.moderate + self.weak + self.indeterminate
    }
}

/// A completed analysis of one target against every eligible candidate.
///
/// Results are ordered by descending |r| with undefined coefficients last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRun {
    pub target: String,
    pub results: Vec<CorrelationResult>,
    pub timestamp: DateTime<Utc>,
    pub shape: DatasetShape,
    pub excluded: Vec<Exclusion>,
    /// Complete pairs each correlation was computed from, keyed by candidate name.
    pub paired_values: BTreeMap<String, PairedValues>,
}

impl AnalysisRun {
    pub fn result(&self, candidate: &str) -> Option<&CorrelationResult> {
        self.results.iter().find(|result| result.candidate == candidate)
    }

    pub fn paired_values(&self, candidate: &str) -> Option<&PairedValues> {
        self.paired_values.get(candidate)
    }

    /// Results whose coefficient is undefined.
    pub fn indeterminate(&self) -> impl Iterator<Item = &CorrelationResult> {
        self.results.iter().filter(|result| result.is_indeterminate())
    }

    /// The defined result with the largest |r|.
    pub fn strongest(&self) -> Option<&CorrelationResult> {
        // Results are already sorted, so the first defined one wins.
        self.results.iter().find(|result| !result.is_indeterminate())
    }

    pub fn strength_counts(&self) -> StrengthCounts {
        let mut counts = StrengthCounts::default();
        for result in &self.results {
            counts.record(result.strength);
        }
        counts
    }
}
