//! Analysis run aggregation.
//!
//! An [`Analyzer`] classifies the dataset's columns once, correlates the
//! target with every eligible candidate in candidate order, classifies each
//! coefficient, and publishes the sorted [`AnalysisRun`] only when every
//! candidate is done.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, info_span};

use corr_model::{
    AnalysisOptions, AnalysisRun, Column, CorrelationResult, Dataset, EmptyResultError,
    InvalidInputError, Result,
};

use crate::classifier::{Classification, IdentifierPolicy, classify};
use crate::correlation::correlate;
use crate::progress::{NoProgress, ProgressEvent, ProgressObserver};
use crate::relationship;

/// Runs correlation analyses under a fixed identifier policy.
pub struct Analyzer {
    policy: Box<dyn IdentifierPolicy>,
}

impl Analyzer {
    /// Analyzer using the identifier rules from `options`.
    pub fn new(options: &AnalysisOptions) -> Self {
        Self {
            policy: Box::new(options.identifier_rules.clone()),
        }
    }

    /// Analyzer with a caller-supplied identifier policy.
    pub fn with_identifier_policy(policy: impl IdentifierPolicy + 'static) -> Self {
        Self {
            policy: Box::new(policy),
        }
    }

    pub fn classify(
        &self,
        dataset: &Dataset,
        target: &str,
    ) -> std::result::Result<Classification, InvalidInputError> {
        classify(dataset, target, self.policy.as_ref())
    }

    /// Runs the analysis without progress reporting.
    pub fn run(&self, dataset: &Dataset, target: &str) -> Result<AnalysisRun> {
        self.run_with_progress(dataset, target, &mut NoProgress)
    }

    /// Runs the analysis, notifying `observer` after each candidate.
    pub fn run_with_progress(
        &self,
        dataset: &Dataset,
        target: &str,
        observer: &mut dyn ProgressObserver,
    ) -> Result<AnalysisRun> {
        let span = info_span!("analysis", target_column = %target);
        let _guard = span.enter();
        let start = Instant::now();

        let Classification {
            eligible, excluded, ..
        } = self.classify(dataset, target)?;
        for exclusion in &excluded {
            debug!(column = %exclusion.name, reason = %exclusion.reason, "column excluded");
        }
        if eligible.is_empty() {
            return Err(EmptyResultError {
                target: target.to_string(),
                excluded,
            }
            .into());
        }

        let target_values = dataset
            .column(target)
            .and_then(Column::as_numeric)
            .ok_or_else(|| InvalidInputError::TargetNotNumeric {
                name: target.to_string(),
            })?;

        let total = eligible.len();
        let mut results = Vec::with_capacity(total);
        let mut paired_values = BTreeMap::new();
        for (idx, descriptor) in eligible.iter().enumerate() {
            let candidate_values = candidate_values(dataset, &descriptor.name)?;
            let correlation = correlate(target_values, candidate_values)?;
            let relationship = relationship::classify(correlation.r);
            debug!(
                candidate = %descriptor.name,
                r = ?correlation.r,
                n = correlation.n,
                strength = %relationship.strength,
                "candidate correlated"
            );
            results.push(CorrelationResult {
                target: target.to_string(),
                candidate: descriptor.name.clone(),
                r: correlation.r,
                r_squared: correlation.r_squared,
                n: correlation.n,
                strength: relationship.strength,
                direction: relationship.direction,
            });
            paired_values.insert(descriptor.name.clone(), correlation.pairs);
            observer.on_candidate_completed(ProgressEvent {
                completed: idx + 1,
                total,
                candidate: &descriptor.name,
            });
        }

        sort_results(&mut results);
        let indeterminate = results.iter().filter(|r| r.is_indeterminate()).count();
        info!(
            candidates = results.len(),
            excluded = excluded.len(),
            indeterminate,
            duration_ms = start.elapsed().as_millis(),
            "analysis complete"
        );

        Ok(AnalysisRun {
            target: target.to_string(),
            results,
            timestamp: Utc::now(),
            shape: dataset.shape(),
            excluded,
            paired_values,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(&AnalysisOptions::default())
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer").finish_non_exhaustive()
    }
}

fn candidate_values<'a>(
    dataset: &'a Dataset,
    name: &str,
) -> std::result::Result<&'a [Option<f64>], InvalidInputError> {
    dataset
        .column(name)
        .and_then(Column::as_numeric)
        .ok_or_else(|| InvalidInputError::CandidateNotNumeric {
            name: name.to_string(),
        })
}

/// Sorts by descending |r|; undefined coefficients go last.
///
/// The sort is stable, so ties and undefined results keep candidate order.
pub fn sort_results(results: &mut [CorrelationResult]) {
    results.sort_by(|a, b| match (a.abs_r(), b.abs_r()) {
        (Some(left), Some(right)) => right.total_cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Runs one analysis with the given options and no progress reporting.
pub fn run_analysis(
    dataset: &Dataset,
    target: &str,
    options: &AnalysisOptions,
) -> Result<AnalysisRun> {
    Analyzer::new(options).run(dataset, target)
}
