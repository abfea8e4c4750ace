//! Error taxonomy for correlation analysis.
//!
//! Two categories terminate a run: [`InvalidInputError`] (the caller handed us
//! something unusable) and [`EmptyResultError`] (the input is fine but nothing
//! is left to correlate). An undefined coefficient is not an error; it is a
//! classified outcome carried by the result itself.

use thiserror::Error;

use crate::descriptor::Exclusion;

/// Malformed or unusable input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    // === Target Selection ===
    /// Target name does not match any column.
    #[error("target column '{name}' not found in dataset")]
    TargetNotFound { name: String },

    /// Target exists but is not numeric.
    #[error("target column '{name}' is not numeric")]
    TargetNotNumeric { name: String },

    /// Target has fewer than two distinct non-missing values.
    #[error("target column '{name}' is constant")]
    TargetConstant { name: String },

    /// No target was chosen and none could be defaulted.
    #[error("no target column selected and the dataset has no numeric columns")]
    NoTargetSelected,

    // === Dataset Shape ===
    /// Not enough rows to compute any correlation.
    #[error("dataset has {rows} row(s); at least {min} are required")]
    TooFewRows { rows: usize, min: usize },

    /// A column's length differs from the others.
    #[error("column '{column}' has {actual} values but the dataset has {expected} rows")]
    RaggedColumn {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Two columns share the same name.
    #[error("duplicate column name '{name}'")]
    DuplicateColumn { name: String },

    /// A column has an empty or whitespace-only name.
    #[error("column {index} has an empty name")]
    EmptyColumnName { index: usize },

    // === Pairwise Input ===
    /// A column handed to the engine as a candidate holds no numeric values.
    #[error("candidate column '{name}' is missing or not numeric")]
    CandidateNotNumeric { name: String },

    /// Target and candidate sequences differ in length.
    #[error("value sequences differ in length: target has {target}, candidate has {candidate}")]
    LengthMismatch { target: usize, candidate: usize },
}

/// No eligible candidate columns remained after classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "no eligible candidate columns to compare against '{target}' ({} column(s) excluded)",
    excluded.len()
)]
pub struct EmptyResultError {
    pub target: String,
    pub excluded: Vec<Exclusion>,
}

/// Any failure that terminates an analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error(transparent)]
    EmptyResult(#[from] EmptyResultError),
}

impl AnalysisError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult(_))
    }
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ExclusionReason;

    #[test]
    fn test_error_display() {
        let err = InvalidInputError::TargetNotFound {
            name: "Score".to_string(),
        };
        assert_eq!(err.to_string(), "target column 'Score' not found in dataset");
    }

    #[test]
    fn test_empty_result_display_counts_exclusions() {
        let err = EmptyResultError {
            target: "Score".to_string(),
            excluded: vec![Exclusion::new("Flat", ExclusionReason::Constant)],
        };
        assert_eq!(
            err.to_string(),
            "no eligible candidate columns to compare against 'Score' (1 column(s) excluded)"
        );
    }

    #[test]
    fn test_analysis_error_categories() {
        let invalid: AnalysisError = InvalidInputError::TooFewRows { rows: 1, min: 2 }.into();
        assert!(invalid.is_invalid_input());
        assert!(!invalid.is_empty_result());
        assert_eq!(invalid.to_string(), "dataset has 1 row(s); at least 2 are required");

        let empty: AnalysisError = EmptyResultError {
            target: "Y".to_string(),
            excluded: Vec::new(),
        }
        .into();
        assert!(empty.is_empty_result());
    }
}
