//! Per-run column descriptors and exclusion records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::{Column, ColumnKind};

/// Derived facts about a column, recomputed for every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub kind: ColumnKind,
    /// Distinct non-missing values.
    pub distinct_count: usize,
    /// Fewer than two distinct non-missing values.
    pub is_constant: bool,
    pub is_excluded: bool,
}

impl ColumnDescriptor {
    pub fn describe(column: &Column) -> Self {
        let distinct_count = column.distinct_count();
        Self {
            name: column.name().to_string(),
            kind: column.kind(),
            distinct_count,
            is_constant: distinct_count < 2,
            is_excluded: false,
        }
    }
}

/// Why a column was left out of the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    IsTarget,
    NonNumeric,
    Constant,
    IdentifierLike,
}

impl ExclusionReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IsTarget => "is target",
            Self::NonNumeric => "non-numeric",
            Self::Constant => "constant",
            Self::IdentifierLike => "identifier-like",
        }
    }
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column excluded from analysis and the first rule that matched it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    pub name: String,
    pub reason: ExclusionReason,
}

impl Exclusion {
    pub fn new(name: impl Into<String>, reason: ExclusionReason) -> Self {
        Self {
            name: name.into(),
            reason,
        }
    }
}
