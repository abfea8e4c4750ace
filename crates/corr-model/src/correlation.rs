//! Correlation results and their classification labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Strength category of a relationship.
///
/// `Indeterminate` marks an undefined coefficient. Among the defined
/// categories the derived ordering is `Weak < Moderate < Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Indeterminate,
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Indeterminate => "indeterminate",
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
        }
    }

    pub fn is_indeterminate(self) -> bool {
        self == Self::Indeterminate
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sign of a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Positive,
    Negative,
    None,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strength and direction of one relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    pub strength: Strength,
    pub direction: Direction,
}

impl Relationship {
    pub const INDETERMINATE: Self = Self {
        strength: Strength::Indeterminate,
        direction: Direction::None,
    };
}

/// Rows where both target and candidate are present, in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairedValues {
    pub target: Vec<f64>,
    pub candidate: Vec<f64>,
}

impl PairedValues {
    /// Number of complete pairs.
    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// `(candidate, target)` points, candidate on the x axis.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.candidate
            .iter()
            .zip(&self.target)
            .map(|(x, y)| [*x, *y])
            .collect()
    }
}

/// Correlation between the run's target and one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub target: String,
    pub candidate: String,
    /// Pearson's r; `None` when undefined.
    pub r: Option<f64>,
    pub r_squared: Option<f64>,
    /// Number of pairwise-complete observations.
    pub n: usize,
    pub strength: Strength,
    pub direction: Direction,
}

impl CorrelationResult {
    pub fn relationship(&self) -> Relationship {
        Relationship {
            strength: self.strength,
            direction: self.direction,
        }
    }

    pub fn is_indeterminate(&self) -> bool {
        self.r.is_none()
    }

    /// |r|, or `None` when undefined.
    pub fn abs_r(&self) -> Option<f64> {
        self.r.map(f64::abs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_orders_weak_moderate_strong() {
        assert!(Strength::Weak < Strength::Moderate);
        assert!(Strength::Moderate < Strength::Strong);
    }

    #[test]
    fn points_put_candidate_on_x_axis() {
        let pairs = PairedValues {
            target: vec![90.0, 80.0],
            candidate: vec![1.0, 2.0],
        };
        assert_eq!(pairs.points(), vec![[1.0, 90.0], [2.0, 80.0]]);
        assert_eq!(pairs.len(), 2);
    }
}
