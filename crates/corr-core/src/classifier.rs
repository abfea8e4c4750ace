//! Candidate column selection.
//!
//! Rules are applied in order and the first match wins:
//!
//! 1. the target itself (`is target`)
//! 2. non-numeric columns (`non-numeric`)
//! 3. fewer than two distinct non-missing values (`constant`)
//! 4. identifier-like columns per an [`IdentifierPolicy`] (`identifier-like`)

use corr_model::{
    Column, ColumnDescriptor, ColumnKind, Dataset, Exclusion, ExclusionReason,
    IdentifierNameRules, InvalidInputError, MIN_DATASET_ROWS,
};

/// Decides whether a column holds row identifiers rather than measurements.
///
/// Implementations are heuristics; false positives and negatives are expected.
pub trait IdentifierPolicy: Send + Sync {
    fn is_identifier(&self, column: &Column) -> bool;
}

impl IdentifierPolicy for IdentifierNameRules {
    fn is_identifier(&self, column: &Column) -> bool {
        self.matches(column.name())
    }
}

/// Output of the column classifier, every list in dataset column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub eligible: Vec<ColumnDescriptor>,
    pub excluded: Vec<Exclusion>,
    /// Descriptors for every column, excluded ones flagged.
    pub descriptors: Vec<ColumnDescriptor>,
}

impl Classification {
    pub fn eligible_names(&self) -> Vec<&str> {
        self.eligible.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn exclusion_for(&self, name: &str) -> Option<ExclusionReason> {
        self.excluded
            .iter()
            .find(|exclusion| exclusion.name == name)
            .map(|exclusion| exclusion.reason)
    }
}

/// Checks that `target` can anchor an analysis of `dataset`.
pub fn validate_target<'a>(
    dataset: &'a Dataset,
    target: &str,
) -> Result<&'a Column, InvalidInputError> {
    let column = dataset
        .column(target)
        .ok_or_else(|| InvalidInputError::TargetNotFound {
            name: target.to_string(),
        })?;
    if dataset.row_count() < MIN_DATASET_ROWS {
        return Err(InvalidInputError::TooFewRows {
            rows: dataset.row_count(),
            min: MIN_DATASET_ROWS,
        });
    }
    if column.kind() != ColumnKind::Numeric {
        return Err(InvalidInputError::TargetNotNumeric {
            name: target.to_string(),
        });
    }
    if column.distinct_count() < 2 {
        return Err(InvalidInputError::TargetConstant {
            name: target.to_string(),
        });
    }
    Ok(column)
}

/// Splits the dataset's columns into eligible candidates and exclusions.
pub fn classify(
    dataset: &Dataset,
    target: &str,
    policy: &dyn IdentifierPolicy,
) -> Result<Classification, InvalidInputError> {
    validate_target(dataset, target)?;

    let mut eligible = Vec::new();
    let mut excluded = Vec::new();
    let mut descriptors = Vec::with_capacity(dataset.column_count());
    for column in dataset.columns() {
        let mut descriptor = ColumnDescriptor::describe(column);
        let reason = if column.name() == target {
            Some(ExclusionReason::IsTarget)
        } else if descriptor.kind != ColumnKind::Numeric {
            Some(ExclusionReason::NonNumeric)
        } else if descriptor.is_constant {
            Some(ExclusionReason::Constant)
        } else if policy.is_identifier(column) {
            Some(ExclusionReason::IdentifierLike)
        } else {
            None
        };
        match reason {
            Some(reason) => {
                descriptor.is_excluded = true;
                excluded.push(Exclusion::new(descriptor.name.clone(), reason));
            }
            None => eligible.push(descriptor.clone()),
        }
        descriptors.push(descriptor);
    }
    Ok(Classification {
        eligible,
        excluded,
        descriptors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Column::numeric("ObservationID", (1..=5).map(|v| Some(f64::from(v)))),
            Column::numeric("LoadTime_s", [1.0, 2.0, 3.0, 4.0, 5.0].map(Some)),
            Column::numeric("Score", [90.0, 80.0, 70.0, 60.0, 50.0].map(Some)),
            Column::numeric("ConstantFeature", [Some(10.0); 5]),
            Column::text("Group", [Some("a"), Some("b"), Some("a"), Some("b"), Some("a")]),
            Column::numeric("RandomNoise", [3.0, 1.0, 4.0, 1.0, 5.0].map(Some)),
        ])
        .unwrap()
    }

    #[test]
    fn classify_applies_rules_in_order() {
        let rules = IdentifierNameRules::default();
        let classification = classify(&dataset(), "Score", &rules).unwrap();

        assert_eq!(classification.eligible_names(), vec!["LoadTime_s", "RandomNoise"]);
        assert_eq!(classification.descriptors.len(), 6);
        assert!(classification.descriptors[0].is_excluded);
        assert!(!classification.descriptors[1].is_excluded);
        assert_eq!(
            classification.excluded,
            vec![
                Exclusion::new("ObservationID", ExclusionReason::IdentifierLike),
                Exclusion::new("Score", ExclusionReason::IsTarget),
                Exclusion::new("ConstantFeature", ExclusionReason::Constant),
                Exclusion::new("Group", ExclusionReason::NonNumeric),
            ]
        );
    }

    #[test]
    fn first_matching_rule_wins() {
        // A constant column with an identifier-like name is reported as constant.
        let data = Dataset::new(vec![
            Column::numeric("Y", [Some(1.0), Some(2.0)]),
            Column::numeric("BatchID", [Some(7.0), Some(7.0)]),
        ])
        .unwrap();
        let classification = classify(&data, "Y", &IdentifierNameRules::default()).unwrap();
        assert_eq!(
            classification.exclusion_for("BatchID"),
            Some(ExclusionReason::Constant)
        );
    }

    #[test]
    fn disabled_identifier_rules_keep_id_columns() {
        let classification =
            classify(&dataset(), "Score", &IdentifierNameRules::disabled()).unwrap();
        assert!(classification.eligible_names().contains(&"ObservationID"));
    }

    #[test]
    fn target_must_exist() {
        let err = classify(&dataset(), "Missing", &IdentifierNameRules::default()).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::TargetNotFound {
                name: "Missing".to_string()
            }
        );
    }

    #[test]
    fn target_must_be_numeric_and_vary() {
        let rules = IdentifierNameRules::default();
        assert!(matches!(
            classify(&dataset(), "Group", &rules),
            Err(InvalidInputError::TargetNotNumeric { .. })
        ));
        assert!(matches!(
            classify(&dataset(), "ConstantFeature", &rules),
            Err(InvalidInputError::TargetConstant { .. })
        ));
    }

    #[test]
    fn single_row_dataset_is_rejected() {
        let data = Dataset::new(vec![
            Column::numeric("Y", [Some(1.0)]),
            Column::numeric("X", [Some(2.0)]),
        ])
        .unwrap();
        let err = classify(&data, "Y", &IdentifierNameRules::default()).unwrap_err();
        assert_eq!(err, InvalidInputError::TooFewRows { rows: 1, min: 2 });
    }
}
