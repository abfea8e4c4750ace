//! Typed, rectangular in-memory table.
//!
//! Every column carries a fixed [`ColumnKind`] decided when the table is
//! built, so "is this numeric" is a match on [`ColumnValues`] rather than a
//! probe of individual cells.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;
use crate::run::DatasetShape;

/// Declared kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    NonNumeric,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::NonNumeric => "non-numeric",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cell as seen by consumers of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Missing => Ok(()),
        }
    }
}

/// Column storage, one variant per declared kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum ColumnValues {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Numeric(_) => ColumnKind::Numeric,
            Self::Text(_) => ColumnKind::NonNumeric,
        }
    }

    /// Returns the cell at `idx`, or `Missing` when out of range.
    pub fn cell(&self, idx: usize) -> CellValue {
        match self {
            Self::Numeric(values) => match values.get(idx).copied().flatten() {
                Some(value) => CellValue::Number(value),
                None => CellValue::Missing,
            },
            Self::Text(values) => match values.get(idx).and_then(Option::as_ref) {
                Some(value) => CellValue::Text(value.clone()),
                None => CellValue::Missing,
            },
        }
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    values: ColumnValues,
}

impl Column {
    /// Builds a numeric column. Non-finite values (NaN, infinities) are stored as missing.
    pub fn numeric(name: impl Into<String>, values: impl IntoIterator<Item = Option<f64>>) -> Self {
        let values = values
            .into_iter()
            .map(|value| value.filter(|v| v.is_finite()))
            .collect();
        Self {
            name: name.into(),
            values: ColumnValues::Numeric(values),
        }
    }

    /// Builds a non-numeric column. Empty or whitespace-only strings are stored as missing.
    pub fn text<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<S>>,
    ) -> Self {
        let values = values
            .into_iter()
            .map(|value| value.map(Into::into).filter(|v: &String| !v.trim().is_empty()))
            .collect();
        Self {
            name: name.into(),
            values: ColumnValues::Text(values),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ColumnKind {
        self.values.kind()
    }

    pub fn values(&self) -> &ColumnValues {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Numeric values, or `None` for non-numeric columns.
    pub fn as_numeric(&self) -> Option<&[Option<f64>]> {
        match &self.values {
            ColumnValues::Numeric(values) => Some(values),
            ColumnValues::Text(_) => None,
        }
    }

    /// Number of distinct non-missing values.
    ///
    /// Floats are compared by bit pattern after folding `-0.0` into `0.0`.
    pub fn distinct_count(&self) -> usize {
        match &self.values {
            ColumnValues::Numeric(values) => values
                .iter()
                .flatten()
                .map(|value| if *value == 0.0 { 0u64 } else { value.to_bits() })
                .collect::<BTreeSet<_>>()
                .len(),
            ColumnValues::Text(values) => values
                .iter()
                .flatten()
                .map(String::as_str)
                .collect::<BTreeSet<_>>()
                .len(),
        }
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        match &self.values {
            ColumnValues::Numeric(values) => values.iter().filter(|v| v.is_none()).count(),
            ColumnValues::Text(values) => values.iter().filter(|v| v.is_none()).count(),
        }
    }
}

/// A rectangular table of named, typed columns.
///
/// Immutable once built; analysis runs borrow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
}

impl Dataset {
    /// Builds a dataset, validating its shape.
    ///
    /// Column names must be non-empty and unique, and every column must have
    /// the same number of values.
    pub fn new(columns: Vec<Column>) -> Result<Self, InvalidInputError> {
        let rows = columns.first().map_or(0, Column::len);
        let mut seen = BTreeSet::new();
        for (index, column) in columns.iter().enumerate() {
            if column.name().trim().is_empty() {
                return Err(InvalidInputError::EmptyColumnName { index });
            }
            if !seen.insert(column.name()) {
                return Err(InvalidInputError::DuplicateColumn {
                    name: column.name().to_string(),
                });
            }
            if column.len() != rows {
                return Err(InvalidInputError::RaggedColumn {
                    column: column.name().to_string(),
                    expected: rows,
                    actual: column.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name() == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Names of numeric columns in dataset order.
    pub fn numeric_column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|column| column.kind() == ColumnKind::Numeric)
            .map(Column::name)
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn shape(&self) -> DatasetShape {
        DatasetShape {
            rows: self.rows,
            columns: self.columns.len(),
        }
    }

    /// Returns row `idx` with cells in column order.
    pub fn row(&self, idx: usize) -> Option<Vec<CellValue>> {
        if idx >= self.rows {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|column| column.values().cell(idx))
                .collect(),
        )
    }

    /// Iterates rows in dataset order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<CellValue>> + '_ {
        (0..self.rows).filter_map(move |idx| self.row(idx))
    }

    /// Header plus every row, ready to hand to a report builder.
    pub fn to_sample_rows(&self) -> SampleRows {
        SampleRows {
            headers: self.column_names().into_iter().map(str::to_string).collect(),
            rows: self.rows().collect(),
        }
    }
}

/// Header and row sequence used for the report's sample-data snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleRows {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}
