//! Correlation analysis data model.
//!
//! Types shared by every stage of the analysis: the typed [`Dataset`], the
//! per-run [`ColumnDescriptor`]s and [`Exclusion`]s, [`CorrelationResult`]s,
//! the completed [`AnalysisRun`], configuration, and the error taxonomy.

pub mod correlation;
pub mod dataset;
pub mod descriptor;
pub mod error;
pub mod options;
pub mod run;

pub use correlation::{CorrelationResult, Direction, PairedValues, Relationship, Strength};
pub use dataset::{CellValue, Column, ColumnKind, ColumnValues, Dataset, SampleRows};
pub use descriptor::{ColumnDescriptor, Exclusion, ExclusionReason};
pub use error::{AnalysisError, EmptyResultError, InvalidInputError, Result};
pub use options::{AnalysisOptions, IdentifierNameRules, MIN_DATASET_ROWS};
pub use run::{AnalysisRun, DatasetShape, StrengthCounts};
