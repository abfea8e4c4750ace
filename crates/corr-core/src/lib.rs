//! Correlation analysis engine.
//!
//! The pipeline runs leaves first:
//!
//! - [`classifier`]: picks eligible candidate columns for a target
//! - [`correlation`]: Pearson's r over pairwise-complete observations
//! - [`relationship`]: strength and direction labels for a coefficient
//! - [`analysis`]: orchestrates the above into a sorted [`AnalysisRun`]
//! - [`session`]: caller-owned state for interactive front ends
//!
//! Everything here is synchronous and free of shared mutable state, so
//! independent runs over the same `&Dataset` may execute in parallel.
//!
//! [`AnalysisRun`]: corr_model::AnalysisRun

pub mod analysis;
pub mod classifier;
pub mod correlation;
pub mod progress;
pub mod relationship;
pub mod session;

pub use analysis::{Analyzer, run_analysis, sort_results};
pub use classifier::{Classification, IdentifierPolicy, classify, validate_target};
pub use correlation::{Correlation, complete_pairs, correlate, pearson};
pub use progress::{NoProgress, ProgressEvent, ProgressObserver};
pub use relationship::{MODERATE_THRESHOLD, STRONG_THRESHOLD, direction_of, strength_of};
pub use session::AnalysisSession;
