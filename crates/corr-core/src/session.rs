//! Caller-owned analysis session.
//!
//! Bundles the loaded dataset, the options, the selected target and the most
//! recent completed run. Front ends keep one of these per open dataset
//! instead of relying on process-wide state.

use tracing::debug;

use corr_model::{AnalysisOptions, AnalysisRun, Dataset, InvalidInputError, Result};

use crate::analysis::Analyzer;
use crate::classifier::Classification;
use crate::progress::{NoProgress, ProgressObserver};

#[derive(Debug)]
pub struct AnalysisSession {
    dataset: Dataset,
    options: AnalysisOptions,
    analyzer: Analyzer,
    target: Option<String>,
    last_run: Option<AnalysisRun>,
}

impl AnalysisSession {
    pub fn new(dataset: Dataset, options: AnalysisOptions) -> Self {
        let analyzer = Analyzer::new(&options);
        Self {
            dataset,
            options,
            analyzer,
            target: None,
            last_run: None,
        }
    }

    /// Replaces the analyzer, e.g. to install a custom identifier policy.
    #[must_use]
    pub fn with_analyzer(mut self, analyzer: Analyzer) -> Self {
        self.analyzer = analyzer;
        self.last_run = None;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Columns a user may pick as the target (numeric, in dataset order).
    pub fn target_choices(&self) -> Vec<&str> {
        self.dataset.numeric_column_names()
    }

    /// The preferred target when it is numeric, else the first numeric column.
    pub fn default_target(&self) -> Option<&str> {
        let choices = self.target_choices();
        self.options
            .preferred_target
            .as_deref()
            .and_then(|preferred| choices.iter().copied().find(|name| *name == preferred))
            .or_else(|| choices.first().copied())
    }

    /// The explicitly selected target, falling back to [`Self::default_target`].
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref().or_else(|| self.default_target())
    }

    /// Selects a target by name. Changing the target discards the cached run.
    pub fn select_target(&mut self, name: &str) -> std::result::Result<(), InvalidInputError> {
        if self.dataset.column(name).is_none() {
            return Err(InvalidInputError::TargetNotFound {
                name: name.to_string(),
            });
        }
        if self.target.as_deref() != Some(name) {
            debug!(target_column = %name, "target selected");
            self.target = Some(name.to_string());
            self.last_run = None;
        }
        Ok(())
    }

    /// Classifies columns against the current target.
    pub fn classify(&self) -> std::result::Result<Classification, InvalidInputError> {
        let target = self.target().ok_or(InvalidInputError::NoTargetSelected)?;
        self.analyzer.classify(&self.dataset, target)
    }

    pub fn run(&mut self) -> Result<&AnalysisRun> {
        self.run_with_progress(&mut NoProgress)
    }

    /// Runs an analysis for the current target and caches the completed run.
    ///
    /// On error the previously cached run is discarded.
    pub fn run_with_progress(
        &mut self,
        observer: &mut dyn ProgressObserver,
    ) -> Result<&AnalysisRun> {
        self.last_run = None;
        let target = self
            .target()
            .ok_or(InvalidInputError::NoTargetSelected)?
            .to_string();
        let run = self
            .analyzer
            .run_with_progress(&self.dataset, &target, observer)?;
        Ok(self.last_run.insert(run))
    }

    pub fn last_run(&self) -> Option<&AnalysisRun> {
        self.last_run.as_ref()
    }

    /// Hands the cached run over to the caller, typically for report building.
    pub fn take_run(&mut self) -> Option<AnalysisRun> {
        self.last_run.take()
    }
}
