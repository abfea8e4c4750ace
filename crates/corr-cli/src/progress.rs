//! Terminal progress bar for analysis runs.

use indicatif::{ProgressBar, ProgressStyle};

use corr_core::{ProgressEvent, ProgressObserver};

const TEMPLATE: &str = "{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}";

/// Drives an `indicatif` bar from analysis progress events.
pub struct ProgressBarObserver {
    bar: ProgressBar,
}

impl ProgressBarObserver {
    /// A visible bar drawn to stderr.
    pub fn new() -> Self {
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        let bar = ProgressBar::new(0);
        bar.set_style(style);
        Self { bar }
    }

    /// A bar that never draws, for non-interactive output.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Removes the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressBarObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for ProgressBarObserver {
    fn on_candidate_completed(&mut self, event: ProgressEvent<'_>) {
        let total = event.total as u64;
        if self.bar.length() != Some(total) {
            self.bar.set_length(total);
        }
        self.bar.set_position(event.completed as u64);
        self.bar.set_message(event.candidate.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_bar_tracks_events() {
        let mut observer = ProgressBarObserver::hidden();
        for (completed, candidate) in [(1, "A"), (2, "B"), (3, "C")] {
            observer.on_candidate_completed(ProgressEvent {
                completed,
                total: 3,
                candidate,
            });
        }
        assert_eq!(observer.length(), Some(3));
        assert_eq!(observer.position(), 3);
        observer.finish();
    }
}
