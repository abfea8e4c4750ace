//! Progress notifications for long-running analyses.

/// "Candidate `completed` of `total` done."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent<'a> {
    /// 1-based count of finished candidates.
    pub completed: usize,
    pub total: usize,
    pub candidate: &'a str,
}

impl ProgressEvent<'_> {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    pub fn is_last(&self) -> bool {
        self.completed == self.total
    }
}

/// Receives progress events while a run is in flight.
///
/// This is a side channel: nothing an observer does affects the run's result.
pub trait ProgressObserver {
    fn on_candidate_completed(&mut self, event: ProgressEvent<'_>);
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_candidate_completed(&mut self, _event: ProgressEvent<'_>) {}
}

impl<F> ProgressObserver for F
where
    F: FnMut(ProgressEvent<'_>),
{
    fn on_candidate_completed(&mut self, event: ProgressEvent<'_>) {
        self(event);
    }
}
