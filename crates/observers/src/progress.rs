use recovery_core::Observer;
use tracing::info;

use crate::traits::{HasIteration, HasObjective};

/// Logs the iteration and objective every `every` iterations.
///
/// Logging goes through `tracing` at `info` level, so output depends on the
/// subscriber the application installs. Never returns an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    every: usize,
}

impl Progress {
    /// Logs on iterations `0, every, 2 * every, ...`. An interval of zero is
    /// treated as one.
    #[must_use]
    pub fn every(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }

    /// Whether iteration `iter` would be logged.
    #[must_use]
    pub fn is_due(&self, iter: usize) -> bool {
        iter % self.every == 0
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::every(1000)
    }
}

impl<E, A> Observer<E, A> for Progress
where
    E: HasIteration + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let iter = event.iteration();
        if self.is_due(iter) {
            info!(iter, objective = event.objective(), "solver progress");
        }
        None
    }
}
