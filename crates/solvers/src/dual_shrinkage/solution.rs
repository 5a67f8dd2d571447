use ndarray::Array1;

use crate::trace::{NumericDegeneracy, find_degeneracy};

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Ran the full iteration budget.
    Complete,

    /// The objective trace settled within the configured tolerances.
    Converged,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a dual-shrinkage solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// The non-negative estimate after the final iteration.
    pub estimate: Array1<f64>,

    /// Objective recorded at each iteration, one entry per iteration run.
    pub trace: Vec<f64>,

    /// Number of iterations completed.
    pub iters: usize,
}

impl Solution {
    /// Returns the first non-finite objective in the trace, if any.
    ///
    /// A degenerate solution is still returned by the solver; the estimate
    /// should not be trusted when this is `Some`.
    #[must_use]
    pub fn degeneracy(&self) -> Option<NumericDegeneracy> {
        find_degeneracy(&self.trace)
    }

    /// Splits the solution into `(estimate, trace)`.
    #[must_use]
    pub fn into_parts(self) -> (Array1<f64>, Vec<f64>) {
        (self.estimate, self.trace)
    }
}
