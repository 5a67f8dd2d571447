use crate::InvalidArgument;

use super::Status;

/// Decides when the solver stops iterating.
///
/// The solver consults [`Termination::budget`] once, before the first
/// iteration, and calls [`Termination::check`] with the objective trace after
/// every iteration. A strategy used on its own must have a finite budget;
/// compose an unbounded strategy with a bounded one using
/// [`Termination::or`].
pub trait Termination {
    /// The largest number of iterations this strategy allows, or `None` if
    /// it places no bound.
    fn budget(&self) -> Option<usize>;

    /// Returns a status to stop with, or `None` to keep iterating.
    fn check(&mut self, trace: &[f64]) -> Option<Status>;

    /// Stops as soon as either strategy stops.
    fn or<T>(self, other: T) -> Either<Self, T>
    where
        Self: Sized,
        T: Termination,
    {
        Either(self, other)
    }
}

/// Runs exactly `n` iterations, with no convergence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIterations(usize);

impl FixedIterations {
    #[must_use]
    pub fn new(iterations: usize) -> Self {
        Self(iterations)
    }

    #[must_use]
    pub fn iterations(&self) -> usize {
        self.0
    }
}

impl Termination for FixedIterations {
    fn budget(&self) -> Option<usize> {
        Some(self.0)
    }

    fn check(&mut self, trace: &[f64]) -> Option<Status> {
        (trace.len() >= self.0).then_some(Status::Complete)
    }
}

/// Stops once consecutive objective values agree within tolerance.
///
/// Converged when `|J[k] - J[k-1]| <= abs_tol + rel_tol * |J[k-1]|` for two
/// finite values. This strategy is unbounded on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceConvergence {
    abs_tol: f64,
    rel_tol: f64,
}

impl TraceConvergence {
    /// Creates a convergence check with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is negative or non-finite.
    pub fn new(abs_tol: f64, rel_tol: f64) -> Result<Self, InvalidArgument> {
        if !abs_tol.is_finite() || abs_tol < 0.0 {
            return Err(InvalidArgument::Tolerance(abs_tol));
        }
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(InvalidArgument::Tolerance(rel_tol));
        }
        Ok(Self { abs_tol, rel_tol })
    }

    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }
}

impl Termination for TraceConvergence {
    fn budget(&self) -> Option<usize> {
        None
    }

    fn check(&mut self, trace: &[f64]) -> Option<Status> {
        let [.., prev, last] = trace else {
            return None;
        };
        if !prev.is_finite() || !last.is_finite() {
            return None;
        }
        ((last - prev).abs() <= self.abs_tol + self.rel_tol * prev.abs())
            .then_some(Status::Converged)
    }
}

/// Two strategies combined with [`Termination::or`].
///
/// The budget is the smaller of the two finite budgets. On each check the
/// first strategy is asked before the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Either<A, B>(pub A, pub B);

impl<A, B> Termination for Either<A, B>
where
    A: Termination,
    B: Termination,
{
    fn budget(&self) -> Option<usize> {
        match (self.0.budget(), self.1.budget()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(n), None) | (None, Some(n)) => Some(n),
            (None, None) => None,
        }
    }

    fn check(&mut self, trace: &[f64]) -> Option<Status> {
        match self.0.check(trace) {
            Some(status) => Some(status),
            None => self.1.check(trace),
        }
    }
}
