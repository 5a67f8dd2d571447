use recovery_core::DimensionMismatch;
use thiserror::Error;

/// Errors returned by the solvers and evaluators in this crate.
///
/// Every error is detected before any numerical work is done, or at the
/// operator call that produced a vector of the wrong shape. A non-finite
/// objective is not an error; see [`NumericDegeneracy`](crate::trace::NumericDegeneracy).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

/// The reason an argument was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidArgument {
    #[error("{what} has length {actual}, expected {expected}")]
    Dimension {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("tau must be finite and non-negative (got {0})")]
    Tau(f64),

    #[error("dt must be finite and positive (got {0})")]
    StepSize(f64),

    #[error("operator norm must be finite and positive (got {0})")]
    OperatorNorm(f64),

    #[error("tolerance must be finite and non-negative (got {0})")]
    Tolerance(f64),

    #[error("termination must allow a finite number of iterations, at least one")]
    IterationBudget,

    #[error("epsilon must be finite and positive (got {0})")]
    Epsilon(f64),

    #[error("{what} must not be empty")]
    Empty { what: &'static str },
}

impl Error {
    /// Wraps an operator-level [`DimensionMismatch`], naming the offending vector.
    pub(crate) fn dimension(what: &'static str, mismatch: DimensionMismatch) -> Self {
        Self::InvalidArgument(InvalidArgument::Dimension {
            what,
            expected: mismatch.expected,
            actual: mismatch.actual,
        })
    }

    /// Returns the underlying [`InvalidArgument`] reason.
    #[must_use]
    pub fn reason(&self) -> InvalidArgument {
        match self {
            Self::InvalidArgument(reason) => *reason,
        }
    }
}
