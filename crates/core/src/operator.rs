mod dense;

pub use dense::DenseOperator;

use ndarray::{Array1, ArrayView1};
use thiserror::Error;

/// A vector whose length does not match the dimension an operator expects.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("expected a vector of length {expected}, got {actual}")]
pub struct DimensionMismatch {
    pub expected: usize,
    pub actual: usize,
}

impl DimensionMismatch {
    /// Returns `Ok(())` if `actual == expected`.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionMismatch`] carrying both lengths otherwise.
    pub fn check(expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self { expected, actual })
        }
    }
}

/// A linear measurement map from an `n`-dimensional unknown space to an
/// `m`-dimensional observation space.
///
/// Implementors provide the forward map and its adjoint (transpose). Both
/// must reject inputs of the wrong length with [`DimensionMismatch`] rather
/// than panicking inside the arithmetic.
///
/// Operators are read-only during a solve, so a single operator can back any
/// number of concurrent solves.
pub trait LinearOperator {
    /// Dimension `n` of the unknown space.
    fn domain_dim(&self) -> usize;

    /// Dimension `m` of the observation space.
    fn range_dim(&self) -> usize;

    /// Applies the forward map to a length-`n` vector.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] if `x.len() != self.domain_dim()`.
    fn apply(&self, x: ArrayView1<'_, f64>) -> Result<Array1<f64>, DimensionMismatch>;

    /// Applies the adjoint map to a length-`m` vector.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] if `y.len() != self.range_dim()`.
    fn apply_adjoint(&self, y: ArrayView1<'_, f64>) -> Result<Array1<f64>, DimensionMismatch>;

    /// A scale for the operator, used by callers to derive a step size.
    ///
    /// Any upper bound on the spectral norm works. The dense implementation
    /// returns the Frobenius norm.
    fn operator_norm(&self) -> f64;
}

impl<T: LinearOperator + ?Sized> LinearOperator for &T {
    fn domain_dim(&self) -> usize {
        (**self).domain_dim()
    }

    fn range_dim(&self) -> usize {
        (**self).range_dim()
    }

    fn apply(&self, x: ArrayView1<'_, f64>) -> Result<Array1<f64>, DimensionMismatch> {
        (**self).apply(x)
    }

    fn apply_adjoint(&self, y: ArrayView1<'_, f64>) -> Result<Array1<f64>, DimensionMismatch> {
        (**self).apply_adjoint(y)
    }

    fn operator_norm(&self) -> f64 {
        (**self).operator_norm()
    }
}
