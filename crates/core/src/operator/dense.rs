use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use super::{DimensionMismatch, LinearOperator};

/// A linear operator backed by a dense `m x n` matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseOperator {
    matrix: Array2<f64>,
}

impl DenseOperator {
    /// Wraps a dense matrix whose rows index observations and whose columns
    /// index unknowns.
    #[must_use]
    pub fn new(matrix: Array2<f64>) -> Self {
        Self { matrix }
    }

    /// Returns the underlying matrix.
    #[must_use]
    pub fn matrix(&self) -> ArrayView2<'_, f64> {
        self.matrix.view()
    }

    /// Consumes the operator and returns the underlying matrix.
    #[must_use]
    pub fn into_matrix(self) -> Array2<f64> {
        self.matrix
    }
}

impl From<Array2<f64>> for DenseOperator {
    fn from(matrix: Array2<f64>) -> Self {
        Self::new(matrix)
    }
}

impl LinearOperator for DenseOperator {
    fn domain_dim(&self) -> usize {
        self.matrix.ncols()
    }

    fn range_dim(&self) -> usize {
        self.matrix.nrows()
    }

    fn apply(&self, x: ArrayView1<'_, f64>) -> Result<Array1<f64>, DimensionMismatch> {
        DimensionMismatch::check(self.domain_dim(), x.len())?;
        Ok(self.matrix.dot(&x))
    }

    fn apply_adjoint(&self, y: ArrayView1<'_, f64>) -> Result<Array1<f64>, DimensionMismatch> {
        DimensionMismatch::check(self.range_dim(), y.len())?;
        Ok(self.matrix.t().dot(&y))
    }

    fn operator_norm(&self) -> f64 {
        self.matrix.iter().map(|a| a * a).sum::<f64>().sqrt()
    }
}
