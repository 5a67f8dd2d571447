use ndarray::ArrayView1;

use crate::LinearOperator;

/// A recovery problem: an operator, an observation, and the signal that
/// produced it.
///
/// Solvers only need the operator and the observation. The ground truth is
/// carried along so an evaluator can score the estimate afterwards; instances
/// built from measured data can return whatever reference they have.
pub trait ProblemInstance {
    type Operator: LinearOperator;

    /// The measurement operator `A`.
    fn operator(&self) -> &Self::Operator;

    /// The observation vector `y`, of length `operator().range_dim()`.
    fn observation(&self) -> ArrayView1<'_, f64>;

    /// The reference signal `x`, of length `operator().domain_dim()`.
    fn ground_truth(&self) -> ArrayView1<'_, f64>;
}
