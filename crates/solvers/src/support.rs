//! Support recovery scoring.
//!
//! An estimate is scored by how well its support (the set of active entries)
//! matches the support of the ground truth. Both vectors are binarized and the
//! number of disagreeing indices is reported, an L0 distance between the two
//! indicator vectors.
//!
//! The ground truth is binarized with a fixed tolerance. The estimate is
//! binarized with an adaptive threshold, `mean + 0.5 * std`, since its scale
//! depends on the regularization.

use ndarray::{Array1, ArrayView1};

use crate::{Error, InvalidArgument};

/// Tolerance for "non-zero" ground-truth entries.
pub const DEFAULT_EPSILON: f64 = f64::EPSILON;

/// Full result of [`evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub struct SupportReport {
    /// Number of indices where the two supports disagree.
    pub mismatches: usize,

    /// Adaptive threshold the estimate was binarized with.
    pub threshold: f64,

    /// Ground-truth support.
    pub truth_active: Array1<bool>,

    /// Estimate support.
    pub estimate_active: Array1<bool>,
}

/// Counts the indices where the supports of `ground_truth` and `estimate`
/// disagree.
///
/// A ground-truth entry is active if its magnitude exceeds `epsilon`. An
/// estimate entry is active if it exceeds [`adaptive_threshold`].
///
/// Some operators leave a fixed artifact in the estimate; remove it with
/// [`zero_trailing_artifact`] (or similar) before calling this.
///
/// # Errors
///
/// Returns an error if the vectors differ in length or are empty, or if
/// `epsilon` is not finite and positive.
pub fn support_mismatch(
    ground_truth: ArrayView1<'_, f64>,
    estimate: ArrayView1<'_, f64>,
    epsilon: f64,
) -> Result<usize, Error> {
    evaluate(ground_truth, estimate, epsilon).map(|report| report.mismatches)
}

/// Like [`support_mismatch`], also returning the threshold and both supports.
///
/// # Errors
///
/// See [`support_mismatch`].
pub fn evaluate(
    ground_truth: ArrayView1<'_, f64>,
    estimate: ArrayView1<'_, f64>,
    epsilon: f64,
) -> Result<SupportReport, Error> {
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(InvalidArgument::Epsilon(epsilon).into());
    }
    if estimate.len() != ground_truth.len() {
        return Err(InvalidArgument::Dimension {
            what: "estimate",
            expected: ground_truth.len(),
            actual: estimate.len(),
        }
        .into());
    }
    if estimate.is_empty() {
        return Err(InvalidArgument::Empty { what: "estimate" }.into());
    }

    let truth_active = truth_support(ground_truth, epsilon);
    let threshold =
        adaptive_threshold(estimate).ok_or(InvalidArgument::Empty { what: "estimate" })?;
    let estimate_active = above(estimate, threshold);

    let mismatches = truth_active
        .iter()
        .zip(estimate_active.iter())
        .filter(|(t, e)| t != e)
        .count();

    Ok(SupportReport {
        mismatches,
        threshold,
        truth_active,
        estimate_active,
    })
}

/// Marks entries whose magnitude exceeds `epsilon`.
#[must_use]
pub fn truth_support(ground_truth: ArrayView1<'_, f64>, epsilon: f64) -> Array1<bool> {
    ground_truth.mapv(|v| v.abs() > epsilon)
}

/// Returns `mean + 0.5 * std` of `estimate` (population standard deviation),
/// or `None` for an empty vector.
///
/// A constant estimate has zero spread, so the threshold is its mean and no
/// entry is strictly above it.
#[must_use]
pub fn adaptive_threshold(estimate: ArrayView1<'_, f64>) -> Option<f64> {
    let mean = estimate.mean()?;
    let std = estimate.std(0.0);
    Some(mean + 0.5 * std)
}

/// Marks entries strictly above [`adaptive_threshold`], or `None` for an
/// empty vector.
#[must_use]
pub fn estimate_support(estimate: ArrayView1<'_, f64>) -> Option<Array1<bool>> {
    adaptive_threshold(estimate).map(|threshold| above(estimate, threshold))
}

fn above(estimate: ArrayView1<'_, f64>, threshold: f64) -> Array1<bool> {
    estimate.mapv(|v| v > threshold)
}

/// Sets the last coordinate of `estimate` to zero.
///
/// Operators with a circular boundary leave a spurious value in the final
/// coordinate of the estimate. This is a caller-side cleanup for those
/// operators and is never applied by the solver or the evaluator.
pub fn zero_trailing_artifact(estimate: &mut Array1<f64>) {
    if let Some(last) = estimate.last_mut() {
        *last = 0.0;
    }
}
