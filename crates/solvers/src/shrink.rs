//! Proximal building blocks: soft-thresholding and non-negative projection.

use ndarray::{Array1, ArrayView1};

/// Soft-thresholds every entry of `v` by `t`.
///
/// Each entry becomes `sign(v_i) * max(|v_i| - t, 0)`, the proximal operator
/// of `t * ||·||_1`. With `t = 0` this is the identity. NaN entries stay NaN.
///
/// `t` is expected to be non-negative; callers validate it.
#[must_use]
pub fn soft_threshold(v: ArrayView1<'_, f64>, t: f64) -> Array1<f64> {
    v.mapv(|vi| shrink_scalar(vi, t))
}

/// In-place variant of [`soft_threshold`].
pub fn soft_threshold_inplace(v: &mut Array1<f64>, t: f64) {
    v.mapv_inplace(|vi| shrink_scalar(vi, t));
}

/// Sets every entry `<= 0` to exactly `0.0`.
///
/// NaN entries compare false and are left as they are.
pub fn project_non_negative(v: &mut Array1<f64>) {
    v.mapv_inplace(|vi| if vi <= 0.0 { 0.0 } else { vi });
}

#[inline]
fn shrink_scalar(v: f64, t: f64) -> f64 {
    if v.abs() <= t {
        0.0
    } else if v > 0.0 {
        v - t
    } else if v < 0.0 {
        v + t
    } else {
        // NaN
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn shrinks_toward_zero() {
        let v = array![3.0, -3.0, 0.5, -0.5, 1.0];
        let r = soft_threshold(v.view(), 1.0);
        assert_eq!(r, array![2.0, -2.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_threshold_is_identity() {
        let v = array![1.5, -2.25, 0.0, 1e-300];
        assert_eq!(soft_threshold(v.view(), 0.0), v);
    }

    #[test]
    fn inplace_matches_allocating() {
        let v = array![0.3, -7.0, 2.2, -0.1];
        let expected = soft_threshold(v.view(), 0.25);

        let mut w = v.clone();
        soft_threshold_inplace(&mut w, 0.25);

        for (a, b) in w.iter().zip(expected.iter()) {
            assert_relative_eq!(*a, *b);
        }
    }

    #[test]
    fn nan_propagates_through_shrink() {
        let r = soft_threshold(array![f64::NAN, 2.0].view(), 1.0);
        assert!(r[0].is_nan());
        assert_relative_eq!(r[1], 1.0);
    }

    #[test]
    fn projection_clips_non_positive_entries() {
        let mut v = array![-1.0, 0.0, -0.0, 2.5, f64::NAN];
        project_non_negative(&mut v);

        assert_eq!(v[0], 0.0);
        assert_eq!(v[1], 0.0);
        assert!(v[2].is_sign_positive());
        assert_eq!(v[3], 2.5);
        assert!(v[4].is_nan());
    }
}
