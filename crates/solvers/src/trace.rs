//! Inspection of objective traces.

/// A non-finite objective value recorded at some iteration.
///
/// Solvers do not stop when the objective overflows or becomes NaN. The trace
/// is returned as-is and callers are expected to check it with
/// [`find_degeneracy`] before trusting the estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericDegeneracy {
    /// Index of the first non-finite entry.
    pub iter: usize,

    /// The offending value (infinite or NaN).
    pub value: f64,
}

/// Returns the first non-finite entry of `trace`, if any.
#[must_use]
pub fn find_degeneracy(trace: &[f64]) -> Option<NumericDegeneracy> {
    trace
        .iter()
        .position(|v| !v.is_finite())
        .map(|iter| NumericDegeneracy {
            iter,
            value: trace[iter],
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_trace_is_clean() {
        assert_eq!(find_degeneracy(&[3.0, 2.0, 1.0]), None);
        assert_eq!(find_degeneracy(&[]), None);
    }

    #[test]
    fn reports_first_non_finite_entry() {
        let trace = [5.0, 4.0, f64::INFINITY, f64::NAN];
        let found = find_degeneracy(&trace).expect("should find overflow");

        assert_eq!(found.iter, 2);
        assert!(found.value.is_infinite());
    }

    #[test]
    fn nan_is_degenerate() {
        let found = find_degeneracy(&[1.0, f64::NAN]).expect("should find NaN");
        assert_eq!(found.iter, 1);
        assert!(found.value.is_nan());
    }
}
