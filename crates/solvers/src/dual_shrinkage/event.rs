use ndarray::ArrayView1;

/// Event emitted by the dual-shrinkage solver after each iteration.
///
/// `objective` is `trace[iter]`, which scores the estimate the iteration
/// *started* from, while `estimate` is the estimate it produced. Event 0
/// therefore reports the objective of the zero vector.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Zero-based index of the iteration that just completed.
    pub iter: usize,

    /// The estimate after this iteration's update.
    pub estimate: ArrayView1<'a, f64>,

    /// The objective recorded by this iteration.
    pub objective: f64,

    /// The objective trace so far, `iter + 1` entries long.
    pub trace: &'a [f64],
}
