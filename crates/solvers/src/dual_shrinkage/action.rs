/// Control actions supported by the dual-shrinkage solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current iteration and return the estimate so far.
    StopEarly,
}
