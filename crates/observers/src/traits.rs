//! Capability traits for observers that work across solver event types.
//!
//! Observers written against these traits instead of a concrete event type
//! can be reused by any solver whose events and actions implement them.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events that carry an iteration index
//! - [`HasObjective`] — events that carry an objective value
//! - [`HasEstimate`] — events that carry the current estimate
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use recovery_core::Observer;
//! use recovery_observers::traits::{CanStopEarly, HasIteration, HasObjective};
//!
//! struct GoodEnough {
//!     target: f64,
//!     min_iters: usize,
//! }
//!
//! impl<E: HasIteration + HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.iteration() >= self.min_iters && event.objective() < self.target)
//!             .then(A::stop_early)
//!     }
//! }
//! ```

use ndarray::ArrayView1;
use recovery_solvers::dual_shrinkage;

/// An event that carries a zero-based iteration index.
pub trait HasIteration {
    fn iteration(&self) -> usize;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// May be non-finite if the solve has become numerically degenerate.
    fn objective(&self) -> f64;
}

/// An event that carries the solver's current estimate.
pub trait HasEstimate {
    fn estimate(&self) -> ArrayView1<'_, f64>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- dual_shrinkage::Event ---

impl HasIteration for dual_shrinkage::Event<'_> {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasObjective for dual_shrinkage::Event<'_> {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl HasEstimate for dual_shrinkage::Event<'_> {
    fn estimate(&self) -> ArrayView1<'_, f64> {
        self.estimate.view()
    }
}

// --- dual_shrinkage::Action ---

impl CanStopEarly for dual_shrinkage::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
