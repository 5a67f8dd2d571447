use recovery_core::Observer;
use tracing::warn;

use crate::traits::{CanStopEarly, HasIteration, HasObjective};

/// Stops the solver as soon as an event reports a non-finite objective.
///
/// Solvers keep iterating through overflow or NaN by default; attach this
/// observer to cut a degenerate run short instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StopOnDegeneracy;

impl<E, A> Observer<E, A> for StopOnDegeneracy
where
    E: HasIteration + HasObjective,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let objective = event.objective();
        if objective.is_finite() {
            return None;
        }
        warn!(
            iter = event.iteration(),
            objective, "stopping on non-finite objective"
        );
        Some(A::stop_early())
    }
}
