/// Receives per-iteration solver events and optionally steers the run.
///
/// An observer is how callers watch an iterative solve without coupling the
/// solver to a renderer, a logger, or a progress bar. It sees each event by
/// shared reference, so it cannot alter solver state.
///
/// Returning `None` lets the solver continue exactly as if no observer were
/// attached. Returning `Some(action)` requests a solver-specific action, such
/// as stopping between iterations.
///
/// Closures of the form `FnMut(&E) -> Option<A>` implement `Observer`, and `()`
/// is the no-op observer.
pub trait Observer<E, A> {
    /// Observes one event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
