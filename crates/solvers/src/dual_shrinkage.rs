//! Dual-accumulation shrinkage for non-negative L1-penalized least squares.
//!
//! # Algorithm
//!
//! Given an operator `A`, an observation `y`, a penalty weight `tau`, and a step
//! size `dt`, the solver seeks a sparse `x >= 0` with small
//! `||y - A x||² + tau ||x||₁`. Starting from `x = 0` and a dual accumulator
//! `z = 0`, each iteration
//!
//! ```text
//! error = y - A x
//! J[k]  = ||error||² + tau ||x||₁
//! z'    = z + dt error
//! w     = x + dt Aᵀ(error + z)
//! x     = shrink(max(w, 0), tau dt)
//! z     = z'
//! ```
//!
//! The accumulator integrates residual history, so the iteration behaves like
//! a damped second-order system rather than plain iterative shrinkage. The
//! gradient step uses the accumulator from *before* the update.
//!
//! # Termination
//!
//! How long the loop runs is decided by a [`Termination`] strategy:
//! [`FixedIterations`] runs a fixed count with no early exit, and
//! [`TraceConvergence`] stops once the objective settles. Strategies compose
//! with [`Termination::or`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after every iteration. Observers see the
//! updated estimate and the trace by shared reference. Returning
//! [`Action::StopEarly`] ends the run after that iteration; returning `None`
//! has no effect on the result.
//!
//! # Numerical degeneracy
//!
//! Overflow or NaN in the objective does not stop the solver. It is logged
//! once at `warn` level and can be found afterwards with
//! [`Solution::degeneracy`].

mod action;
mod config;
mod event;
mod solution;
mod state;
mod termination;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, DEFAULT_STEP_SCALE};
pub use event::Event;
pub use solution::{Solution, Status};
pub use termination::{Either, FixedIterations, Termination, TraceConvergence};

use ndarray::ArrayView1;
use recovery_core::{DimensionMismatch, LinearOperator, Observer};
use tracing::{debug, trace, warn};

use crate::{Error, InvalidArgument};

use state::State;

/// Runs the dual-shrinkage iteration until `termination` or the observer stops it.
///
/// All arguments are validated before the first iteration; on error no
/// numerical work is done.
///
/// The observer runs inline on the calling thread between iterations, so a
/// slow observer slows the solve. Keep observers cheap, or have them copy
/// what they need and hand it off to another thread.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the observation length differs from
/// the operator's range dimension, if `config` is invalid, if `termination`
/// has no finite budget of at least one iteration, or if the operator returns
/// a vector of the wrong length during an iteration.
pub fn solve<Op, T, Obs>(
    operator: &Op,
    observation: ArrayView1<'_, f64>,
    config: &Config,
    mut termination: T,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Op: LinearOperator + ?Sized,
    T: Termination,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;
    DimensionMismatch::check(operator.range_dim(), observation.len())
        .map_err(|e| Error::dimension("observation", e))?;
    let budget = match termination.budget() {
        Some(budget) if budget >= 1 => budget,
        _ => return Err(InvalidArgument::IterationBudget.into()),
    };

    let threshold = config.threshold();
    debug!(
        n = operator.domain_dim(),
        m = operator.range_dim(),
        tau = config.tau,
        dt = config.dt,
        threshold,
        budget,
        "starting dual-shrinkage solve"
    );

    let mut state = State::new(operator.domain_dim(), operator.range_dim(), budget);
    let mut degenerate = false;

    for iter in 0..budget {
        let objective = state.step(operator, observation, config, threshold)?;
        trace!(iter, objective);

        if !degenerate && !objective.is_finite() {
            degenerate = true;
            warn!(iter, objective, "objective is no longer finite");
        }

        let event = Event {
            iter,
            estimate: state.estimate(),
            objective,
            trace: state.trace(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(state, Status::StoppedByObserver));
        }

        if let Some(status) = termination.check(state.trace()) {
            return Ok(finish(state, status));
        }
    }

    Ok(finish(state, Status::Complete))
}

/// Runs exactly `iterations` iterations without observation.
///
/// This is a convenience wrapper around [`solve`] with [`FixedIterations`]
/// and a no-op observer.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] under the same conditions as [`solve`],
/// including `iterations == 0`.
pub fn solve_unobserved<Op>(
    operator: &Op,
    observation: ArrayView1<'_, f64>,
    config: &Config,
    iterations: usize,
) -> Result<Solution, Error>
where
    Op: LinearOperator + ?Sized,
{
    solve(
        operator,
        observation,
        config,
        FixedIterations::new(iterations),
        (),
    )
}

fn finish(state: State, status: Status) -> Solution {
    let solution = state.into_solution(status);
    debug!(
        status = ?solution.status,
        iters = solution.iters,
        final_objective = ?solution.trace.last(),
        "dual-shrinkage solve finished"
    );
    solution
}
