use ndarray::{Array1, ArrayView1};
use recovery_core::{DimensionMismatch, LinearOperator};

use crate::{
    Error,
    shrink::{project_non_negative, soft_threshold_inplace},
};

use super::{Config, Solution, Status};

/// Largest trace preallocation, so a generous budget does not reserve memory
/// it may never use.
const MAX_TRACE_RESERVE: usize = 1 << 16;

/// Iterate, dual accumulator, and objective history for one solve.
pub(super) struct State {
    estimate: Array1<f64>,
    dual: Array1<f64>,
    trace: Vec<f64>,
}

impl State {
    /// Zero estimate of length `n`, zero dual of length `m`.
    pub(super) fn new(n: usize, m: usize, budget: usize) -> Self {
        Self {
            estimate: Array1::zeros(n),
            dual: Array1::zeros(m),
            trace: Vec::with_capacity(budget.min(MAX_TRACE_RESERVE)),
        }
    }

    pub(super) fn estimate(&self) -> ArrayView1<'_, f64> {
        self.estimate.view()
    }

    pub(super) fn trace(&self) -> &[f64] {
        &self.trace
    }

    /// Runs one iteration and returns the objective it recorded.
    ///
    /// The order below is load-bearing:
    ///
    /// 1. `error = y - A x` from the current estimate
    /// 2. record `J = ||error||² + tau ||x||₁`
    /// 3. `z_next = error dt + z`
    /// 4. `w = Aᵀ(error + z) dt + x`, with the *old* `z`
    /// 5. clip `w` to the non-negative orthant
    /// 6. `x = shrink(w, tau dt)`
    /// 7. `z = z_next`
    pub(super) fn step<Op>(
        &mut self,
        operator: &Op,
        observation: ArrayView1<'_, f64>,
        config: &Config,
        threshold: f64,
    ) -> Result<f64, Error>
    where
        Op: LinearOperator + ?Sized,
    {
        let predicted = operator
            .apply(self.estimate.view())
            .map_err(|e| Error::dimension("estimate", e))?;
        DimensionMismatch::check(self.dual.len(), predicted.len())
            .map_err(|e| Error::dimension("forward image", e))?;

        let error = &observation - &predicted;

        let objective = error.dot(&error) + config.tau * self.estimate.mapv(f64::abs).sum();
        self.trace.push(objective);

        let dual_next = &error * config.dt + &self.dual;

        let mut update = operator
            .apply_adjoint((error + &self.dual).view())
            .map_err(|e| Error::dimension("dual residual", e))?;
        DimensionMismatch::check(self.estimate.len(), update.len())
            .map_err(|e| Error::dimension("adjoint image", e))?;

        update *= config.dt;
        update += &self.estimate;

        project_non_negative(&mut update);
        soft_threshold_inplace(&mut update, threshold);

        self.estimate = update;
        self.dual = dual_next;

        Ok(objective)
    }

    pub(super) fn into_solution(self, status: Status) -> Solution {
        Solution {
            status,
            iters: self.trace.len(),
            estimate: self.estimate,
            trace: self.trace,
        }
    }
}
