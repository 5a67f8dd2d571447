use ndarray::ArrayView1;
use recovery_core::{DimensionMismatch, LinearOperator};

use crate::{Error, InvalidArgument};

/// Scale `c` in the derived step size `dt = c / operator_norm`.
pub const DEFAULT_STEP_SCALE: f64 = 1e-2;

/// Hyperparameters for the dual-shrinkage solver.
///
/// Both values are fixed for the whole run. The shrinkage threshold actually
/// applied each iteration is [`Config::threshold`], `tau * dt`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Weight of the L1 penalty.
    pub tau: f64,

    /// Step size.
    pub dt: f64,
}

impl Config {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if `tau` is negative or `dt` is not positive, or if
    /// either is non-finite.
    pub fn new(tau: f64, dt: f64) -> Result<Self, Error> {
        let config = Self { tau, dt };
        config.validate()?;
        Ok(config)
    }

    /// Derives `tau` and `dt` from the problem data.
    ///
    /// `tau` is the mean absolute value of `Aᵀy`, and `dt` is
    /// [`DEFAULT_STEP_SCALE`] divided by the operator norm.
    ///
    /// # Errors
    ///
    /// Returns an error if the observation length does not match the
    /// operator, if the operator has an empty domain, or if the operator norm
    /// is zero or non-finite.
    pub fn from_data<Op>(operator: &Op, observation: ArrayView1<'_, f64>) -> Result<Self, Error>
    where
        Op: LinearOperator + ?Sized,
    {
        Self::from_data_with_scale(operator, observation, DEFAULT_STEP_SCALE)
    }

    /// Like [`Config::from_data`], with `dt = step_scale / operator_norm`.
    ///
    /// # Errors
    ///
    /// See [`Config::from_data`]. Also fails if `step_scale` yields a
    /// non-positive or non-finite `dt`.
    pub fn from_data_with_scale<Op>(
        operator: &Op,
        observation: ArrayView1<'_, f64>,
        step_scale: f64,
    ) -> Result<Self, Error>
    where
        Op: LinearOperator + ?Sized,
    {
        DimensionMismatch::check(operator.range_dim(), observation.len())
            .map_err(|e| Error::dimension("observation", e))?;

        let correlation = operator
            .apply_adjoint(observation)
            .map_err(|e| Error::dimension("observation", e))?;
        let tau = correlation
            .mapv(f64::abs)
            .mean()
            .ok_or(InvalidArgument::Empty {
                what: "operator domain",
            })?;

        let norm = operator.operator_norm();
        if !norm.is_finite() || norm <= 0.0 {
            return Err(InvalidArgument::OperatorNorm(norm).into());
        }

        Self::new(tau, step_scale / norm)
    }

    /// Validates that `tau` is finite and non-negative and `dt` is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        if !self.tau.is_finite() || self.tau < 0.0 {
            return Err(InvalidArgument::Tau(self.tau));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(InvalidArgument::StepSize(self.dt));
        }
        Ok(())
    }

    /// The soft-threshold applied each iteration, `tau * dt`.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.tau * self.dt
    }
}
