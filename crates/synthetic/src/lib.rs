//! Seeded synthetic problem instances for sparse non-negative recovery.
//!
//! [`generate`] builds a random dense operator, a sparse non-negative ground
//! truth, and a lightly perturbed observation. The same [`Config`] (seed
//! included) always produces the same instance.
//!
//! ```rust
//! use recovery_core::{LinearOperator, ProblemInstance};
//! use recovery_synthetic::{Config, generate};
//!
//! let problem = generate(&Config { n: 20, m: 15, sparsity: 3, ..Config::default() }).unwrap();
//!
//! assert_eq!(problem.operator().domain_dim(), 20);
//! assert_eq!(problem.observation().len(), 15);
//! assert_eq!(problem.ground_truth().iter().filter(|&&v| v > 0.0).count(), 3);
//! ```

use ndarray::{Array1, Array2, ArrayView1};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::index};
use recovery_core::{DenseOperator, ProblemInstance};
use thiserror::Error;

/// Parameters of a synthetic instance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Signal length, the operator's domain dimension.
    pub n: usize,

    /// Number of measurements, the operator's range dimension.
    pub m: usize,

    /// Number of non-zero entries in the ground truth.
    pub sparsity: usize,

    /// Half-open range `[lo, hi)` the non-zero entries are drawn from.
    pub amplitude: (f64, f64),

    /// Scale of the uniform noise added to the observation.
    pub noise: f64,

    /// Seed for the random number generator.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n: 100,
            m: 100,
            sparsity: 5,
            amplitude: (5.0, 10.0),
            noise: 1e-5,
            seed: 0,
        }
    }
}

impl Config {
    /// Checks that the parameters describe a valid instance.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n == 0 || self.m == 0 {
            return Err(ConfigError::EmptyDimension {
                n: self.n,
                m: self.m,
            });
        }
        if self.sparsity > self.n {
            return Err(ConfigError::Sparsity {
                sparsity: self.sparsity,
                n: self.n,
            });
        }
        let (lo, hi) = self.amplitude;
        if !(lo.is_finite() && hi.is_finite() && lo >= 0.0 && lo < hi) {
            return Err(ConfigError::Amplitude { lo, hi });
        }
        if !self.noise.is_finite() || self.noise < 0.0 {
            return Err(ConfigError::Noise(self.noise));
        }
        Ok(())
    }
}

/// Invalid synthetic problem parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("dimensions must be positive, got n = {n}, m = {m}")]
    EmptyDimension { n: usize, m: usize },

    #[error("sparsity {sparsity} exceeds signal length {n}")]
    Sparsity { sparsity: usize, n: usize },

    #[error("amplitude range [{lo}, {hi}) must be finite, non-negative and non-empty")]
    Amplitude { lo: f64, hi: f64 },

    #[error("noise scale must be finite and non-negative, got {0}")]
    Noise(f64),
}

/// A generated problem instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthetic {
    operator: DenseOperator,
    observation: Array1<f64>,
    ground_truth: Array1<f64>,
}

impl Synthetic {
    /// Indices of the non-zero ground-truth entries, ascending.
    #[must_use]
    pub fn support(&self) -> Vec<usize> {
        self.ground_truth
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| (v != 0.0).then_some(i))
            .collect()
    }

    /// Consumes the instance, returning operator, observation and ground truth.
    #[must_use]
    pub fn into_parts(self) -> (DenseOperator, Array1<f64>, Array1<f64>) {
        (self.operator, self.observation, self.ground_truth)
    }
}

impl ProblemInstance for Synthetic {
    type Operator = DenseOperator;

    fn operator(&self) -> &DenseOperator {
        &self.operator
    }

    fn observation(&self) -> ArrayView1<'_, f64> {
        self.observation.view()
    }

    fn ground_truth(&self) -> ArrayView1<'_, f64> {
        self.ground_truth.view()
    }
}

/// Generates a seeded instance.
///
/// - `A` has entries drawn from `U[0, 1)`, scaled by `1 / sqrt(m)`.
/// - `x` is zero except at `sparsity` distinct random indices, which are
///   drawn from `U[lo, hi)`.
/// - `y = A x + noise * u` with `u` drawn from `U[0, 1)^m`.
///
/// # Errors
///
/// Returns an error if `config` is invalid.
pub fn generate(config: &Config) -> Result<Synthetic, ConfigError> {
    config.validate()?;

    let Config {
        n,
        m,
        sparsity,
        amplitude: (lo, hi),
        noise,
        seed,
    } = *config;

    let mut rng = StdRng::seed_from_u64(seed);

    let scale = (m as f64).sqrt().recip();
    let matrix = Array2::from_shape_simple_fn((m, n), || rng.gen_range(0.0..1.0) * scale);

    let mut ground_truth = Array1::zeros(n);
    for i in index::sample(&mut rng, n, sparsity) {
        ground_truth[i] = rng.gen_range(lo..hi);
    }

    let perturbation = Array1::from_shape_simple_fn(m, || noise * rng.gen_range(0.0..1.0));
    let observation = matrix.dot(&ground_truth) + perturbation;

    Ok(Synthetic {
        operator: DenseOperator::new(matrix),
        observation,
        ground_truth,
    })
}
