//! Solvers and evaluators for sparse non-negative recovery.
//!
//! # Modules
//!
//! - [`dual_shrinkage`] — the dual-accumulation proximal solver for
//!   `min ||y - A x||² + tau ||x||₁` subject to `x >= 0`
//! - [`shrink`] — soft-thresholding and non-negative projection
//! - [`support`] — scoring an estimate by support recovery
//! - [`trace`] — detecting numerical degeneracy in an objective trace
//!
//! # Example
//!
//! ```rust
//! use ndarray::array;
//! use recovery_core::DenseOperator;
//! use recovery_solvers::dual_shrinkage::{self, Config};
//!
//! let op = DenseOperator::new(array![[1.0, 0.0], [0.0, 2.0], [1.0, 1.0]]);
//! let y = array![1.0, 2.0, 3.0];
//!
//! let config = Config::from_data(&op, y.view()).unwrap();
//! let solution = dual_shrinkage::solve_unobserved(&op, y.view(), &config, 100).unwrap();
//!
//! assert_eq!(solution.trace.len(), 100);
//! assert!(solution.estimate.iter().all(|&v| v >= 0.0));
//! ```

mod error;

pub mod dual_shrinkage;
pub mod shrink;
pub mod support;
pub mod trace;

pub use error::{Error, InvalidArgument};
