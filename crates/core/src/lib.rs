//! Core traits and types for sparse non-negative recovery.
//!
//! This crate defines the abstractions that solvers, observers, and problem
//! generators share:
//!
//! - [`LinearOperator`] — a measurement map with its adjoint
//! - [`DenseOperator`] — a [`LinearOperator`] backed by a dense matrix
//! - [`ProblemInstance`] — an operator, an observation, and a reference signal
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;
mod operator;
mod problem;

pub use observer::Observer;
pub use operator::{DenseOperator, DimensionMismatch, LinearOperator};
pub use problem::ProblemInstance;
