//! Core traits and types for the Volley numerical toolkit.
//!
//! This crate defines the shared abstractions that solvers and problem
//! definitions build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`OdeProblem`], [`EquationProblem`] — problem traits that supply state
//!   derivatives and boundary residuals to the solvers
//! - [`StateVector`], [`StepIntegrable`] — shape-polymorphic dynamical state
//!   with the elementwise operations explicit integration requires

mod model;
mod observer;
mod problems;
mod state;

pub use observer::Observer;
pub use problems::{EquationProblem, OdeProblem};
pub use state::{DerivativeOf, ShapeError, StateVector, StepIntegrable};
pub use {model::Model, model::Snapshot};
