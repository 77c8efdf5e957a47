//! Numerical solvers for the Volley toolkit.
//!
//! Two solver families, one per module:
//!
//! - [`transient`] — fixed-step explicit integration of ODE problems across
//!   a [`TimeGrid`](transient::TimeGrid)
//! - [`equation`] — root finding for equation problems, currently bracketed
//!   [`bisection`](equation::bisection)
//!
//! The [`shooting`] module composes the two: it adapts an integrated initial
//! value problem into a [`Model`](volley_core::Model), so a two-point
//! boundary value problem becomes a root-finding problem over its unknown
//! initial condition.

pub mod equation;
pub mod shooting;
pub mod transient;
