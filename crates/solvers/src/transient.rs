//! Solvers for transient problems — integrating ODE problems through time.
//!
//! An [`OdeProblem`] supplies a state derivative; solvers in this module
//! advance that state across a fixed [`TimeGrid`] and record the resulting
//! trajectory.
//!
//! # Solvers
//!
//! - [`euler`] — first-order explicit (forward) Euler
//!
//! [`OdeProblem`]: volley_core::OdeProblem

mod grid;

pub use grid::TimeGrid;

pub mod euler;
