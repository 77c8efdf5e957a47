//! Shooting-method support for two-point boundary value problems.
//!
//! A boundary value problem fixes conditions at two different times; the
//! shooting method recovers the missing initial condition by root finding on
//! the boundary residual. The pieces compose from the rest of the toolkit:
//!
//! 1. [`IvpModel`] wraps an [`OdeProblem`] and a [`TimeGrid`] as a [`Model`]
//!    whose output is the final integrated state.
//! 2. An [`EquationProblem`] maps the unknown scalar to a full initial state
//!    and measures the boundary mismatch at the far end.
//! 3. [`bisection::solve`](crate::equation::bisection::solve) drives that
//!    residual to zero across a caller-supplied bracket.
//!
//! The root finder never sees the integrator — only residual values — so any
//! other IVP solver can stand in for [`IvpModel`].
//!
//! [`EquationProblem`]: volley_core::EquationProblem
//! [`Model`]: volley_core::Model
//! [`OdeProblem`]: volley_core::OdeProblem

use volley_core::{Model, OdeProblem};

use crate::transient::{TimeGrid, euler};

/// Adapts an integrated initial value problem into a [`Model`].
///
/// Calling the model integrates `problem` across `grid`, starting from the
/// input state, and returns the final state. Each call is self-contained: it
/// integrates its own trajectory and drops it after extracting the final
/// state, so concurrent callers never share state.
#[derive(Debug, Clone)]
pub struct IvpModel<P> {
    pub problem: P,
    pub grid: TimeGrid,
}

impl<P> IvpModel<P> {
    /// Creates a model that integrates `problem` across `grid`.
    pub fn new(problem: P, grid: TimeGrid) -> Self {
        Self { problem, grid }
    }
}

impl<P> Model for IvpModel<P>
where
    P: OdeProblem,
    P::State: Clone,
{
    type Input = P::State;
    type Output = P::State;
    type Error = euler::Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let solution = euler::solve_unobserved(&self.problem, input.clone(), &self.grid)?;
        Ok(solution.final_sample().state.clone())
    }
}
