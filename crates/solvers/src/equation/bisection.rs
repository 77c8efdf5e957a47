//! Bisection solver for scalar equation problems.
//!
//! Classic bracketed bisection: each iteration evaluates the bracket
//! midpoint and keeps the half that still spans a sign change, so the
//! bracket width halves exactly once per iteration regardless of residual
//! curvature. Convergence is linear by design; there is no secant or Newton
//! acceleration, and the solver never searches for a bracket on its own.
//!
//! Residual evaluations are treated as expensive — one may integrate a full
//! initial value problem to completion — so the solver evaluates exactly
//! once per iteration plus once per initial endpoint.

mod bracket;
mod config;
mod error;
mod solution;

pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::{Solution, Status};

use volley_core::{EquationProblem, Model, Observer};

use super::{Evaluation, evaluate};

use bracket::Bounds;

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best solution found so far.
    StopEarly,
}

/// Iteration event emitted by the bisection solver.
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,
    /// Current search bracket, before this iteration shrinks it.
    pub bracket: [f64; 2],
    /// Evaluation at the current midpoint.
    pub eval: &'a Evaluation<I, O, 1>,
}

/// Finds a root of the equation using the bisection method.
///
/// The caller supplies a bracket `[x1, x2]` whose residuals must differ in
/// sign, or one of which must already satisfy the tolerance. Both endpoints
/// are evaluated once up front; a bracket without a sign change is rejected
/// immediately after those two evaluations, with no search for a better one.
///
/// Each iteration evaluates the midpoint, emits an [`Event`], converges if
/// the residual magnitude is within `config.residual_tol`, and otherwise
/// replaces the endpoint whose residual sign matches the midpoint's. An
/// exactly zero midpoint residual always satisfies the tolerance check,
/// which runs before any sign comparison, so it converges immediately.
///
/// Exhausting `config.max_iters` is not an error: the solver returns the
/// best-by-residual evaluation seen, marked [`Status::MaxIters`] so the
/// caller can distinguish it from a converged result.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, a residual is
/// non-finite, or the model or problem fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    config.validate()?;

    let bounds = Bounds::new(bracket)?;
    let [left, right] = bounds.as_array();

    let left_eval = evaluate(model, problem, [left])?;
    let left_residual = finite_residual(&left_eval)?;
    if left_residual.abs() <= config.residual_tol {
        return Ok(Solution::from_eval(left_eval, Status::Converged, 0));
    }

    let right_eval = evaluate(model, problem, [right])?;
    let right_residual = finite_residual(&right_eval)?;
    if right_residual.abs() <= config.residual_tol {
        return Ok(Solution::from_eval(right_eval, Status::Converged, 0));
    }

    let mut bracket = Bracket::new(bounds, Sign::of(left_residual), Sign::of(right_residual))?;

    let (mut best, mut best_residual) = if left_residual.abs() <= right_residual.abs() {
        (left_eval, left_residual)
    } else {
        (right_eval, right_residual)
    };

    for iter in 1..=config.max_iters {
        let mid = bracket.midpoint();
        let mid_eval = evaluate(model, problem, [mid])?;
        let mid_residual = finite_residual(&mid_eval)?;

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            eval: &mid_eval,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            let eval = if mid_residual.abs() < best_residual.abs() {
                mid_eval
            } else {
                best
            };
            return Ok(Solution::from_eval(eval, Status::StoppedByObserver, iter));
        }

        if mid_residual.abs() <= config.residual_tol {
            return Ok(Solution::from_eval(mid_eval, Status::Converged, iter));
        }

        if mid_residual.abs() < best_residual.abs() {
            best = mid_eval;
            best_residual = mid_residual;
        }

        bracket.shrink(mid, Sign::of(mid_residual));
    }

    Ok(Solution::from_eval(best, Status::MaxIters, config.max_iters))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, a residual is
/// non-finite, or the model or problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Extracts the scalar residual, rejecting non-finite values.
fn finite_residual<I, O>(eval: &Evaluation<I, O, 1>) -> Result<f64, Error> {
    let residual = eval.residuals[0];
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(Error::NonFiniteResidual {
            x: eval.x[0],
            residual,
        })
    }
}
