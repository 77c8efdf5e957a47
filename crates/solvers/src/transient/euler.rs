//! Forward Euler solver for ODE problems.
//!
//! A minimal fixed-step integrator for transient problems. It advances a
//! state across a [`TimeGrid`] using explicit Euler:
//!
//! ```text
//! state_{n+1} = state_n + derivative_n * dt
//! ```
//!
//! The derivative is always evaluated at the left endpoint of each step, so
//! the scheme is first-order accurate in `dt`. No averaging, correction, or
//! step-size adaptation is applied.
//!
//! # Example
//!
//! ```ignore
//! use volley_solvers::transient::{TimeGrid, euler};
//!
//! let grid = TimeGrid::new(0.0, 0.01, 1_000);
//! let solution = euler::solve_unobserved(&problem, initial, &grid)?;
//!
//! for sample in &solution.history {
//!     println!("t={}: {:?}", sample.time, sample.state);
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Sample, Solution, Status};

use volley_core::{Observer, OdeProblem, StepIntegrable};

use super::TimeGrid;

/// Integrates an ODE problem across a time grid using forward Euler.
///
/// # Algorithm
///
/// 1. Record the initial state at `grid.start_time`.
/// 2. For each step `i` in `0..grid.steps`:
///    - Compute the derivative at the current state and time `t0 + i*dt`.
///    - Step the state forward: `state + derivative * dt`.
///    - Record the new sample at `t0 + (i+1)*dt`.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 3. Return the solution with the full trajectory.
///
/// A complete run records `grid.steps + 1` samples, the initial state first.
/// Steps are strictly ordered: each state depends on the previous one.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial sample and after each
/// integration step, and may return [`Action::StopEarly`] to terminate the
/// integration with the history recorded so far.
///
/// # Errors
///
/// Returns [`Error::Problem`] if the problem fails to produce a derivative,
/// and [`Error::Shape`] if a derivative's shape disagrees with the state's.
pub fn solve<P, Obs>(
    problem: &P,
    initial: P::State,
    grid: &TimeGrid,
    mut observer: Obs,
) -> Result<Solution<P::State>, Error>
where
    P: OdeProblem,
    P::State: Clone,
    Obs: Observer<Event<P::State>, Action>,
{
    let initial_sample = Sample {
        time: grid.start_time,
        state: initial,
    };

    let mut history = Vec::with_capacity(grid.steps + 1);
    history.push(initial_sample.clone());

    // Emit initial event.
    let event = Event {
        step: 0,
        sample: initial_sample.clone(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    let mut current = initial_sample;

    for step in 1..=grid.steps {
        // Derivative at the left endpoint of the step.
        let derivative = problem
            .derivative(&current.state, current.time)
            .map_err(Error::problem)?;

        let next_state = current.state.step(&derivative, grid.dt)?;
        let next_sample = Sample {
            time: grid.time_at(step),
            state: next_state,
        };

        history.push(next_sample.clone());

        let event = Event {
            step,
            sample: next_sample.clone(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }

        current = next_sample;
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps: grid.steps,
    })
}

/// Integrates an ODE problem across a time grid without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the problem fails to produce a derivative or a
/// derivative's shape disagrees with the state's.
pub fn solve_unobserved<P>(
    problem: &P,
    initial: P::State,
    grid: &TimeGrid,
) -> Result<Solution<P::State>, Error>
where
    P: OdeProblem,
    P::State: Clone,
{
    solve(problem, initial, grid, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    use volley_core::{ShapeError, StateVector};

    // --- Test fixtures ---

    /// Scalar state growing at a fixed rate.
    struct ConstantRate {
        rate: f64,
    }

    impl OdeProblem for ConstantRate {
        type State = f64;
        type Error = Infallible;

        fn derivative(&self, _state: &f64, _time: f64) -> Result<f64, Infallible> {
            Ok(self.rate)
        }
    }

    /// Tensor state with zero dynamics of whatever shape it is given.
    struct ZeroDynamics;

    impl OdeProblem for ZeroDynamics {
        type State = StateVector;
        type Error = Infallible;

        fn derivative(&self, state: &StateVector, _time: f64) -> Result<StateVector, Infallible> {
            Ok(StateVector::zeros(state.shape()))
        }
    }

    /// Harmonic oscillator with the derivative written against first-axis
    /// rows, so the same code handles `[2]` states and `[2, n]` batches.
    struct Oscillator {
        stiffness: f64,
        mass: f64,
    }

    impl OdeProblem for Oscillator {
        type State = StateVector;
        type Error = ShapeError;

        fn derivative(&self, state: &StateVector, _time: f64) -> Result<StateVector, ShapeError> {
            let position = state.row(0)?;
            let velocity = state.row(1)?;
            let acceleration = position.scale(-self.stiffness / self.mass);
            StateVector::from_rows(&[velocity, acceleration])
        }
    }

    /// Problem whose derivative never matches the state's shape.
    struct WrongShape;

    impl OdeProblem for WrongShape {
        type State = StateVector;
        type Error = Infallible;

        fn derivative(&self, _state: &StateVector, _time: f64) -> Result<StateVector, Infallible> {
            Ok(StateVector::from_vec(vec![1.0, 2.0, 3.0]))
        }
    }

    fn energy(sample: &Sample<StateVector>) -> f64 {
        sample.state.as_slice().iter().map(|v| v * v).sum()
    }

    // --- Tests ---

    #[test]
    fn constant_rate_grows_linearly() {
        let problem = ConstantRate { rate: 2.0 };
        let grid = TimeGrid::new(1.0, 0.1, 10);

        let solution = solve_unobserved(&problem, 5.0, &grid).expect("should solve");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 10);
        assert_eq!(solution.history.len(), 11); // initial + 10 steps

        for (i, sample) in solution.history.iter().enumerate() {
            let elapsed = 0.1 * i as f64;
            assert_relative_eq!(sample.time, 1.0 + elapsed);
            assert_relative_eq!(sample.state, 5.0 + 2.0 * elapsed, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_derivative_holds_state_constant() {
        let initial = StateVector::from_shape_vec(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0])
            .expect("valid shape");
        let grid = TimeGrid::new(0.0, 0.5, 20);

        let solution =
            solve_unobserved(&ZeroDynamics, initial.clone(), &grid).expect("should solve");

        assert_eq!(solution.history.len(), 21);
        for sample in &solution.history {
            assert_eq!(sample.state, initial);
        }
    }

    #[test]
    fn zero_steps_returns_initial() {
        let problem = ConstantRate { rate: 1.0 };
        let grid = TimeGrid::new(0.0, 0.1, 0);

        let solution = solve_unobserved(&problem, 5.0, &grid).expect("should return initial");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.history.len(), 1);
        assert_relative_eq!(solution.final_sample().state, 5.0);
    }

    #[test]
    fn zero_dt_is_a_constant_trajectory() {
        let problem = ConstantRate { rate: 3.0 };
        let grid = TimeGrid::new(2.0, 0.0, 5);

        let solution = solve_unobserved(&problem, 1.0, &grid).expect("should solve");

        assert_eq!(solution.history.len(), 6);
        for sample in &solution.history {
            assert_relative_eq!(sample.time, 2.0);
            assert_relative_eq!(sample.state, 1.0);
        }
    }

    #[test]
    fn negative_dt_integrates_backward() {
        let problem = ConstantRate { rate: 2.0 };
        let grid = TimeGrid::new(0.0, -0.1, 10);

        let solution = solve_unobserved(&problem, 5.0, &grid).expect("should solve");

        let last = solution.final_sample();
        assert_relative_eq!(last.time, -1.0);
        assert_relative_eq!(last.state, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn shape_mismatch_surfaces_as_error() {
        let grid = TimeGrid::new(0.0, 0.1, 3);

        let result = solve_unobserved(&WrongShape, StateVector::from_vec(vec![0.0, 0.0]), &grid);

        assert!(matches!(
            result,
            Err(Error::Shape(ShapeError::Mismatch { .. }))
        ));
    }

    #[test]
    fn observer_can_stop_early() {
        let problem = ConstantRate { rate: 1.0 };
        let grid = TimeGrid::new(0.0, 0.1, 100);

        let observer = |event: &Event<f64>| {
            if event.step >= 5 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution = solve(&problem, 0.0, &grid, observer).expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.history.len(), 6); // initial + 5 steps
    }

    #[test]
    fn step_numbers_start_at_zero() {
        let problem = ConstantRate { rate: 1.0 };
        let grid = TimeGrid::new(0.0, 0.25, 4);

        let mut step_values = Vec::new();
        solve(&problem, 0.0, &grid, |event: &Event<f64>| {
            step_values.push(event.step);
            None
        })
        .expect("should solve");

        assert_eq!(step_values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn oscillator_energy_drift_is_first_order() {
        let problem = Oscillator {
            stiffness: 1.0,
            mass: 1.0,
        };
        let initial = StateVector::from_vec(vec![1.0, 0.0]);

        let coarse = TimeGrid::new(0.0, 0.01, 100);
        let fine = TimeGrid::new(0.0, 0.005, 200);

        let coarse_run =
            solve_unobserved(&problem, initial.clone(), &coarse).expect("coarse run");
        let fine_run = solve_unobserved(&problem, initial, &fine).expect("fine run");

        let initial_energy = energy(&coarse_run.history[0]);

        // Explicit Euler inflates x^2 + v^2 by (1 + dt^2) per step, so the
        // relative drift over a fixed span is roughly elapsed_time * dt.
        let coarse_drift = energy(coarse_run.final_sample()) / initial_energy - 1.0;
        assert!(coarse_drift > 0.0);
        assert!(coarse_drift < 2.0 * 1.0 * 0.01);

        // Halving dt roughly halves the drift.
        let fine_drift = energy(fine_run.final_sample()) / initial_energy - 1.0;
        assert!(fine_drift < 0.75 * coarse_drift);

        // Drift grows roughly linearly along the trajectory.
        let mid_drift = energy(&coarse_run.history[50]) / initial_energy - 1.0;
        assert!(mid_drift > 0.25 * coarse_drift);
        assert!(mid_drift < 0.75 * coarse_drift);
    }

    #[test]
    fn batched_states_integrate_columns_independently() {
        let problem = Oscillator {
            stiffness: 1.0,
            mass: 1.0,
        };
        let grid = TimeGrid::new(0.0, 0.1, 25);

        // Rows are [positions, velocities]; columns are independent
        // oscillators with different initial conditions.
        let singles = [
            StateVector::from_vec(vec![1.0, 0.0]),
            StateVector::from_vec(vec![0.0, 2.0]),
        ];
        let batched = StateVector::from_shape_vec(vec![2, 2], vec![1.0, 0.0, 0.0, 2.0])
            .expect("valid shape");

        let batched_run = solve_unobserved(&problem, batched, &grid).expect("batched run");

        for (column, single) in singles.into_iter().enumerate() {
            let single_run = solve_unobserved(&problem, single, &grid).expect("single run");

            for (batched_sample, single_sample) in
                batched_run.history.iter().zip(&single_run.history)
            {
                let position = batched_sample.state.row(0).expect("position row");
                let velocity = batched_sample.state.row(1).expect("velocity row");

                assert_relative_eq!(
                    position.as_slice()[column],
                    single_sample.state.as_slice()[0]
                );
                assert_relative_eq!(
                    velocity.as_slice()[column],
                    single_sample.state.as_slice()[1]
                );
            }
        }
    }
}
