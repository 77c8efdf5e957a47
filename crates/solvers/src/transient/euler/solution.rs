/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// One point of a trajectory: the state at an instant in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<S> {
    pub time: f64,
    pub state: S,
}

/// The result of a fixed-step integration.
///
/// The trajectory is complete once returned; it is owned by the caller and
/// the solver keeps no reference to it.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// Trajectory samples from each step, including the initial state.
    pub history: Vec<Sample<S>>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl<S> Solution<S> {
    /// Returns the last recorded sample.
    #[must_use]
    pub fn final_sample(&self) -> &Sample<S> {
        self.history
            .last()
            .expect("trajectory always holds the initial sample")
    }
}
