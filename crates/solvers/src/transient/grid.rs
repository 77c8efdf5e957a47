/// A fixed integration window: start time, step size, and step count.
///
/// The grid makes the time context of an integration explicit; everything a
/// derivative evaluation needs about time lives here rather than in ambient
/// scope. `dt` may be any real value: zero holds the trajectory constant and
/// a negative value integrates backward. Step counts are unsigned, so a
/// negative count is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    pub start_time: f64,
    pub dt: f64,
    pub steps: usize,
}

impl TimeGrid {
    /// Creates a grid from a start time, step size, and step count.
    #[must_use]
    pub fn new(start_time: f64, dt: f64, steps: usize) -> Self {
        Self {
            start_time,
            dt,
            steps,
        }
    }

    /// Returns the time at a given step index.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time_at(&self, step: usize) -> f64 {
        self.start_time + step as f64 * self.dt
    }

    /// Returns the time at the final step.
    #[must_use]
    pub fn end_time(&self) -> f64 {
        self.time_at(self.steps)
    }
}
