use crate::{DerivativeOf, StepIntegrable};

/// Defines an ODE (ordinary differential equation) problem to be solved.
///
/// An ODE problem supplies the time derivative of a state. The derivative
/// must be a pure function of the state and time alone, and must preserve
/// the state's shape: solvers advance any state implementing
/// [`StepIntegrable`] and surface a shape error when a derivative disagrees.
/// Fixed quantities the derivative needs (masses, stiffnesses, field
/// strengths) belong in the implementing struct's fields.
pub trait OdeProblem {
    type State: StepIntegrable;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the derivative of the state at the given time.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(
        &self,
        state: &Self::State,
        time: f64,
    ) -> Result<DerivativeOf<Self::State>, Self::Error>;
}
