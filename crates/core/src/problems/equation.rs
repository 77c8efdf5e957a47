/// Defines a system of `N` equations to be driven to zero.
///
/// An equation problem maps solver variables `x: [f64; N]` to model input
/// and computes signed residuals from the model's input and output. Fixed
/// quantities of the problem (targets, time spans, boundary values) belong
/// in the implementing struct's fields rather than in captured scope, so a
/// problem definition is self-describing.
pub trait EquationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the model input for a candidate `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes signed residuals from the model input and output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residuals cannot be computed.
    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; N], Self::Error>;
}
