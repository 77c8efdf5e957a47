use thiserror::Error;

/// Errors from validating a [`Config`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The residual tolerance is negative or non-finite.
    #[error("residual_tol must be finite and non-negative")]
    InvalidResidualTol,
}

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Iteration budget. Exhausting it is a reportable outcome, not an error.
    pub max_iters: usize,

    /// Convergence threshold on the residual magnitude.
    pub residual_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            residual_tol: 1e-12,
        }
    }
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the residual tolerance is negative or
    /// non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err(ConfigError::InvalidResidualTol);
        }
        Ok(())
    }
}
