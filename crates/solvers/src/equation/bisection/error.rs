use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

use super::{BracketError, ConfigError};

/// Errors that can occur during bisection solving.
///
/// All of these indicate a caller mistake or a failing model; none is
/// retried internally. Running out of iterations is not an error — see
/// [`Status::MaxIters`](super::Status::MaxIters).
#[derive(Debug, Error)]
pub enum Error {
    /// The initial bracket cannot contain a root.
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    /// The configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    /// The problem failed to build input or compute residuals.
    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    /// A residual evaluated to a non-finite value.
    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
