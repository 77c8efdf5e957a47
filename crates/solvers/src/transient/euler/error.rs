use std::error::Error as StdError;

use volley_core::ShapeError;

/// Errors that can occur during Euler integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The problem failed to produce a derivative.
    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    /// A derivative's shape disagrees with the state's shape.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl Error {
    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }
}
