use thiserror::Error;

/// Error type for invalid inputs, missing component data, and convergence problems.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VleError {
    #[error("{0}")]
    Error(String),
    #[error("No property data for component `{0}`.")]
    UnknownComponent(String),
    #[error("Invalid operating condition: {0} = {1}.")]
    InvalidInput(&'static str, f64),
    #[error("`{0}` did not converge within the maximum number of iterations.")]
    NotConverged(String),
    #[error("Not enough samples for a polynomial fit of degree {degree}: got {samples}.")]
    InsufficientSamples { degree: usize, samples: usize },
    #[error("Least-squares solve failed: {0}.")]
    LeastSquares(String),
}

/// Convenience type for `Result<T, VleError>`.
pub type VleResult<T> = Result<T, VleError>;
