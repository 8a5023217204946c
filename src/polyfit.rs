//! Least-squares polynomial fit of an equilibrium curve.

use crate::errors::{VleError, VleResult};
use nalgebra::{DMatrix, DVector};
use ndarray::Array1;

/// Degree of the polynomial fitted to an equilibrium curve.
pub const FIT_DEGREE: usize = 20;

/// Fit a polynomial of the given degree to the samples `(x, y)`.
///
/// Returns the `degree + 1` coefficients ordered from the highest power
/// down to the constant term. The least-squares system is solved via an
/// SVD of the Vandermonde matrix, truncating singular values below the
/// numerical rank threshold; no further regularization is applied, so a
/// high-degree fit relies on well-distributed samples.
pub fn polyfit(x: &Array1<f64>, y: &Array1<f64>, degree: usize) -> VleResult<Vec<f64>> {
    let n = x.len();
    if y.len() != n {
        return Err(VleError::Error(format!(
            "sample arrays differ in length: {} and {}",
            n,
            y.len()
        )));
    }
    if n < degree + 1 {
        return Err(VleError::InsufficientSamples { degree, samples: n });
    }

    let vandermonde =
        DMatrix::from_fn(n, degree + 1, |i, j| x[i].powi((degree - j) as i32));
    let rhs = DVector::from_fn(n, |i, _| y[i]);

    let svd = vandermonde.svd(true, true);
    let eps = f64::EPSILON * n as f64 * svd.singular_values.max();
    let coefficients = svd
        .solve(&rhs, eps)
        .map_err(|e| VleError::LeastSquares(e.into()))?;
    Ok(coefficients.iter().copied().collect())
}
