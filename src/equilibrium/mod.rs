//! Equilibrium curve calculation for binary mixtures.

use crate::errors::{VleError, VleResult};
use ndarray::Array1;
use serde::Serialize;

mod raoult;
mod synthetic;
pub use raoult::RaoultModel;
pub use synthetic::SyntheticModel;

/// Number of composition samples in a full sweep.
pub const DEFAULT_POINTS: usize = 100;

/// Default temperature in Kelvin when neither temperature nor pressure is given.
pub const DEFAULT_TEMPERATURE: f64 = 300.0;

/// Level of detail in the iteration output.
#[derive(Copy, Clone, PartialOrd, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Do not print output.
    #[default]
    None,
    /// Print information about the success or failure of the iteration.
    Result,
    /// Print a detailed output for every iteration.
    Iter,
}

/// Options for the iterative bubble point solver.
///
/// If the values are [None], solver specific default values are used.
#[derive(Copy, Clone, Default)]
pub struct SolverOptions {
    /// Maximum number of iterations.
    pub max_iter: Option<usize>,
    /// Tolerance.
    pub tol: Option<f64>,
    /// Iteration output indicated by the [Verbosity] enum.
    pub verbosity: Verbosity,
}

impl SolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    pub fn tol(mut self, tol: f64) -> Self {
        self.tol = Some(tol);
        self
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn unwrap_or(self, max_iter: usize, tol: f64) -> (usize, f64, Verbosity) {
        (
            self.max_iter.unwrap_or(max_iter),
            self.tol.unwrap_or(tol),
            self.verbosity,
        )
    }
}

/// The single operating condition a sweep is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperatingCondition {
    /// Temperature in Kelvin.
    Temperature(f64),
    /// Pressure in bar.
    Pressure(f64),
}

impl OperatingCondition {
    /// Resolve raw request inputs into a single operating condition.
    ///
    /// A given temperature (Kelvin) takes precedence over a given
    /// pressure (Pascal, converted to bar here). With neither input the
    /// condition defaults to [DEFAULT_TEMPERATURE]. Non-positive values
    /// are rejected.
    pub fn resolve(temperature: Option<f64>, pressure: Option<f64>) -> VleResult<Self> {
        match (temperature, pressure) {
            (Some(t), _) if t > 0.0 => Ok(Self::Temperature(t)),
            (Some(t), _) => Err(VleError::InvalidInput("temperature", t)),
            (None, Some(p)) if p > 0.0 => Ok(Self::Pressure(p / 1e5)),
            (None, Some(p)) => Err(VleError::InvalidInput("pressure", p)),
            (None, None) => Ok(Self::Temperature(DEFAULT_TEMPERATURE)),
        }
    }

    /// The temperature in Kelvin, if this is an isothermal condition.
    pub fn temperature(&self) -> Option<f64> {
        match self {
            Self::Temperature(t) => Some(*t),
            Self::Pressure(_) => None,
        }
    }

    /// The pressure in bar, if this is an isobaric condition.
    pub fn pressure(&self) -> Option<f64> {
        match self {
            Self::Temperature(_) => None,
            Self::Pressure(p) => Some(*p),
        }
    }
}

/// Provenance of an equilibrium curve.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CurveSource {
    /// Calculated from a thermodynamic model.
    Raoult,
    /// Fabricated by the synthetic fallback model.
    Synthetic,
}

/// Paired liquid and vapor phase compositions of a binary mixture.
///
/// Both arrays hold the mole fraction of the first component, ordered
/// by increasing liquid composition and spanning [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct EquilibriumCurve {
    x: Array1<f64>,
    y: Array1<f64>,
    source: CurveSource,
}

impl EquilibriumCurve {
    /// Create a curve from paired composition arrays.
    ///
    /// The arrays must have equal length of at least two, every sample
    /// must lie in [0, 1], and the liquid compositions must be ordered.
    pub fn new(x: Array1<f64>, y: Array1<f64>, source: CurveSource) -> VleResult<Self> {
        if x.len() != y.len() {
            return Err(VleError::Error(format!(
                "composition arrays differ in length: {} and {}",
                x.len(),
                y.len()
            )));
        }
        if x.len() < 2 {
            return Err(VleError::Error(format!(
                "an equilibrium curve requires at least 2 samples, got {}",
                x.len()
            )));
        }
        let in_range = |v: &Array1<f64>| v.iter().all(|&v| (0.0..=1.0).contains(&v));
        if !in_range(&x) || !in_range(&y) {
            return Err(VleError::Error(String::from(
                "mole fractions must lie in [0, 1]",
            )));
        }
        if x.windows(2).into_iter().any(|w| w[0] > w[1]) {
            return Err(VleError::Error(String::from(
                "liquid compositions must be ordered by increasing x",
            )));
        }
        Ok(Self { x, y, source })
    }

    /// Liquid phase mole fractions of the first component.
    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    /// Vapor phase mole fractions of the first component.
    pub fn y(&self) -> &Array1<f64> {
        &self.y
    }

    pub fn source(&self) -> CurveSource {
        self.source
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// A model that calculates the equilibrium curve of a binary mixture.
///
/// Implementations are pure: the same components and operating
/// condition always produce the same curve. The returned curve has at
/// least two samples with x spanning [0, 1].
pub trait EquilibriumModel: Send + Sync {
    /// Short name of the model.
    fn name(&self) -> &str;

    /// Calculate the equilibrium curve for the given component pair.
    fn equilibrium(
        &self,
        comp1: &str,
        comp2: &str,
        condition: OperatingCondition,
    ) -> VleResult<EquilibriumCurve>;
}

/// Average relative volatility over the interior of an equilibrium curve.
///
/// Samples with a pure phase on either side are skipped; `None` is
/// returned when no interior samples exist.
pub fn relative_volatility(curve: &EquilibriumCurve) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0;
    for (&x, &y) in curve.x().iter().zip(curve.y()) {
        if x > 0.0 && x < 1.0 && y > 0.0 && y < 1.0 {
            sum += y * (1.0 - x) / (x * (1.0 - y));
            count += 1;
        }
    }
    (count > 0).then(|| sum / count as f64)
}
