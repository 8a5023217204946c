//! Vapor-liquid equilibrium curves for binary mixtures.
//!
//! Given two component names and an operating condition (temperature or
//! pressure), the crate calculates the x-y equilibrium curve of the
//! mixture, fits it with a polynomial for compact rendering, and
//! reports which component is more volatile. The [VleCalculator] ties
//! these steps together and folds every failure into a uniform error
//! envelope; [api] maps request bodies onto it for an HTTP adapter.
#![warn(clippy::all)]

/// Print messages with level `Verbosity::Iter` or higher.
#[macro_export]
macro_rules! log_iter {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::equilibrium::Verbosity::Iter {
            println!($($arg)*);
        }
    }
}

/// Print messages with level `Verbosity::Result` or higher.
#[macro_export]
macro_rules! log_result {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::equilibrium::Verbosity::Result {
            println!($($arg)*);
        }
    }
}

pub mod api;
mod calculation;
mod components;
pub mod equilibrium;
mod errors;
mod polyfit;
mod volatility;

pub use calculation::{VleCalculation, VleCalculator, VleFailure, VleOutput};
pub use components::{ComponentDb, ComponentRecord};
pub use equilibrium::{
    relative_volatility, CurveSource, EquilibriumCurve, EquilibriumModel, OperatingCondition,
    RaoultModel, SolverOptions, SyntheticModel, Verbosity,
};
pub use errors::{VleError, VleResult};
pub use polyfit::{polyfit, FIT_DEGREE};
pub use volatility::{classify, VolatilityReport};
