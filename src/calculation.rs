//! Orchestration of a complete VLE calculation.

use crate::components::ComponentDb;
use crate::equilibrium::{
    CurveSource, EquilibriumModel, OperatingCondition, RaoultModel,
};
use crate::errors::VleResult;
use crate::polyfit::{polyfit, FIT_DEGREE};
use crate::volatility::{classify, VolatilityReport};
use serde::Serialize;
use std::sync::Arc;

/// Fully assembled result of a successful VLE calculation.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VleCalculation {
    /// Liquid phase mole fractions of the first component.
    pub x_values: Vec<f64>,
    /// Vapor phase mole fractions of the first component.
    pub y_values: Vec<f64>,
    /// Polynomial fit of y over x, highest power first.
    pub poly_coeffs: Vec<f64>,
    pub volatility: VolatilityReport,
    /// Resolved temperature in Kelvin, if the sweep was isothermal.
    pub temperature: Option<f64>,
    /// Resolved pressure in bar, if the sweep was isobaric.
    pub pressure: Option<f64>,
    pub comp1: String,
    pub comp2: String,
    /// Present when the curve was fabricated by the synthetic fallback model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// The uniform error envelope of a failed calculation.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VleFailure {
    pub error: String,
    pub x_values: Vec<f64>,
    pub y_values: Vec<f64>,
    pub poly_coeffs: Vec<f64>,
}

impl VleFailure {
    fn new(error: String) -> Self {
        Self {
            error,
            x_values: Vec::new(),
            y_values: Vec::new(),
            poly_coeffs: Vec::new(),
        }
    }
}

/// The outcome of a VLE calculation.
///
/// Callers always receive one of the two envelope shapes; errors never
/// cross this boundary as anything else.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum VleOutput {
    Success(Box<VleCalculation>),
    Error(VleFailure),
}

impl VleOutput {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The error message of a failed calculation.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error(f) => Some(&f.error),
        }
    }
}

/// Orchestrates single stateless VLE calculations.
///
/// The calculator owns the component database and the equilibrium
/// model; both are immutable, so one calculator can be shared freely
/// across threads.
pub struct VleCalculator {
    db: Arc<ComponentDb>,
    model: Box<dyn EquilibriumModel>,
}

impl VleCalculator {
    /// A calculator over the embedded solvent database, using the
    /// Raoult equilibrium model.
    pub fn new() -> Self {
        Self::with_db(Arc::new(ComponentDb::with_common_solvents()))
    }

    /// A calculator over a custom component database.
    pub fn with_db(db: Arc<ComponentDb>) -> Self {
        let model = Box::new(RaoultModel::new(db.clone()));
        Self { db, model }
    }

    /// A calculator with a custom equilibrium model, e.g. the
    /// [SyntheticModel](crate::equilibrium::SyntheticModel) for a
    /// degraded deployment without thermodynamic data.
    pub fn with_model(db: Arc<ComponentDb>, model: Box<dyn EquilibriumModel>) -> Self {
        Self { db, model }
    }

    /// Calculate the equilibrium curve, polynomial fit, and volatility
    /// report for a binary mixture.
    ///
    /// `temperature` is in Kelvin and takes precedence over `pressure`,
    /// which is in Pascal; with neither given a default of 300 K is
    /// used. Every failure is folded into the error envelope.
    pub fn calculate(
        &self,
        comp1: &str,
        comp2: &str,
        temperature: Option<f64>,
        pressure: Option<f64>,
    ) -> VleOutput {
        match self.try_calculate(comp1, comp2, temperature, pressure) {
            Ok(calculation) => VleOutput::Success(Box::new(calculation)),
            Err(e) => VleOutput::Error(VleFailure::new(e.to_string())),
        }
    }

    fn try_calculate(
        &self,
        comp1: &str,
        comp2: &str,
        temperature: Option<f64>,
        pressure: Option<f64>,
    ) -> VleResult<VleCalculation> {
        let condition = OperatingCondition::resolve(temperature, pressure)?;
        let curve = self.model.equilibrium(comp1, comp2, condition)?;
        let poly_coeffs = polyfit(curve.x(), curve.y(), FIT_DEGREE)?;
        let volatility = classify(&self.db, comp1, comp2);
        let warning = (curve.source() == CurveSource::Synthetic).then(|| {
            format!(
                "equilibrium curve fabricated by the `{}` fallback model",
                self.model.name()
            )
        });
        Ok(VleCalculation {
            x_values: curve.x().to_vec(),
            y_values: curve.y().to_vec(),
            poly_coeffs,
            volatility,
            temperature: condition.temperature(),
            pressure: condition.pressure(),
            comp1: comp1.into(),
            comp2: comp2.into(),
            warning,
        })
    }
}

impl Default for VleCalculator {
    fn default() -> Self {
        Self::new()
    }
}
