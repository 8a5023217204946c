//! Ideal-solution equilibrium model based on Raoult's law.

use super::{
    CurveSource, EquilibriumCurve, EquilibriumModel, OperatingCondition, SolverOptions,
    DEFAULT_POINTS,
};
use crate::components::ComponentDb;
use crate::errors::{VleError, VleResult};
use crate::{log_iter, log_result};
use ndarray::Array1;
use std::sync::Arc;

/// Trouton's rule constant, the enthalpy of vaporization at the normal
/// boiling point in units of R*Tb.
const TROUTON: f64 = 10.5;
/// Atmospheric pressure in bar.
const P_ATM: f64 = 1.01325;
/// Temperature bracket for the bubble point iteration in Kelvin.
const T_BRACKET: (f64, f64) = (150.0, 1000.0);

const MAX_ITER_BUBBLE: usize = 200;
const TOL_BUBBLE: f64 = 1e-10;

/// Vapor pressure correlation of a pure component, anchored at its
/// normal boiling point.
#[derive(Debug, Clone, Copy)]
struct VaporPressure {
    /// Normal boiling point in Kelvin
    tb: f64,
}

impl VaporPressure {
    /// Saturation pressure in bar via the Clausius-Clapeyron relation
    /// with the Trouton estimate of the enthalpy of vaporization.
    fn psat(&self, temperature: f64) -> f64 {
        P_ATM * (TROUTON * (1.0 - self.tb / temperature)).exp()
    }
}

/// Equilibrium model for an ideal binary solution.
///
/// Pure-component vapor pressures follow the Clausius-Clapeyron
/// relation anchored at the normal boiling point, with the enthalpy of
/// vaporization estimated by Trouton's rule. The mixture obeys Raoult's
/// law. At a given temperature the curve is evaluated in closed form;
/// at a given pressure the bubble point temperature is solved for every
/// composition by bisection.
pub struct RaoultModel {
    db: Arc<ComponentDb>,
    points: usize,
    options: SolverOptions,
}

impl RaoultModel {
    /// Create a model over a component database.
    pub fn new(db: Arc<ComponentDb>) -> Self {
        Self {
            db,
            points: DEFAULT_POINTS,
            options: SolverOptions::default(),
        }
    }

    /// Override the options of the bubble point solver.
    pub fn options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    fn vapor_pressure(&self, name: &str) -> VleResult<VaporPressure> {
        self.db
            .boiling_point(name)
            .map(|tb| VaporPressure { tb })
            .ok_or_else(|| VleError::UnknownComponent(name.into()))
    }

    /// Solve x1*psat1(T) + (1-x1)*psat2(T) = p for T.
    ///
    /// The total pressure is strictly increasing in temperature, so the
    /// root is bracketed and bisection always converges.
    fn bubble_temperature(
        &self,
        vp1: VaporPressure,
        vp2: VaporPressure,
        x1: f64,
        pressure: f64,
    ) -> VleResult<f64> {
        let (max_iter, tol, verbosity) = self.options.unwrap_or(MAX_ITER_BUBBLE, TOL_BUBBLE);
        let residual = |t: f64| x1 * vp1.psat(t) + (1.0 - x1) * vp2.psat(t) - pressure;

        let (mut a, mut b) = T_BRACKET;
        if residual(a) > 0.0 || residual(b) < 0.0 {
            return Err(VleError::NotConverged(String::from("bubble_temperature")));
        }
        for i in 0..max_iter {
            let t = 0.5 * (a + b);
            let r = residual(t);
            log_iter!(verbosity, "bubble point iteration {}: T={} K, r={:e}", i, t, r);
            if r > 0.0 {
                b = t;
            } else {
                a = t;
            }
            if b - a < tol * t {
                log_result!(verbosity, "bubble point converged: T={} K", t);
                return Ok(t);
            }
        }
        Err(VleError::NotConverged(String::from("bubble_temperature")))
    }

    fn isothermal(&self, vp1: VaporPressure, vp2: VaporPressure, temperature: f64) -> Array1<f64> {
        let psat1 = vp1.psat(temperature);
        let psat2 = vp2.psat(temperature);
        Array1::linspace(0.0, 1.0, self.points)
            .mapv(|x1| x1 * psat1 / (x1 * psat1 + (1.0 - x1) * psat2))
    }

    fn isobaric(
        &self,
        vp1: VaporPressure,
        vp2: VaporPressure,
        pressure: f64,
    ) -> VleResult<Array1<f64>> {
        let x = Array1::linspace(0.0, 1.0, self.points);
        let mut y = Array1::zeros(self.points);
        for (i, &x1) in x.iter().enumerate() {
            let t = self.bubble_temperature(vp1, vp2, x1, pressure)?;
            // the bisection tolerance can overshoot the exact bubble point
            y[i] = (x1 * vp1.psat(t) / pressure).clamp(0.0, 1.0);
        }
        Ok(y)
    }
}

impl EquilibriumModel for RaoultModel {
    fn name(&self) -> &str {
        "raoult"
    }

    fn equilibrium(
        &self,
        comp1: &str,
        comp2: &str,
        condition: OperatingCondition,
    ) -> VleResult<EquilibriumCurve> {
        let vp1 = self.vapor_pressure(comp1)?;
        let vp2 = self.vapor_pressure(comp2)?;
        let y = match condition {
            OperatingCondition::Temperature(t) if t > 0.0 => self.isothermal(vp1, vp2, t),
            OperatingCondition::Temperature(t) => {
                return Err(VleError::InvalidInput("temperature", t))
            }
            OperatingCondition::Pressure(p) if p > 0.0 => self.isobaric(vp1, vp2, p)?,
            OperatingCondition::Pressure(p) => {
                return Err(VleError::InvalidInput("pressure", p))
            }
        };
        let x = Array1::linspace(0.0, 1.0, self.points);
        EquilibriumCurve::new(x, y, CurveSource::Raoult)
    }
}
