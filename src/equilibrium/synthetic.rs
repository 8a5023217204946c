//! Synthetic fallback model for deployments without thermodynamic data.

use super::{
    CurveSource, EquilibriumCurve, EquilibriumModel, OperatingCondition, DEFAULT_POINTS,
};
use crate::errors::VleResult;
use ndarray::Array1;

/// A closed-form surrogate for an equilibrium curve.
///
/// The curve `y = 1.5 x / (0.5 + x)` is fabricated without any
/// component data; operating condition and component names are ignored.
/// Every curve produced here is tagged [CurveSource::Synthetic] so that
/// consumers can tell it apart from a thermodynamic calculation.
pub struct SyntheticModel;

impl EquilibriumModel for SyntheticModel {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn equilibrium(
        &self,
        _comp1: &str,
        _comp2: &str,
        _condition: OperatingCondition,
    ) -> VleResult<EquilibriumCurve> {
        let x = Array1::linspace(0.0, 1.0, DEFAULT_POINTS);
        let y = x.mapv(|x| 1.5 * x / (0.5 + x));
        EquilibriumCurve::new(x, y, CurveSource::Synthetic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equilibrium::relative_volatility;
    use approx::assert_relative_eq;

    #[test]
    fn curve_follows_the_fallback_formula() -> VleResult<()> {
        let curve =
            SyntheticModel.equilibrium("water", "ethanol", OperatingCondition::Temperature(300.0))?;
        assert_eq!(curve.len(), DEFAULT_POINTS);
        assert_eq!(curve.source(), CurveSource::Synthetic);
        for (&x, &y) in curve.x().iter().zip(curve.y()) {
            assert_relative_eq!(y, 1.5 * x / (0.5 + x));
        }
        assert_relative_eq!(curve.y()[DEFAULT_POINTS - 1], 1.0);
        Ok(())
    }

    #[test]
    fn curve_has_a_finite_relative_volatility() -> VleResult<()> {
        let curve =
            SyntheticModel.equilibrium("a", "b", OperatingCondition::Temperature(300.0))?;
        let alpha = relative_volatility(&curve).unwrap();
        assert!(alpha.is_finite() && alpha > 1.0);
        Ok(())
    }
}
