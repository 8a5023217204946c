//! Relative volatility classification based on normal boiling points.

use crate::components::ComponentDb;
use serde::Serialize;

/// Result of comparing two components by normal boiling point.
///
/// A report is always produced, even when one or both components are
/// missing from the database; in that case `more_volatile` is `None`
/// and the message names the components that lack data.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VolatilityReport {
    /// Human-readable summary of the comparison.
    pub message: String,
    /// Name of the component with the lower boiling point.
    pub more_volatile: Option<String>,
    /// Name of the component with the higher boiling point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub less_volatile: Option<String>,
    /// Normal boiling point of the first component in Kelvin.
    pub bp1: Option<f64>,
    /// Normal boiling point of the second component in Kelvin.
    pub bp2: Option<f64>,
}

/// Determine which of two components is more volatile.
///
/// The component with the strictly lower normal boiling point is
/// classified as more volatile. Equal boiling points classify `comp2`
/// as more volatile.
pub fn classify(db: &ComponentDb, comp1: &str, comp2: &str) -> VolatilityReport {
    let bp1 = db.boiling_point(comp1);
    let bp2 = db.boiling_point(comp2);

    let (Some(t1), Some(t2)) = (bp1, bp2) else {
        return VolatilityReport {
            message: format!("Could not find boiling point data for {comp1} or {comp2}"),
            more_volatile: None,
            less_volatile: None,
            bp1,
            bp2,
        };
    };

    let (more_volatile, less_volatile) = if t1 < t2 {
        (comp1, comp2)
    } else {
        (comp2, comp1)
    };
    VolatilityReport {
        message: format!("{more_volatile} is more volatile (lower boiling point)"),
        more_volatile: Some(more_volatile.into()),
        less_volatile: Some(less_volatile.into()),
        bp1,
        bp2,
    }
}
