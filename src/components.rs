//! Pure-component property records and the database they are collected in.

use crate::errors::{VleError, VleResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Properties of a single pure substance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ComponentRecord {
    /// Commonly used english name
    pub name: String,
    /// Normal boiling point in Kelvin
    pub boiling_point: f64,
}

impl ComponentRecord {
    /// Create a new record for a pure substance.
    pub fn new(name: &str, boiling_point: f64) -> Self {
        Self {
            name: name.into(),
            boiling_point,
        }
    }
}

impl std::fmt::Display for ComponentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ComponentRecord(name={}", self.name)?;
        write!(f, ", boiling point={} K)", self.boiling_point)
    }
}

/// Normal boiling points of common solvents in Kelvin.
const COMMON_SOLVENTS: [(&str, f64); 22] = [
    ("methanol", 337.8),
    ("ethanol", 351.4),
    ("water", 373.15),
    ("acetone", 329.2),
    ("benzene", 353.2),
    ("toluene", 383.8),
    ("chloroform", 334.0),
    ("hexane", 342.0),
    ("heptane", 371.6),
    ("octane", 398.8),
    ("propanol", 370.4),
    ("butanol", 390.9),
    ("acetic acid", 391.2),
    ("acetonitrile", 354.8),
    ("carbon tetrachloride", 349.9),
    ("diethyl ether", 307.6),
    ("dmf", 426.0),
    ("dmso", 462.0),
    ("ethyl acetate", 350.3),
    ("isopropanol", 355.4),
    ("methyl ethyl ketone", 352.8),
    ("pentane", 309.2),
];

/// An immutable collection of pure-component records, indexed by name.
///
/// The database is constructed once at startup and only read afterwards.
/// Lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct ComponentDb {
    records: IndexMap<String, ComponentRecord>,
}

impl ComponentDb {
    /// Build a database from a list of records.
    ///
    /// Later records replace earlier ones with the same name.
    pub fn from_records(records: Vec<ComponentRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|r| (r.name.to_lowercase(), r))
            .collect();
        Self { records }
    }

    /// Build a database from a JSON list of records.
    pub fn from_json(json: &str) -> VleResult<Self> {
        let records: Vec<ComponentRecord> =
            serde_json::from_str(json).map_err(|e| VleError::Error(e.to_string()))?;
        Ok(Self::from_records(records))
    }

    /// The database of common solvents shipped with the crate.
    pub fn with_common_solvents() -> Self {
        Self::from_records(
            COMMON_SOLVENTS
                .iter()
                .map(|&(name, bp)| ComponentRecord::new(name, bp))
                .collect(),
        )
    }

    /// Look up the record for a component by name.
    pub fn get(&self, name: &str) -> Option<&ComponentRecord> {
        self.records.get(&name.to_lowercase())
    }

    /// The normal boiling point of a component in Kelvin, if known.
    pub fn boiling_point(&self, name: &str) -> Option<f64> {
        self.get(name).map(|r| r.boiling_point)
    }

    /// Number of records in the database.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
