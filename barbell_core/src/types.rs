//! Core domain types for the barbell loading system.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Conversion factor between the two units: 1 kg = 2.205 lb.
pub const KG_TO_LB: f64 = 2.205;

/// Unit a weight magnitude is expressed in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    Kilograms,
    Pounds,
}

impl WeightUnit {
    /// Convert a magnitude expressed in `self` into `target`.
    ///
    /// Identity when the units already match.
    pub fn convert(self, weight: f64, target: WeightUnit) -> f64 {
        match (self, target) {
            (WeightUnit::Kilograms, WeightUnit::Pounds) => weight * KG_TO_LB,
            (WeightUnit::Pounds, WeightUnit::Kilograms) => weight / KG_TO_LB,
            _ => weight,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Kilograms => write!(f, "kilograms"),
            WeightUnit::Pounds => write!(f, "pounds"),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = Error;

    /// Parse a unit token. This is the boundary where unrecognized units
    /// are rejected; past it the type system guarantees a valid unit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kgs" | "kilograms" => Ok(WeightUnit::Kilograms),
            "lb" | "lbs" | "pounds" => Ok(WeightUnit::Pounds),
            _ => Err(Error::UnknownUnit(s.to_string())),
        }
    }
}
