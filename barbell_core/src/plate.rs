//! A single weight disc, validated against the plate catalog.

use crate::catalog::{self, PlateSpec};
use crate::error::{Error, Result};
use crate::types::WeightUnit;
use serde::Serialize;
use std::fmt;

/// An immutable weight plate.
///
/// Construction only succeeds for denominations the catalog lists, which is
/// also where the `image` handle comes from. Fields stay private; once a
/// plate exists it never changes.
///
/// `Serialize` only — deserializing a plate would sidestep catalog
/// validation, so plates always enter the system through [`Plate::new`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Plate {
    weight: f64,
    unit: WeightUnit,
    image: &'static str,
}

impl Plate {
    /// Construct a plate of the given denomination.
    ///
    /// # Errors
    /// `NegativeWeight` if `weight` is below zero, `UnknownDenomination` if
    /// the catalog has no (unit, weight) entry.
    pub fn new(weight: f64, unit: WeightUnit) -> Result<Plate> {
        if weight < 0.0 {
            return Err(Error::NegativeWeight(weight));
        }

        let spec = catalog::default_catalog()
            .find(unit, weight)
            .ok_or(Error::UnknownDenomination { weight, unit })?;

        Ok(Plate::from_spec(spec, unit))
    }

    /// Build a plate straight from a catalog entry, which is valid by
    /// definition. Used by the fill algorithm when walking the ladder.
    pub(crate) fn from_spec(spec: &PlateSpec, unit: WeightUnit) -> Plate {
        Plate {
            weight: spec.weight,
            unit,
            image: spec.image,
        }
    }

    /// Nominal magnitude in the plate's own unit
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn unit(&self) -> WeightUnit {
        self.unit
    }

    /// Opaque handle the presentation layer maps to a display asset
    pub fn image(&self) -> &'static str {
        self.image
    }

    /// The plate's magnitude expressed in `unit`
    pub fn weight_in(&self, unit: WeightUnit) -> f64 {
        self.unit.convert(self.weight, unit)
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.weight, self.unit)
    }
}
