//! The barbell aggregate: a bar weight plus the plates loaded onto it.

use crate::catalog;
use crate::error::{Error, Result};
use crate::plate::Plate;
use crate::types::WeightUnit;

/// Bar weight assumed when none is specified (the standard 20 kg bar).
pub const DEFAULT_BAR_WEIGHT_KG: f64 = 20.0;

/// A barbell and its attached plates.
///
/// Only one side of the bar is tracked. The bar is assumed to be loaded
/// symmetrically, so every total doubles the plate sum; one `Plate` in
/// `attached_plates` stands for the pair physically on the bar. The bar's
/// own weight is stored in kilograms no matter which unit supplied it.
#[derive(Clone, Debug)]
pub struct Barbell {
    bar_weight: f64,
    attached_plates: Vec<Plate>,
}

impl Default for Barbell {
    fn default() -> Self {
        Barbell {
            bar_weight: DEFAULT_BAR_WEIGHT_KG,
            attached_plates: Vec::new(),
        }
    }
}

impl Barbell {
    /// Construct a barbell with the given bar weight and no plates.
    ///
    /// # Errors
    /// `NegativeWeight` if `weight` is below zero.
    pub fn new(weight: f64, unit: WeightUnit) -> Result<Barbell> {
        let mut barbell = Barbell {
            bar_weight: 0.0,
            attached_plates: Vec::new(),
        };
        barbell.set_weight(weight, unit)?;
        Ok(barbell)
    }

    /// Replace the bar weight. Attached plates are untouched.
    ///
    /// # Errors
    /// `NegativeWeight` if `weight` is below zero.
    pub fn set_weight(&mut self, weight: f64, unit: WeightUnit) -> Result<()> {
        if weight < 0.0 {
            return Err(Error::NegativeWeight(weight));
        }
        self.bar_weight = unit.convert(weight, WeightUnit::Kilograms);
        Ok(())
    }

    /// Bar weight in kilograms, the canonical unit
    pub fn bar_weight(&self) -> f64 {
        self.bar_weight
    }

    /// Bar weight expressed in `unit`
    pub fn bar_weight_in(&self, unit: WeightUnit) -> f64 {
        WeightUnit::Kilograms.convert(self.bar_weight, unit)
    }

    /// The plates on the tracked side, in attachment order
    pub fn attached_plates(&self) -> &[Plate] {
        &self.attached_plates
    }

    /// Construct a plate and attach it to the bar.
    ///
    /// # Errors
    /// Propagates [`Plate::new`] failures unchanged; the bar is not
    /// modified on failure.
    pub fn add_plate(&mut self, weight: f64, unit: WeightUnit) -> Result<()> {
        let plate = Plate::new(weight, unit)?;
        self.attached_plates.push(plate);
        Ok(())
    }

    /// Detach and return the most recently attached plate.
    ///
    /// An empty bar is a normal `None`, not an error.
    pub fn remove_last_plate(&mut self) -> Option<Plate> {
        self.attached_plates.pop()
    }

    /// Detach every plate, returning them in attachment order.
    ///
    /// Calling this on an empty bar returns an empty Vec.
    pub fn remove_all_plates(&mut self) -> Vec<Plate> {
        std::mem::take(&mut self.attached_plates)
    }

    /// Total weight of the loaded bar in `unit`: the bar itself plus both
    /// sides' plates (tracked side doubled).
    pub fn total_weight(&self, unit: WeightUnit) -> f64 {
        let plates: f64 = self
            .attached_plates
            .iter()
            .map(|plate| plate.weight_in(unit))
            .sum();

        self.bar_weight_in(unit) + plates * 2.0
    }

    /// Greedily load plates until the total is as close to `target_weight`
    /// as the `target_plate_unit` denominations allow without exceeding it.
    ///
    /// Walks the denomination ladder largest to smallest. Each denomination
    /// is retried until one more pair of it would overshoot, then the next
    /// smaller one is considered; landing exactly on the target counts as a
    /// fit. When the two units differ, the overshoot check converts the
    /// denomination into `target_weight_unit` while the attached plate
    /// keeps its native `target_plate_unit` magnitude.
    ///
    /// Returns exactly the plates added by this call; the same plates are
    /// appended to the bar. A target at or below the current total returns
    /// an empty Vec and attaches nothing.
    pub fn fill_to_target(
        &mut self,
        target_weight: f64,
        target_weight_unit: WeightUnit,
        target_plate_unit: WeightUnit,
    ) -> Vec<Plate> {
        let ladder = catalog::default_catalog().denominations(target_plate_unit);
        let mut current_weight = self.total_weight(target_weight_unit);
        let mut added = Vec::new();

        for spec in ladder {
            // Weight a pair of this denomination adds, in the target's unit.
            let increment = 2.0 * target_plate_unit.convert(spec.weight, target_weight_unit);

            while current_weight + increment <= target_weight {
                let plate = Plate::from_spec(spec, target_plate_unit);
                self.attached_plates.push(plate.clone());
                added.push(plate);
                current_weight += increment;
            }
        }

        tracing::debug!(
            "Filled towards {} {}: {} plates added, total now {}",
            target_weight,
            target_weight_unit,
            added.len(),
            current_weight
        );

        added
    }
}
