//! Static catalog of real-world plate denominations.
//!
//! The catalog is the allow-list for plate construction: a (unit, weight)
//! pair with no entry here is not a plate that exists in the gym. Each entry
//! carries an image handle the presentation layer maps to a display asset;
//! the core treats it as opaque metadata.

use crate::types::WeightUnit;
use once_cell::sync::Lazy;

/// One legal plate denomination and its display asset
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlateSpec {
    pub weight: f64,
    pub image: &'static str,
}

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// The plate denominations available per unit.
///
/// Both tables are ordered largest to smallest; the fill-to-target
/// algorithm walks them in that order, so the ordering is part of the
/// contract, not a presentation choice.
#[derive(Clone, Debug)]
pub struct Catalog {
    kilograms: Vec<PlateSpec>,
    pounds: Vec<PlateSpec>,
}

/// Builds the default catalog of standard kilogram and pound plates
///
/// **Note**: prefer `default_catalog()` which returns a cached reference.
/// This function is retained for testing and custom catalog creation.
pub fn build_default_catalog() -> Catalog {
    let kilograms = vec![
        PlateSpec { weight: 25.0, image: "plates/kg-25.svg" },
        PlateSpec { weight: 20.0, image: "plates/kg-20.svg" },
        PlateSpec { weight: 15.0, image: "plates/kg-15.svg" },
        PlateSpec { weight: 10.0, image: "plates/kg-10.svg" },
        PlateSpec { weight: 5.0, image: "plates/kg-5.svg" },
        PlateSpec { weight: 2.5, image: "plates/kg-2-5.svg" },
        PlateSpec { weight: 1.25, image: "plates/kg-1-25.svg" },
        PlateSpec { weight: 0.5, image: "plates/kg-0-5.svg" },
        PlateSpec { weight: 0.25, image: "plates/kg-0-25.svg" },
    ];

    let pounds = vec![
        PlateSpec { weight: 45.0, image: "plates/lb-45.svg" },
        PlateSpec { weight: 35.0, image: "plates/lb-35.svg" },
        PlateSpec { weight: 25.0, image: "plates/lb-25.svg" },
        PlateSpec { weight: 10.0, image: "plates/lb-10.svg" },
        PlateSpec { weight: 5.0, image: "plates/lb-5.svg" },
        PlateSpec { weight: 2.5, image: "plates/lb-2-5.svg" },
        PlateSpec { weight: 1.25, image: "plates/lb-1-25.svg" },
    ];

    Catalog { kilograms, pounds }
}

impl Catalog {
    /// All denominations for a unit, largest first
    pub fn denominations(&self, unit: WeightUnit) -> &[PlateSpec] {
        match unit {
            WeightUnit::Kilograms => &self.kilograms,
            WeightUnit::Pounds => &self.pounds,
        }
    }

    /// Look up the catalog entry for a (unit, weight) pair.
    ///
    /// Every listed magnitude is a dyadic fraction, exactly representable
    /// as an f64, so exact comparison is the right lookup here.
    pub fn find(&self, unit: WeightUnit, weight: f64) -> Option<&PlateSpec> {
        self.denominations(unit).iter().find(|spec| spec.weight == weight)
    }

    /// Validate the catalog for consistency
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for unit in [WeightUnit::Kilograms, WeightUnit::Pounds] {
            let specs = self.denominations(unit);

            if specs.is_empty() {
                errors.push(format!("Catalog has no {} plates", unit));
            }

            for spec in specs {
                if spec.weight <= 0.0 {
                    errors.push(format!(
                        "{} plate has non-positive weight {}",
                        unit, spec.weight
                    ));
                }
                if spec.image.is_empty() {
                    errors.push(format!(
                        "{} plate {} has an empty image handle",
                        unit, spec.weight
                    ));
                }
            }

            for pair in specs.windows(2) {
                if pair[0].weight <= pair[1].weight {
                    errors.push(format!(
                        "{} plates are not in strictly descending order ({} before {})",
                        unit, pair[0].weight, pair[1].weight
                    ));
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        let catalog = build_default_catalog();
        assert_eq!(catalog.denominations(WeightUnit::Kilograms).len(), 9);
        assert_eq!(catalog.denominations(WeightUnit::Pounds).len(), 7);
    }

    #[test]
    fn test_default_catalog_validates() {
        let errors = default_catalog().validate();
        assert!(
            errors.is_empty(),
            "Default catalog has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_ladders_are_descending() {
        let catalog = default_catalog();
        for unit in [WeightUnit::Kilograms, WeightUnit::Pounds] {
            for pair in catalog.denominations(unit).windows(2) {
                assert!(pair[0].weight > pair[1].weight);
            }
        }
    }

    #[test]
    fn test_find_known_denominations() {
        let catalog = default_catalog();

        let spec = catalog.find(WeightUnit::Kilograms, 0.25).unwrap();
        assert_eq!(spec.weight, 0.25);
        assert!(!spec.image.is_empty());

        assert!(catalog.find(WeightUnit::Pounds, 45.0).is_some());
    }

    #[test]
    fn test_find_rejects_unknown_denominations() {
        let catalog = default_catalog();

        assert!(catalog.find(WeightUnit::Kilograms, 46.0).is_none());
        // 45 is a pound plate, not a kilogram plate
        assert!(catalog.find(WeightUnit::Kilograms, 45.0).is_none());
        assert!(catalog.find(WeightUnit::Pounds, 0.25).is_none());
    }
}
