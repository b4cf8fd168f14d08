//! Error types for the barbell_core library.

use crate::types::WeightUnit;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for barbell_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A weight argument was below zero
    #[error("weight can not be negative (got {0})")]
    NegativeWeight(f64),

    /// A unit token did not name a recognized weight unit
    #[error("unknown weight unit '{0}'")]
    UnknownUnit(String),

    /// The (unit, weight) pair has no entry in the plate catalog
    #[error("no {unit} plate of weight {weight} exists")]
    UnknownDenomination { weight: f64, unit: WeightUnit },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),
}
