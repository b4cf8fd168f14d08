#![forbid(unsafe_code)]

//! Core domain model for the barload plate-loading calculator.
//!
//! This crate provides:
//! - Weight units and kg/lb conversion
//! - The static plate catalog (the allow-list of real plate denominations)
//! - Plate and Barbell types with validated construction
//! - The greedy fill-to-target loading algorithm
//! - Configuration and logging support for the CLI shell

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod plate;
pub mod barbell;

// Re-export commonly used types
pub use barbell::{Barbell, DEFAULT_BAR_WEIGHT_KG};
pub use catalog::{build_default_catalog, default_catalog, Catalog, PlateSpec};
pub use config::Config;
pub use error::{Error, Result};
pub use plate::Plate;
pub use types::{WeightUnit, KG_TO_LB};
