//! Configuration file support for barload.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/barload/config.toml`.
//! It only carries defaults for the CLI shell (which bar to assume, which
//! denominations to fill with); the core API itself takes everything
//! explicitly and stays strict about validation.

use crate::barbell::DEFAULT_BAR_WEIGHT_KG;
use crate::error::{Error, Result};
use crate::types::WeightUnit;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub barbell: BarbellConfig,

    #[serde(default)]
    pub fill: FillConfig,
}

/// Default bar used when the command line does not specify one
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BarbellConfig {
    #[serde(default = "default_bar_weight")]
    pub weight: f64,

    #[serde(default = "default_unit")]
    pub unit: WeightUnit,
}

impl Default for BarbellConfig {
    fn default() -> Self {
        Self {
            weight: default_bar_weight(),
            unit: default_unit(),
        }
    }
}

/// Defaults for plate selection
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FillConfig {
    /// Denomination unit used when `--plate-unit` is not given
    #[serde(default = "default_unit")]
    pub plate_unit: WeightUnit,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            plate_unit: default_unit(),
        }
    }
}

// Default value functions
fn default_bar_weight() -> f64 {
    DEFAULT_BAR_WEIGHT_KG
}

fn default_unit() -> WeightUnit {
    WeightUnit::Kilograms
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("barload").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.barbell.weight < 0.0 {
            return Err(Error::Config(format!(
                "default barbell weight can not be negative (got {})",
                self.barbell.weight
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.barbell.weight, 20.0);
        assert_eq!(config.barbell.unit, WeightUnit::Kilograms);
        assert_eq!(config.fill.plate_unit, WeightUnit::Kilograms);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            barbell: BarbellConfig {
                weight: 45.0,
                unit: WeightUnit::Pounds,
            },
            fill: FillConfig {
                plate_unit: WeightUnit::Pounds,
            },
        };

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.barbell.weight, parsed.barbell.weight);
        assert_eq!(config.barbell.unit, parsed.barbell.unit);
        assert_eq!(config.fill.plate_unit, parsed.fill.plate_unit);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[barbell]
weight = 15.0
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.barbell.weight, 15.0);
        assert_eq!(config.barbell.unit, WeightUnit::Kilograms); // default
        assert_eq!(config.fill.plate_unit, WeightUnit::Kilograms); // default
    }

    #[test]
    fn test_load_rejects_negative_default_weight() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[barbell]\nweight = -20.0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            barbell: BarbellConfig {
                weight: 35.0,
                unit: WeightUnit::Pounds,
            },
            fill: FillConfig::default(),
        };
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.barbell.weight, 35.0);
        assert_eq!(reloaded.barbell.unit, WeightUnit::Pounds);
    }
}
