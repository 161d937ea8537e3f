//! Configuration file support for emtcalc.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/emtcalc/config.toml`.

use crate::types::{AgeUnit, UnitSystem, WeightUnit};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub units: UnitsConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Default input units used when a command omits a unit flag
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnitsConfig {
    #[serde(default = "default_weight_unit")]
    pub weight_unit: WeightUnit,

    #[serde(default = "default_unit_system")]
    pub unit_system: UnitSystem,

    #[serde(default = "default_age_unit")]
    pub age_unit: AgeUnit,
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            weight_unit: default_weight_unit(),
            unit_system: default_unit_system(),
            age_unit: default_age_unit(),
        }
    }
}

/// Output display configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_show_recommendations")]
    pub show_recommendations: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_recommendations: default_show_recommendations(),
        }
    }
}

// Default value functions
fn default_weight_unit() -> WeightUnit {
    WeightUnit::Kg
}

fn default_unit_system() -> UnitSystem {
    UnitSystem::Metric
}

fn default_age_unit() -> AgeUnit {
    AgeUnit::Years
}

fn default_show_recommendations() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("emtcalc").join("config.toml")
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
}
