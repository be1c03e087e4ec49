//! Engine configuration
//!
//! Both config types deserialize with `#[serde(default)]`, so a TOML file only
//! needs the keys it wants to override:
//!
//! ```toml
//! [shoreline]
//! window_radius = 3
//!
//! [generator]
//! water_chance = 0.05
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default half-size of the square window re-classified after an edit
pub const DEFAULT_WINDOW_RADIUS: u32 = 2;
/// Default number of classifier passes over the window
pub const DEFAULT_PASSES: u32 = 2;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Settings for the convergence driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShorelineConfig {
    /// Cells within this Chebyshev distance of an edit are re-classified
    pub window_radius: u32,
    /// Full classifier passes over the window.
    ///
    /// Two passes settle the common cases: a correction can cascade at most one
    /// cell outward per pass. Longer chains of tips may need more.
    pub passes: u32,
}

impl Default for ShorelineConfig {
    fn default() -> Self {
        Self {
            window_radius: DEFAULT_WINDOW_RADIUS,
            passes: DEFAULT_PASSES,
        }
    }
}

/// Settings for random map generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Chance for each cell to be painted with water in the first pass
    pub water_chance: f64,
    /// Chance for each resulting shore cell to be flooded in the second pass
    pub shore_flood_chance: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            water_chance: 0.03,
            shore_flood_chance: 0.10,
        }
    }
}

/// A complete engine configuration file
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub shoreline: ShorelineConfig,
    pub generator: GeneratorConfig,
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save to a TOML file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
