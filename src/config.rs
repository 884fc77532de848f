//! Simulation configuration.
//!
//! Settings come from an optional TOML file; anything missing falls back to
//! the defaults below. A complete file looks like:
//!
//! ```toml
//! [container]
//! top_left = [0.0, 0.0]
//! dimensions = [700.0, 1200.0]
//!
//! [spawn]
//! particle_count = 30
//! seed = 225
//! margin = 50.0
//! max_velocity_component = 7.0
//!
//! [histogram]
//! bins = 10
//!
//! [engine]
//! partner_selection = "first_match"   # or "nearest"
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use eframe::epaint::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use crate::bounds::Bounds;
use crate::container::GasContainer;
use crate::error::SimulationError;
use crate::partner::PartnerSelection;
use crate::spawn::SpawnSettings;

/// Geometry of the box.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ContainerConfig {
    pub top_left: [f32; 2],
    /// Width and height.
    pub dimensions: [f32; 2],
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            top_left: [0.0, 0.0],
            dimensions: [700.0, 1200.0],
        }
    }
}

/// Initial particle layout.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    pub particle_count: usize,
    pub seed: u64,
    pub margin: f32,
    pub max_velocity_component: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        let spawn = SpawnSettings::default();
        Self {
            particle_count: spawn.count,
            seed: 225,
            margin: spawn.margin,
            max_velocity_component: spawn.max_velocity_component,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HistogramConfig {
    pub bins: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self { bins: 10 }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub partner_selection: PartnerSelection,
}

/// Top-level configuration.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub container: ContainerConfig,
    pub spawn: SpawnConfig,
    pub histogram: HistogramConfig,
    pub engine: EngineConfig,
}

/// Errors from loading a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the file from disk.
    Io(std::io::Error),
    /// The file is not valid TOML for this schema.
    Parse(toml::de::Error),
    /// The values parsed but describe an impossible simulation.
    Invalid(SimulationError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config file: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<SimulationError> for ConfigError {
    fn from(e: SimulationError) -> Self {
        ConfigError::Invalid(e)
    }
}

impl SimulationConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config at `path`, or the defaults if no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let contents = fs::read_to_string(path)?;
                let config = Self::from_toml_str(&contents)?;
                log::info!("loaded config from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn bounds(&self) -> Result<Bounds, SimulationError> {
        let [x, y] = self.container.top_left;
        let [w, h] = self.container.dimensions;
        Bounds::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    pub fn spawn_settings(&self) -> SpawnSettings {
        SpawnSettings {
            count: self.spawn.particle_count,
            margin: self.spawn.margin,
            max_velocity_component: self.spawn.max_velocity_component,
        }
    }

    /// Checks every value before anything is built.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let bounds = self.bounds()?;
        self.spawn_settings().validate(&bounds)?;
        if self.histogram.bins == 0 {
            return Err(SimulationError::ZeroBins);
        }
        Ok(())
    }

    /// Spawns a container from this config, seeded with `spawn.seed`.
    pub fn build_container(&self) -> Result<GasContainer, SimulationError> {
        let mut rng = StdRng::seed_from_u64(self.spawn.seed);
        let container = GasContainer::spawn(self.bounds()?, &self.spawn_settings(), &mut rng)?;
        Ok(container.with_partner_selection(self.engine.partner_selection))
    }
}
