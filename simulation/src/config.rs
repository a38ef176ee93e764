//! Simulation configuration.

use std::path::Path;

use common::shapes::Rectangle;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::blob::BlobKind;
use crate::command::CollisionHandler;
use crate::error::{SimulationError, SimulationResult};

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub universe: UniverseConfig,
    #[serde(default)]
    pub blobs: BlobConfig,
    #[serde(default)]
    pub run: RunConfig,
}

impl Config {
    /// Loads `path`, or falls back to defaults when it does not exist.
    pub fn load(path: &Path) -> SimulationResult<Self> {
        if !path.exists() {
            info!("No config found at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| SimulationError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> SimulationResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.blobs.validate()?;
        Ok(config)
    }

    pub fn universe(&self) -> Rectangle {
        Rectangle::from_size(self.universe.width, self.universe.height)
    }
}

/// Size of the space blobs move in, anchored at the origin.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UniverseConfig {
    #[serde(default = "default_universe_size")]
    pub width: f64,
    #[serde(default = "default_universe_size")]
    pub height: f64,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: default_universe_size(),
            height: default_universe_size(),
        }
    }
}

fn default_universe_size() -> f64 {
    400.0
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BlobConfig {
    /// Blobs scattered before the first tick.
    #[serde(default = "default_initial_blobs")]
    pub initial: usize,
    #[serde(default)]
    pub kind: BlobKind,
    /// Collision extent of every new blob.
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Per-axis speed limit of bouncers.
    #[serde(default = "default_max_speed")]
    pub max_speed: f64,
    /// Per-axis step limit of wanderers.
    #[serde(default = "default_wander_step")]
    pub wander_step: f64,
}

impl BlobConfig {
    /// Radius and motion limits feed straight into geometry and RNG ranges.
    pub fn validate(&self) -> SimulationResult<()> {
        let fields = [
            ("radius", self.radius),
            ("max_speed", self.max_speed),
            ("wander_step", self.wander_step),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(SimulationError::InvalidBlobConfig { field, value });
            }
        }
        Ok(())
    }
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            initial: default_initial_blobs(),
            kind: BlobKind::default(),
            radius: default_radius(),
            max_speed: default_max_speed(),
            wander_step: default_wander_step(),
        }
    }
}

fn default_initial_blobs() -> usize {
    20
}

fn default_radius() -> f64 {
    5.0
}

fn default_max_speed() -> f64 {
    3.0
}

fn default_wander_step() -> f64 {
    2.0
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RunConfig {
    #[serde(default = "default_ticks")]
    pub ticks: u64,
    /// Delay between ticks, honoured only when `realtime` is set.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default)]
    pub realtime: bool,
    #[serde(default)]
    pub handler: CollisionHandler,
    /// Use exact circle contact instead of the doubled-extent threshold.
    #[serde(default)]
    pub exact_contact: bool,
    /// Fixed RNG seed; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Command keys applied before the first tick, e.g. `"wrrd"`.
    #[serde(default)]
    pub commands: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: default_ticks(),
            delay_ms: default_delay_ms(),
            realtime: false,
            handler: CollisionHandler::default(),
            exact_contact: false,
            seed: None,
            commands: String::new(),
        }
    }
}

fn default_ticks() -> u64 {
    200
}

fn default_delay_ms() -> u64 {
    100
}
