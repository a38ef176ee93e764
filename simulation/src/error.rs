use std::path::PathBuf;

use quadtree::QuadtreeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("quadtree error: {0}")]
    Quadtree(#[from] QuadtreeError),

    #[error("failed to read config {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("blobs.{field} must be finite and non-negative, got {value}")]
    InvalidBlobConfig { field: &'static str, value: f64 },

    #[error("unknown command key {0:?}")]
    UnknownCommand(char),

    #[error("position ({x}, {y}) is outside the universe")]
    OutsideUniverse { x: f64, y: f64 },
}

pub type SimulationResult<T> = Result<T, SimulationError>;
