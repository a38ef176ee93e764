//! Headless blob simulation: entities move every tick, the collision detector
//! rebuilds its quadtree from their new positions and a handler reacts to the
//! colliders.

pub mod blob;
pub mod command;
pub mod config;
pub mod error;
pub mod world;

pub use blob::{Blob, BlobKind};
pub use command::{parse_script, CollisionHandler, Command};
pub use config::Config;
pub use error::{SimulationError, SimulationResult};
pub use world::{RunSummary, TickReport, World};
