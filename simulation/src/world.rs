use collisions::{CollisionDetector, ThresholdPolicy};
use common::shapes::Rectangle;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::blob::{Blob, BlobKind};
use crate::command::{CollisionHandler, Command, SCATTER_COUNT};
use crate::config::{BlobConfig, Config};
use crate::error::{SimulationError, SimulationResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    /// Blobs alive after the handler ran.
    pub population: usize,
    /// Sorted indices (before removal) of this tick's colliders.
    pub colliders: Vec<usize>,
    pub removed: usize,
    /// Collision detection failed and the handler did not run.
    pub skipped: bool,
}

/// Aggregate over a run of ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub skipped_ticks: u64,
    pub removed: usize,
    pub peak_colliders: usize,
    pub final_population: usize,
}

impl RunSummary {
    /// Summary of a run that starts with `population` blobs.
    pub fn starting_with(population: usize) -> Self {
        Self {
            final_population: population,
            ..Self::default()
        }
    }

    pub fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        if report.skipped {
            self.skipped_ticks += 1;
        }
        self.removed += report.removed;
        self.peak_colliders = self.peak_colliders.max(report.colliders.len());
        self.final_population = report.population;
    }
}

/// All mutable simulation state, passed around explicitly.
pub struct World {
    universe: Rectangle,
    blobs: Vec<Blob>,
    detector: CollisionDetector,
    handler: CollisionHandler,
    spawn_kind: BlobKind,
    blob_config: BlobConfig,
    delay_ms: u64,
    tick: u64,
}

impl World {
    pub fn new(config: &Config) -> SimulationResult<Self> {
        config.blobs.validate()?;
        let universe = config.universe();
        let policy = if config.run.exact_contact {
            ThresholdPolicy::ExactContact
        } else {
            ThresholdPolicy::DoubledExtent
        };
        let detector = CollisionDetector::new(universe)?.with_policy(policy);
        Ok(Self {
            universe,
            blobs: Vec::new(),
            detector,
            handler: config.run.handler,
            spawn_kind: config.blobs.kind,
            blob_config: config.blobs.clone(),
            delay_ms: config.run.delay_ms.max(1),
            tick: 0,
        })
    }

    pub fn universe(&self) -> Rectangle {
        self.universe
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn handler(&self) -> CollisionHandler {
        self.handler
    }

    pub fn spawn_kind(&self) -> BlobKind {
        self.spawn_kind
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Adds a prepared blob, e.g. one with a fixed velocity.
    pub fn add_blob(&mut self, blob: Blob) -> SimulationResult<()> {
        if !self.universe.contains_point(blob.x, blob.y) {
            return Err(SimulationError::OutsideUniverse {
                x: blob.x,
                y: blob.y,
            });
        }
        self.blobs.push(blob);
        Ok(())
    }

    /// Adds a blob of the current spawn kind at `(x, y)`.
    pub fn spawn<R: Rng>(&mut self, x: f64, y: f64, rng: &mut R) -> SimulationResult<()> {
        let blob = Blob::spawn(self.spawn_kind, x, y, &self.blob_config, rng);
        self.add_blob(blob)
    }

    /// Adds `count` blobs of the current spawn kind at random positions.
    pub fn scatter<R: Rng>(&mut self, count: usize, rng: &mut R) {
        for _ in 0..count {
            let (x, y) = self.universe.get_random_point_inside(0.0, rng);
            let blob = Blob::spawn(self.spawn_kind, x, y, &self.blob_config, rng);
            self.blobs.push(blob);
        }
    }

    pub fn apply<R: Rng>(&mut self, command: Command, rng: &mut R) {
        match command {
            Command::Faster => {
                if self.delay_ms > 1 {
                    self.delay_ms /= 2;
                }
                info!("delay: {}ms", self.delay_ms);
            }
            Command::Slower => {
                self.delay_ms = self.delay_ms.saturating_mul(2);
                info!("delay: {}ms", self.delay_ms);
            }
            Command::Scatter => self.scatter(SCATTER_COUNT, rng),
            Command::SetHandler(handler) => {
                self.handler = handler;
                info!("collision handler: {:?}", handler);
            }
            Command::SetBlobKind(kind) => {
                self.spawn_kind = kind;
                debug!("spawn kind: {:?}", kind);
            }
        }
    }

    /// Moves every blob, detects collisions on the new positions and applies
    /// the current handler.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> TickReport {
        self.tick += 1;
        for blob in self.blobs.iter_mut() {
            blob.step(&self.universe, rng);
        }

        let mut report = TickReport {
            tick: self.tick,
            ..TickReport::default()
        };

        let colliders = match self.detector.detect(&self.blobs) {
            Ok(colliders) => colliders,
            Err(err) => {
                warn!(tick = self.tick, "collision detection failed, skipping tick: {}", err);
                report.skipped = true;
                report.population = self.blobs.len();
                return report;
            }
        };
        let mut colliders: Vec<usize> = colliders.into_iter().collect();
        colliders.sort_unstable();

        match self.handler {
            CollisionHandler::Color => {
                for blob in self.blobs.iter_mut() {
                    blob.highlighted = false;
                }
                for &i in &colliders {
                    self.blobs[i].collided = true;
                    self.blobs[i].highlighted = true;
                }
            }
            CollisionHandler::Destroy => {
                let before = self.blobs.len();
                let mut idx = 0;
                self.blobs.retain(|_| {
                    let keep = colliders.binary_search(&idx).is_err();
                    idx += 1;
                    keep
                });
                report.removed = before - self.blobs.len();
            }
            CollisionHandler::Ignore => {}
        }

        report.population = self.blobs.len();
        report.colliders = colliders;
        debug!(
            tick = report.tick,
            population = report.population,
            colliders = report.colliders.len(),
            removed = report.removed,
            "tick complete"
        );
        report
    }
}
