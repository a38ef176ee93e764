use common::shapes::Rectangle;
use common::Positioned;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::BlobConfig;

/// Movement policy of a blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BlobKind {
    /// Constant velocity, reflected off the universe walls.
    #[default]
    Bouncer,
    /// Fresh random step every tick.
    Wanderer,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Bounce { dx: f64, dy: f64 },
    Wander { step: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    /// Set the first time the blob is detected in a collision; never cleared.
    pub collided: bool,
    /// Collided during the latest tick under the colour handler.
    pub highlighted: bool,
    motion: Motion,
}

impl Blob {
    pub fn bouncer(x: f64, y: f64, r: f64, dx: f64, dy: f64) -> Self {
        Self::with_motion(x, y, r, Motion::Bounce { dx, dy })
    }

    pub fn wanderer(x: f64, y: f64, r: f64, step: f64) -> Self {
        Self::with_motion(x, y, r, Motion::Wander { step })
    }

    fn with_motion(x: f64, y: f64, r: f64, motion: Motion) -> Self {
        Self {
            x,
            y,
            r,
            collided: false,
            highlighted: false,
            motion,
        }
    }

    /// New blob of `kind` at `(x, y)`; bouncers get a random velocity of at
    /// most `max_speed` per axis.
    pub fn spawn<R: Rng>(kind: BlobKind, x: f64, y: f64, config: &BlobConfig, rng: &mut R) -> Self {
        match kind {
            BlobKind::Bouncer => {
                let dx = random_signed(rng, config.max_speed);
                let dy = random_signed(rng, config.max_speed);
                Self::bouncer(x, y, config.radius, dx, dy)
            }
            BlobKind::Wanderer => Self::wanderer(x, y, config.radius, config.wander_step),
        }
    }

    pub fn kind(&self) -> BlobKind {
        match self.motion {
            Motion::Bounce { .. } => BlobKind::Bouncer,
            Motion::Wander { .. } => BlobKind::Wanderer,
        }
    }

    /// Advances one tick. Blobs never leave `universe`.
    pub fn step<R: Rng>(&mut self, universe: &Rectangle, rng: &mut R) {
        match &mut self.motion {
            Motion::Bounce { dx, dy } => {
                self.x += *dx;
                self.y += *dy;
                if self.x < universe.x1 || self.x > universe.x2 {
                    *dx = -*dx;
                }
                if self.y < universe.y1 || self.y > universe.y2 {
                    *dy = -*dy;
                }
            }
            Motion::Wander { step } => {
                self.x += random_signed(rng, *step);
                self.y += random_signed(rng, *step);
            }
        }
        self.x = self.x.clamp(universe.x1, universe.x2);
        self.y = self.y.clamp(universe.y1, universe.y2);
    }
}

impl Positioned for Blob {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn extent(&self) -> f64 {
        self.r
    }
}

fn random_signed<R: Rng>(rng: &mut R, magnitude: f64) -> f64 {
    if magnitude > 0.0 {
        rng.gen_range(-magnitude..=magnitude)
    } else {
        0.0
    }
}
