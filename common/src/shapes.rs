use crate::geometry;
use crate::positioned::Positioned;

use rand::Rng;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        geometry::point_in_circle(x, y, self.x, self.y, self.radius)
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            radius: 0.0,
        }
    }
}

impl Positioned for Circle {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn extent(&self) -> f64 {
        self.radius
    }
}

/// Closed axis-aligned rectangle spanning `(x1, y1)` (upper-left) to
/// `(x2, y2)` (lower-right). `y` grows downward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rectangle {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Rectangle anchored at the origin, e.g. a `width` x `height` universe.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn center_x(&self) -> f64 {
        (self.x1 + self.x2) / 2.0
    }

    pub fn center_y(&self) -> f64 {
        (self.y1 + self.y2) / 2.0
    }

    pub fn top_left(&self) -> (f64, f64) {
        (self.x1, self.y1)
    }

    pub fn bottom_right(&self) -> (f64, f64) {
        (self.x2, self.y2)
    }

    /// Finite corners, not inverted. Zero width or height is allowed.
    pub fn is_valid(&self) -> bool {
        self.x1.is_finite()
            && self.y1.is_finite()
            && self.x2.is_finite()
            && self.y2.is_finite()
            && self.x1 <= self.x2
            && self.y1 <= self.y2
    }

    // Squared distance from the point to the nearest point of the rectangle.
    pub fn distance_to_point(&self, x: f64, y: f64) -> f64 {
        let dx = x - x.clamp(self.x1, self.x2);
        let dy = y - y.clamp(self.y1, self.y2);
        dx * dx + dy * dy
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        geometry::circle_rectangle(circle, self)
    }

    pub fn get_random_point_inside<R: Rng>(&self, margin: f64, rng: &mut R) -> (f64, f64) {
        (
            self._safe_randf64(rng, self.x1 + margin, self.x2 - margin),
            self._safe_randf64(rng, self.y1 + margin, self.y2 - margin),
        )
    }

    fn _safe_randf64<R: Rng>(&self, rng: &mut R, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: 0.0,
        }
    }
}
