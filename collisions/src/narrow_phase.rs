use common::Positioned;
use nalgebra::Isometry2;
use parry2d_f64::query;
use parry2d_f64::shape::Ball;

// Entity coordinates are f64; the f64 build of parry keeps them that way so
// the contact test agrees with `point_in_circle` at the boundary.
pub struct ShapeWithPosition {
    pub shape: Ball,
    pub position: Isometry2<f64>,
}

impl ShapeWithPosition {
    /// Ball of radius `extent` centred on the entity. Negative extents are
    /// treated as points.
    pub fn from_entity<T: Positioned + ?Sized>(entity: &T) -> Self {
        Self {
            shape: Ball::new(entity.extent().max(0.0)),
            position: Isometry2::translation(entity.x(), entity.y()),
        }
    }
}

/// Exact circle/circle overlap, touching included.
pub fn balls_touch(a: &ShapeWithPosition, b: &ShapeWithPosition) -> bool {
    query::intersection_test(&a.position, &a.shape, &b.position, &b.shape).unwrap_or(false)
}
