use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidBounds {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    PointOutOfBounds {
        x: f64,
        y: f64,
        bounds_x1: f64,
        bounds_y1: f64,
        bounds_x2: f64,
        bounds_y2: f64,
    },
    InvalidQuadrant { value: u8 },
    CapacityExceeded { nodes: usize },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidBounds { x1, y1, x2, y2 } => {
                write!(
                    f,
                    "bounds must be finite with x1 <= x2 and y1 <= y2 (x1: {}, y1: {}, x2: {}, y2: {})",
                    x1, y1, x2, y2
                )
            }
            QuadtreeError::PointOutOfBounds {
                x,
                y,
                bounds_x1,
                bounds_y1,
                bounds_x2,
                bounds_y2,
            } => {
                write!(
                    f,
                    "point must be finite and within quadtree bounds (x: {}, y: {}, bounds_x1: {}, bounds_y1: {}, bounds_x2: {}, bounds_y2: {})",
                    x, y, bounds_x1, bounds_y1, bounds_x2, bounds_y2
                )
            }
            QuadtreeError::InvalidQuadrant { value } => {
                write!(f, "quadrant must be in 1..=4 (value: {})", value)
            }
            QuadtreeError::CapacityExceeded { nodes } => {
                write!(f, "quadtree node capacity exceeded (nodes: {})", nodes)
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
