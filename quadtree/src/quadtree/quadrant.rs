use crate::error::QuadtreeError;
use common::shapes::Rectangle;

/// One of the four regions around a node's anchor. `y` grows downward, so
/// "upper" means `y <= anchor.y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Quadrant {
    UpperLeft = 1,
    UpperRight = 2,
    LowerLeft = 3,
    LowerRight = 4,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperLeft,
        Quadrant::UpperRight,
        Quadrant::LowerLeft,
        Quadrant::LowerRight,
    ];

    /// 1 through 4.
    #[inline(always)]
    pub fn number(self) -> u8 {
        self as u8
    }

    #[inline(always)]
    pub(crate) fn slot(self) -> usize {
        self as usize - 1
    }

    /// Routes a point to exactly one quadrant. Ties on the anchor's x go left,
    /// ties on its y go up, so a point sharing a coordinate with the anchor
    /// never lands in two branches.
    #[inline(always)]
    pub fn classify(anchor_x: f64, anchor_y: f64, x: f64, y: f64) -> Quadrant {
        let left = x <= anchor_x;
        let up = y <= anchor_y;
        match (left, up) {
            (true, true) => Quadrant::UpperLeft,
            (false, true) => Quadrant::UpperRight,
            (true, false) => Quadrant::LowerLeft,
            (false, false) => Quadrant::LowerRight,
        }
    }

    /// `parent` clipped at the anchor's coordinates on this quadrant's side.
    pub fn child_bounds(self, parent: &Rectangle, anchor_x: f64, anchor_y: f64) -> Rectangle {
        match self {
            Quadrant::UpperLeft => Rectangle::new(parent.x1, parent.y1, anchor_x, anchor_y),
            Quadrant::UpperRight => Rectangle::new(anchor_x, parent.y1, parent.x2, anchor_y),
            Quadrant::LowerLeft => Rectangle::new(parent.x1, anchor_y, anchor_x, parent.y2),
            Quadrant::LowerRight => Rectangle::new(anchor_x, anchor_y, parent.x2, parent.y2),
        }
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = QuadtreeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Quadrant::UpperLeft),
            2 => Ok(Quadrant::UpperRight),
            3 => Ok(Quadrant::LowerLeft),
            4 => Ok(Quadrant::LowerRight),
            _ => Err(QuadtreeError::InvalidQuadrant { value }),
        }
    }
}
