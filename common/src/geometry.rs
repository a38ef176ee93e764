use crate::shapes::{Circle, Rectangle};

// Negative or NaN radius matches nothing.
#[inline(always)]
fn radius_sq(cr: f64) -> Option<f64> {
    if cr >= 0.0 {
        Some(cr * cr)
    } else {
        None
    }
}

/// True iff the circle and the closed rectangle share at least one point.
///
/// The circle centre is clamped into the rectangle and the squared distance to
/// that nearest point is compared against `cr²`, so circles poking into an
/// edge from outside are detected as well.
#[inline(always)]
pub fn circle_intersects_rectangle(
    cx: f64,
    cy: f64,
    cr: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> bool {
    let Some(r_sq) = radius_sq(cr) else {
        return false;
    };
    let nearest_x = cx.max(x1).min(x2);
    let nearest_y = cy.max(y1).min(y2);
    let dx = cx - nearest_x;
    let dy = cy - nearest_y;
    dx * dx + dy * dy <= r_sq
}

/// True iff `(px, py)` lies inside or on the circle.
#[inline(always)]
pub fn point_in_circle(px: f64, py: f64, cx: f64, cy: f64, cr: f64) -> bool {
    let Some(r_sq) = radius_sq(cr) else {
        return false;
    };
    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy <= r_sq
}

pub fn circle_rectangle(circle: &Circle, rectangle: &Rectangle) -> bool {
    circle_intersects_rectangle(
        circle.x,
        circle.y,
        circle.radius,
        rectangle.x1,
        rectangle.y1,
        rectangle.x2,
        rectangle.y2,
    )
}

pub fn circle_contains_point(circle: &Circle, x: f64, y: f64) -> bool {
    point_in_circle(x, y, circle.x, circle.y, circle.radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_poke_without_centre_inside() {
        // Centre left of the rectangle, radius reaches into the left edge.
        assert!(circle_intersects_rectangle(8.0, 15.0, 3.0, 10.0, 10.0, 20.0, 20.0));
        assert!(!circle_intersects_rectangle(6.0, 15.0, 3.0, 10.0, 10.0, 20.0, 20.0));
    }

    #[test]
    fn corner_uses_euclidean_distance() {
        // Inside the bounding box of the corner region but outside the circle.
        assert!(!circle_intersects_rectangle(8.0, 8.0, 2.5, 10.0, 10.0, 20.0, 20.0));
        assert!(circle_intersects_rectangle(8.0, 8.0, 2.9, 10.0, 10.0, 20.0, 20.0));
    }

    #[test]
    fn touching_counts() {
        assert!(circle_intersects_rectangle(7.0, 15.0, 3.0, 10.0, 10.0, 20.0, 20.0));
        assert!(point_in_circle(3.0, 4.0, 0.0, 0.0, 5.0));
    }

    #[test]
    fn negative_radius_matches_nothing() {
        assert!(!point_in_circle(0.0, 0.0, 0.0, 0.0, -1.0));
        assert!(!circle_intersects_rectangle(15.0, 15.0, -1.0, 10.0, 10.0, 20.0, 20.0));
        assert!(!point_in_circle(0.0, 0.0, 0.0, 0.0, f64::NAN));
    }

    #[test]
    fn zero_radius_is_a_point() {
        assert!(point_in_circle(1.0, 1.0, 1.0, 1.0, 0.0));
        assert!(!point_in_circle(1.0, 1.0 + 1e-9, 1.0, 1.0, 0.0));
        assert!(circle_intersects_rectangle(10.0, 12.0, 0.0, 10.0, 10.0, 20.0, 20.0));
    }
}
