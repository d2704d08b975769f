//! Axis-aligned bounds rectangle.
//!
//! Stores a min/max corner pair and provides the containment and overlap
//! math used by the camera's position clamp and visibility checks.

use raylib::prelude::{Rectangle, Vector2};

/// Axis-aligned rectangle stored as min/max corners.
///
/// Used as the legal range for the camera position and as the world-space
/// extent of drawables for visibility tests. Construction does not
/// validate the corners; degenerate rectangles are the caller's
/// responsibility.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Top-left corner.
    pub min: Vector2,
    /// Bottom-right corner.
    pub max: Vector2,
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            min: Vector2 { x: 0.0, y: 0.0 },
            max: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl Bounds {
    /// Create bounds from explicit min/max corners.
    pub fn from_min_max(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Bounds {
            min: Vector2 { x: min_x, y: min_y },
            max: Vector2 { x: max_x, y: max_y },
        }
    }

    /// Create bounds from a top-left corner and a size.
    pub fn from_rect(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::from_min_max(x, y, x + w, y + h)
    }

    /// Redefine both corners.
    pub fn set_min_max(&mut self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) {
        self.min.x = min_x;
        self.min.y = min_y;
        self.max.x = max_x;
        self.max.y = max_y;
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// AABB overlap test, inclusive of touching edges.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Whether the point lies inside the bounds, inclusive of edges.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min.x && x <= self.max.x && y >= self.min.y && y <= self.max.y
    }

    /// The same region as a raylib [`Rectangle`].
    pub fn as_rect(&self) -> Rectangle {
        Rectangle {
            x: self.min.x,
            y: self.min.y,
            width: self.width(),
            height: self.height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_from_rect_derives_corners() {
        let b = Bounds::from_rect(10.0, 20.0, 100.0, 50.0);
        assert!(approx_eq(b.left(), 10.0));
        assert!(approx_eq(b.top(), 20.0));
        assert!(approx_eq(b.right(), 110.0));
        assert!(approx_eq(b.bottom(), 70.0));
        assert!(approx_eq(b.width(), 100.0));
        assert!(approx_eq(b.height(), 50.0));
    }

    #[test]
    fn test_set_min_max_replaces_both_corners() {
        let mut b = Bounds::default();
        b.set_min_max(-5.0, -10.0, 5.0, 10.0);
        assert!(approx_eq(b.width(), 10.0));
        assert!(approx_eq(b.height(), 20.0));
        assert!(approx_eq(b.left(), -5.0));
        assert!(approx_eq(b.bottom(), 10.0));
    }

    #[test]
    fn test_overlaps_disjoint_and_touching() {
        let a = Bounds::from_rect(0.0, 0.0, 10.0, 10.0);
        let apart = Bounds::from_rect(20.0, 20.0, 5.0, 5.0);
        let touching = Bounds::from_rect(10.0, 0.0, 5.0, 5.0);
        let inside = Bounds::from_rect(2.0, 2.0, 3.0, 3.0);

        assert!(!a.overlaps(&apart));
        assert!(a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_contains_point_edges_inclusive() {
        let b = Bounds::from_rect(0.0, 0.0, 10.0, 10.0);
        assert!(b.contains_point(0.0, 0.0));
        assert!(b.contains_point(10.0, 10.0));
        assert!(b.contains_point(5.0, 5.0));
        assert!(!b.contains_point(-0.1, 5.0));
        assert!(!b.contains_point(5.0, 10.1));
    }

    #[test]
    fn test_as_rect_matches_extent() {
        let b = Bounds::from_min_max(1.0, 2.0, 4.0, 6.0);
        let r = b.as_rect();
        assert!(approx_eq(r.x, 1.0));
        assert!(approx_eq(r.y, 2.0));
        assert!(approx_eq(r.width, 3.0));
        assert!(approx_eq(r.height, 4.0));
    }
}
