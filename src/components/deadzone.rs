//! Camera deadzone rectangle.
//!
//! The deadzone is a rectangle in the camera's local frame. While the
//! followed target stays inside it the camera does not scroll; once the
//! target leaves it, the follow engine moves the camera just far enough
//! to bring the target back to the zone's edge.

use raylib::prelude::Vector2;

/// Rectangle in camera-local coordinates, stored as top-left + size.
///
/// The zone is re-derived from the viewport size on every resize and is
/// positioned slightly above center so the view favors what is ahead of
/// (above) the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Deadzone {
    /// Top-left corner relative to the camera's local origin.
    pub pos: Vector2,
    /// Zone width.
    pub width: f32,
    /// Zone height.
    pub height: f32,
}

impl Default for Deadzone {
    fn default() -> Self {
        Deadzone {
            pos: Vector2 { x: 0.0, y: 0.0 },
            width: 0.0,
            height: 0.0,
        }
    }
}

impl Deadzone {
    /// Derive a `w × h` deadzone for a `view_w × view_h` viewport.
    ///
    /// The zone is centered horizontally and shifted upward by a quarter
    /// of its own height. Corner coordinates are truncated to whole
    /// units.
    pub fn for_viewport(view_w: f32, view_h: f32, w: f32, h: f32) -> Self {
        Deadzone {
            pos: Vector2 {
                x: ((view_w - w) / 2.0).trunc(),
                y: ((view_h - h) / 2.0 - h * 0.25).trunc(),
            },
            width: w,
            height: h,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
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
    fn test_for_viewport_centers_horizontally() {
        let dz = Deadzone::for_viewport(800.0, 600.0, 100.0, 100.0);
        assert!(approx_eq(dz.pos.x, 350.0));
        assert!(approx_eq(dz.width, 100.0));
    }

    #[test]
    fn test_for_viewport_biases_upward() {
        // (600 - 100) / 2 - 100 * 0.25 = 250 - 25 = 225
        let dz = Deadzone::for_viewport(800.0, 600.0, 100.0, 100.0);
        assert!(approx_eq(dz.pos.y, 225.0));
        assert!(approx_eq(dz.bottom(), 325.0));
    }

    #[test]
    fn test_for_viewport_truncates_corner() {
        // (801 - 100) / 2 = 350.5 -> 350
        let dz = Deadzone::for_viewport(801.0, 600.0, 100.0, 100.0);
        assert!(approx_eq(dz.pos.x, 350.0));
    }

    #[test]
    fn test_edges_derive_from_pos_and_size() {
        let dz = Deadzone {
            pos: Vector2 { x: 10.0, y: 20.0 },
            width: 30.0,
            height: 40.0,
        };
        assert!(approx_eq(dz.left(), 10.0));
        assert!(approx_eq(dz.top(), 20.0));
        assert!(approx_eq(dz.right(), 40.0));
        assert!(approx_eq(dz.bottom(), 60.0));
    }

    #[test]
    fn test_default_viewport_sixth() {
        // The camera derives its default deadzone as a sixth of the view.
        let dz = Deadzone::for_viewport(400.0, 300.0, 400.0 / 6.0, 300.0 / 6.0);
        assert!((dz.width - 66.666_67).abs() < 1e-3);
        assert!(approx_eq(dz.height, 50.0));
    }
}
