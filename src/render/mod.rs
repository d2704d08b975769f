//! Renderer and scene collaborator contracts.
//!
//! The camera never rasterizes anything itself: it installs its
//! projection and clip on a [`Renderer2D`], delegates content drawing to
//! a [`Scene`], and only issues rectangle fills for its own fade
//! overlays. Both collaborators are traits so headless tests can drive
//! the full draw contract with the [`recording`] double.
//!
//! Submodules:
//! - [`colorlayer`] – solid color backdrop scene
//! - [`raylib_renderer`] – raylib-backed renderer for the demo binary
//! - [`recording`] – call-recording renderer for tests

pub mod colorlayer;
pub mod raylib_renderer;
pub mod recording;

use glam::Mat4;
use raylib::prelude::{Color, Rectangle};

/// Renderer backend contract consumed by the camera.
pub trait Renderer2D {
    /// Install the camera's projection matrix.
    fn set_projection(&mut self, projection: &Mat4);
    /// Clip subsequent rendering to the given screen rectangle.
    fn clip_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Push the current render state.
    fn save(&mut self);
    /// Pop the last saved render state.
    fn restore(&mut self);
    /// Drop any accumulated transform so drawing is in screen space.
    fn reset_transform(&mut self);
    /// Set the fill color for subsequent primitives.
    fn set_color(&mut self, color: Color);
    /// Fill a rectangle with the current color.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Whether a screen-space rectangle intersects the render surface.
    fn overlaps(&self, rect: &Rectangle) -> bool;
}

/// Scene container contract consumed by the camera's draw pass.
///
/// `view` is the camera's visible world rectangle; implementations are
/// expected to restrict drawing to it.
pub trait Scene {
    /// Shift the scene's rendering transform.
    fn translate(&mut self, dx: f32, dy: f32);
    /// Hook running before any content is drawn.
    fn pre_draw(&mut self, _renderer: &mut dyn Renderer2D) {}
    /// Draw the scene content restricted to `view`.
    fn draw(&mut self, renderer: &mut dyn Renderer2D, view: &Rectangle);
    /// Hook running after all content (camera overlays included).
    fn post_draw(&mut self, _renderer: &mut dyn Renderer2D) {}
}

/// Scoped scene translation.
///
/// Applies `(dx, dy)` on construction and the exact opposite translation
/// on drop, so a panic anywhere in the draw pass cannot leave the scene
/// transform permanently offset.
pub struct ScopedTranslate<'a> {
    scene: &'a mut dyn Scene,
    dx: f32,
    dy: f32,
}

impl<'a> ScopedTranslate<'a> {
    pub fn new(scene: &'a mut dyn Scene, dx: f32, dy: f32) -> Self {
        scene.translate(dx, dy);
        ScopedTranslate { scene, dx, dy }
    }
}

impl<'a> std::ops::Deref for ScopedTranslate<'a> {
    type Target = dyn Scene + 'a;

    fn deref(&self) -> &Self::Target {
        self.scene
    }
}

impl<'a> std::ops::DerefMut for ScopedTranslate<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.scene
    }
}

impl Drop for ScopedTranslate<'_> {
    fn drop(&mut self) {
        self.scene.translate(-self.dx, -self.dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TrackingScene {
        offset: (f32, f32),
    }

    impl Scene for TrackingScene {
        fn translate(&mut self, dx: f32, dy: f32) {
            self.offset.0 += dx;
            self.offset.1 += dy;
        }

        fn draw(&mut self, _renderer: &mut dyn Renderer2D, _view: &Rectangle) {}
    }

    #[test]
    fn test_scoped_translate_applies_and_reverts() {
        let mut scene = TrackingScene { offset: (0.0, 0.0) };
        {
            let _scoped = ScopedTranslate::new(&mut scene, -10.0, -20.0);
        }
        assert_eq!(scene.offset, (0.0, 0.0));
    }

    #[test]
    fn test_scoped_translate_reverts_on_panic() {
        let mut scene = TrackingScene { offset: (0.0, 0.0) };
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _scoped = ScopedTranslate::new(&mut scene, -5.0, -5.0);
            panic!("draw failed");
        }));
        assert!(result.is_err());
        assert_eq!(scene.offset, (0.0, 0.0));
    }
}
