//! Solid color backdrop.
//!
//! Fills the entire camera viewport with one color regardless of the
//! scene transform. Useful as the bottom layer of a scene stack and as a
//! minimal [`Scene`] for tests and demos.

use raylib::prelude::{Color, Rectangle, Vector2};

use super::{Renderer2D, Scene};

/// A full-viewport color layer.
#[derive(Debug, Clone)]
pub struct ColorLayer {
    /// Layer name, for diagnostics.
    pub name: String,
    /// Fill color.
    pub color: Color,
    offset: Vector2,
}

impl ColorLayer {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        ColorLayer {
            name: name.into(),
            color,
            offset: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Accumulated scene translation; the fill ignores it by design, but
    /// stacked scenes may consult it.
    pub fn offset(&self) -> Vector2 {
        self.offset
    }
}

impl Scene for ColorLayer {
    fn translate(&mut self, dx: f32, dy: f32) {
        self.offset.x += dx;
        self.offset.y += dy;
    }

    fn draw(&mut self, renderer: &mut dyn Renderer2D, view: &Rectangle) {
        renderer.save();
        // Cover the whole camera area, not just the translated content.
        renderer.reset_transform();
        renderer.set_color(self.color);
        renderer.fill_rect(0.0, 0.0, view.width, view.height);
        renderer.restore();
    }
}
