//! Call-recording renderer for tests (no GPU or window required).
//!
//! Records every [`Renderer2D`] call in order so tests can assert on the
//! exact stream the camera issues: projection installs, clip rectangles,
//! save/restore bracketing and overlay fills.

use glam::Mat4;
use raylib::prelude::{Color, Rectangle};

use super::Renderer2D;

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    SetProjection,
    ClipRect { x: f32, y: f32, w: f32, h: f32 },
    Save,
    Restore,
    ResetTransform,
    SetColor { r: u8, g: u8, b: u8, a: u8 },
    FillRect { x: f32, y: f32, w: f32, h: f32 },
}

/// Renderer double that records its call stream.
#[derive(Debug)]
pub struct RecordingRenderer {
    /// Every call in issue order.
    pub calls: Vec<RenderCall>,
    /// Render surface size used by `overlaps`.
    pub screen_width: f32,
    /// Render surface size used by `overlaps`.
    pub screen_height: f32,
}

impl RecordingRenderer {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        RecordingRenderer {
            calls: Vec::new(),
            screen_width,
            screen_height,
        }
    }

    /// Number of recorded calls matching the predicate.
    pub fn count(&self, predicate: impl Fn(&RenderCall) -> bool) -> usize {
        self.calls.iter().filter(|c| predicate(c)).count()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Renderer2D for RecordingRenderer {
    fn set_projection(&mut self, _projection: &Mat4) {
        self.calls.push(RenderCall::SetProjection);
    }

    fn clip_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(RenderCall::ClipRect { x, y, w, h });
    }

    fn save(&mut self) {
        self.calls.push(RenderCall::Save);
    }

    fn restore(&mut self) {
        self.calls.push(RenderCall::Restore);
    }

    fn reset_transform(&mut self) {
        self.calls.push(RenderCall::ResetTransform);
    }

    fn set_color(&mut self, color: Color) {
        self.calls.push(RenderCall::SetColor {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(RenderCall::FillRect { x, y, w, h });
    }

    fn overlaps(&self, rect: &Rectangle) -> bool {
        rect.x <= self.screen_width
            && rect.x + rect.width >= 0.0
            && rect.y <= self.screen_height
            && rect.y + rect.height >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls_in_order() {
        let mut renderer = RecordingRenderer::new(800.0, 600.0);
        renderer.save();
        renderer.set_color(Color::RED);
        renderer.fill_rect(0.0, 0.0, 10.0, 10.0);
        renderer.restore();

        assert_eq!(
            renderer.calls,
            vec![
                RenderCall::Save,
                RenderCall::SetColor {
                    r: 230,
                    g: 41,
                    b: 55,
                    a: 255
                },
                RenderCall::FillRect {
                    x: 0.0,
                    y: 0.0,
                    w: 10.0,
                    h: 10.0
                },
                RenderCall::Restore,
            ]
        );
    }

    #[test]
    fn test_overlaps_screen_rect() {
        let renderer = RecordingRenderer::new(800.0, 600.0);
        let inside = Rectangle {
            x: 10.0,
            y: 10.0,
            width: 100.0,
            height: 100.0,
        };
        let outside = Rectangle {
            x: 900.0,
            y: 10.0,
            width: 100.0,
            height: 100.0,
        };
        assert!(renderer.overlaps(&inside));
        assert!(!renderer.overlaps(&outside));
    }
}
