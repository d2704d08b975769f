//! Raylib-backed renderer for the demo binary.
//!
//! Maps the [`Renderer2D`] contract onto an active raylib draw handle.
//! Raylib's fixed-function pipeline owns its own screen-space projection,
//! so `set_projection` only sanity-logs; the scissor clip goes through
//! the ffi layer because the safe API models it as a scoped guard that
//! does not fit a stateful renderer.

use glam::Mat4;
use log::trace;
use raylib::ffi;
use raylib::prelude::*;

use super::Renderer2D;

/// Renderer adapter over a raylib draw handle.
pub struct RaylibRenderer<'a, 'h> {
    handle: &'a mut RaylibDrawHandle<'h>,
    color: Color,
    saved: Vec<Color>,
    scissor_active: bool,
    screen_width: f32,
    screen_height: f32,
}

impl<'a, 'h> RaylibRenderer<'a, 'h> {
    pub fn new(handle: &'a mut RaylibDrawHandle<'h>) -> Self {
        let screen_width = handle.get_screen_width() as f32;
        let screen_height = handle.get_screen_height() as f32;
        RaylibRenderer {
            handle,
            color: Color::WHITE,
            saved: Vec::new(),
            scissor_active: false,
            screen_width,
            screen_height,
        }
    }
}

impl Renderer2D for RaylibRenderer<'_, '_> {
    fn set_projection(&mut self, _projection: &Mat4) {
        // Raylib already renders in an orthographic (0,w)x(0,h) space.
        trace!("projection install ignored by the raylib backend");
    }

    fn clip_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        if self.scissor_active {
            unsafe { ffi::EndScissorMode() };
        }
        unsafe { ffi::BeginScissorMode(x as i32, y as i32, w as i32, h as i32) };
        self.scissor_active = true;
    }

    fn save(&mut self) {
        self.saved.push(self.color);
    }

    fn restore(&mut self) {
        if let Some(color) = self.saved.pop() {
            self.color = color;
        }
    }

    fn reset_transform(&mut self) {
        // Drawing already happens in screen space; the scene applies its
        // own translation before issuing fills.
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.handle
            .draw_rectangle(x as i32, y as i32, w as i32, h as i32, self.color);
    }

    fn overlaps(&self, rect: &Rectangle) -> bool {
        rect.x <= self.screen_width
            && rect.x + rect.width >= 0.0
            && rect.y <= self.screen_height
            && rect.y + rect.height >= 0.0
    }
}

impl Drop for RaylibRenderer<'_, '_> {
    fn drop(&mut self) {
        if self.scissor_active {
            unsafe { ffi::EndScissorMode() };
        }
    }
}
