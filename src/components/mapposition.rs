//! World-space position component.
//!
//! Any entity carrying a [`MapPosition`] can be followed by the camera:
//! the update system resolves the entity's position once per frame and
//! feeds it to the follow engine. The camera only ever reads the
//! position and never extends the entity's lifetime.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space 2D position in map units.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        MapPosition { x, y }
    }

    pub fn from_vector2(v: Vector2) -> Self {
        MapPosition { x: v.x, y: v.y }
    }

    pub fn as_vector2(&self) -> Vector2 {
        Vector2 {
            x: self.x,
            y: self.y,
        }
    }
}
