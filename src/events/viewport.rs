//! Viewport messages published by the camera.

use bevy_ecs::message::Message;
use raylib::prelude::Vector2;

/// Emitted once after a viewport resize has completed, carrying the new
/// viewport dimensions.
#[derive(Message, Debug, Clone, Copy)]
pub struct ViewportResized {
    pub width: f32,
    pub height: f32,
}

/// Emitted when the camera position or transform changed this frame,
/// carrying the current position.
#[derive(Message, Debug, Clone, Copy)]
pub struct ViewportChanged {
    pub pos: Vector2,
}
