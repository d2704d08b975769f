//! Scene-level messages the camera subscribes to for its lifetime.

use bevy_ecs::message::Message;

/// The scene was reset; the camera repositions to `(x, y)`, drops its
/// follow target and restores its damping defaults.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct SceneReset {
    pub x: f32,
    pub y: f32,
}

impl Default for SceneReset {
    fn default() -> Self {
        SceneReset { x: 0.0, y: 0.0 }
    }
}

/// The rendering canvas changed size; the camera resizes its viewport,
/// bounds and deadzone to match.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct CanvasResized {
    pub width: f32,
    pub height: f32,
}
