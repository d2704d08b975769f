//! World time resource.
//!
//! Holds the per-frame clock written once per frame by
//! [`update_world_time`](crate::systems::time::update_world_time).
//! `delta` carries the scaled frame delta; `raw_delta` the unscaled one,
//! which persistent effects (fades) use so they keep running while the
//! world clock is paused or slowed.

use bevy_ecs::prelude::Resource;

/// Frame clock in seconds.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds accumulated since startup.
    pub elapsed: f32,
    /// Scaled delta of the current frame.
    pub delta: f32,
    /// Unscaled delta of the current frame.
    pub raw_delta: f32,
    /// Multiplier applied to the raw delta (0.0 pauses the world).
    pub time_scale: f32,
    /// Frames elapsed since startup.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            raw_delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
