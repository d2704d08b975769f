//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` to the provided delta.

use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update the `WorldTime` resource for a new frame.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The raw
/// delta is kept alongside the scaled one so persistent effects keep
/// running while the world clock is paused.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.raw_delta = dt;
    wt.delta = scaled_dt;
    wt.elapsed += scaled_dt;
    wt.frame_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applies_time_scale_but_keeps_raw_delta() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(0.5));

        update_world_time(&mut world, 0.2);

        let wt = world.resource::<WorldTime>();
        assert!((wt.delta - 0.1).abs() < 1e-6);
        assert!((wt.raw_delta - 0.2).abs() < 1e-6);
        assert!((wt.elapsed - 0.1).abs() < 1e-6);
        assert_eq!(wt.frame_count, 1);
    }

    #[test]
    fn test_paused_world_still_tracks_raw_delta() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(0.0));

        update_world_time(&mut world, 0.016);

        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.delta, 0.0);
        assert!((wt.raw_delta - 0.016).abs() < 1e-6);
        assert_eq!(wt.elapsed, 0.0);
    }
}
