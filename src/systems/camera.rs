//! Camera update system and message pump.
//!
//! [`camera_update_system`] is the camera's once-per-frame driver: it
//! reacts to scene notifications, resolves the follow target, advances
//! the camera and republishes its notices as typed messages.
//! [`update_camera_messages`] advances the message queues once per frame
//! so readers in the next frame still see this frame's writes.

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::mapposition::MapPosition;
use crate::events::scene::{CanvasResized, SceneReset};
use crate::events::viewport::{ViewportChanged, ViewportResized};
use crate::resources::camera2d::{Camera2D, CameraNotice, FollowTarget};
use crate::resources::overlaypool::OverlayPool;
use crate::resources::worldtime::WorldTime;

/// Drive the camera for one frame.
///
/// Order within the frame: scene notifications first (reset, resize),
/// then target resolution, then the camera update, then notice
/// publication. Run it after
/// [`update_world_time`](crate::systems::time::update_world_time).
pub fn camera_update_system(
    time: Res<WorldTime>,
    mut camera: ResMut<Camera2D>,
    mut pool: ResMut<OverlayPool>,
    positions: Query<&MapPosition>,
    mut resets: MessageReader<SceneReset>,
    mut resizes: MessageReader<CanvasResized>,
    mut changed: MessageWriter<ViewportChanged>,
    mut resized: MessageWriter<ViewportResized>,
    mut missing_target_warned: Local<bool>,
) {
    for reset in resets.read() {
        camera.reset(reset.x, reset.y);
    }
    for resize in resizes.read() {
        camera.resize(resize.width, resize.height);
    }

    let resolved = match camera.target() {
        Some(FollowTarget::Point(point)) => Some(point),
        Some(FollowTarget::Entity(entity)) => match positions.get(entity) {
            Ok(position) => {
                *missing_target_warned = false;
                Some(position.as_vector2())
            }
            Err(_) => {
                // Weak-reference semantics: a despawned target stops
                // producing positions; the camera holds still.
                if !*missing_target_warned {
                    warn!("camera follow target {entity} has no MapPosition; holding position");
                    *missing_target_warned = true;
                }
                None
            }
        },
        None => None,
    };
    camera.set_target_position(resolved);

    camera.update(&time, &mut pool);

    for notice in camera.take_notices() {
        match notice {
            CameraNotice::Changed { pos } => {
                changed.write(ViewportChanged { pos });
            }
            CameraNotice::Resized { width, height } => {
                resized.write(ViewportResized { width, height });
            }
        }
    }
}

/// Advance the ECS message queues used by the camera.
///
/// Bevy ECS' `Messages` API requires calling `update()` once per frame to
/// rotate the double buffer; without it messages never expire.
pub fn update_camera_messages(
    mut resets: ResMut<Messages<SceneReset>>,
    mut resizes: ResMut<Messages<CanvasResized>>,
    mut changed: ResMut<Messages<ViewportChanged>>,
    mut resized: ResMut<Messages<ViewportResized>>,
) {
    resets.update();
    resizes.update();
    changed.update();
    resized.update();
}
