//! Typed notifications exchanged with the camera.
//!
//! The camera consumes scene-level notifications and publishes viewport
//! notifications, all as typed bevy_ecs messages so there is no
//! stringly-typed topic matching anywhere.
//!
//! Submodules:
//! - [`scene`] – messages the camera reacts to (`SceneReset`, `CanvasResized`)
//! - [`viewport`] – messages the camera emits (`ViewportChanged`, `ViewportResized`)
//!
//! See [`crate::systems::camera`] for the systems that pump these queues.

pub mod scene;
pub mod viewport;
