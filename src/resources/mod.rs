//! ECS resources owned by the camera crate.
//!
//! Submodules:
//! - [`camera2d`] – the camera/viewport orchestrator
//! - [`cameraconfig`] – INI-backed camera defaults
//! - [`overlaypool`] – checkout/return arena for overlay colors and tweens
//! - [`worldtime`] – per-frame clock shared by the update systems

pub mod camera2d;
pub mod cameraconfig;
pub mod overlaypool;
pub mod worldtime;
