//! Camera building blocks.
//!
//! Submodules:
//! - [`bounds`] – axis-aligned clamp region for the camera position
//! - [`deadzone`] – camera-local rectangle the followed target may roam
//! - [`mapposition`] – world-space position component (followable targets)
//! - [`tween`] – scalar alpha tween driving the fade effects

pub mod bounds;
pub mod deadzone;
pub mod mapposition;
pub mod tween;
