//! Viewfinder library.
//!
//! A 2D orthographic camera/viewport controller for frame-stepped 2D
//! engines: deadzone target following with damped convergence, screen
//! shake and fade-to-color effects, an orthographic projection with a
//! maintained inverse transform for screen/world conversion, and world
//! bounds clamping.
//!
//! The camera is a bevy_ecs resource driven by the systems in
//! [`systems`], so it drops into any schedule-driven engine loop and can
//! be exercised directly from integration tests.

pub mod components;
pub mod events;
pub mod render;
pub mod resources;
pub mod systems;
