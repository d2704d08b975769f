//! Camera configuration resource.
//!
//! Manages camera defaults loaded from an INI configuration file.
//! Provides safe startup values and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [viewport]
//! width = 640
//! height = 360
//!
//! [camera]
//! near = -1000.0
//! far = 1000.0
//! damping = 1.0
//! deadzone_divisor = 6.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_VIEWPORT_WIDTH: u32 = 640;
const DEFAULT_VIEWPORT_HEIGHT: u32 = 360;
const DEFAULT_NEAR: f32 = -1000.0;
const DEFAULT_FAR: f32 = 1000.0;
const DEFAULT_DAMPING: f32 = 1.0;
const DEFAULT_DEADZONE_DIVISOR: f32 = 6.0;
const DEFAULT_CONFIG_PATH: &str = "./camera.ini";

/// Camera configuration resource.
///
/// Stores viewport dimensions, projection planes and follow defaults.
/// Missing file entries retain their defaults, so partial configuration
/// files are fine.
#[derive(Resource, Debug, Clone)]
pub struct CameraConfig {
    /// Viewport width in pixels.
    pub viewport_width: u32,
    /// Viewport height in pixels.
    pub viewport_height: u32,
    /// Near projection plane.
    pub near: f32,
    /// Far projection plane.
    pub far: f32,
    /// Default follow damping in [0, 1].
    pub damping: f32,
    /// Divisor used to derive the default deadzone from the viewport
    /// size (6.0 means a sixth of the view per axis).
    pub deadzone_divisor: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            damping: DEFAULT_DAMPING,
            deadzone_divisor: DEFAULT_DEADZONE_DIVISOR,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [viewport] section
        if let Some(width) = config.getuint("viewport", "width").ok().flatten() {
            self.viewport_width = width as u32;
        }
        if let Some(height) = config.getuint("viewport", "height").ok().flatten() {
            self.viewport_height = height as u32;
        }

        // [camera] section
        if let Some(near) = config.getfloat("camera", "near").ok().flatten() {
            self.near = near as f32;
        }
        if let Some(far) = config.getfloat("camera", "far").ok().flatten() {
            self.far = far as f32;
        }
        if let Some(damping) = config.getfloat("camera", "damping").ok().flatten() {
            self.damping = (damping as f32).clamp(0.0, 1.0);
        }
        if let Some(divisor) = config.getfloat("camera", "deadzone_divisor").ok().flatten() {
            if divisor as f32 > 0.0 {
                self.deadzone_divisor = divisor as f32;
            }
        }

        info!(
            "Loaded camera config: {}x{} viewport, near={}, far={}, damping={}, deadzone_divisor={}",
            self.viewport_width,
            self.viewport_height,
            self.near,
            self.far,
            self.damping,
            self.deadzone_divisor
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [viewport] section
        config.set("viewport", "width", Some(self.viewport_width.to_string()));
        config.set("viewport", "height", Some(self.viewport_height.to_string()));

        // [camera] section
        config.set("camera", "near", Some(self.near.to_string()));
        config.set("camera", "far", Some(self.far.to_string()));
        config.set("camera", "damping", Some(self.damping.to_string()));
        config.set(
            "camera",
            "deadzone_divisor",
            Some(self.deadzone_divisor.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved camera config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the viewport size.
    pub fn viewport_size(&self) -> (u32, u32) {
        (self.viewport_width, self.viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_safe() {
        let cfg = CameraConfig::new();
        assert_eq!(cfg.viewport_size(), (640, 360));
        assert_eq!(cfg.near, -1000.0);
        assert_eq!(cfg.far, 1000.0);
        assert_eq!(cfg.damping, 1.0);
        assert_eq!(cfg.deadzone_divisor, 6.0);
    }

    #[test]
    fn test_load_missing_file_keeps_defaults() {
        let mut cfg = CameraConfig::with_path("./definitely/not/here.ini");
        assert!(cfg.load_from_file().is_err());
        assert_eq!(cfg.viewport_size(), (640, 360));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join("viewfinder_cameraconfig_test.ini");
        let mut saved = CameraConfig::with_path(&path);
        saved.viewport_width = 1280;
        saved.viewport_height = 720;
        saved.damping = 0.25;
        saved.deadzone_divisor = 4.0;
        saved.save_to_file().expect("save should succeed");

        let mut loaded = CameraConfig::with_path(&path);
        loaded.load_from_file().expect("load should succeed");
        assert_eq!(loaded.viewport_size(), (1280, 720));
        assert!((loaded.damping - 0.25).abs() < 1e-6);
        assert!((loaded.deadzone_divisor - 4.0).abs() < 1e-6);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_clamps_damping() {
        let path = std::env::temp_dir().join("viewfinder_cameraconfig_clamp_test.ini");
        let mut saved = CameraConfig::with_path(&path);
        saved.save_to_file().expect("save should succeed");

        // Rewrite damping with an out-of-range value by hand.
        let text = std::fs::read_to_string(&path).unwrap();
        let text = text.replace("damping=1", "damping=3.5");
        std::fs::write(&path, text).unwrap();

        let mut loaded = CameraConfig::with_path(&path);
        loaded.load_from_file().expect("load should succeed");
        assert!((loaded.damping - 1.0).abs() < 1e-6);

        let _ = std::fs::remove_file(&path);
    }
}
