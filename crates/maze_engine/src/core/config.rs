//! # Unified Configuration System
//!
//! All settings of a maze session in one place: the window the external
//! backend should open, which asset files to load, how the draw list is
//! derived and where the fixed camera sits.
//!
//! Every section implements `Default` and is marked `#[serde(default)]`, so a
//! config file only needs the keys it wants to override.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::foundation::math::Color;
use crate::scene::ModelId;

pub use crate::config::{Config, ConfigError};

/// # Window Configuration
///
/// Window parameters handed to the rendering backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Window title
    pub title: String,
}

impl WindowConfig {
    /// Width over height
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Maze".to_string(),
        }
    }
}

/// # Asset Configuration
///
/// Files loaded at startup. Model ids are assigned in the order of
/// `model_paths`, so reordering the list changes every id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Model files, in load order
    pub model_paths: Vec<PathBuf>,
    /// Level map file
    pub map_path: PathBuf,
}

impl AssetConfig {
    /// Resolve every path against `base`, leaving absolute paths alone
    pub fn with_base_dir(mut self, base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        for path in &mut self.model_paths {
            *path = base.join(&*path);
        }
        self.map_path = base.join(&self.map_path);
        self
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            model_paths: vec![
                PathBuf::from("resources/models/cube.txt"),
                PathBuf::from("resources/models/key.txt"),
            ],
            map_path: PathBuf::from("resources/maps/level1.txt"),
        }
    }
}

/// # Draw Configuration
///
/// Parameters of the per-frame draw-list derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    /// Model drawn for every floor tile and every wall block
    pub floor_model: ModelId,
    /// Z offset of floor instances
    pub floor_offset: f32,
    /// Z offset of wall instances
    pub wall_offset: f32,
    /// Tint of floor instances
    pub floor_tint: Color,
    /// Tint of wall instances
    pub wall_tint: Color,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            floor_model: ModelId(0),
            floor_offset: -1.0,
            wall_offset: 0.0,
            floor_tint: Color::gray(0.35),
            wall_tint: Color::WHITE,
        }
    }
}

/// # Camera Configuration
///
/// The fixed overhead camera looks at the grid centre from `height` units
/// above the floor, pulled back `tilt` units along the row axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Distance above the grid
    pub height: f32,
    /// Offset along the row axis
    pub tilt: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            height: 12.0,
            tilt: 6.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// # Complete Maze Configuration
///
/// Top-level configuration for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Window settings
    pub window: WindowConfig,
    /// Asset files
    pub assets: AssetConfig,
    /// Draw-list settings
    pub draw: DrawConfig,
    /// Camera settings
    pub camera: CameraConfig,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            window: WindowConfig::default(),
            assets: AssetConfig::default(),
            draw: DrawConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl MazeConfig {
    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Replace the asset configuration
    pub fn with_assets(mut self, assets: AssetConfig) -> Self {
        self.assets = assets;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "Window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }

        if self.assets.model_paths.is_empty() {
            return Err(ConfigError::Invalid(
                "At least one model must be configured".to_string(),
            ));
        }

        if self.draw.floor_model.index() >= self.assets.model_paths.len() {
            return Err(ConfigError::Invalid(format!(
                "Floor model #{} is out of range, only {} models configured",
                self.draw.floor_model.index(),
                self.assets.model_paths.len()
            )));
        }

        if self.camera.near <= 0.0 || self.camera.far <= self.camera.near {
            return Err(ConfigError::Invalid(format!(
                "Camera clip planes must satisfy 0 < near < far, got near={} far={}",
                self.camera.near, self.camera.far
            )));
        }

        if self.camera.height <= 0.0 {
            return Err(ConfigError::Invalid(
                "Camera height must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl Config for MazeConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = MazeConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.window.title, "Maze");
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert_eq!(config.draw.floor_offset, -1.0);
        assert_eq!(config.draw.wall_tint, Color::WHITE);
    }

    #[test]
    fn test_validation_failures() {
        let mut config = MazeConfig::default();
        config.draw.floor_model = ModelId(5);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("#5")));

        let mut config = MazeConfig::default();
        config.assets.model_paths.clear();
        assert!(config.validate().is_err());

        let mut config = MazeConfig::default();
        config.camera.far = config.camera.near;
        assert!(config.validate().is_err());

        let mut config = MazeConfig::default();
        config.window.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_base_dir_resolution() {
        let assets = AssetConfig::default().with_base_dir("/data");

        assert_eq!(assets.model_paths[0], PathBuf::from("/data/resources/models/cube.txt"));
        assert_eq!(assets.map_path, PathBuf::from("/data/resources/maps/level1.txt"));
    }

    #[test]
    fn test_toml_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.toml");

        let config = MazeConfig::default().with_log_level("debug");
        config.save_to_file(&path).unwrap();
        let loaded = MazeConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.ron");
        std::fs::write(&path, "(log_level: \"warn\", window: (title: \"Tiny\"))").unwrap();

        let loaded = MazeConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded.log_level, "warn");
        assert_eq!(loaded.window.title, "Tiny");
        assert_eq!(loaded.window.width, 800);
        assert_eq!(loaded.assets, AssetConfig::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.json");
        std::fs::write(&path, "{}").unwrap();

        let err = MazeConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
