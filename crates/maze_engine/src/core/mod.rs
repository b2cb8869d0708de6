//! # Core Engine Module
//!
//! Shared configuration types used by the loaders, the draw-list builder and
//! the engine session.

pub mod config;

pub use config::{
    AssetConfig,
    CameraConfig,
    DrawConfig,
    MazeConfig,
    WindowConfig,
    Config,
    ConfigError,
};
