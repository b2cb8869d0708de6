//! # Maze Engine
//!
//! Core of a small real-time 3D maze demo: math primitives, the scene model,
//! text-format model and map loaders, and the per-frame draw-list builder.
//!
//! Windowing, input polling and GPU work live in an external backend. The
//! backend owns an [`Engine`], writes player intent into the scene, calls
//! [`Engine::frame`] once per frame and issues one draw call per returned
//! instruction using the model's vertex range.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use maze_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MazeConfig::default();
//!     let mut engine = Engine::new(config)?;
//!
//!     let draw_list = engine.frame();
//!     for instruction in draw_list {
//!         // submit instruction.model / position / tint to the GPU
//!         let _ = instruction;
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;
pub mod config;

pub mod foundation;
pub mod scene;
pub mod assets;
pub mod render;

mod engine;

pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Engine, EngineError,
        assets::{LoadError, MapLoader, ModelLoader},
        foundation::math::{Color, Quaternion, Vector3},
        render::{Camera, DrawInstruction, DrawList, DrawListBuilder},
        scene::{LevelGrid, ModelId, ModelRange, PackedModelStore, Player, Scene, TileKind},
        core::config::{MazeConfig, AssetConfig, DrawConfig, CameraConfig, WindowConfig, Config, ConfigError},
    };
}
