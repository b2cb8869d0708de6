//! Core engine implementation
//!
//! One [`Engine`] owns the single [`Scene`] of a running session. Loading
//! happens once in [`Engine::new`]; afterwards each frame only reads the
//! scene to rebuild the draw list.

use crate::{
    assets::{LoadError, MapLoader, ModelLoader},
    core::config::{ConfigError, MazeConfig},
    foundation::time::FrameTimer,
    render::{Camera, DrawList, DrawListBuilder},
    scene::{ModelRange, Scene},
};
use thiserror::Error;

/// Main engine struct
///
/// Owns the scene, the frame timer and the reusable draw list. The external
/// input layer writes player intent through [`Engine::scene_mut`] before each
/// frame; the backend reads the result of [`Engine::frame`].
pub struct Engine {
    /// Scene populated at startup
    scene: Scene,

    /// Fixed view of the level
    camera: Camera,

    /// Draw-list derivation settings
    builder: DrawListBuilder,

    /// Instructions of the most recent frame
    draw_list: DrawList,

    /// Frame timing
    timer: FrameTimer,

    /// Session configuration
    config: MazeConfig,
}

impl Engine {
    /// Load every configured model (in order) and then the map
    pub fn new(config: MazeConfig) -> Result<Self, EngineError> {
        log::info!("Initializing maze engine...");

        config.validate()?;

        let mut scene = Scene::new();
        ModelLoader::load_models(&mut scene, &config.assets.model_paths)?;
        log::info!(
            "Loaded {} models, {} vertices total",
            scene.num_models(),
            scene.num_verts()
        );

        MapLoader::load_map(&mut scene, &config.assets.map_path)?;

        let camera = Camera::overhead(&scene.level, config.window.aspect_ratio(), &config.camera);
        let builder = DrawListBuilder::new(config.draw.clone());

        Ok(Self {
            scene,
            camera,
            builder,
            draw_list: DrawList::new(),
            timer: FrameTimer::new(),
            config,
        })
    }

    /// Advance the clock and rebuild the draw list
    pub fn frame(&mut self) -> &DrawList {
        self.timer.tick();
        self.rebuild()
    }

    /// Rebuild the draw list for a frame of known length
    pub fn frame_with_delta(&mut self, delta_time: f32) -> &DrawList {
        self.timer.advance(delta_time);
        self.rebuild()
    }

    fn rebuild(&mut self) -> &DrawList {
        self.scene.delta_time = self.timer.delta_time();
        self.builder.build_into(&self.scene, &mut self.draw_list);
        &self.draw_list
    }

    /// Scene state (read-only)
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Scene state for the input layer
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Draw list of the most recent frame
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Fixed camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Session configuration
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Frames built so far
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }

    /// Simulated time across all frames
    pub fn elapsed(&self) -> std::time::Duration {
        self.timer.elapsed()
    }

    /// Vertex ranges for every instruction in the current draw list.
    ///
    /// This is what a backend turns into draw calls.
    pub fn draw_ranges(&self) -> impl Iterator<Item = ModelRange> + '_ {
        self.draw_list
            .iter()
            .filter_map(|instruction| self.scene.models.model_range(instruction.model))
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Asset loading failed
    #[error("Asset loading failed: {0}")]
    Load(#[from] LoadError),

    /// Configuration rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
