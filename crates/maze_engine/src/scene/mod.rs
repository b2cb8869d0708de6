//! Scene model
//!
//! In-memory state of one running maze session: the level grid, the packed
//! model geometry and the player. Loaders fill a [`Scene`] once at startup;
//! the draw-list builder reads it every frame.

pub mod level_grid;
pub mod model_store;
pub mod player;

pub use level_grid::{LevelGrid, TileKind};
pub use model_store::{ModelId, ModelRange, PackedModelStore, Vertex, FLOATS_PER_VERTEX};
pub use player::Player;

/// Everything the core knows about a running session
///
/// Created empty, then populated by the asset loaders. Nothing here checks
/// cross-field consistency; the loaders establish it.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Tile grid, empty until a map is loaded
    pub level: LevelGrid,

    /// Geometry of every loaded model
    pub models: PackedModelStore,

    /// Player avatar
    pub player: Player,

    /// Seconds elapsed since the previous frame
    pub delta_time: f32,
}

impl Scene {
    /// Create an empty scene: no geometry, no grid, default player
    pub fn new() -> Self {
        Self::default()
    }

    /// Total vertices in the packed model store
    pub fn num_verts(&self) -> usize {
        self.models.vertex_count()
    }

    /// Number of loaded models
    pub fn num_models(&self) -> usize {
        self.models.model_count()
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.level.width()
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.level.height()
    }
}
