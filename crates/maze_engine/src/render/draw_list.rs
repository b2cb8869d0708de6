//! Per-frame draw-list derivation
//!
//! Walks the level grid in row-major order. Every cell gets a floor block;
//! wall cells additionally get a raised, full-brightness block. Grid cell
//! `(row, col)` is placed at `(col, row, offset)`.

use super::commands::{DrawInstruction, DrawList};
use crate::core::config::DrawConfig;
use crate::foundation::math::Vector3;
use crate::scene::{Scene, TileKind};

/// Turns scene state into draw instructions
#[derive(Debug, Clone, Default)]
pub struct DrawListBuilder {
    config: DrawConfig,
}

impl DrawListBuilder {
    /// Create a builder with the given draw settings
    pub fn new(config: DrawConfig) -> Self {
        Self { config }
    }

    /// Draw settings in use
    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Build a fresh draw list for `scene`
    pub fn build(&self, scene: &Scene) -> DrawList {
        let mut list = DrawList::new();
        self.build_into(scene, &mut list);
        list
    }

    /// Rebuild `list` in place for `scene`.
    ///
    /// Produces `width * height` floor instructions plus one wall instruction
    /// per wall tile, each wall directly after its cell's floor.
    pub fn build_into(&self, scene: &Scene, list: &mut DrawList) {
        let grid = &scene.level;
        let walls = grid.count(TileKind::Wall);

        list.clear();
        list.instructions.reserve(grid.len() + walls);

        for (row, col, kind) in grid.cells() {
            list.push(DrawInstruction::new(
                self.config.floor_model,
                Self::cell_position(row, col, self.config.floor_offset),
                self.config.floor_tint,
            ));

            if kind == TileKind::Wall {
                list.push(DrawInstruction::new(
                    self.config.floor_model,
                    Self::cell_position(row, col, self.config.wall_offset),
                    self.config.wall_tint,
                ));
            }
        }

        log::trace!("Built draw list: {} floor, {} wall instructions", grid.len(), walls);
    }

    fn cell_position(row: usize, col: usize, offset: f32) -> Vector3 {
        Vector3::new(col as f32, row as f32, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MapLoader;
    use crate::foundation::math::Color;
    use crate::scene::ModelId;

    fn scene_from_map(map: &str) -> Scene {
        let mut scene = Scene::new();
        MapLoader::load_map_str(&mut scene, map).unwrap();
        scene
    }

    #[test]
    fn test_single_wall_counts() {
        let builder = DrawListBuilder::default();

        for map in ["1 1\nW\n", "3 2\nW0S\n0G0\n", "9 9\n000000000\n000000000\n000000000\n000000000\n0000W0000\n000000000\n000000000\n000000000\n00000000S\n"] {
            let scene = scene_from_map(map);
            let list = builder.build(&scene);
            let cells = scene.width() * scene.height();

            assert_eq!(list.len(), cells + 1);
            assert_eq!(list.count_with_tint(builder.config().wall_tint), 1);
            assert_eq!(list.count_with_tint(builder.config().floor_tint), cells);
        }
    }

    #[test]
    fn test_positions_and_order() {
        let scene = scene_from_map("3 2\nW0S\n0G0\n");
        let config = DrawConfig::default();
        let list = DrawListBuilder::new(config.clone()).build(&scene);

        let expected = vec![
            DrawInstruction::new(ModelId(0), Vector3::new(0.0, 0.0, -1.0), config.floor_tint),
            DrawInstruction::new(ModelId(0), Vector3::new(0.0, 0.0, 0.0), config.wall_tint),
            DrawInstruction::new(ModelId(0), Vector3::new(1.0, 0.0, -1.0), config.floor_tint),
            DrawInstruction::new(ModelId(0), Vector3::new(2.0, 0.0, -1.0), config.floor_tint),
            DrawInstruction::new(ModelId(0), Vector3::new(0.0, 1.0, -1.0), config.floor_tint),
            DrawInstruction::new(ModelId(0), Vector3::new(1.0, 1.0, -1.0), config.floor_tint),
            DrawInstruction::new(ModelId(0), Vector3::new(2.0, 1.0, -1.0), config.floor_tint),
        ];
        assert_eq!(list.instructions, expected);
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let scene = scene_from_map("4 3\nWWWW\nWS0G\nWWWW\n");
        let builder = DrawListBuilder::default();

        let first = builder.build(&scene);
        let mut reused = first.clone();
        builder.build_into(&scene, &mut reused);

        assert_eq!(first.instructions, reused.instructions);
        assert_eq!(reused.len(), 12 + 9);
    }

    #[test]
    fn test_custom_config() {
        let scene = scene_from_map("2 1\nWW\n");
        let config = DrawConfig {
            floor_model: ModelId(1),
            floor_offset: -2.0,
            wall_offset: 1.0,
            floor_tint: Color::new(0.1, 0.2, 0.3),
            wall_tint: Color::new(1.0, 0.5, 0.0),
        };
        let list = DrawListBuilder::new(config).build(&scene);

        assert!(list.iter().all(|i| i.model == ModelId(1)));
        assert_eq!(list.instructions[1].position, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(list.instructions[2].position, Vector3::new(1.0, 0.0, -2.0));
    }

    #[test]
    fn test_empty_scene_gives_empty_list() {
        let list = DrawListBuilder::default().build(&Scene::new());
        assert!(list.is_empty());
    }

    #[test]
    fn test_only_wall_tiles_get_blocks() {
        let mut scene = scene_from_map("2 1\nW0\n");
        scene.level.set(0, 1, TileKind::Door);
        assert!(TileKind::Door.is_solid());

        let list = DrawListBuilder::default().build(&scene);
        let walls = list.count_with_tint(DrawConfig::default().wall_tint);

        assert_eq!(list.len(), 3);
        assert_eq!(walls, 1);
        assert_eq!(list.instructions[1].position, Vector3::new(0.0, 0.0, 0.0));
    }
}
