//! Tile map loader
//!
//! Map format: a `W H` header of two single digits, then `H` rows of `W`
//! tile characters. `0` is air, `W` a wall, `S` the player spawn and `G`
//! the goal. Characters past column `W` and lines past row `H` are ignored.

use super::{read_resource, LoadError};
use crate::scene::{LevelGrid, Scene, TileKind};
use std::path::Path;

/// Loads tile maps into a scene's level grid and places the player
pub struct MapLoader;

impl MapLoader {
    /// Load a map file into `scene`
    pub fn load_map<P: AsRef<Path>>(scene: &mut Scene, path: P) -> Result<(), LoadError> {
        let contents = read_resource(path.as_ref())?;
        Self::load_map_str(scene, &contents)
    }

    /// Parse map text into `scene`.
    ///
    /// The grid replaces any previous one and the player is moved to the
    /// spawn cell. On error the scene is left unchanged.
    pub fn load_map_str(scene: &mut Scene, contents: &str) -> Result<(), LoadError> {
        let mut lines = contents.lines();

        let header = lines
            .next()
            .ok_or_else(|| malformed("missing dimension header".to_string()))?;
        let (width, height) = parse_header(header)?;

        let mut grid = LevelGrid::new(width, height);
        let mut spawns = Vec::new();

        for row in 0..height {
            let line = lines
                .next()
                .ok_or_else(|| malformed(format!("expected {height} rows but found {row}")))?;
            let mut chars = line.chars();

            for column in 0..width {
                let character = chars.next().ok_or_else(|| {
                    malformed(format!("row {row} has {column} columns, expected {width}"))
                })?;
                let kind = TileKind::from_symbol(character).ok_or(LoadError::UnknownTileCharacter {
                    row,
                    column,
                    character,
                })?;

                grid.set(row, column, kind);
                if kind == TileKind::Spawn {
                    spawns.push((row, column));
                }
            }
        }

        scene.level = grid;

        match spawns.last() {
            Some(&(row, column)) => {
                if spawns.len() > 1 {
                    log::warn!(
                        "Map has {} spawn cells, using the last one at row {}, column {}",
                        spawns.len(),
                        row,
                        column
                    );
                }
                scene.player.spawn_at(LevelGrid::cell_origin(row, column));
            }
            None => log::warn!("Map has no spawn cell, player stays at {:?}", scene.player.origin),
        }

        log::info!(
            "Loaded {}x{} map: {} walls, {} goals",
            width,
            height,
            scene.level.count(TileKind::Wall),
            scene.level.count(TileKind::Goal)
        );

        Ok(())
    }
}

fn malformed(reason: String) -> LoadError {
    LoadError::MalformedMapFile { reason }
}

fn parse_header(line: &str) -> Result<(usize, usize), LoadError> {
    let mut parts = line.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(width), Some(height), None) => Ok((parse_dimension(width)?, parse_dimension(height)?)),
        _ => Err(malformed(format!("header `{line}` is not `W H`"))),
    }
}

fn parse_dimension(token: &str) -> Result<usize, LoadError> {
    let mut chars = token.chars();
    match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
        (Some(digit), None) => Ok(digit as usize),
        _ => Err(malformed(format!("dimension `{token}` is not a single digit"))),
    }
}
