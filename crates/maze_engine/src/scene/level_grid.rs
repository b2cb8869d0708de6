//! Tile grid for a single maze level

use crate::foundation::math::Vector3;

/// Semantic classification of one grid cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Empty floor
    #[default]
    Air,
    /// Empty floor where the player starts
    Spawn,
    /// Solid wall block
    Wall,
    /// Level exit
    Goal,
    /// Key pickup (no map character produces this yet)
    Key,
    /// Locked door (no map character produces this yet)
    Door,
}

impl TileKind {
    /// Map-file character for this tile kind, if the format has one
    pub const fn symbol(self) -> Option<char> {
        match self {
            Self::Air => Some('0'),
            Self::Spawn => Some('S'),
            Self::Wall => Some('W'),
            Self::Goal => Some('G'),
            Self::Key | Self::Door => None,
        }
    }

    /// Parse a map-file character
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Air),
            'S' => Some(Self::Spawn),
            'W' => Some(Self::Wall),
            'G' => Some(Self::Goal),
            _ => None,
        }
    }

    /// Whether the tile blocks movement
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::Wall | Self::Door)
    }
}

/// Row-major grid of tiles with dimensions fixed at construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelGrid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl LevelGrid {
    /// Create a grid of the given size filled with [`TileKind::Air`]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileKind::Air; width * height],
        }
    }

    /// World position of a cell at ground level: column on X, row on Z
    pub fn cell_origin(row: usize, col: usize) -> Vector3 {
        Vector3::new(col as f32, 0.0, row as f32)
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True for a 0-sized grid (the state of a freshly created scene)
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at `(row, col)`, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<TileKind> {
        if row < self.height && col < self.width {
            self.tiles.get(row * self.width + col).copied()
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, kind: TileKind) {
        debug_assert!(row < self.height && col < self.width);
        self.tiles[row * self.width + col] = kind;
    }

    /// Tiles as row-major slices, top row first
    pub fn rows(&self) -> impl Iterator<Item = &[TileKind]> {
        // chunks() rejects a zero chunk size
        self.tiles.chunks(self.width.max(1))
    }

    /// Every cell as `(row, col, kind)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, TileKind)> + '_ {
        let width = self.width.max(1);
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &kind)| (i / width, i % width, kind))
    }

    /// Number of cells holding `kind`
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&t| t == kind).count()
    }

    /// First spawn cell in row-major order
    pub fn spawn_cell(&self) -> Option<(usize, usize)> {
        self.cells()
            .find(|&(_, _, kind)| kind == TileKind::Spawn)
            .map(|(row, col, _)| (row, col))
    }
}
