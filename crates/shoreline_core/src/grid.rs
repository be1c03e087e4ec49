//! Bounds-checked tile grid

use crate::tile::{Direction, ShoreKind, Side, TileCategory};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by grid writes and construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds { x: i32, y: i32, width: u32, height: u32 },
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("grid holds {found} tiles, expected {expected}")]
    SizeMismatch { expected: usize, found: usize },
}

/// Result of a neighbor query.
///
/// Queries never fail: anything outside the grid reads as [`Cell::Boundary`],
/// an implicit solid edge that is neither grass nor water.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Tile(TileCategory),
    Boundary,
}

impl Cell {
    pub fn is_grass(self) -> bool {
        matches!(self, Cell::Tile(tile) if tile.is_grass())
    }

    pub fn is_water(self) -> bool {
        matches!(self, Cell::Tile(tile) if tile.is_water())
    }

    pub fn is_boundary(self) -> bool {
        matches!(self, Cell::Boundary)
    }

    /// Neither grass nor water: a shore tile or the map boundary
    pub fn is_solid(self) -> bool {
        !self.is_grass() && !self.is_water()
    }

    /// Whether this cell shows grass along `side`: plain grass, or a shore
    /// whose grass edge lies on that side.
    pub fn presents_grass(self, side: Side) -> bool {
        match self {
            Cell::Tile(TileCategory::Grass(_)) => true,
            Cell::Tile(TileCategory::Shore(kind)) => kind.has_grass_on(side),
            _ => false,
        }
    }

    /// Whether this cell is exactly one of the given shore kinds
    pub fn is_shore_in(self, kinds: &[ShoreKind]) -> bool {
        match self {
            Cell::Tile(TileCategory::Shore(kind)) => kinds.contains(&kind),
            _ => false,
        }
    }
}

/// A rectangular tile grid, origin top-left, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridData")]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<TileCategory>,
}

/// Unchecked serialized form of [`Grid`]
#[derive(Deserialize)]
struct GridData {
    width: u32,
    height: u32,
    tiles: Vec<TileCategory>,
}

impl TryFrom<GridData> for Grid {
    type Error = GridError;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        let expected = (data.width as usize) * (data.height as usize);
        if data.tiles.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                found: data.tiles.len(),
            });
        }
        Ok(Self {
            width: data.width,
            height: data.height,
            tiles: data.tiles,
        })
    }
}

impl Grid {
    /// Create a grid filled with default grass
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, TileCategory::GRASS)
    }

    /// Create a grid filled with `tile`
    pub fn filled(width: u32, height: u32, tile: TileCategory) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            tiles: vec![tile; size],
        }
    }

    /// Build a grid from rows of tiles; every row must have the same length
    pub fn from_rows(rows: Vec<Vec<TileCategory>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        let mut tiles = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            tiles.extend(cells);
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
            tiles,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Read a cell, with out-of-bounds positions reading as [`Cell::Boundary`]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.tile(x, y).map_or(Cell::Boundary, Cell::Tile)
    }

    /// Read a tile, if in bounds
    pub fn tile(&self, x: i32, y: i32) -> Option<TileCategory> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    /// Read the neighbor of `(x, y)` in `direction`
    pub fn neighbor(&self, x: i32, y: i32, direction: Direction) -> Cell {
        let (dx, dy) = direction.offset();
        self.get(x + dx, y + dy)
    }

    /// Write a tile, returning the value it replaced
    pub fn set(&mut self, x: i32, y: i32, tile: TileCategory) -> Result<TileCategory, GridError> {
        let idx = self.index(x, y).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        Ok(std::mem::replace(&mut self.tiles[idx], tile))
    }

    /// Whether `(x, y)` is in bounds and holds water or shore
    pub fn is_water_or_shore(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_some_and(TileCategory::is_water_or_shore)
    }

    /// Iterate all cells row-major as `((x, y), tile)`
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), TileCategory)> + '_ {
        let width = self.width.max(1) as usize;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(idx, &tile)| (((idx % width) as i32, (idx / width) as i32), tile))
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[TileCategory]> + '_ {
        self.tiles.chunks(self.width.max(1) as usize)
    }

    /// In-bounds positions of the square window of `radius` around `(x, y)`,
    /// row-major. The window is clipped to the grid before it is walked, so a
    /// radius larger than the map costs no more than the map itself.
    pub fn window(&self, x: i32, y: i32, radius: u32) -> Vec<(i32, i32)> {
        let r = i64::from(radius);
        let (x, y) = (i64::from(x), i64::from(y));
        let x0 = (x - r).max(0);
        let x1 = (x + r).min(i64::from(self.width) - 1);
        let y0 = (y - r).max(0);
        let y1 = (y + r).min(i64::from(self.height) - 1);

        let mut positions = Vec::new();
        for wy in y0..=y1 {
            for wx in x0..=x1 {
                positions.push((wx as i32, wy as i32));
            }
        }
        positions
    }

    /// Positions whose tile differs from `other`; both grids must share dimensions
    pub fn diff(&self, other: &Grid) -> Vec<((i32, i32), TileCategory)> {
        if self.width != other.width || self.height != other.height {
            return Vec::new();
        }
        self.iter()
            .zip(other.tiles.iter())
            .filter(|((_, mine), theirs)| mine != *theirs)
            .map(|((pos, _), &theirs)| (pos, theirs))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_grass() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.iter().count(), 12);
        assert!(grid.iter().all(|(_, t)| t == TileCategory::GRASS));
    }

    #[test]
    fn test_out_of_bounds_reads_as_boundary() {
        let grid = Grid::new(2, 2);
        assert_eq!(grid.get(-1, 0), Cell::Boundary);
        assert_eq!(grid.get(0, 2), Cell::Boundary);
        assert_eq!(grid.get(1, 1), Cell::Tile(TileCategory::GRASS));
        assert!(grid.get(5, 5).is_solid());
        assert!(!grid.get(5, 5).is_grass());
        assert!(!grid.get(5, 5).is_water());
    }

    #[test]
    fn test_set_reports_out_of_bounds() {
        let mut grid = Grid::new(2, 2);
        let err = grid.set(2, 0, TileCategory::WATER).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 2
            }
        );
        assert!(grid.iter().all(|(_, t)| t == TileCategory::GRASS));
    }

    #[test]
    fn test_set_returns_previous() {
        let mut grid = Grid::new(3, 3);
        let old = grid.set(1, 2, TileCategory::WATER).unwrap();
        assert_eq!(old, TileCategory::GRASS);
        assert_eq!(grid.tile(1, 2), Some(TileCategory::WATER));
        assert!(grid.is_water_or_shore(1, 2));
        assert!(!grid.is_water_or_shore(0, 0));
        assert!(!grid.is_water_or_shore(-1, 0));
    }

    #[test]
    fn test_neighbor_uses_top_left_origin() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 0, TileCategory::WATER).unwrap();
        assert!(grid.neighbor(1, 1, Direction::North).is_water());
        assert!(grid.neighbor(1, 1, Direction::South).is_grass());
    }

    #[test]
    fn test_presents_grass() {
        let left = Cell::Tile(TileCategory::Shore(ShoreKind::Left));
        assert!(left.presents_grass(Side::Left));
        assert!(!left.presents_grass(Side::Right));
        assert!(Cell::Tile(TileCategory::GRASS).presents_grass(Side::Top));
        assert!(!Cell::Boundary.presents_grass(Side::Top));
        assert!(!Cell::Tile(TileCategory::WATER).presents_grass(Side::Top));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let g = TileCategory::GRASS;
        let err = Grid::from_rows(vec![vec![g, g], vec![g]]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_window_clips_to_grid() {
        let grid = Grid::new(5, 5);
        assert_eq!(grid.window(2, 2, 2).len(), 25);
        assert_eq!(grid.window(0, 0, 2).len(), 9);
        assert_eq!(grid.window(0, 0, 0), vec![(0, 0)]);
        assert_eq!(grid.window(4, 4, 1), vec![(3, 3), (4, 3), (3, 4), (4, 4)]);
    }

    #[test]
    fn test_window_larger_than_grid() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.window(1, 1, 3_000_000_000).len(), 9);
        assert_eq!(grid.window(0, 2, u32::MAX).len(), 9);
        assert_eq!(grid.window(1, 1, 100_000), grid.window(1, 1, 2));
    }

    #[test]
    fn test_window_outside_grid() {
        let grid = Grid::new(3, 3);
        assert!(grid.window(10, 10, 2).is_empty());
        assert_eq!(grid.window(-1, -1, 1), vec![(0, 0)]);
        assert!(Grid::new(0, 0).window(0, 0, 5).is_empty());
    }

    #[test]
    fn test_diff() {
        let a = Grid::new(3, 3);
        let mut b = a.clone();
        b.set(2, 1, TileCategory::WATER).unwrap();
        assert_eq!(a.diff(&b), vec![((2, 1), TileCategory::WATER)]);
        assert!(a.diff(&a).is_empty());
    }

    #[test]
    fn test_json_snapshot() {
        let mut grid = Grid::new(2, 1);
        grid.set(1, 0, TileCategory::Shore(ShoreKind::Top)).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"{"width":2,"height":1,"tiles":[0,6]}"#);
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);

        let short = r#"{"width":2,"height":2,"tiles":[0,6]}"#;
        assert!(serde_json::from_str::<Grid>(short).is_err());
    }
}
