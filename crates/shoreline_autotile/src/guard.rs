//! Placement guard
//!
//! Grass must stay reachable: a grass tile may not be dropped into a spot
//! where it would be enclosed on all eight sides by water and shore.

use shoreline_core::{Direction, Grid, TileCategory};

/// Whether grass may be placed at `(x, y)`.
///
/// Rejects only when every neighbor is inside the map and none of them is
/// grass. A neighbor past the map edge counts as accessible.
pub fn can_place_grass(grid: &Grid, x: i32, y: i32) -> bool {
    Direction::ALL.into_iter().any(|direction| {
        let cell = grid.neighbor(x, y, direction);
        cell.is_boundary() || cell.is_grass()
    })
}

/// Whether `tile` may be placed at `(x, y)`; only grass is ever refused
pub fn can_place(grid: &Grid, x: i32, y: i32, tile: TileCategory) -> bool {
    !tile.is_grass() || can_place_grass(grid, x, y)
}
