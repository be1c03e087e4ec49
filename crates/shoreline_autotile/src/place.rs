//! Terrain placement: guard, write, converge

use crate::config::ShorelineConfig;
use crate::guard::can_place;
use crate::update::update_map_area_with;
use shoreline_core::{Grid, GridError, TileCategory};
use tracing::debug;

/// Outcome of a placement that passed the bounds check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// The guard refused the tile; the grid is untouched
    Rejected,
    /// The cell already held this exact tile
    Unchanged,
    /// The tile was written and the surrounding area converged
    Applied {
        /// Window cells that hold water or shore afterwards, row-major.
        /// Objects standing on these cells are now in the water.
        flooded: Vec<(i32, i32)>,
    },
}

impl Placement {
    pub fn is_applied(&self) -> bool {
        matches!(self, Placement::Applied { .. })
    }
}

/// Place `tile` at `(x, y)` with the default shoreline settings
pub fn place_tile(
    grid: &mut Grid,
    x: i32,
    y: i32,
    tile: TileCategory,
) -> Result<Placement, GridError> {
    place_tile_with(grid, x, y, tile, &ShorelineConfig::default())
}

/// Place `tile` at `(x, y)`.
///
/// Out-of-bounds positions fail before anything else. The guard then runs
/// before the write, so a rejection leaves the grid as it was.
pub fn place_tile_with(
    grid: &mut Grid,
    x: i32,
    y: i32,
    tile: TileCategory,
    config: &ShorelineConfig,
) -> Result<Placement, GridError> {
    let Some(current) = grid.tile(x, y) else {
        return Err(GridError::OutOfBounds {
            x,
            y,
            width: grid.width(),
            height: grid.height(),
        });
    };
    if !can_place(grid, x, y, tile) {
        debug!(x, y, ?tile, "placement rejected");
        return Ok(Placement::Rejected);
    }
    if current == tile {
        return Ok(Placement::Unchanged);
    }

    grid.set(x, y, tile)?;
    update_map_area_with(grid, x, y, config);

    let flooded = grid
        .window(x, y, config.window_radius)
        .into_iter()
        .filter(|&(wx, wy)| grid.is_water_or_shore(wx, wy))
        .collect();
    Ok(Placement::Applied { flooded })
}

/// The cells a placement would change, with their new tiles, row-major.
///
/// Runs the placement against a copy, so `grid` is never modified. Empty
/// when the placement would be rejected or would change nothing.
pub fn preview_place(
    grid: &Grid,
    x: i32,
    y: i32,
    tile: TileCategory,
    config: &ShorelineConfig,
) -> Result<Vec<((i32, i32), TileCategory)>, GridError> {
    let mut scratch = grid.clone();
    match place_tile_with(&mut scratch, x, y, tile, config)? {
        Placement::Applied { .. } => Ok(grid.diff(&scratch)),
        Placement::Rejected | Placement::Unchanged => Ok(Vec::new()),
    }
}
