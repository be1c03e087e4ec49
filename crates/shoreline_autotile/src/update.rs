//! Convergence driver
//!
//! After an edit, the water body under the edited cell is seeded with shores
//! and a square window around the edit is re-classified a bounded number of
//! times. The bound is an approximation: a correction cascades at most one
//! cell per pass, so long chains of tips can outlast it.

use crate::classify::correct_shore_tile;
use crate::config::ShorelineConfig;
use crate::region::find_water_region;
use crate::seed::seed_shores;
use shoreline_core::Grid;
use tracing::{debug, trace};

/// What a single area update did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AreaUpdate {
    /// Cells in the water region found at the edit
    pub region_size: usize,
    /// Cells written by shore seeding
    pub seeded: usize,
    /// Shore cells changed by the classifier, summed over all passes
    pub reclassified: usize,
}

/// Converge the area around `(x, y)` using the default window and pass count
pub fn update_map_area(grid: &mut Grid, x: i32, y: i32) -> AreaUpdate {
    update_map_area_with(grid, x, y, &ShorelineConfig::default())
}

/// Converge the area around `(x, y)`.
///
/// Finds and seeds the water region containing `(x, y)` (nothing to seed if
/// the cell is not water), then runs the classifier over every shore cell in
/// the window, row-major, for up to `config.passes` passes. Stops early once
/// a pass changes nothing.
///
/// A single call is not guaranteed to reach a fixed point. Demoting a shore
/// can connect two water bodies, and only the next call at the same spot
/// seeds the joined region.
pub fn update_map_area_with(
    grid: &mut Grid,
    x: i32,
    y: i32,
    config: &ShorelineConfig,
) -> AreaUpdate {
    let region = find_water_region(grid, x, y);
    let seeded = seed_shores(grid, &region);

    let window = grid.window(x, y, config.window_radius);
    let mut reclassified = 0;
    for pass in 0..config.passes {
        let changed = window
            .iter()
            .filter(|&&(wx, wy)| correct_shore_tile(grid, wx, wy))
            .count();
        trace!(pass, changed, "classifier pass");
        reclassified += changed;
        if changed == 0 {
            break;
        }
    }

    let update = AreaUpdate {
        region_size: region.len(),
        seeded,
        reclassified,
    };
    debug!(x, y, ?update, "updated map area");
    update
}
