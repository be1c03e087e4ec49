//! Shore seeding around a water region
//!
//! Seeding is deliberately over-eager: it writes straight into the grid and
//! leaves the classifier to correct variants and demote shores that end up
//! with no grass around them.

use crate::region::WaterRegion;
use shoreline_core::{Direction, Grid, TileCategory};
use tracing::trace;

/// Place shore tiles around every water cell of `region`.
///
/// For each cell of the region that is still water, and each of the eight
/// directions:
/// - a grass neighbor becomes the shore kind facing that direction;
/// - a water neighbor becomes that shore kind when the cell beyond it, in the
///   same direction, is grass or off the map.
///
/// Returns the number of cells written.
pub fn seed_shores(grid: &mut Grid, region: &WaterRegion) -> usize {
    let mut written = 0;
    for (x, y) in region.iter() {
        // An earlier write in this loop may already have turned it into shore
        if !grid.get(x, y).is_water() {
            continue;
        }
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            let (nx, ny) = (x + dx, y + dy);
            let neighbor = grid.get(nx, ny);

            let place = if neighbor.is_grass() {
                true
            } else if neighbor.is_water() {
                let beyond = grid.get(nx + dx, ny + dy);
                beyond.is_grass() || beyond.is_boundary()
            } else {
                false
            };

            if place {
                let shore = TileCategory::Shore(direction.facing_shore());
                // (nx, ny) was read as grass or water, so it is in bounds
                if grid.set(nx, ny, shore).is_ok() {
                    trace!(x = nx, y = ny, ?shore, "seeded shore");
                    written += 1;
                }
            }
        }
    }
    written
}
