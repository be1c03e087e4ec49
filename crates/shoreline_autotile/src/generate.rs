//! Random terrain: variant shuffling and whole-map generation

use crate::config::{GeneratorConfig, ShorelineConfig};
use crate::place::place_tile_with;
use rand::Rng;
use shoreline_core::{Grid, GridError, TileCategory, GRASS_VARIANTS, WATER_VARIANTS};
use tracing::debug;

fn random_grass(rng: &mut impl Rng) -> TileCategory {
    TileCategory::grass(rng.gen_range(0..GRASS_VARIANTS)).unwrap_or(TileCategory::GRASS)
}

fn random_water(rng: &mut impl Rng) -> TileCategory {
    TileCategory::water(rng.gen_range(0..WATER_VARIANTS)).unwrap_or(TileCategory::WATER)
}

fn chance(rng: &mut impl Rng, probability: f64) -> bool {
    rng.gen::<f64>() < probability
}

/// Re-roll the variant of every grass cell. Returns how many cells changed.
///
/// Categories are preserved and no convergence runs, so shores are not
/// re-validated: a stale shore elsewhere on the map stays stale.
pub fn randomize_grass_variants(grid: &mut Grid, rng: &mut impl Rng) -> usize {
    reroll(grid, rng, TileCategory::is_grass, random_grass)
}

/// Re-roll the variant of every water cell. Returns how many cells changed.
///
/// Like [`randomize_grass_variants`], shores are left as they are.
pub fn randomize_water_variants(grid: &mut Grid, rng: &mut impl Rng) -> usize {
    reroll(grid, rng, TileCategory::is_water, random_water)
}

fn reroll<R: Rng>(
    grid: &mut Grid,
    rng: &mut R,
    selects: fn(TileCategory) -> bool,
    roll: fn(&mut R) -> TileCategory,
) -> usize {
    let targets: Vec<_> = grid
        .iter()
        .filter(|&(_, tile)| selects(tile))
        .map(|(pos, _)| pos)
        .collect();
    let mut changed = 0;
    for (x, y) in targets {
        let tile = roll(rng);
        if matches!(grid.set(x, y, tile), Ok(previous) if previous != tile) {
            changed += 1;
        }
    }
    changed
}

/// Replace `grid` with random grassland dotted with ponds.
///
/// Starts from plain grass. Each cell is flooded with `water_chance`, then
/// each resulting shore cell is flooded with `shore_flood_chance`, which
/// grows and merges the ponds. Every flood goes through placement, so the
/// shoreline is converged as it grows.
pub fn generate_map(
    grid: &mut Grid,
    config: &GeneratorConfig,
    shoreline: &ShorelineConfig,
    rng: &mut impl Rng,
) -> Result<(), GridError> {
    *grid = Grid::new(grid.width(), grid.height());
    let positions: Vec<_> = grid.iter().map(|(pos, _)| pos).collect();

    let mut ponds = 0;
    for &(x, y) in &positions {
        if chance(rng, config.water_chance) {
            let water = random_water(rng);
            place_tile_with(grid, x, y, water, shoreline)?;
            ponds += 1;
        }
    }

    let mut floods = 0;
    for &(x, y) in &positions {
        let is_shore = grid.tile(x, y).is_some_and(TileCategory::is_shore);
        if is_shore && chance(rng, config.shore_flood_chance) {
            let water = random_water(rng);
            place_tile_with(grid, x, y, water, shoreline)?;
            floods += 1;
        }
    }

    debug!(
        width = grid.width(),
        height = grid.height(),
        ponds,
        floods,
        "generated map"
    );
    Ok(())
}
