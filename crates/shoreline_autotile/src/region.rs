//! Water region search

use shoreline_core::{Direction, Grid};
use std::collections::BTreeSet;

/// A connected set of water cells.
///
/// Ordered so that everything iterating a region visits cells in the same
/// order on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaterRegion {
    cells: BTreeSet<(i32, i32)>,
}

impl WaterRegion {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.cells.contains(&(x, y))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells.iter().copied()
    }
}

/// Flood-fill the water region containing `(x, y)`.
///
/// Returns an empty region when the start cell is not water. Steps follow all
/// eight directions, so bodies touching only at a corner form one region. Both
/// water variants count as water.
pub fn find_water_region(grid: &Grid, x: i32, y: i32) -> WaterRegion {
    let mut region = WaterRegion::default();
    if !grid.get(x, y).is_water() {
        return region;
    }

    let mut stack = vec![(x, y)];
    while let Some((cx, cy)) = stack.pop() {
        if region.cells.contains(&(cx, cy)) || !grid.in_bounds(cx, cy) {
            continue;
        }
        if grid.get(cx, cy).is_water() {
            region.cells.insert((cx, cy));
            for direction in Direction::ALL {
                let (dx, dy) = direction.offset();
                stack.push((cx + dx, cy + dy));
            }
        }
    }
    region
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shoreline_core::{ShoreKind, TileCategory};

    fn water_grid(width: u32, height: u32, water: &[(i32, i32)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(x, y) in water {
            grid.set(x, y, TileCategory::WATER).unwrap();
        }
        grid
    }

    #[test]
    fn test_non_water_start_is_empty() {
        let mut grid = water_grid(3, 3, &[(1, 1)]);
        assert!(find_water_region(&grid, 0, 0).is_empty());
        grid.set(0, 0, TileCategory::Shore(ShoreKind::Top)).unwrap();
        assert!(find_water_region(&grid, 0, 0).is_empty());
        assert!(find_water_region(&grid, -1, 5).is_empty());
    }

    #[test]
    fn test_single_cell() {
        let grid = water_grid(3, 3, &[(1, 1)]);
        let region = find_water_region(&grid, 1, 1);
        assert_eq!(region.len(), 1);
        assert!(region.contains(1, 1));
    }

    #[test]
    fn test_diagonal_contact_joins_bodies() {
        let grid = water_grid(4, 4, &[(0, 0), (1, 1), (2, 2), (3, 0)]);
        let region = find_water_region(&grid, 0, 0);
        assert_eq!(region.iter().collect::<Vec<_>>(), vec![(0, 0), (1, 1), (2, 2)]);
        assert!(!region.contains(3, 0));
    }

    #[test]
    fn test_shore_separates_bodies() {
        let mut grid = water_grid(5, 1, &[(0, 0), (1, 0), (3, 0), (4, 0)]);
        grid.set(2, 0, TileCategory::Shore(ShoreKind::Left)).unwrap();
        assert_eq!(find_water_region(&grid, 0, 0).len(), 2);
        assert_eq!(find_water_region(&grid, 4, 0).len(), 2);
    }

    #[test]
    fn test_mixed_variants() {
        let mut grid = water_grid(3, 1, &[(0, 0)]);
        grid.set(1, 0, TileCategory::water(1).unwrap()).unwrap();
        grid.set(2, 0, TileCategory::WATER).unwrap();
        assert_eq!(find_water_region(&grid, 2, 0).len(), 3);
    }

    fn arb_terrain() -> impl Strategy<Value = Grid> {
        (1u32..10, 1u32..10).prop_flat_map(|(w, h)| {
            proptest::collection::vec(0u8..4, (w * h) as usize).prop_map(move |kinds| {
                let tiles = kinds
                    .iter()
                    .map(|k| match k {
                        0 => TileCategory::GRASS,
                        1 => TileCategory::Shore(ShoreKind::Top),
                        2 => TileCategory::WATER,
                        _ => TileCategory::water(1).unwrap(),
                    })
                    .collect::<Vec<_>>();
                Grid::from_rows(tiles.chunks(w as usize).map(<[_]>::to_vec).collect()).unwrap()
            })
        })
    }

    proptest! {
        #[test]
        fn region_is_a_closed_connected_body(grid in arb_terrain(), sx in 0i32..10, sy in 0i32..10) {
            let sx = sx % grid.width() as i32;
            let sy = sy % grid.height() as i32;
            let region = find_water_region(&grid, sx, sy);
            if !grid.get(sx, sy).is_water() {
                prop_assert!(region.is_empty());
                return Ok(());
            }
            prop_assert!(region.contains(sx, sy));
            for (x, y) in region.iter() {
                prop_assert!(grid.get(x, y).is_water());
                // Closed under 8-neighbor water steps
                for direction in Direction::ALL {
                    let (dx, dy) = direction.offset();
                    if grid.get(x + dx, y + dy).is_water() {
                        prop_assert!(region.contains(x + dx, y + dy));
                    }
                }
            }
            // Every member finds the same body
            for (x, y) in region.iter() {
                prop_assert_eq!(&find_water_region(&grid, x, y), &region);
            }
        }
    }
}
