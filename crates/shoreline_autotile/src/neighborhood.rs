//! Snapshot of the eight cells around a grid position

use shoreline_core::{Cell, Direction, Grid};

/// The 8-neighborhood of a cell.
///
/// Out-of-bounds neighbors hold [`Cell::Boundary`].
///
/// ```text
///   nw | n | ne
///   ---+---+---
///    w | X | e
///   ---+---+---
///   sw | s | se
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    pub n: Cell,
    pub ne: Cell,
    pub e: Cell,
    pub se: Cell,
    pub s: Cell,
    pub sw: Cell,
    pub w: Cell,
    pub nw: Cell,
}

impl Neighborhood {
    /// Read the neighborhood of `(x, y)` from `grid`
    pub fn of(grid: &Grid, x: i32, y: i32) -> Self {
        let at = |direction| grid.neighbor(x, y, direction);
        Self {
            n: at(Direction::North),
            ne: at(Direction::NorthEast),
            e: at(Direction::East),
            se: at(Direction::SouthEast),
            s: at(Direction::South),
            sw: at(Direction::SouthWest),
            w: at(Direction::West),
            nw: at(Direction::NorthWest),
        }
    }

    /// A neighborhood where every cell is `cell`
    pub fn uniform(cell: Cell) -> Self {
        Self {
            n: cell,
            ne: cell,
            e: cell,
            se: cell,
            s: cell,
            sw: cell,
            w: cell,
            nw: cell,
        }
    }

    pub fn get(&self, direction: Direction) -> Cell {
        match direction {
            Direction::North => self.n,
            Direction::NorthEast => self.ne,
            Direction::East => self.e,
            Direction::SouthEast => self.se,
            Direction::South => self.s,
            Direction::SouthWest => self.sw,
            Direction::West => self.w,
            Direction::NorthWest => self.nw,
        }
    }

    /// Replace one neighbor, builder style
    pub fn with(mut self, direction: Direction, cell: Cell) -> Self {
        let slot = match direction {
            Direction::North => &mut self.n,
            Direction::NorthEast => &mut self.ne,
            Direction::East => &mut self.e,
            Direction::SouthEast => &mut self.se,
            Direction::South => &mut self.s,
            Direction::SouthWest => &mut self.sw,
            Direction::West => &mut self.w,
            Direction::NorthWest => &mut self.nw,
        };
        *slot = cell;
        self
    }

    pub fn cells(&self) -> [Cell; 8] {
        Direction::ALL.map(|direction| self.get(direction))
    }

    pub fn any_grass(&self) -> bool {
        self.cells().iter().any(|cell| cell.is_grass())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoreline_core::TileCategory;

    #[test]
    fn test_of_reads_boundary_at_corner() {
        let mut grid = Grid::new(2, 2);
        grid.set(1, 1, TileCategory::WATER).unwrap();
        let hood = Neighborhood::of(&grid, 0, 0);
        assert!(hood.n.is_boundary());
        assert!(hood.nw.is_boundary());
        assert!(hood.w.is_boundary());
        assert!(hood.sw.is_boundary());
        assert!(hood.e.is_grass());
        assert!(hood.s.is_grass());
        assert!(hood.se.is_water());
        assert!(hood.any_grass());
    }

    #[test]
    fn test_with_and_get_agree() {
        let water = Cell::Tile(TileCategory::WATER);
        for direction in Direction::ALL {
            let hood = Neighborhood::uniform(Cell::Boundary).with(direction, water);
            assert_eq!(hood.get(direction), water);
            assert_eq!(hood.cells().iter().filter(|c| c.is_water()).count(), 1);
            assert!(!hood.any_grass());
        }
    }
}
