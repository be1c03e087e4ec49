//! Shore classification
//!
//! A shore tile's variant is chosen by an ordered table of rules over its
//! 8-neighborhood; the first rule that returns a tile wins. Order matters:
//! near concave corners several rules hold at once, and the table order is
//! the tie-break.
//!
//! Vocabulary used by the rules:
//! - *solid*: neither grass nor water, i.e. a shore tile or the map boundary
//! - *presents grass on a side*: plain grass, or a shore whose grass edge is
//!   on that side (a `Bottom` shore presents grass on its bottom side)

use crate::neighborhood::Neighborhood;
use shoreline_core::{Grid, ShoreKind, Side, TileCategory};
use tracing::trace;

/// A single classification rule
#[derive(Clone, Copy)]
pub struct ShoreRule {
    pub name: &'static str,
    pub apply: fn(&Neighborhood) -> Option<TileCategory>,
}

impl std::fmt::Debug for ShoreRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShoreRule").field("name", &self.name).finish()
    }
}

/// The rule table, highest priority first
pub static SHORE_RULES: [ShoreRule; 15] = [
    ShoreRule { name: "demote_without_grass", apply: demote_without_grass },
    ShoreRule { name: "tip_top_left", apply: tip_top_left },
    ShoreRule { name: "tip_top_right", apply: tip_top_right },
    ShoreRule { name: "tip_bottom_left", apply: tip_bottom_left },
    ShoreRule { name: "tip_bottom_right", apply: tip_bottom_right },
    ShoreRule { name: "double_tip_top_left", apply: double_tip_top_left },
    ShoreRule { name: "double_tip_top_right", apply: double_tip_top_right },
    ShoreRule { name: "edge_top", apply: edge_top },
    ShoreRule { name: "edge_bottom", apply: edge_bottom },
    ShoreRule { name: "edge_left", apply: edge_left },
    ShoreRule { name: "edge_right", apply: edge_right },
    ShoreRule { name: "corner_top_left", apply: corner_top_left },
    ShoreRule { name: "corner_top_right", apply: corner_top_right },
    ShoreRule { name: "corner_bottom_left", apply: corner_bottom_left },
    ShoreRule { name: "corner_bottom_right", apply: corner_bottom_right },
];

fn shore_if(condition: bool, kind: ShoreKind) -> Option<TileCategory> {
    condition.then_some(TileCategory::Shore(kind))
}

// ─── Demotion ────────────────────────────────────────────────────────────────

/// A shore with no grass anywhere around it is open water
fn demote_without_grass(h: &Neighborhood) -> Option<TileCategory> {
    (!h.any_grass()).then_some(TileCategory::WATER)
}

// ─── Single tips ─────────────────────────────────────────────────────────────
//
// Grass touches only one corner. The two cardinals next to that corner must
// be solid and the other two must not be grass, which rules out edges and
// corners; the opposite diagonal must not be grass either.

fn tip_top_left(h: &Neighborhood) -> Option<TileCategory> {
    shore_if(
        !h.e.is_grass()
            && !h.s.is_grass()
            && h.n.is_solid()
            && h.w.is_solid()
            && (h.nw.presents_grass(Side::Bottom) || h.nw.presents_grass(Side::Right))
            && !h.se.is_grass(),
        ShoreKind::TipTopLeft,
    )
}

fn tip_top_right(h: &Neighborhood) -> Option<TileCategory> {
    shore_if(
        !h.w.is_grass()
            && !h.s.is_grass()
            && h.n.is_solid()
            && h.e.is_solid()
            && (h.ne.presents_grass(Side::Bottom) || h.ne.presents_grass(Side::Left))
            && !h.sw.is_grass(),
        ShoreKind::TipTopRight,
    )
}

fn tip_bottom_left(h: &Neighborhood) -> Option<TileCategory> {
    shore_if(
        !h.e.is_grass()
            && !h.n.is_grass()
            && h.s.is_solid()
            && h.w.is_solid()
            && (h.sw.presents_grass(Side::Top) || h.sw.presents_grass(Side::Right))
            && !h.ne.is_grass(),
        ShoreKind::TipBottomLeft,
    )
}

fn tip_bottom_right(h: &Neighborhood) -> Option<TileCategory> {
    shore_if(
        !h.w.is_grass()
            && !h.n.is_grass()
            && h.s.is_solid()
            && h.e.is_solid()
            && (h.se.presents_grass(Side::Top) || h.se.presents_grass(Side::Left))
            && !h.nw.is_grass(),
        ShoreKind::TipBottomRight,
    )
}

// ─── Double tips ─────────────────────────────────────────────────────────────

/// Grass at top-left and bottom-right, water on the other diagonal
fn double_tip_top_left(h: &Neighborhood) -> Option<TileCategory> {
    shore_if(
        h.ne.is_water() && h.sw.is_water() && h.nw.is_grass() && h.se.is_grass(),
        ShoreKind::DoubleTipTopLeft,
    )
}

/// Grass at top-right and bottom-left, water on the other diagonal
fn double_tip_top_right(h: &Neighborhood) -> Option<TileCategory> {
    shore_if(
        h.nw.is_water() && h.se.is_water() && h.ne.is_grass() && h.sw.is_grass(),
        ShoreKind::DoubleTipTopRight,
    )
}

// ─── Straight edges ──────────────────────────────────────────────────────────
//
// The grass side must present grass, the perpendicular cardinals must be
// solid. Each edge carries two exclusions for neighbor pairs that belong to
// a corner instead.

fn edge_top(h: &Neighborhood) -> Option<TileCategory> {
    use ShoreKind::*;
    shore_if(
        !h.s.is_grass()
            && h.w.is_solid()
            && h.e.is_solid()
            && h.n.presents_grass(Side::Bottom)
            && !(h.e.is_shore_in(&[Bottom, CornerBottomLeft]) && h.s.is_shore_in(&[Right]))
            && !(h.w.is_shore_in(&[Bottom, CornerBottomRight]) && h.s.is_shore_in(&[Left])),
        Top,
    )
}

fn edge_bottom(h: &Neighborhood) -> Option<TileCategory> {
    use ShoreKind::*;
    shore_if(
        !h.n.is_grass()
            && h.w.is_solid()
            && h.e.is_solid()
            && h.s.presents_grass(Side::Top)
            && !(h.w.is_shore_in(&[Top, CornerTopRight]) && h.n.is_shore_in(&[Left]))
            && !(h.e.is_shore_in(&[Top, CornerTopLeft]) && h.n.is_shore_in(&[Right])),
        Bottom,
    )
}

fn edge_left(h: &Neighborhood) -> Option<TileCategory> {
    use ShoreKind::*;
    shore_if(
        !h.e.is_grass()
            && h.n.is_solid()
            && h.s.is_solid()
            && h.w.presents_grass(Side::Right)
            && !(h.n.is_shore_in(&[Right, CornerBottomRight]) && h.e.is_shore_in(&[Top]))
            && !(h.s.is_shore_in(&[Right, CornerTopRight]) && h.e.is_shore_in(&[Bottom])),
        Left,
    )
}

fn edge_right(h: &Neighborhood) -> Option<TileCategory> {
    use ShoreKind::*;
    shore_if(
        !h.w.is_grass()
            && h.n.is_solid()
            && h.s.is_solid()
            && h.e.presents_grass(Side::Left)
            && !(h.s.is_shore_in(&[Left, CornerTopLeft]) && h.w.is_shore_in(&[Bottom]))
            && !(h.n.is_shore_in(&[Left, CornerBottomLeft]) && h.w.is_shore_in(&[Top])),
        Right,
    )
}

// ─── Corners ─────────────────────────────────────────────────────────────────
//
// Two adjacent cardinals present grass, the other two are solid. The top
// corners also accept a trapped configuration where a neighbor is itself
// still misclassified, so they can settle before that neighbor does.

fn corner_top_left(h: &Neighborhood) -> Option<TileCategory> {
    use ShoreKind::*;
    let left = h.w.presents_grass(Side::Right)
        || (h.s.is_shore_in(&[Left]) && h.w.is_shore_in(&[Bottom]));
    let above = h.n.presents_grass(Side::Bottom)
        || (h.n.is_shore_in(&[Right]) && h.e.is_shore_in(&[Top]));
    shore_if(h.s.is_solid() && h.e.is_solid() && left && above, CornerTopLeft)
}

fn corner_top_right(h: &Neighborhood) -> Option<TileCategory> {
    use ShoreKind::*;
    let right = h.e.presents_grass(Side::Left)
        || (h.s.is_shore_in(&[Right]) && h.e.is_shore_in(&[Bottom]));
    let above = h.n.presents_grass(Side::Bottom)
        || (h.n.is_shore_in(&[Left]) && h.w.is_shore_in(&[Top]));
    shore_if(h.s.is_solid() && h.w.is_solid() && right && above, CornerTopRight)
}

fn corner_bottom_left(h: &Neighborhood) -> Option<TileCategory> {
    shore_if(
        h.n.is_solid()
            && h.e.is_solid()
            && h.w.presents_grass(Side::Right)
            && h.s.presents_grass(Side::Top),
        ShoreKind::CornerBottomLeft,
    )
}

fn corner_bottom_right(h: &Neighborhood) -> Option<TileCategory> {
    shore_if(
        h.n.is_solid()
            && h.w.is_solid()
            && h.e.presents_grass(Side::Left)
            && h.s.presents_grass(Side::Top),
        ShoreKind::CornerBottomRight,
    )
}

// ─── Entry points ────────────────────────────────────────────────────────────

/// Find the first rule that fires for `hood`, with the tile it produces
pub fn first_matching_rule(hood: &Neighborhood) -> Option<(&'static ShoreRule, TileCategory)> {
    SHORE_RULES
        .iter()
        .find_map(|rule| (rule.apply)(hood).map(|tile| (rule, tile)))
}

/// Decide what a shore cell with neighborhood `hood` should become.
///
/// `None` means no rule fired and the cell keeps its current variant.
pub fn classify_shore(hood: &Neighborhood) -> Option<TileCategory> {
    first_matching_rule(hood).map(|(_, tile)| tile)
}

/// Re-classify the shore at `(x, y)` in place.
///
/// Cells that are not shore, and shores no rule fires for, are left alone.
/// Returns whether the cell changed.
pub fn correct_shore_tile(grid: &mut Grid, x: i32, y: i32) -> bool {
    let Some(current) = grid.tile(x, y).filter(|tile| tile.is_shore()) else {
        return false;
    };
    let hood = Neighborhood::of(grid, x, y);
    let Some((rule, tile)) = first_matching_rule(&hood) else {
        return false;
    };
    if tile == current {
        return false;
    }
    // In bounds: we just read it
    if grid.set(x, y, tile).is_err() {
        return false;
    }
    trace!(x, y, rule = rule.name, from = ?current, to = ?tile, "corrected shore");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoreline_core::{Cell, Direction};

    const G: Cell = Cell::Tile(TileCategory::GRASS);
    const W: Cell = Cell::Tile(TileCategory::WATER);
    const B: Cell = Cell::Boundary;

    fn s(kind: ShoreKind) -> Cell {
        Cell::Tile(TileCategory::Shore(kind))
    }

    fn hood(cells: &[(Direction, Cell)]) -> Neighborhood {
        cells
            .iter()
            .fold(Neighborhood::uniform(B), |h, &(d, c)| h.with(d, c))
    }

    fn classified(cells: &[(Direction, Cell)]) -> Option<TileCategory> {
        classify_shore(&hood(cells))
    }

    fn shore(kind: ShoreKind) -> Option<TileCategory> {
        Some(TileCategory::Shore(kind))
    }

    use Direction::*;

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = SHORE_RULES.iter().map(|r| r.name).collect();
        assert_eq!(names[0], "demote_without_grass");
        assert!(names[1..5].iter().all(|n| n.starts_with("tip_")));
        assert!(names[5..7].iter().all(|n| n.starts_with("double_tip_")));
        assert!(names[7..11].iter().all(|n| n.starts_with("edge_")));
        assert!(names[11..].iter().all(|n| n.starts_with("corner_")));
    }

    #[test]
    fn test_demote_without_grass() {
        assert_eq!(classify_shore(&Neighborhood::uniform(W)), Some(TileCategory::WATER));
        assert_eq!(classify_shore(&Neighborhood::uniform(B)), Some(TileCategory::WATER));
        // A grass-bearing shore is not grass
        assert_eq!(
            classified(&[(North, s(ShoreKind::Bottom))]),
            Some(TileCategory::WATER)
        );
    }

    #[test]
    fn test_single_tips() {
        assert_eq!(classified(&[(NorthWest, G)]), shore(ShoreKind::TipTopLeft));
        assert_eq!(classified(&[(NorthEast, G)]), shore(ShoreKind::TipTopRight));
        assert_eq!(classified(&[(SouthWest, G)]), shore(ShoreKind::TipBottomLeft));
        assert_eq!(classified(&[(SouthEast, G)]), shore(ShoreKind::TipBottomRight));
    }

    #[test]
    fn test_tip_accepts_grass_bearing_shore() {
        let tile = classified(&[(NorthWest, s(ShoreKind::Bottom)), (NorthEast, G)]);
        assert_eq!(tile, shore(ShoreKind::TipTopLeft));
    }

    #[test]
    fn test_double_tips() {
        assert_eq!(
            classified(&[(NorthWest, G), (SouthEast, G), (NorthEast, W), (SouthWest, W)]),
            shore(ShoreKind::DoubleTipTopLeft)
        );
        assert_eq!(
            classified(&[(NorthEast, G), (SouthWest, G), (NorthWest, W), (SouthEast, W)]),
            shore(ShoreKind::DoubleTipTopRight)
        );
    }

    #[test]
    fn test_straight_edges() {
        let top = s(ShoreKind::Top);
        let bottom = s(ShoreKind::Bottom);
        let left = s(ShoreKind::Left);
        let right = s(ShoreKind::Right);
        assert_eq!(
            classified(&[(North, G), (West, top), (East, top), (South, W)]),
            shore(ShoreKind::Top)
        );
        assert_eq!(
            classified(&[(South, G), (West, bottom), (East, bottom), (North, W)]),
            shore(ShoreKind::Bottom)
        );
        assert_eq!(
            classified(&[(West, G), (North, left), (South, left), (East, W)]),
            shore(ShoreKind::Left)
        );
        assert_eq!(
            classified(&[(East, G), (North, right), (South, right), (West, W)]),
            shore(ShoreKind::Right)
        );
    }

    #[test]
    fn test_corners() {
        assert_eq!(
            classified(&[
                (North, G),
                (West, G),
                (East, s(ShoreKind::Top)),
                (South, s(ShoreKind::Left)),
                (SouthEast, W),
            ]),
            shore(ShoreKind::CornerTopLeft)
        );
        assert_eq!(
            classified(&[
                (West, G),
                (South, G),
                (North, s(ShoreKind::Left)),
                (East, s(ShoreKind::Bottom)),
            ]),
            shore(ShoreKind::CornerBottomLeft)
        );
        assert_eq!(
            classified(&[
                (East, G),
                (South, G),
                (North, s(ShoreKind::Right)),
                (West, s(ShoreKind::Bottom)),
            ]),
            shore(ShoreKind::CornerBottomRight)
        );
    }

    #[test]
    fn test_tip_outranks_edge() {
        let cells = [
            (NorthWest, G),
            (North, s(ShoreKind::Bottom)),
            (West, s(ShoreKind::Top)),
            (East, s(ShoreKind::Top)),
            (South, W),
        ];
        let h = hood(&cells);
        assert!(edge_top(&h).is_some());
        assert_eq!(classify_shore(&h), shore(ShoreKind::TipTopLeft));
    }

    #[test]
    fn test_edge_exclusion_falls_through_to_corner() {
        // Bottom shore to the east with a Right shore below: a top-right corner
        let cells = [
            (North, G),
            (East, s(ShoreKind::Bottom)),
            (South, s(ShoreKind::Right)),
        ];
        let h = hood(&cells);
        assert!(edge_top(&h).is_none());
        assert_eq!(classify_shore(&h), shore(ShoreKind::CornerTopRight));
    }

    #[test]
    fn test_trapped_top_left_corner() {
        // Left neighbor is a stale Bottom shore over a Left shore
        let cells = [
            (North, G),
            (West, s(ShoreKind::Bottom)),
            (East, s(ShoreKind::Top)),
            (South, s(ShoreKind::Left)),
        ];
        let h = hood(&cells);
        assert!(edge_top(&h).is_none());
        assert_eq!(classify_shore(&h), shore(ShoreKind::CornerTopLeft));
    }

    #[test]
    fn test_unmatched_neighborhood() {
        // Grass above and below with nothing to the sides fits no variant
        assert_eq!(classified(&[(North, G), (South, G)]), None);
    }

    #[test]
    fn test_correct_shore_tile_in_grid() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, TileCategory::Shore(ShoreKind::Top)).unwrap();
        // Grass on all sides matches nothing past demotion, so the tile stays
        assert!(!correct_shore_tile(&mut grid, 1, 1));

        // Surrounded by water: demoted
        let mut grid = Grid::filled(3, 3, TileCategory::WATER);
        grid.set(1, 1, TileCategory::Shore(ShoreKind::Top)).unwrap();
        assert!(correct_shore_tile(&mut grid, 1, 1));
        assert_eq!(grid.tile(1, 1), Some(TileCategory::WATER));
    }

    #[test]
    fn test_correct_shore_tile_ignores_non_shore() {
        let mut grid = Grid::filled(2, 2, TileCategory::WATER);
        assert!(!correct_shore_tile(&mut grid, 0, 0));
        assert!(!correct_shore_tile(&mut grid, 5, 5));
        assert_eq!(grid, Grid::filled(2, 2, TileCategory::WATER));
    }
}
