//! Tile vocabulary
//!
//! Every grid cell holds exactly one [`TileCategory`]. The integer codes used by
//! the `.map` file format are an encoding of this enumeration, never a storage
//! format: grass is `0..=3`, water is `4..=5` and the fourteen shore kinds are
//! `6..=19` in [`ShoreKind::ALL`] order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of grass art variants
pub const GRASS_VARIANTS: u8 = 4;
/// Number of water art variants
pub const WATER_VARIANTS: u8 = 2;

const WATER_CODE_BASE: u16 = GRASS_VARIANTS as u16;
const SHORE_CODE_BASE: u16 = WATER_CODE_BASE + WATER_VARIANTS as u16;

/// One of the four cardinal sides of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// The eight neighbor directions around a cell.
///
/// Offsets use the grid's top-left origin: `y` grows downwards, so `North` is
/// `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, clockwise from north
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Grid offset `(dx, dy)` of the neighbor in this direction
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// The shore kind a grass cell takes when water lies in the opposite direction.
    ///
    /// A cell north of a water tile has grass above it and water below, which is
    /// [`ShoreKind::Top`]; a cell north-west of it is the outer
    /// [`ShoreKind::CornerTopLeft`].
    pub fn facing_shore(self) -> ShoreKind {
        match self {
            Direction::North => ShoreKind::Top,
            Direction::South => ShoreKind::Bottom,
            Direction::West => ShoreKind::Left,
            Direction::East => ShoreKind::Right,
            Direction::NorthWest => ShoreKind::CornerTopLeft,
            Direction::NorthEast => ShoreKind::CornerTopRight,
            Direction::SouthWest => ShoreKind::CornerBottomLeft,
            Direction::SouthEast => ShoreKind::CornerBottomRight,
        }
    }
}

/// Shore transition variants.
///
/// The name describes where the grass is drawn: a `Top` shore has grass along
/// its top edge and water below, a `CornerTopLeft` has grass along its top and
/// left edges. Tips touch grass only at one corner, double tips at two
/// opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShoreKind {
    Top,
    Bottom,
    Left,
    Right,
    CornerTopLeft,
    CornerTopRight,
    CornerBottomLeft,
    CornerBottomRight,
    TipTopLeft,
    TipTopRight,
    TipBottomLeft,
    TipBottomRight,
    DoubleTipTopLeft,
    DoubleTipTopRight,
}

impl ShoreKind {
    /// All shore kinds in tile-code order
    pub const ALL: [ShoreKind; 14] = [
        ShoreKind::Top,
        ShoreKind::Bottom,
        ShoreKind::Left,
        ShoreKind::Right,
        ShoreKind::CornerTopLeft,
        ShoreKind::CornerTopRight,
        ShoreKind::CornerBottomLeft,
        ShoreKind::CornerBottomRight,
        ShoreKind::TipTopLeft,
        ShoreKind::TipTopRight,
        ShoreKind::TipBottomLeft,
        ShoreKind::TipBottomRight,
        ShoreKind::DoubleTipTopLeft,
        ShoreKind::DoubleTipTopRight,
    ];

    /// Sides along which this shore draws a full grass edge.
    ///
    /// Tips and double tips only touch grass at corners, so they present no
    /// grass edge to their cardinal neighbors.
    pub fn grass_sides(self) -> &'static [Side] {
        match self {
            ShoreKind::Top => &[Side::Top],
            ShoreKind::Bottom => &[Side::Bottom],
            ShoreKind::Left => &[Side::Left],
            ShoreKind::Right => &[Side::Right],
            ShoreKind::CornerTopLeft => &[Side::Top, Side::Left],
            ShoreKind::CornerTopRight => &[Side::Top, Side::Right],
            ShoreKind::CornerBottomLeft => &[Side::Bottom, Side::Left],
            ShoreKind::CornerBottomRight => &[Side::Bottom, Side::Right],
            ShoreKind::TipTopLeft
            | ShoreKind::TipTopRight
            | ShoreKind::TipBottomLeft
            | ShoreKind::TipBottomRight
            | ShoreKind::DoubleTipTopLeft
            | ShoreKind::DoubleTipTopRight => &[],
        }
    }

    /// Whether this shore draws grass along `side`
    pub fn has_grass_on(self, side: Side) -> bool {
        self.grass_sides().contains(&side)
    }

    fn index(self) -> u16 {
        // ALL is in declaration order
        self as u16
    }
}

/// A validated grass variant in `0..GRASS_VARIANTS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GrassVariant(u8);

impl GrassVariant {
    pub const fn new(variant: u8) -> Option<Self> {
        if variant < GRASS_VARIANTS {
            Some(Self(variant))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

/// A validated water variant in `0..WATER_VARIANTS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaterVariant(u8);

impl WaterVariant {
    pub const fn new(variant: u8) -> Option<Self> {
        if variant < WATER_VARIANTS {
            Some(Self(variant))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

/// The content of a single grid cell.
///
/// Serializes as its integer tile code so grid snapshots stay compact and match
/// the `.map` file encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum TileCategory {
    Grass(GrassVariant),
    Water(WaterVariant),
    Shore(ShoreKind),
}

/// Error returned when an integer does not name a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown tile code {0}")]
pub struct UnknownTileCode(pub u16);

impl TileCategory {
    /// Default grass tile (variant 0)
    pub const GRASS: Self = TileCategory::Grass(GrassVariant(0));
    /// Default water tile (variant 0)
    pub const WATER: Self = TileCategory::Water(WaterVariant(0));

    /// Grass with the given variant, if it exists
    pub fn grass(variant: u8) -> Option<Self> {
        GrassVariant::new(variant).map(TileCategory::Grass)
    }

    /// Water with the given variant, if it exists
    pub fn water(variant: u8) -> Option<Self> {
        WaterVariant::new(variant).map(TileCategory::Water)
    }

    pub fn is_grass(self) -> bool {
        matches!(self, TileCategory::Grass(_))
    }

    pub fn is_water(self) -> bool {
        matches!(self, TileCategory::Water(_))
    }

    pub fn is_shore(self) -> bool {
        matches!(self, TileCategory::Shore(_))
    }

    /// Whether ground objects standing on this tile would be submerged.
    ///
    /// The object layer uses this to drop floor-level objects after an edit.
    pub fn is_water_or_shore(self) -> bool {
        !self.is_grass()
    }

    pub fn shore_kind(self) -> Option<ShoreKind> {
        match self {
            TileCategory::Shore(kind) => Some(kind),
            _ => None,
        }
    }

    /// Integer code used by the `.map` file format
    pub fn code(self) -> u16 {
        match self {
            TileCategory::Grass(v) => v.get() as u16,
            TileCategory::Water(v) => WATER_CODE_BASE + v.get() as u16,
            TileCategory::Shore(kind) => SHORE_CODE_BASE + kind.index(),
        }
    }

    /// Decode an integer tile code
    pub fn from_code(code: u16) -> Result<Self, UnknownTileCode> {
        if code < WATER_CODE_BASE {
            return Ok(TileCategory::Grass(GrassVariant(code as u8)));
        }
        if code < SHORE_CODE_BASE {
            return Ok(TileCategory::Water(WaterVariant((code - WATER_CODE_BASE) as u8)));
        }
        ShoreKind::ALL
            .get((code - SHORE_CODE_BASE) as usize)
            .map(|&kind| TileCategory::Shore(kind))
            .ok_or(UnknownTileCode(code))
    }

    /// Every tile in code order
    pub fn all() -> impl Iterator<Item = TileCategory> {
        (0..SHORE_CODE_BASE + ShoreKind::ALL.len() as u16)
            .filter_map(|code| TileCategory::from_code(code).ok())
    }
}

impl Default for TileCategory {
    fn default() -> Self {
        TileCategory::GRASS
    }
}

impl From<ShoreKind> for TileCategory {
    fn from(kind: ShoreKind) -> Self {
        TileCategory::Shore(kind)
    }
}

impl From<TileCategory> for u16 {
    fn from(tile: TileCategory) -> Self {
        tile.code()
    }
}

impl TryFrom<u16> for TileCategory {
    type Error = UnknownTileCode;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        TileCategory::from_code(code)
    }
}
