//! Shoreline autotiling for grass/water tile maps
//!
//! When a tile is painted, the engine keeps the shoreline between grass and
//! water consistent around the edit:
//!
//! 1. [`can_place`] refuses grass that would end up enclosed by water
//! 2. the tile is written
//! 3. [`find_water_region`] collects the water body under the edit
//! 4. [`seed_shores`] rings that body with shore tiles
//! 5. [`correct_shore_tile`] picks the right shore variant for each shore in
//!    a window around the edit, over a bounded number of passes
//!
//! [`place_tile`] runs the whole sequence; [`update_map_area`] runs steps 3-5.
//!
//! # Example
//!
//! ```
//! use shoreline_autotile::{place_tile, Placement};
//! use shoreline_core::{Grid, ShoreKind, TileCategory};
//!
//! let mut grid = Grid::new(5, 5);
//! let placement = place_tile(&mut grid, 2, 2, TileCategory::WATER).unwrap();
//! assert!(placement.is_applied());
//! assert_eq!(grid.tile(2, 1), Some(TileCategory::Shore(ShoreKind::Top)));
//! ```

pub mod classify;
pub mod config;
pub mod generate;
pub mod guard;
pub mod neighborhood;
pub mod place;
pub mod region;
pub mod seed;
pub mod update;

pub use classify::{
    classify_shore, correct_shore_tile, first_matching_rule, ShoreRule, SHORE_RULES,
};
pub use config::{
    ConfigError, EngineConfig, GeneratorConfig, ShorelineConfig, DEFAULT_PASSES,
    DEFAULT_WINDOW_RADIUS,
};
pub use generate::{generate_map, randomize_grass_variants, randomize_water_variants};
pub use guard::{can_place, can_place_grass};
pub use neighborhood::Neighborhood;
pub use place::{place_tile, place_tile_with, preview_place, Placement};
pub use region::{find_water_region, WaterRegion};
pub use seed::seed_shores;
pub use update::{update_map_area, update_map_area_with, AreaUpdate};
