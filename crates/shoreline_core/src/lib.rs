//! Core data structures for shoreline autotiling
//!
//! This crate provides the plain data the autotile engine operates on:
//! - `TileCategory` - The closed set of grass, water and shore tiles
//! - `Grid` - Bounds-checked 2D tile storage with a boundary sentinel
//! - `MapDocument` - The bracketed `.map` text format used by the editor
//!
//! It has no Bevy dependency.

mod format;
mod grid;
mod tile;

pub use format::{
    decode_grid, encode_grid, load_map, parse_map, save_map, write_map, MapDocument,
    MapFormatError, MAP_OBJECTS_HEADER, MAP_TILES_HEADER,
};
pub use grid::{Cell, Grid, GridError};
pub use tile::{
    Direction, GrassVariant, ShoreKind, Side, TileCategory, UnknownTileCode, WaterVariant,
    GRASS_VARIANTS, WATER_VARIANTS,
};
