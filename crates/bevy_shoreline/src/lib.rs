//! Bevy integration for shoreline autotiling
//!
//! The terrain lives in the [`TerrainMap`] resource. Paint it by writing
//! [`PlaceTerrain`] messages; the plugin applies them in `Update`, converges
//! the shoreline, and answers with [`TerrainChanged`] or
//! [`PlacementRejected`].
//!
//! # Example
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use bevy_shoreline::{PlaceTerrain, ShorelinePlugin, TerrainChanged};
//! use shoreline_core::TileCategory;
//!
//! fn dig_pond(mut writer: MessageWriter<PlaceTerrain>) {
//!     writer.write(PlaceTerrain { x: 4, y: 4, tile: TileCategory::WATER });
//! }
//!
//! fn despawn_drowned(mut changes: MessageReader<TerrainChanged>) {
//!     for change in changes.read() {
//!         // Remove ground objects standing on change.flooded
//!     }
//! }
//!
//! App::new()
//!     .add_plugins(ShorelinePlugin::default())
//!     .add_systems(Startup, dig_pond)
//!     .add_systems(Update, despawn_drowned);
//! ```

use bevy::log::{debug, warn};
use bevy::prelude::*;
use shoreline_autotile::{place_tile_with, Placement, ShorelineConfig};
use shoreline_core::{Grid, TileCategory};

/// The editable terrain and the settings used to converge it
#[derive(Resource, Debug, Clone)]
pub struct TerrainMap {
    pub grid: Grid,
    pub config: ShorelineConfig,
}

impl TerrainMap {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            config: ShorelineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ShorelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Whether objects at `(x, y)` are standing in water
    pub fn is_flooded(&self, x: i32, y: i32) -> bool {
        self.grid.is_water_or_shore(x, y)
    }
}

/// Request to paint one tile
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceTerrain {
    pub x: i32,
    pub y: i32,
    pub tile: TileCategory,
}

/// Sent after a placement was written and the shoreline converged
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct TerrainChanged {
    pub x: i32,
    pub y: i32,
    /// Cells around the edit now covered by water or shore
    pub flooded: Vec<(i32, i32)>,
}

/// Sent when grass was refused because it would be enclosed by water
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRejected {
    pub x: i32,
    pub y: i32,
    pub tile: TileCategory,
}

/// Plugin that owns a [`TerrainMap`] and applies [`PlaceTerrain`] requests.
///
/// A `TerrainMap` inserted before the plugin is kept; otherwise a grass map
/// of `width` x `height` is created.
pub struct ShorelinePlugin {
    pub width: u32,
    pub height: u32,
    pub config: ShorelineConfig,
}

impl Default for ShorelinePlugin {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            config: ShorelineConfig::default(),
        }
    }
}

impl Plugin for ShorelinePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<TerrainMap>() {
            app.insert_resource(
                TerrainMap::new(Grid::new(self.width, self.height)).with_config(self.config),
            );
        }
        app.add_message::<PlaceTerrain>()
            .add_message::<TerrainChanged>()
            .add_message::<PlacementRejected>()
            .add_systems(Update, apply_terrain_placements);
    }
}

/// System applying queued placements in the order they were written
fn apply_terrain_placements(
    mut requests: MessageReader<PlaceTerrain>,
    mut changed: MessageWriter<TerrainChanged>,
    mut rejected: MessageWriter<PlacementRejected>,
    mut map: ResMut<TerrainMap>,
) {
    for request in requests.read() {
        let PlaceTerrain { x, y, tile } = *request;
        let TerrainMap { grid, config } = &mut *map;
        match place_tile_with(grid, x, y, tile, config) {
            Ok(Placement::Applied { flooded }) => {
                debug!("Placed {:?} at ({}, {}), {} cells flooded", tile, x, y, flooded.len());
                changed.write(TerrainChanged { x, y, flooded });
            }
            Ok(Placement::Unchanged) => {}
            Ok(Placement::Rejected) => {
                debug!("Rejected {:?} at ({}, {})", tile, x, y);
                rejected.write(PlacementRejected { x, y, tile });
            }
            Err(e) => {
                warn!("Ignoring terrain placement: {}", e);
            }
        }
    }
}
