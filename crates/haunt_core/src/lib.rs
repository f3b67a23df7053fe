//! Core data structures for the haunt tile board
//!
//! This crate provides the plain types shared by the auto-tiler and the board:
//! - `CoordinateMapper` - Conversion between world coordinates and tile indices
//! - `ActiveRegion` - The playable rectangle inside the backing array
//! - `EntityId` / `EntityKind` - Stable handles and kinds of placed entities
//! - `TerrainTile`, `WallTile`, `BorderEdge`, `BorderCorner` - Per-tile visual state
//! - `CollisionShape` - Collision footprint pushed to the physics world
//! - `BoardConfig` - Board sizing loaded from TOML
//! - `LevelFile` - The persisted list of placed entities

mod collision;
mod config;
mod coords;
mod entity;
mod level;
mod region;

pub use collision::CollisionShape;
pub use config::{BoardConfig, ConfigError};
pub use coords::{coord_to_tile, tile_to_coord, CoordinateMapper};
pub use entity::{
    BorderCorner, BorderEdge, CornerOverlay, EntityId, EntityKind, TerrainKind, TerrainTile,
    TileEntity, TileVisual, WallTile,
};
pub use level::{LevelFile, PlacedEntity};
pub use region::{ActiveRegion, Anchor, Corner, Side};
