//! Tile board for haunt levels
//!
//! The board is a fixed-capacity grid of entity handles with a resizable
//! active region. It never owns entities: handles point into a world that
//! implements [`TileWorld`], and entities the board drops are only tombstoned.
//!
//! Every mutation re-tiles the affected neighbourhood through
//! `haunt_autotile`, and pushes new frames and collision footprints to the
//! world.
//!
//! # Example
//!
//! ```rust,ignore
//! use haunt_board::{EntityWorld, TileBoard, TileWorld};
//! use haunt_core::{BoardConfig, EntityKind};
//!
//! let mut world = EntityWorld::new();
//! let mut board = TileBoard::new(&BoardConfig::default())?;
//! board.set_borders_and_update_terrain(&mut world);
//!
//! let water = world.spawn(EntityKind::Water, board.mapper().tile_center(20, 20));
//! assert!(board.add_new_obstacle(&mut world, water));
//!
//! // Hand changed collision footprints to physics
//! for update in world.drain_footprint_updates() {
//!     println!("{} -> {}", update.id, update.shape.name());
//! }
//! ```

mod board;
mod borders;
mod loader;
mod resize;
mod retile;
mod world;

pub use board::TileBoard;
pub use borders::BorderRefresh;
pub use loader::{
    load_level_from_bytes, load_level_from_path, load_level_from_str, save_level_to_path,
    save_level_to_string, LevelError, LoadReport,
};
pub use resize::BorderChange;
pub use world::{EntityWorld, FootprintUpdate, TileWorld};

pub use haunt_autotile;
pub use haunt_core;
