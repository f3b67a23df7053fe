//! Neighbour-driven frame selection for the haunt tile board
//!
//! Every rule in this crate is a pure function of a tile's neighbourhood.
//! Grid storage lives elsewhere; callers describe the neighbourhood through a
//! sampling closure `Fn(dx, dy) -> Neighbor` relative to the tile being tiled.
//!
//! # Modules
//! - `continuity` - Which neighbours belong to the same visual mass
//! - `terrain` - 16-frame water/sand tiling plus concave corner patches
//! - `wall` - 24-frame wall tiling with front/top distinction
//! - `border` - Edge and corner pieces around the active region
//!
//! # Example
//!
//! ```rust,ignore
//! use haunt_autotile::{terrain::autotile_terrain, Neighbor};
//! use haunt_core::{EntityKind, TerrainKind};
//!
//! // A lone water tile surrounded by empty floor
//! let (tile, collision) = autotile_terrain(TerrainKind::Water, |dx, dy| {
//!     if dx == 0 && dy == 0 {
//!         Neighbor::Occupied(EntityKind::Water)
//!     } else {
//!         Neighbor::Empty
//!     }
//! });
//! assert_eq!(tile.frame, 3);
//! ```

pub mod border;
pub mod continuity;
pub mod terrain;
pub mod wall;

pub use border::{border_piece_at, decorative_fillers, proximity_hint, BorderPiece, DecorativeFiller};
pub use continuity::{continuous, is_ground, Neighbor};
pub use terrain::{autotile_terrain, corner_overlay, terrain_collision, terrain_frame, TerrainNeighbors};
pub use wall::{autotile_wall, is_front_wall, wall_collision, wall_frame, WallNeighbors};

pub use haunt_core;
