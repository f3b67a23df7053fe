//! Terrain auto-tiling for water and sand
//!
//! A terrain tile picks one of 16 frames from which of its four sides face
//! ground, then adds small corner patches where a concave corner would
//! otherwise let a diagonal neighbour peek through.

use crate::continuity::{is_ground, Neighbor};
use haunt_core::{CollisionShape, CornerOverlay, TerrainKind, TerrainTile};

/// Frame for each ground pattern, indexed by `above << 3 | below << 2 | left << 1 | right`
pub const TERRAIN_FRAMES: [u8; 16] = [
    0,  // F F F F
    9,  // F F F T
    11, // F F T F
    2,  // F F T T
    10, // F T F F
    5,  // F T F T
    6,  // F T T F
    14, // F T T T
    8,  // T F F F
    4,  // T F F T
    7,  // T F T F
    12, // T F T T
    1,  // T T F F
    13, // T T F T
    15, // T T T F
    3,  // T T T T
];

/// Ground flags of the 8 neighbours of a terrain tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerrainNeighbors {
    pub above: bool,
    pub below: bool,
    pub left: bool,
    pub right: bool,
    pub up_left: bool,
    pub up_right: bool,
    pub down_left: bool,
    pub down_right: bool,
}

impl TerrainNeighbors {
    /// Classify the neighbourhood of a `kind` tile.
    ///
    /// `sample(dx, dy)` returns what lies at the given offset, +y up.
    pub fn sample<F>(kind: TerrainKind, sample: F) -> Self
    where
        F: Fn(i32, i32) -> Neighbor,
    {
        let ground = |dx, dy| is_ground(kind, sample(dx, dy));
        Self {
            above: ground(0, 1),
            below: ground(0, -1),
            left: ground(-1, 0),
            right: ground(1, 0),
            up_left: ground(-1, 1),
            up_right: ground(1, 1),
            down_left: ground(-1, -1),
            down_right: ground(1, -1),
        }
    }

    fn pattern(&self) -> usize {
        (self.above as usize) << 3
            | (self.below as usize) << 2
            | (self.left as usize) << 1
            | self.right as usize
    }
}

/// Frame index in 0..16 for the four axis neighbours
pub fn terrain_frame(neighbors: &TerrainNeighbors) -> u8 {
    TERRAIN_FRAMES[neighbors.pattern()]
}

/// Corner patches: both orthogonal sides continuous but the diagonal is not
pub fn corner_overlay(neighbors: &TerrainNeighbors) -> CornerOverlay {
    let n = neighbors;
    CornerOverlay {
        up_left: !n.above && !n.left && n.up_left,
        up_right: !n.above && !n.right && n.up_right,
        down_left: !n.below && !n.left && n.down_left,
        down_right: !n.below && !n.right && n.down_right,
    }
}

/// Collision footprint for a terrain frame.
///
/// Frames with ground above show a raised lip along the top and only block
/// the lower half of the tile.
pub fn terrain_collision(frame: u8) -> CollisionShape {
    if TERRAIN_FRAMES[8..].contains(&frame) {
        CollisionShape::thin()
    } else {
        CollisionShape::Full
    }
}

/// Tile a terrain cell and derive its collision footprint
pub fn autotile_terrain<F>(kind: TerrainKind, sample: F) -> (TerrainTile, CollisionShape)
where
    F: Fn(i32, i32) -> Neighbor,
{
    let neighbors = TerrainNeighbors::sample(kind, sample);
    let frame = terrain_frame(&neighbors);
    let tile = TerrainTile {
        frame,
        corners: corner_overlay(&neighbors),
    };
    (tile, terrain_collision(frame))
}
