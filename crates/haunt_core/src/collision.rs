//! Collision footprints derived from tile frames
//!
//! The board never steps physics. It only describes, per tile, which part of
//! the tile should be solid; the physics world turns that into bodies.

use serde::{Deserialize, Serialize};

/// Collision footprint of a single tile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum CollisionShape {
    /// No collision
    None,
    /// Full tile bounding box
    Full,
    /// Axis-aligned rectangle inside the tile
    Rectangle {
        /// Offset of the rectangle center from the tile center (-0.5..0.5 normalized)
        #[serde(default)]
        offset: [f32; 2],
        /// Size [width, height] (0-1 normalized)
        #[serde(default = "default_full_size")]
        size: [f32; 2],
    },
}

fn default_full_size() -> [f32; 2] {
    [1.0, 1.0]
}

impl Default for CollisionShape {
    fn default() -> Self {
        CollisionShape::None
    }
}

impl CollisionShape {
    /// Bottom half of the tile, used for terrain showing a raised lip
    pub fn thin() -> Self {
        CollisionShape::Rectangle {
            offset: [0.0, -0.25],
            size: [1.0, 0.5],
        }
    }

    /// Lower three quarters of the tile, used for front-facing walls
    pub fn reduced() -> Self {
        CollisionShape::Rectangle {
            offset: [0.0, -0.125],
            size: [1.0, 0.75],
        }
    }

    /// Check if this shape has collision
    pub fn has_collision(&self) -> bool {
        !matches!(self, CollisionShape::None)
    }

    /// Solid rectangle in world units for a tile centered at `center`.
    ///
    /// Returns `(min, max)` corners, or `None` for a shape without collision.
    pub fn world_bounds(&self, center: [f32; 2], tile_size: f32) -> Option<([f32; 2], [f32; 2])> {
        let (offset, size) = match self {
            CollisionShape::None => return None,
            CollisionShape::Full => ([0.0, 0.0], [1.0, 1.0]),
            CollisionShape::Rectangle { offset, size } => (*offset, *size),
        };
        let cx = center[0] + offset[0] * tile_size;
        let cy = center[1] + offset[1] * tile_size;
        let hw = size[0] * tile_size / 2.0;
        let hh = size[1] * tile_size / 2.0;
        Some(([cx - hw, cy - hh], [cx + hw, cy + hh]))
    }

    /// Get the display name of this shape type
    pub fn name(&self) -> &'static str {
        match self {
            CollisionShape::None => "None",
            CollisionShape::Full => "Full",
            CollisionShape::Rectangle { .. } => "Rectangle",
        }
    }
}
