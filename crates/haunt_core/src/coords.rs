//! Conversion between world coordinates and tile indices
//!
//! World space is continuous with the origin at the lower-left corner of the
//! anchor tile. Tile `i` covers `[(i - anchor) * size, (i - anchor + 1) * size)`
//! on its axis.

use crate::region::Anchor;

/// Convert one world coordinate into a tile index on the same axis.
///
/// Halfway values round up, so a coordinate on a tile boundary belongs to the
/// tile on its positive side.
pub fn coord_to_tile(coord: f32, tile_size: f32, anchor_offset: i32) -> i32 {
    ((coord - tile_size / 2.0) / tile_size + 0.5).floor() as i32 + anchor_offset
}

/// Convert a tile index into a world coordinate on the same axis.
///
/// Returns the tile center, or the tile's lower/left edge when `corner` is set.
pub fn tile_to_coord(index: i32, tile_size: f32, anchor_offset: i32, corner: bool) -> f32 {
    let center = ((index - anchor_offset) as f32 + 0.5) * tile_size;
    if corner {
        center - tile_size / 2.0
    } else {
        center
    }
}

/// Tile size and anchor bundled together for two-axis conversions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    pub tile_size: f32,
    pub anchor: Anchor,
}

impl CoordinateMapper {
    pub fn new(tile_size: f32, anchor: Anchor) -> Self {
        Self { tile_size, anchor }
    }

    /// Tile index containing the world position `[x, y]`
    pub fn world_to_tile(&self, position: [f32; 2]) -> (i32, i32) {
        (
            coord_to_tile(position[0], self.tile_size, self.anchor.initial_left),
            coord_to_tile(position[1], self.tile_size, self.anchor.initial_bottom),
        )
    }

    /// World position of the center of tile `(x, y)`
    pub fn tile_center(&self, x: i32, y: i32) -> [f32; 2] {
        [
            tile_to_coord(x, self.tile_size, self.anchor.initial_left, false),
            tile_to_coord(y, self.tile_size, self.anchor.initial_bottom, false),
        ]
    }

    /// World position of the lower-left corner of tile `(x, y)`
    pub fn tile_corner(&self, x: i32, y: i32) -> [f32; 2] {
        [
            tile_to_coord(x, self.tile_size, self.anchor.initial_left, true),
            tile_to_coord(y, self.tile_size, self.anchor.initial_bottom, true),
        ]
    }

    /// Tile index of the grid corner closest to `position`.
    ///
    /// A drag handle sits on tile corners rather than centers, so the position
    /// is shifted by half a tile before rounding. The returned index is the
    /// tile to the upper-right of that corner.
    pub fn corner_to_tile(&self, position: [f32; 2]) -> (i32, i32) {
        let half = self.tile_size / 2.0;
        self.world_to_tile([position[0] + half, position[1] + half])
    }
}
