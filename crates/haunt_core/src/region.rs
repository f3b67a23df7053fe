//! Active region geometry
//!
//! The active region is a half-open rectangle of tile indices: `left` and
//! `bottom` are inclusive, `right` and `top` are exclusive.

use serde::{Deserialize, Serialize};

/// The playable rectangle inside the backing array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveRegion {
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
    pub top: i32,
}

impl ActiveRegion {
    pub fn new(left: i32, right: i32, bottom: i32, top: i32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.top - self.bottom
    }

    /// Check if a tile index lies inside the region
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.bottom && y < self.top
    }

    /// Check if a tile index lies on the outermost one-tile ring
    pub fn is_ring(&self, x: i32, y: i32) -> bool {
        self.contains(x, y)
            && (x == self.left || x == self.right - 1 || y == self.bottom || y == self.top - 1)
    }

    /// Check if a tile index lies inside the region but off the ring
    pub fn is_interior(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && !self.is_ring(x, y)
    }

    /// Tile index of one of the four corner cells
    pub fn corner_cell(&self, corner: Corner) -> (i32, i32) {
        match corner {
            Corner::TopLeft => (self.left, self.top - 1),
            Corner::TopRight => (self.right - 1, self.top - 1),
            Corner::BottomLeft => (self.left, self.bottom),
            Corner::BottomRight => (self.right - 1, self.bottom),
        }
    }

    /// Which corner cell `(x, y)` is, if any
    pub fn corner_at(&self, x: i32, y: i32) -> Option<Corner> {
        Corner::ALL
            .into_iter()
            .find(|&corner| self.corner_cell(corner) == (x, y))
    }

    /// Which edge of the ring `(x, y)` is on, excluding the corner cells
    pub fn side_at(&self, x: i32, y: i32) -> Option<Side> {
        if !self.is_ring(x, y) || self.corner_at(x, y).is_some() {
            return None;
        }
        if y == self.top - 1 {
            Some(Side::Top)
        } else if y == self.bottom {
            Some(Side::Bottom)
        } else if x == self.left {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// Iterate every tile index in the region, row by row from the bottom
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let ActiveRegion {
            left,
            right,
            bottom,
            top,
        } = *self;
        (bottom..top).flat_map(move |y| (left..right).map(move |x| (x, y)))
    }
}

/// Lower-left corner of the active region as of the last full reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Anchor {
    pub initial_left: i32,
    pub initial_bottom: i32,
}

/// One of the four corners of the active region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Get the display name of this corner
    pub fn name(&self) -> &'static str {
        match self {
            Corner::TopLeft => "Top-Left",
            Corner::TopRight => "Top-Right",
            Corner::BottomLeft => "Bottom-Left",
            Corner::BottomRight => "Bottom-Right",
        }
    }
}

/// One of the four edges of the active region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Fixed sprite rotation for edge pieces on this side, in degrees
    pub fn rotation_degrees(&self) -> f32 {
        match self {
            Side::Top => 0.0,
            Side::Right => 270.0,
            Side::Bottom => 180.0,
            Side::Left => 90.0,
        }
    }
}
