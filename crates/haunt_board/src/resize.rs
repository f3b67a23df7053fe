//! Corner-drag resizing of the active region

use crate::board::TileBoard;
use crate::borders::BorderRefresh;
use crate::world::TileWorld;
use haunt_core::{ActiveRegion, Corner};
use log::debug;

/// Outcome of dragging a region corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChange {
    pub previous: ActiveRegion,
    pub region: ActiveRegion,
    /// Occupants of cells that fell outside the new region, tombstoned
    pub evicted: usize,
    pub borders: BorderRefresh,
}

impl TileBoard {
    /// Candidate region for dragging `corner` to the grid corner nearest `position`.
    ///
    /// The drag point is clamped one tile inside the backing array, and the
    /// region never shrinks below the minimum size measured from the edges
    /// that are not being dragged. Those two edges keep their values.
    pub fn dragged_region(&self, corner: Corner, position: [f32; 2]) -> ActiveRegion {
        let (x, y) = self.mapper().corner_to_tile(position);
        let (width, height) = self.capacity();
        let x = x.clamp(1, (width - 1).max(1));
        let y = y.clamp(1, (height - 1).max(1));

        let old = self.region;
        let mut next = old;
        match corner {
            Corner::TopLeft => {
                next.left = x.min(old.right - self.min_width);
                next.top = y.max(old.bottom + self.min_height);
            }
            Corner::TopRight => {
                next.right = x.max(old.left + self.min_width);
                next.top = y.max(old.bottom + self.min_height);
            }
            Corner::BottomLeft => {
                next.left = x.min(old.right - self.min_width);
                next.bottom = y.min(old.top - self.min_height);
            }
            Corner::BottomRight => {
                next.right = x.max(old.left + self.min_width);
                next.bottom = y.min(old.top - self.min_height);
            }
        }
        next
    }

    /// Drag `corner` of the active region to a world position.
    ///
    /// Cells that leave the region are cleared and their occupants tombstoned.
    /// The anchor is not moved, so world positions of everything that stays
    /// are unchanged. The border is rebuilt around the new region.
    pub fn process_border_change<W: TileWorld>(
        &mut self,
        world: &mut W,
        corner: Corner,
        position: [f32; 2],
    ) -> BorderChange {
        let previous = self.region;
        let region = self.dragged_region(corner, position);
        debug_assert!(region.width() >= self.min_width && region.height() >= self.min_height);
        debug_assert!(self.fits(&region), "{region:?} outside backing array");

        let mut evicted = 0;
        for (x, y) in previous.cells() {
            if region.contains(x, y) {
                continue;
            }
            if let Some(id) = self.put(x, y, None) {
                world.tombstone(id);
                evicted += 1;
            }
        }

        self.region = region;
        debug!(
            "{} drag: {:?} -> {:?}, {} evicted",
            corner.name(),
            previous,
            region,
            evicted
        );
        let borders = self.set_borders_and_update_terrain(world);
        BorderChange {
            previous,
            region,
            evicted,
            borders,
        }
    }
}
