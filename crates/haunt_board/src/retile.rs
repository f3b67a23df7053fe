//! Local re-tiling after board mutations

use crate::board::TileBoard;
use crate::world::TileWorld;
use haunt_autotile::{autotile_terrain, autotile_wall};
use haunt_core::{EntityKind, TileVisual};

impl TileBoard {
    /// Recompute the frame and collision footprint of the tile at `(x, y)`.
    ///
    /// Cells that are empty or hold something other than terrain or a wall are
    /// left untouched. Returns true if the tile changed.
    pub fn retile_cell<W: TileWorld>(&self, world: &mut W, x: i32, y: i32) -> bool {
        let Some(id) = self.get(x, y) else {
            return false;
        };
        let Some(kind) = world.kind_of(id) else {
            return false;
        };
        let view: &W = world;
        let sample = |dx: i32, dy: i32| self.neighbor(view, x + dx, y + dy);
        let (visual, collision) = if let Some(terrain) = kind.terrain() {
            let (tile, collision) = autotile_terrain(terrain, sample);
            (TileVisual::Terrain(tile), collision)
        } else if kind.is_wall() {
            let (tile, collision) = autotile_wall(sample);
            (TileVisual::Wall(tile), collision)
        } else {
            return false;
        };
        world.apply_tile(id, visual, collision)
    }

    /// Re-tile everything a change at `(x, y)` can affect.
    ///
    /// That is the 3x3 block around the cell, plus the walls in the row two
    /// above it: their "resting on a front wall" state depends on this cell
    /// through the wall directly above it.
    pub fn retile_around<W: TileWorld>(&self, world: &mut W, x: i32, y: i32) {
        for dy in -1..=1 {
            for dx in -1..=1 {
                self.retile_cell(world, x + dx, y + dy);
            }
        }
        for dx in -1..=1 {
            let is_wall = self
                .get(x + dx, y + 2)
                .and_then(|id| world.kind_of(id))
                .is_some_and(|kind| kind == EntityKind::Wall);
            if is_wall {
                self.retile_cell(world, x + dx, y + 2);
            }
        }
    }

    /// Re-tile every cell of the active region
    pub fn retile_all<W: TileWorld>(&self, world: &mut W) -> usize {
        self.region
            .cells()
            .filter(|&(x, y)| self.retile_cell(world, x, y))
            .count()
    }
}
