//! The tile board: backing array, active region and anchor

use crate::world::TileWorld;
use haunt_autotile::{decorative_fillers, DecorativeFiller, Neighbor};
use haunt_core::{ActiveRegion, Anchor, BoardConfig, ConfigError, CoordinateMapper, EntityId};
use log::debug;

/// Fixed-capacity grid of entity handles with a resizable active region
#[derive(Debug, Clone)]
pub struct TileBoard {
    /// Row-major backing array, `cells[y * width + x]`
    cells: Vec<Option<EntityId>>,
    width: i32,
    height: i32,
    pub(crate) region: ActiveRegion,
    anchor: Anchor,
    tile_size: f32,
    pub(crate) min_width: i32,
    pub(crate) min_height: i32,
}

impl TileBoard {
    /// Validate `config`, allocate the backing array and center an
    /// `initial_size` active region
    pub fn new(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let [width, height] = config.capacity;
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| ConfigError::Invalid(format!("capacity {width}x{height} overflows")))?;
        let width = width as i32;
        let height = height as i32;
        let mut board = Self {
            cells: vec![None; len],
            width,
            height,
            region: ActiveRegion::new(0, width, 0, height),
            anchor: Anchor::default(),
            tile_size: config.tile_size,
            min_width: config.min_width as i32,
            min_height: config.min_height as i32,
        };
        let [initial_width, initial_height] = config.initial_size;
        board.reset(initial_width, initial_height);
        Ok(board)
    }

    /// Whether `region` lies inside the backing array
    pub(crate) fn fits(&self, region: &ActiveRegion) -> bool {
        region.left >= 0 && region.bottom >= 0 && region.right <= self.width && region.top <= self.height
    }

    /// Backing array size (width, height)
    pub fn capacity(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn active_region(&self) -> ActiveRegion {
        self.region
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Minimum active region size (width, height)
    pub fn min_size(&self) -> (i32, i32) {
        (self.min_width, self.min_height)
    }

    /// Coordinate conversions relative to the current anchor
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.tile_size, self.anchor)
    }

    /// How far the active region has moved from the anchor, in tiles
    pub fn render_offset(&self) -> (i32, i32) {
        (
            self.region.left - self.anchor.initial_left,
            self.region.bottom - self.anchor.initial_bottom,
        )
    }

    pub fn is_on_border_ring(&self, x: i32, y: i32) -> bool {
        self.region.is_ring(x, y)
    }

    pub fn is_interior(&self, x: i32, y: i32) -> bool {
        self.region.is_interior(x, y)
    }

    pub(crate) fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    /// Entity at `(x, y)`; always `None` outside the active region
    pub fn get(&self, x: i32, y: i32) -> Option<EntityId> {
        if !self.region.contains(x, y) {
            return None;
        }
        self.index(x, y).and_then(|idx| self.cells[idx])
    }

    /// Occupied cells of the active region, row by row from the bottom
    pub fn occupied(&self) -> impl Iterator<Item = ((i32, i32), EntityId)> + '_ {
        self.region
            .cells()
            .filter_map(move |(x, y)| self.get(x, y).map(|id| ((x, y), id)))
    }

    /// Write a cell without guards or re-tiling, returning the previous occupant
    pub(crate) fn put(&mut self, x: i32, y: i32, entity: Option<EntityId>) -> Option<EntityId> {
        let idx = self.index(x, y)?;
        std::mem::replace(&mut self.cells[idx], entity)
    }

    /// What the auto-tilers see at `(x, y)`
    pub(crate) fn neighbor<W: TileWorld>(&self, world: &W, x: i32, y: i32) -> Neighbor {
        if !self.region.contains(x, y) {
            return Neighbor::Outside;
        }
        match self.get(x, y).and_then(|id| world.kind_of(id)) {
            Some(kind) => Neighbor::Occupied(kind),
            None => Neighbor::Empty,
        }
    }

    /// Place an entity at the tile under its world position.
    ///
    /// Only interior cells (inside the region, off the border ring) that are
    /// empty accept it. On success the entity is snapped to the tile center.
    pub fn add_new_obstacle<W: TileWorld>(&mut self, world: &mut W, id: EntityId) -> bool {
        let Some(position) = world.position_of(id) else {
            return false;
        };
        let mapper = self.mapper();
        let (x, y) = mapper.world_to_tile(position);
        if !self.region.is_interior(x, y) || self.get(x, y).is_some() {
            return false;
        }
        world.set_position(id, mapper.tile_center(x, y));
        self.put(x, y, Some(id));
        self.retile_around(world, x, y);
        true
    }

    /// Replace the contents of `(x, y)`.
    ///
    /// Fails outside the active region, and on the border ring unless
    /// `override_border` is set. A previous occupant other than `entity` is
    /// tombstoned.
    pub fn set<W: TileWorld>(
        &mut self,
        world: &mut W,
        entity: Option<EntityId>,
        x: i32,
        y: i32,
        override_border: bool,
    ) -> bool {
        if !self.region.contains(x, y) {
            return false;
        }
        if self.region.is_ring(x, y) && !override_border {
            return false;
        }
        if let Some(previous) = self.put(x, y, entity) {
            if Some(previous) != entity {
                world.tombstone(previous);
            }
        }
        self.retile_around(world, x, y);
        true
    }

    /// Clear `(x, y)` without tombstoning its occupant.
    ///
    /// Used when an entity is relocated rather than destroyed. Returns false if
    /// the cell is outside the active region or already empty.
    pub fn remove_from_board<W: TileWorld>(&mut self, world: &mut W, x: i32, y: i32) -> bool {
        if self.get(x, y).is_none() {
            return false;
        }
        self.put(x, y, None);
        self.retile_around(world, x, y);
        true
    }

    /// Pick up the entity at `(x, y)`, leaving it alive in the world
    pub fn take<W: TileWorld>(&mut self, world: &mut W, x: i32, y: i32) -> Option<EntityId> {
        let id = self.get(x, y)?;
        self.remove_from_board(world, x, y);
        Some(id)
    }

    /// Resize and recenter the active region, and re-anchor to its new
    /// lower-left corner. Cell contents are left alone.
    pub fn reset(&mut self, width: u32, height: u32) {
        let width = (width.min(i32::MAX as u32) as i32).clamp(self.min_width, self.width.max(self.min_width));
        let height = (height.min(i32::MAX as u32) as i32).clamp(self.min_height, self.height.max(self.min_height));
        let left = (self.width - width) / 2;
        let bottom = (self.height - height) / 2;
        self.region = ActiveRegion::new(left, left + width, bottom, bottom + height);
        debug_assert!(self.fits(&self.region), "{:?} outside backing array", self.region);
        self.anchor = Anchor {
            initial_left: left,
            initial_bottom: bottom,
        };
        debug!("Board reset to {}x{} at ({}, {})", width, height, left, bottom);
    }

    /// Empty every cell, tombstoning occupants first if `remove_from_world`
    pub fn clear<W: TileWorld>(&mut self, world: &mut W, remove_from_world: bool) {
        for cell in self.cells.iter_mut() {
            if let Some(id) = cell.take() {
                if remove_from_world {
                    world.tombstone(id);
                }
            }
        }
    }

    /// Interior cells reserved for decorative filler under the top corners
    pub fn decorative_fillers(&self) -> Vec<DecorativeFiller> {
        decorative_fillers(&self.region)
    }
}
