//! Full border refresh around the active region

use crate::board::TileBoard;
use crate::world::TileWorld;
use haunt_autotile::{border_piece_at, BorderPiece};
use haunt_core::{CollisionShape, EntityKind, TileVisual};
use log::debug;

/// What a border refresh did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BorderRefresh {
    /// Border pieces created through the world factory
    pub spawned: usize,
    /// Existing border pieces whose side, corner or hint changed
    pub updated: usize,
    /// Entities tombstoned: ring content replaced by border pieces, and
    /// border pieces left stranded inside the region
    pub evicted: usize,
    /// Interior terrain and wall tiles whose frame or footprint changed
    pub retiled: usize,
}

fn piece_kind_and_visual(piece: BorderPiece) -> (EntityKind, TileVisual) {
    match piece {
        BorderPiece::Corner(corner) => (EntityKind::BorderCorner, TileVisual::Corner(corner)),
        BorderPiece::Edge(edge) => (EntityKind::BorderEdge, TileVisual::Edge(edge)),
    }
}

impl TileBoard {
    /// Frame the active region with border pieces and re-tile everything inside.
    ///
    /// Ring cells get the corner or edge piece their position calls for; any
    /// other content there is tombstoned. Border pieces found inside the ring
    /// are tombstoned. Finally every terrain and wall tile is re-tiled.
    pub fn set_borders_and_update_terrain<W: TileWorld>(&mut self, world: &mut W) -> BorderRefresh {
        let mut refresh = BorderRefresh::default();
        let region = self.region;
        let mapper = self.mapper();

        for (x, y) in region.cells() {
            let occupant = self.get(x, y);
            let occupant_kind = occupant.and_then(|id| world.kind_of(id));

            let Some(piece) = border_piece_at(&region, x, y) else {
                if let Some(id) = occupant.filter(|_| occupant_kind.is_some_and(|k| k.is_border())) {
                    self.put(x, y, None);
                    world.tombstone(id);
                    refresh.evicted += 1;
                }
                continue;
            };

            let (kind, visual) = piece_kind_and_visual(piece);
            match occupant {
                Some(id) if occupant_kind == Some(kind) => {
                    if world.apply_tile(id, visual, CollisionShape::Full) {
                        refresh.updated += 1;
                    }
                }
                _ => {
                    if let Some(previous) = occupant {
                        world.tombstone(previous);
                        refresh.evicted += 1;
                    }
                    let id = world.spawn(kind, mapper.tile_center(x, y));
                    world.apply_tile(id, visual, CollisionShape::Full);
                    self.put(x, y, Some(id));
                    refresh.spawned += 1;
                }
            }
        }

        refresh.retiled = self.retile_all(world);
        debug!(
            "Border refresh: {} spawned, {} updated, {} evicted, {} retiled",
            refresh.spawned, refresh.updated, refresh.evicted, refresh.retiled
        );
        refresh
    }
}
