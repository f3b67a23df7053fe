//! Continuity between a terrain tile and its neighbours
//!
//! Two tiles are continuous when they belong to the same visual mass and need
//! no edge between them. Anything that is not continuous counts as "ground":
//! an edge has to be drawn on that side.

use haunt_core::{EntityKind, TerrainKind};

/// What the auto-tiler sees in a neighbouring cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    /// Outside the active region or off the backing array
    Outside,
    /// Inside the active region with nothing placed
    Empty,
    Occupied(EntityKind),
}

impl Neighbor {
    pub fn is_wall(&self) -> bool {
        matches!(self, Neighbor::Occupied(EntityKind::Wall))
    }

    /// Walls and border pieces; what a wall may rest on
    pub fn is_wall_like(&self) -> bool {
        matches!(
            self,
            Neighbor::Occupied(EntityKind::Wall | EntityKind::BorderEdge | EntityKind::BorderCorner)
        )
    }
}

/// Whether `neighbor` continues the terrain mass of kind `kind`.
///
/// Water also merges with walls so no seam is drawn where they meet. Sand only
/// merges with sand.
pub fn continuous(kind: TerrainKind, neighbor: Neighbor) -> bool {
    let Neighbor::Occupied(other) = neighbor else {
        return false;
    };
    match kind {
        TerrainKind::Water => matches!(other, EntityKind::Water | EntityKind::Wall),
        TerrainKind::Sand => matches!(other, EntityKind::Sand),
    }
}

/// Whether an edge must be drawn between a `kind` tile and `neighbor`
pub fn is_ground(kind: TerrainKind, neighbor: Neighbor) -> bool {
    !continuous(kind, neighbor)
}
