//! Entities placed on the board and their per-tile visual state

use crate::collision::CollisionShape;
use crate::region::{Corner, Side};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable handle to an entity owned by the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// What an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Water,
    Sand,
    Wall,
    BorderEdge,
    BorderCorner,
    /// Possessable body; placed on the board but never auto-tiled
    Host,
    /// Player spirit; placed on the board but never auto-tiled
    Spirit,
}

impl EntityKind {
    /// The continuity class if this kind is terrain
    pub fn terrain(&self) -> Option<TerrainKind> {
        match self {
            EntityKind::Water => Some(TerrainKind::Water),
            EntityKind::Sand => Some(TerrainKind::Sand),
            _ => None,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, EntityKind::Wall)
    }

    /// Border pieces are owned by the board and never stored in level files
    pub fn is_border(&self) -> bool {
        matches!(self, EntityKind::BorderEdge | EntityKind::BorderCorner)
    }

    /// Get the display name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Water => "Water",
            EntityKind::Sand => "Sand",
            EntityKind::Wall => "Wall",
            EntityKind::BorderEdge => "Border Edge",
            EntityKind::BorderCorner => "Border Corner",
            EntityKind::Host => "Host",
            EntityKind::Spirit => "Spirit",
        }
    }
}

/// Terrain continuity class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainKind {
    Water,
    Sand,
}

/// Small patches covering concave corners of a terrain tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CornerOverlay {
    pub up_left: bool,
    pub up_right: bool,
    pub down_left: bool,
    pub down_right: bool,
}

impl CornerOverlay {
    pub fn any(&self) -> bool {
        self.up_left || self.up_right || self.down_left || self.down_right
    }
}

/// Auto-tiled state of a water or sand tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TerrainTile {
    /// Frame in 0..16
    pub frame: u8,
    pub corners: CornerOverlay,
}

/// Auto-tiled state of a wall tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WallTile {
    /// Frame in 0..24
    pub frame: u8,
    /// Shorter, front-facing variant with reduced collision height
    pub front: bool,
}

/// Straight piece of the region border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderEdge {
    pub side: Side,
    /// Distance to the adjacent corner when close enough to blend into it
    pub proximity_hint: Option<u8>,
}

impl BorderEdge {
    /// Sprite rotation, fixed by the side the piece sits on
    pub fn rotation_degrees(&self) -> f32 {
        self.side.rotation_degrees()
    }
}

/// Corner piece of the region border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderCorner {
    pub corner: Corner,
}

/// Per-tile visual state consumed by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum TileVisual {
    /// Not auto-tiled
    #[default]
    Plain,
    Terrain(TerrainTile),
    Wall(WallTile),
    Edge(BorderEdge),
    Corner(BorderCorner),
}

impl TileVisual {
    /// Sprite frame index, if this visual carries one
    pub fn frame(&self) -> Option<u8> {
        match self {
            TileVisual::Terrain(tile) => Some(tile.frame),
            TileVisual::Wall(tile) => Some(tile.frame),
            _ => None,
        }
    }
}

/// An entity as the world stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileEntity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Position in world coordinates [x, y]
    pub position: [f32; 2],
    /// Tombstone set when the board drops the entity; the world disposes of it later
    #[serde(default)]
    pub removed: bool,
    #[serde(default)]
    pub visual: TileVisual,
    #[serde(default)]
    pub collision: CollisionShape,
}

impl TileEntity {
    pub fn new(kind: EntityKind, position: [f32; 2]) -> Self {
        Self {
            id: EntityId::new(),
            kind,
            position,
            removed: false,
            visual: TileVisual::Plain,
            collision: CollisionShape::None,
        }
    }

    pub fn is_wall(&self) -> bool {
        self.kind.is_wall()
    }

    /// Whether this is a wall currently tiled as a front wall
    pub fn is_front_wall(&self) -> bool {
        matches!(self.visual, TileVisual::Wall(WallTile { front: true, .. }))
    }
}
