//! The entity world the board points into

use haunt_core::{CollisionShape, EntityId, EntityKind, TileEntity, TileVisual};
use log::trace;
use std::collections::{HashMap, HashSet};

/// What the board needs from the world that owns its entities
pub trait TileWorld {
    /// Create an entity of `kind` at a world position (the entity factory)
    fn spawn(&mut self, kind: EntityKind, position: [f32; 2]) -> EntityId;

    fn kind_of(&self, id: EntityId) -> Option<EntityKind>;

    fn position_of(&self, id: EntityId) -> Option<[f32; 2]>;

    fn set_position(&mut self, id: EntityId, position: [f32; 2]);

    /// Mark an entity as removed; disposing of it is the world's business
    fn tombstone(&mut self, id: EntityId);

    fn visual_of(&self, id: EntityId) -> Option<TileVisual>;

    /// Store a tile's new visual state and collision footprint.
    ///
    /// Returns true if anything changed.
    fn apply_tile(&mut self, id: EntityId, visual: TileVisual, collision: CollisionShape) -> bool;
}

/// A collision footprint change waiting for the physics sync
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootprintUpdate {
    pub id: EntityId,
    pub shape: CollisionShape,
}

/// In-memory entity store implementing [`TileWorld`]
#[derive(Debug, Default)]
pub struct EntityWorld {
    entities: HashMap<EntityId, TileEntity>,
    /// Spawn order, for stable iteration
    order: Vec<EntityId>,
    footprint_updates: Vec<FootprintUpdate>,
}

impl EntityWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an existing entity record
    pub fn insert(&mut self, entity: TileEntity) -> EntityId {
        let id = entity.id;
        if self.entities.insert(id, entity).is_none() {
            self.order.push(id);
        }
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&TileEntity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut TileEntity> {
        self.entities.get_mut(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn is_removed(&self, id: EntityId) -> bool {
        self.entities.get(&id).is_some_and(|e| e.removed)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities in spawn order, tombstoned ones included
    pub fn iter(&self) -> impl Iterator<Item = &TileEntity> {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }

    /// Live entities of one kind
    pub fn count_live(&self, kind: EntityKind) -> usize {
        self.iter().filter(|e| e.kind == kind && !e.removed).count()
    }

    /// Discard every tombstoned entity and return them
    pub fn purge_removed(&mut self) -> Vec<TileEntity> {
        let removed: HashSet<EntityId> = self
            .entities
            .values()
            .filter(|e| e.removed)
            .map(|e| e.id)
            .collect();
        self.footprint_updates.retain(|u| !removed.contains(&u.id));
        let mut purged = Vec::with_capacity(removed.len());
        let entities = &mut self.entities;
        self.order.retain(|id| {
            if !removed.contains(id) {
                return true;
            }
            if let Some(entity) = entities.remove(id) {
                purged.push(entity);
            }
            false
        });
        purged
    }

    /// Take the queued collision footprint changes
    pub fn drain_footprint_updates(&mut self) -> Vec<FootprintUpdate> {
        std::mem::take(&mut self.footprint_updates)
    }
}

impl TileWorld for EntityWorld {
    fn spawn(&mut self, kind: EntityKind, position: [f32; 2]) -> EntityId {
        self.insert(TileEntity::new(kind, position))
    }

    fn kind_of(&self, id: EntityId) -> Option<EntityKind> {
        self.entities.get(&id).map(|e| e.kind)
    }

    fn position_of(&self, id: EntityId) -> Option<[f32; 2]> {
        self.entities.get(&id).map(|e| e.position)
    }

    fn set_position(&mut self, id: EntityId, position: [f32; 2]) {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.position = position;
        }
    }

    fn tombstone(&mut self, id: EntityId) {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.removed = true;
        }
    }

    fn visual_of(&self, id: EntityId) -> Option<TileVisual> {
        self.entities.get(&id).map(|e| e.visual)
    }

    fn apply_tile(&mut self, id: EntityId, visual: TileVisual, collision: CollisionShape) -> bool {
        let Some(entity) = self.entities.get_mut(&id) else {
            return false;
        };
        let mut changed = false;
        if entity.visual != visual {
            trace!("{} {} -> {:?}", entity.kind.name(), id, visual);
            entity.visual = visual;
            changed = true;
        }
        if entity.collision != collision {
            entity.collision = collision;
            self.footprint_updates.push(FootprintUpdate {
                id,
                shape: collision,
            });
            changed = true;
        }
        changed
    }
}
