//! Persisted level format
//!
//! A level stores only what was placed and where. Grid contents, frames and
//! border pieces are rebuilt on load by replaying placements in order.

use crate::entity::EntityKind;
use serde::{Deserialize, Serialize};

/// One placed entity as written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedEntity {
    pub kind: EntityKind,
    /// Position in world coordinates [x, y]
    pub position: [f32; 2],
}

impl PlacedEntity {
    pub fn new(kind: EntityKind, position: [f32; 2]) -> Self {
        Self { kind, position }
    }
}

/// A level: active region size plus placements in replay order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelFile {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub entities: Vec<PlacedEntity>,
}

impl LevelFile {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            entities: Vec::new(),
        }
    }

    pub fn push(&mut self, kind: EntityKind, position: [f32; 2]) {
        self.entities.push(PlacedEntity::new(kind, position));
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
