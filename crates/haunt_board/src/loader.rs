//! Level loading and saving
//!
//! Levels are replayed rather than deserialized into the board: the board is
//! cleared and reset to the stored size, each placement goes through
//! [`TileBoard::add_new_obstacle`] in file order, and a full border refresh
//! derives the ring and every frame.

use crate::board::TileBoard;
use crate::borders::BorderRefresh;
use crate::world::TileWorld;
use haunt_core::{Anchor, CoordinateMapper, LevelFile};
use log::{info, warn};
use std::path::Path;
use thiserror::Error;

/// Error type for level file failures
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("Failed to read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse level JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Level size {width}x{height} does not fit the board")]
    InvalidSize { width: u32, height: u32 },
}

/// Summary of a level replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Entities placed on the board
    pub placed: usize,
    /// Entities spawned but refused by the board, now tombstoned
    pub rejected: usize,
    pub borders: BorderRefresh,
}

/// Parse a level from a JSON string
pub fn load_level_from_str(json: &str) -> Result<LevelFile, LevelError> {
    Ok(LevelFile::from_json_str(json)?)
}

/// Parse a level from JSON bytes
pub fn load_level_from_bytes(bytes: &[u8]) -> Result<LevelFile, LevelError> {
    Ok(LevelFile::from_json_slice(bytes)?)
}

/// Read and parse a level file
pub fn load_level_from_path(path: impl AsRef<Path>) -> Result<LevelFile, LevelError> {
    let bytes = std::fs::read(path.as_ref())?;
    load_level_from_bytes(&bytes)
}

pub fn save_level_to_string(level: &LevelFile) -> Result<String, LevelError> {
    Ok(level.to_json_string()?)
}

/// Write a level as pretty-printed JSON
pub fn save_level_to_path(level: &LevelFile, path: impl AsRef<Path>) -> Result<(), LevelError> {
    std::fs::write(path.as_ref(), save_level_to_string(level)?)?;
    Ok(())
}

impl TileBoard {
    /// Check a stored level size against the minimum and the backing array
    fn check_level_size(&self, level: &LevelFile) -> Result<(), LevelError> {
        let (min_width, min_height) = self.min_size();
        let (capacity_width, capacity_height) = self.capacity();
        let fits = |value: u32, min: i32, max: i32| {
            i64::from(value) >= i64::from(min) && i64::from(value) <= i64::from(max)
        };
        if fits(level.width, min_width, capacity_width) && fits(level.height, min_height, capacity_height) {
            Ok(())
        } else {
            Err(LevelError::InvalidSize {
                width: level.width,
                height: level.height,
            })
        }
    }

    /// Rebuild the board from a level.
    ///
    /// Everything on the board is tombstoned first. Positions in the level are
    /// relative to the lower-left corner of its region, which after the reset
    /// is also the anchor. Border kinds in the file are refused: the ring is
    /// always derived.
    pub fn replay_level<W: TileWorld>(&mut self, world: &mut W, level: &LevelFile) -> Result<LoadReport, LevelError> {
        self.check_level_size(level)?;
        self.clear(world, true);
        self.reset(level.width, level.height);

        let mut report = LoadReport::default();
        for (index, placed) in level.entities.iter().enumerate() {
            let id = world.spawn(placed.kind, placed.position);
            if placed.kind.is_border() {
                warn!("Level entity {} is a {}, which the board derives; skipping", index, placed.kind.name());
                world.tombstone(id);
                report.rejected += 1;
                continue;
            }
            if !self.add_new_obstacle(world, id) {
                let (x, y) = self.mapper().world_to_tile(placed.position);
                warn!(
                    "Level entity {} ({}) rejected at tile ({}, {})",
                    index,
                    placed.kind.name(),
                    x,
                    y
                );
                world.tombstone(id);
                report.rejected += 1;
                continue;
            }
            report.placed += 1;
        }

        report.borders = self.set_borders_and_update_terrain(world);
        info!(
            "Loaded {}x{} level: {} placed, {} rejected",
            level.width, level.height, report.placed, report.rejected
        );
        Ok(report)
    }

    /// Snapshot the board as a level.
    ///
    /// Border pieces are left out. Positions are tile centers measured from the
    /// lower-left corner of the current region, so a resized board reloads with
    /// everything in the same cell relative to its region.
    pub fn to_level_file<W: TileWorld>(&self, world: &W) -> LevelFile {
        let region = self.active_region();
        let saved = CoordinateMapper::new(
            self.tile_size(),
            Anchor {
                initial_left: region.left,
                initial_bottom: region.bottom,
            },
        );
        let mut level = LevelFile::new(region.width().max(0) as u32, region.height().max(0) as u32);
        for ((x, y), id) in self.occupied() {
            let Some(kind) = world.kind_of(id) else {
                continue;
            };
            if kind.is_border() {
                continue;
            }
            level.push(kind, saved.tile_center(x, y));
        }
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::EntityWorld;
    use haunt_core::{BoardConfig, Corner, EntityKind, TileVisual};

    fn new_board() -> TileBoard {
        TileBoard::new(&BoardConfig {
            tile_size: 16.0,
            capacity: [24, 24],
            min_width: 3,
            min_height: 3,
            initial_size: [10, 10],
        })
        .unwrap()
    }

    /// Center of the `(col, row)` tile counted from the region's lower-left
    fn local(col: i32, row: i32) -> [f32; 2] {
        [(col as f32 + 0.5) * 16.0, (row as f32 + 0.5) * 16.0]
    }

    #[test]
    fn test_replay_places_and_frames() {
        let mut level = LevelFile::new(6, 5);
        level.push(EntityKind::Water, local(2, 2));
        level.push(EntityKind::Water, local(3, 2));
        level.push(EntityKind::Host, local(4, 3));

        let mut world = EntityWorld::new();
        let mut board = new_board();
        let report = board.replay_level(&mut world, &level).unwrap();
        let region = board.active_region();

        assert_eq!((region.width(), region.height()), (6, 5));
        assert_eq!(report.placed, 3);
        assert_eq!(report.rejected, 0);
        assert_eq!(report.borders.spawned, 2 * 6 + 2 * 3);
        assert_eq!(
            board.get(region.left + 4, region.bottom + 3).and_then(|id| world.kind_of(id)),
            Some(EntityKind::Host)
        );
        let water = board.get(region.left + 2, region.bottom + 2).unwrap();
        assert!(matches!(world.visual_of(water), Some(TileVisual::Terrain(_))));
    }

    #[test]
    fn test_replay_rejects_ring_duplicates_and_border_kinds() {
        let mut level = LevelFile::new(6, 6);
        level.push(EntityKind::Sand, local(0, 3));
        level.push(EntityKind::Sand, local(2, 2));
        level.push(EntityKind::Water, local(2, 2));
        level.push(EntityKind::BorderEdge, local(3, 3));
        level.push(EntityKind::Spirit, local(40, 3));

        let mut world = EntityWorld::new();
        let mut board = new_board();
        let report = board.replay_level(&mut world, &level).unwrap();

        assert_eq!(report.placed, 1);
        assert_eq!(report.rejected, 4);
        assert_eq!(world.count_live(EntityKind::Sand), 1);
        assert_eq!(world.count_live(EntityKind::Water), 0);
        assert_eq!(world.count_live(EntityKind::Spirit), 0);
        // Only the derived ring remains as border pieces
        assert_eq!(world.count_live(EntityKind::BorderEdge), 2 * 4 + 2 * 4);
    }

    #[test]
    fn test_replay_tombstones_previous_contents() {
        let mut world = EntityWorld::new();
        let mut board = new_board();
        let mut first = LevelFile::new(8, 8);
        first.push(EntityKind::Wall, local(3, 3));
        board.replay_level(&mut world, &first).unwrap();
        let wall = board
            .occupied()
            .map(|(_, id)| id)
            .find(|&id| world.kind_of(id) == Some(EntityKind::Wall))
            .unwrap();

        board.replay_level(&mut world, &LevelFile::new(5, 5)).unwrap();
        assert!(world.is_removed(wall));
        assert_eq!(world.count_live(EntityKind::Wall), 0);
        assert_eq!(world.count_live(EntityKind::BorderCorner), 4);
    }

    #[test]
    fn test_replay_invalid_size() {
        let mut world = EntityWorld::new();
        let mut board = new_board();
        let before = board.active_region();

        let err = board.replay_level(&mut world, &LevelFile::new(2, 8)).unwrap_err();
        assert!(matches!(err, LevelError::InvalidSize { width: 2, height: 8 }));
        let err = board.replay_level(&mut world, &LevelFile::new(8, 25)).unwrap_err();
        assert!(matches!(err, LevelError::InvalidSize { .. }));
        assert_eq!(board.active_region(), before);
    }

    #[test]
    fn test_save_skips_borders_and_survives_resize() {
        let mut world = EntityWorld::new();
        let mut board = new_board();
        let mut level = LevelFile::new(8, 8);
        level.push(EntityKind::Water, local(3, 3));
        level.push(EntityKind::Wall, local(5, 4));
        board.replay_level(&mut world, &level).unwrap();

        // Grow to the left: the anchor stays put, the region corner moves
        let region = board.active_region();
        let handle = board.mapper().tile_corner(region.left - 2, region.top);
        board.process_border_change(&mut world, Corner::TopLeft, handle);
        assert_eq!(board.active_region().width(), 10);

        let saved = board.to_level_file(&world);
        assert_eq!((saved.width, saved.height), (10, 8));
        let mut kinds: Vec<_> = saved.entities.iter().map(|e| (e.kind, e.position)).collect();
        kinds.sort_by(|a, b| a.1[0].total_cmp(&b.1[0]));
        assert_eq!(
            kinds,
            vec![(EntityKind::Water, local(5, 3)), (EntityKind::Wall, local(7, 4))]
        );

        let mut fresh_world = EntityWorld::new();
        let mut fresh = new_board();
        let report = fresh.replay_level(&mut fresh_world, &saved).unwrap();
        assert_eq!(report.placed, 2);
        assert_eq!(fresh.to_level_file(&fresh_world), saved);
    }

    #[test]
    fn test_path_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.json");
        let mut level = LevelFile::new(7, 5);
        level.push(EntityKind::Spirit, local(1, 1));

        save_level_to_path(&level, &path).unwrap();
        assert_eq!(load_level_from_path(&path).unwrap(), level);

        assert!(matches!(
            load_level_from_path(dir.path().join("missing.json")),
            Err(LevelError::Io(_))
        ));
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_level_from_path(&path), Err(LevelError::Json(_))));
    }
}
