//! End-to-end board scenarios through the public API

use haunt_board::{
    load_level_from_path, save_level_to_path, EntityWorld, TileBoard, TileWorld,
};
use haunt_core::{
    BoardConfig, CollisionShape, Corner, EntityId, EntityKind, LevelFile, TileVisual,
};

fn board_with(capacity: [u32; 2], initial: [u32; 2]) -> TileBoard {
    TileBoard::new(&BoardConfig {
        tile_size: 32.0,
        capacity,
        min_width: 3,
        min_height: 3,
        initial_size: initial,
    })
    .unwrap()
}

fn place(board: &mut TileBoard, world: &mut EntityWorld, kind: EntityKind, x: i32, y: i32) -> Option<EntityId> {
    let id = world.spawn(kind, board.mapper().tile_center(x, y));
    if board.add_new_obstacle(world, id) {
        Some(id)
    } else {
        world.tombstone(id);
        None
    }
}

fn frame_at(board: &TileBoard, world: &EntityWorld, x: i32, y: i32) -> Option<u8> {
    board.get(x, y).and_then(|id| world.visual_of(id)).and_then(|v| v.frame())
}

fn collision_at(board: &TileBoard, world: &EntityWorld, x: i32, y: i32) -> Option<CollisionShape> {
    board.get(x, y).and_then(|id| world.get(id)).map(|e| e.collision)
}

#[test]
fn test_five_by_five_water() {
    let mut world = EntityWorld::new();
    let mut board = board_with([16, 16], [5, 5]);
    board.set_borders_and_update_terrain(&mut world);
    let r = board.active_region();

    // Fill every cell; only the 3x3 interior accepts water
    let placed = r
        .cells()
        .filter_map(|(x, y)| place(&mut board, &mut world, EntityKind::Water, x, y))
        .count();
    assert_eq!(placed, 9);

    let (mid_x, mid_y) = (r.left + 2, r.bottom + 2);
    // Surrounded by water on all four sides
    assert_eq!(frame_at(&board, &world, mid_x, mid_y), Some(0));
    assert_eq!(collision_at(&board, &world, mid_x, mid_y), Some(CollisionShape::Full));
    let center = board.get(mid_x, mid_y).and_then(|id| world.visual_of(id));
    assert!(matches!(center, Some(TileVisual::Terrain(t)) if !t.corners.any()));

    // Border-facing sides count as ground
    assert_eq!(frame_at(&board, &world, r.left + 1, mid_y), Some(11));
    assert_eq!(frame_at(&board, &world, r.left + 3, mid_y), Some(9));
    assert_eq!(frame_at(&board, &world, mid_x, r.bottom + 1), Some(10));
    assert_eq!(frame_at(&board, &world, mid_x, r.top - 2), Some(8));
    assert_eq!(frame_at(&board, &world, r.left + 1, r.top - 2), Some(7));
    assert_eq!(frame_at(&board, &world, r.left + 3, r.bottom + 1), Some(5));

    // Ground above: only the lower half blocks
    assert_eq!(
        collision_at(&board, &world, mid_x, r.top - 2),
        Some(CollisionShape::thin())
    );
    assert_eq!(
        collision_at(&board, &world, mid_x, r.bottom + 1),
        Some(CollisionShape::Full)
    );
}

#[test]
fn test_placement_guard_leaves_grid_unchanged() {
    let mut world = EntityWorld::new();
    let mut board = board_with([16, 16], [6, 6]);
    board.set_borders_and_update_terrain(&mut world);
    let r = board.active_region();
    place(&mut board, &mut world, EntityKind::Sand, r.left + 2, r.bottom + 2).unwrap();

    let snapshot: Vec<_> = board.occupied().collect();
    for (x, y) in [(r.left, r.bottom + 2), (r.right - 1, r.top - 1), (r.left + 2, r.bottom + 2)] {
        let id = world.spawn(EntityKind::Host, board.mapper().tile_center(x, y));
        assert!(!board.add_new_obstacle(&mut world, id), "accepted at ({x}, {y})");
    }
    assert_eq!(board.occupied().collect::<Vec<_>>(), snapshot);
}

#[test]
fn test_wall_cascade_from_border() {
    let mut world = EntityWorld::new();
    let mut board = board_with([16, 16], [8, 8]);
    board.set_borders_and_update_terrain(&mut world);
    let r = board.active_region();
    let x = r.left + 3;

    place(&mut board, &mut world, EntityKind::Wall, x, r.bottom + 2).unwrap();
    place(&mut board, &mut world, EntityKind::Wall, x, r.bottom + 3).unwrap();
    // A floating front face with a cap resting on it
    assert_eq!(frame_at(&board, &world, x, r.bottom + 2), Some(18));
    assert_eq!(frame_at(&board, &world, x, r.bottom + 3), Some(0));
    world.drain_footprint_updates();

    // Close the gap to the border, two rows under the cap
    place(&mut board, &mut world, EntityKind::Wall, x, r.bottom + 1).unwrap();
    assert_eq!(frame_at(&board, &world, x, r.bottom + 1), Some(0));
    assert_eq!(frame_at(&board, &world, x, r.bottom + 2), Some(4));
    assert_eq!(frame_at(&board, &world, x, r.bottom + 3), Some(8));

    let upper = board.get(x, r.bottom + 3).unwrap();
    let updates = world.drain_footprint_updates();
    assert!(updates.iter().any(|u| u.id == upper && u.shape == CollisionShape::Full));
}

#[test]
fn test_shrink_turns_water_into_ring() {
    let mut world = EntityWorld::new();
    let mut board = board_with([16, 16], [8, 8]);
    board.set_borders_and_update_terrain(&mut world);
    let r = board.active_region();
    for (x, y) in r.cells() {
        place(&mut board, &mut world, EntityKind::Water, x, y);
    }
    assert_eq!(world.count_live(EntityKind::Water), 36);

    let handle = board.mapper().tile_corner(r.right - 2, r.bottom);
    let change = board.process_border_change(&mut world, Corner::BottomRight, handle);
    let n = change.region;
    assert_eq!((n.left, n.right, n.bottom, n.top), (r.left, r.right - 2, r.bottom, r.top));
    // Two full columns fell off: one of water plus its border caps, one of border
    assert_eq!(change.evicted, 16);

    assert_eq!(world.count_live(EntityKind::Water), 24);
    assert_eq!(world.count_live(EntityKind::BorderCorner), 4);
    assert_eq!(world.count_live(EntityKind::BorderEdge), 2 * 4 + 2 * 6);
    // The water column next to the new right edge now faces ground on its right
    assert_eq!(frame_at(&board, &world, n.right - 2, r.bottom + 3), Some(9));
}

#[test]
fn test_level_survives_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("haunt.json");

    let mut world = EntityWorld::new();
    let mut board = board_with([20, 20], [7, 7]);
    board.set_borders_and_update_terrain(&mut world);
    let r = board.active_region();
    for dx in 1..4 {
        place(&mut board, &mut world, EntityKind::Water, r.left + dx, r.bottom + 2).unwrap();
    }
    place(&mut board, &mut world, EntityKind::Wall, r.left + 4, r.bottom + 3).unwrap();
    place(&mut board, &mut world, EntityKind::Spirit, r.left + 5, r.bottom + 5).unwrap();

    let level = board.to_level_file(&world);
    assert_eq!(level.entities.len(), 5);
    save_level_to_path(&level, &path).unwrap();

    let loaded: LevelFile = load_level_from_path(&path).unwrap();
    let mut other_world = EntityWorld::new();
    let mut other = board_with([30, 30], [4, 4]);
    let report = other.replay_level(&mut other_world, &loaded).unwrap();
    assert_eq!(report.placed, 5);
    assert_eq!(report.rejected, 0);

    let o = other.active_region();
    for dy in 0..7 {
        for dx in 0..7 {
            let a = board.get(r.left + dx, r.bottom + dy);
            let b = other.get(o.left + dx, o.bottom + dy);
            assert_eq!(a.and_then(|id| world.kind_of(id)), b.and_then(|id| other_world.kind_of(id)));
            assert_eq!(a.and_then(|id| world.visual_of(id)), b.and_then(|id| other_world.visual_of(id)));
        }
    }
}

#[test]
fn test_board_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.toml");
    std::fs::write(
        &path,
        "tile_size = 16.0\ncapacity = [12, 10]\ninitial_size = [6, 4]\n",
    )
    .unwrap();

    let config = BoardConfig::load(&path).unwrap();
    let board = TileBoard::new(&config).unwrap();
    assert_eq!(board.capacity(), (12, 10));
    assert_eq!(board.min_size(), (3, 3));
    let r = board.active_region();
    assert_eq!((r.left, r.bottom, r.width(), r.height()), (3, 3, 6, 4));
    assert_eq!(board.mapper().tile_center(r.left, r.bottom), [8.0, 8.0]);
}
