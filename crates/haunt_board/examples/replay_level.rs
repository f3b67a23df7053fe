//! Replay a level file and print the resulting board.
//!
//! Usage: `cargo run -p haunt_board --example replay_level [level.json]`
//!
//! Without an argument a small built-in level is used. Set `RUST_LOG=debug`
//! to see the board's own log output.

use haunt_board::{load_level_from_path, EntityWorld, TileBoard, TileWorld};
use std::error::Error;
use haunt_core::{BoardConfig, EntityKind, LevelFile, TileVisual};

fn demo_level() -> LevelFile {
    let mut level = LevelFile::new(12, 9);
    let at = |col: i32, row: i32| [(col as f32 + 0.5) * 32.0, (row as f32 + 0.5) * 32.0];
    for col in 2..6 {
        for row in 2..5 {
            level.push(EntityKind::Water, at(col, row));
        }
    }
    for col in 7..10 {
        level.push(EntityKind::Wall, at(col, 5));
        level.push(EntityKind::Wall, at(col, 6));
    }
    level.push(EntityKind::Wall, at(8, 4));
    level.push(EntityKind::Sand, at(7, 2));
    level.push(EntityKind::Sand, at(8, 2));
    level.push(EntityKind::Host, at(3, 6));
    level.push(EntityKind::Spirit, at(10, 2));
    level
}

fn glyph(kind: EntityKind, visual: TileVisual) -> String {
    match (kind, visual.frame()) {
        (EntityKind::Water, Some(frame)) => format!("~{frame:<2}"),
        (EntityKind::Sand, Some(frame)) => format!(":{frame:<2}"),
        (EntityKind::Wall, Some(frame)) => format!("#{frame:<2}"),
        (EntityKind::BorderCorner, _) => "+  ".to_string(),
        (EntityKind::BorderEdge, _) => match visual {
            TileVisual::Edge(edge) => match edge.proximity_hint {
                Some(hint) => format!("={hint} "),
                None => "=  ".to_string(),
            },
            _ => "=  ".to_string(),
        },
        (EntityKind::Host, _) => "H  ".to_string(),
        (EntityKind::Spirit, _) => "S  ".to_string(),
        _ => "?  ".to_string(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let level = match std::env::args().nth(1) {
        Some(path) => load_level_from_path(path)?,
        None => demo_level(),
    };

    let mut world = EntityWorld::new();
    let mut board = TileBoard::new(&BoardConfig::default())?;
    let report = board.replay_level(&mut world, &level)?;
    println!(
        "placed {}, rejected {}, {} border pieces",
        report.placed, report.rejected, report.borders.spawned
    );

    let region = board.active_region();
    for y in (region.bottom..region.top).rev() {
        let row: String = (region.left..region.right)
            .map(|x| match board.get(x, y) {
                Some(id) => match (world.kind_of(id), world.visual_of(id)) {
                    (Some(kind), Some(visual)) => glyph(kind, visual),
                    _ => "?  ".to_string(),
                },
                None => ".  ".to_string(),
            })
            .collect();
        println!("{}", row.trim_end());
    }

    let fillers: Vec<_> = board
        .decorative_fillers()
        .iter()
        .map(|f| format!("({}, {}) level {}", f.x - region.left, f.y - region.bottom, f.level))
        .collect();
    println!("decorative fillers: {}", fillers.join(", "));
    Ok(())
}
