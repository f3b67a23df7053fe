//! Border pieces around the active region
//!
//! The outermost ring of the active region is reserved for border pieces:
//! corner pieces in the four corner cells and edge pieces everywhere else.
//! Edge pieces near a corner carry a proximity hint so the art can blend into
//! the corner. The top edge is drawn taller than the others and blends over
//! two tiles; the other edges blend over one.

use haunt_core::{ActiveRegion, BorderCorner, BorderEdge, Side};

/// Border piece required at a ring cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderPiece {
    Corner(BorderCorner),
    Edge(BorderEdge),
}

/// Purely decorative filler drawn just inside the top corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorativeFiller {
    pub x: i32,
    pub y: i32,
    /// Distance from the nearest side edge, matching the top edge hint levels
    pub level: u8,
}

/// Border piece for `(x, y)`, or `None` if the cell is not on the ring
pub fn border_piece_at(region: &ActiveRegion, x: i32, y: i32) -> Option<BorderPiece> {
    if let Some(corner) = region.corner_at(x, y) {
        return Some(BorderPiece::Corner(BorderCorner { corner }));
    }
    let side = region.side_at(x, y)?;
    Some(BorderPiece::Edge(BorderEdge {
        side,
        proximity_hint: proximity_hint(region, side, x, y),
    }))
}

/// Hint for an edge cell close to a corner.
///
/// Top edge cells within two tiles of either top corner get their distance as
/// the hint; bottom, left and right edge cells only get a hint right next to a
/// corner.
pub fn proximity_hint(region: &ActiveRegion, side: Side, x: i32, y: i32) -> Option<u8> {
    let distance = match side {
        Side::Top | Side::Bottom => (x - region.left).min(region.right - 1 - x),
        Side::Left | Side::Right => (y - region.bottom).min(region.top - 1 - y),
    };
    match side {
        Side::Top if (1..=2).contains(&distance) => Some(distance as u8),
        Side::Bottom | Side::Left | Side::Right if distance == 1 => Some(1),
        _ => None,
    }
}

/// Interior cells under the hinted top edge cells, two per side.
///
/// Cells that would fall on the ring or coincide on narrow regions are skipped.
pub fn decorative_fillers(region: &ActiveRegion) -> Vec<DecorativeFiller> {
    let y = region.top - 2;
    let mut fillers: Vec<DecorativeFiller> = Vec::with_capacity(4);
    for level in 1..=2u8 {
        let inset = i32::from(level);
        for x in [region.left + inset, region.right - 1 - inset] {
            if !region.is_interior(x, y) || fillers.iter().any(|f| f.x == x) {
                continue;
            }
            fillers.push(DecorativeFiller { x, y, level });
        }
    }
    fillers
}
