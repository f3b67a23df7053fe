//! Wall auto-tiling
//!
//! Walls are drawn in a three-quarter view. A wall with nothing solid below it
//! shows its front face and is a "front wall"; any other wall is a "top" wall
//! showing only its upper surface. Frames fall into collision bands:
//!
//! | frames | meaning                                         | collision |
//! |--------|-------------------------------------------------|-----------|
//! | 0..4   | cap resting on a front wall or the border       | none      |
//! | 4..12  | top surface, by above/left/right                | full      |
//! | 12..18 | top surface with a notch at a lower corner      | full      |
//! | 18..24 | front face                                      | reduced   |
//!
//! Because front-ness depends on the cell below, a change at `(x, y)` can
//! alter the frame at `(x, y + 2)`: the wall at `y + 1` may stop (or start)
//! being a front wall, which is what the wall at `y + 2` rests on.

use crate::continuity::Neighbor;
use haunt_core::{CollisionShape, WallTile};

/// Cap frames, indexed by horizontal connection
pub const CAP_FRAMES: [u8; 4] = [0, 1, 2, 3];
/// Top surface frames, `[wall above, open above][horizontal]`
pub const BODY_FRAMES: [[u8; 4]; 2] = [[4, 5, 6, 7], [8, 9, 10, 11]];
/// Notched top frames, `[lower-left, lower-right, both][wall above, open above]`
pub const NOTCH_FRAMES: [[u8; 2]; 3] = [[12, 13], [14, 15], [16, 17]];
/// Front face frames, indexed by horizontal connection
pub const FRONT_FRAMES: [u8; 4] = [18, 19, 20, 21];
/// Front face meeting a top wall on its left
pub const FRONT_RISE_LEFT: u8 = 22;
/// Front face meeting a top wall on its right
pub const FRONT_RISE_RIGHT: u8 = 23;

pub const FRAME_COUNT: u8 = 24;

/// Wall neighbourhood descriptor
///
/// `below` also accepts border pieces so a front face never leaves a gap above
/// the region border. The `*_is_top` flags mean "that neighbour is a wall and
/// not a front wall"; the lower diagonal flags additionally require walls below
/// and on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallNeighbors {
    pub above: bool,
    pub below: bool,
    pub left: bool,
    pub right: bool,
    pub below_is_top: bool,
    pub left_is_top: bool,
    pub right_is_top: bool,
    pub lower_left_is_top: bool,
    pub lower_right_is_top: bool,
}

/// Whether the wall at `(dx, dy)` is a front wall (nothing solid below it)
fn front_at<F>(sample: &F, dx: i32, dy: i32) -> bool
where
    F: Fn(i32, i32) -> Neighbor,
{
    sample(dx, dy).is_wall() && !sample(dx, dy - 1).is_wall_like()
}

fn top_at<F>(sample: &F, dx: i32, dy: i32) -> bool
where
    F: Fn(i32, i32) -> Neighbor,
{
    sample(dx, dy).is_wall() && !front_at(sample, dx, dy)
}

/// Whether a wall with neighbourhood `sample` is a front wall
pub fn is_front_wall<F>(sample: F) -> bool
where
    F: Fn(i32, i32) -> Neighbor,
{
    !sample(0, -1).is_wall_like()
}

impl WallNeighbors {
    /// Classify the neighbourhood of a wall.
    ///
    /// `sample(dx, dy)` returns what lies at the given offset, +y up. Offsets
    /// down to `dy = -2` are read to decide whether neighbours are front walls.
    pub fn sample<F>(sample: F) -> Self
    where
        F: Fn(i32, i32) -> Neighbor,
    {
        let below_wall = sample(0, -1).is_wall();
        let left = sample(-1, 0).is_wall();
        let right = sample(1, 0).is_wall();
        Self {
            above: sample(0, 1).is_wall(),
            below: sample(0, -1).is_wall_like(),
            left,
            right,
            below_is_top: top_at(&sample, 0, -1),
            left_is_top: top_at(&sample, -1, 0),
            right_is_top: top_at(&sample, 1, 0),
            lower_left_is_top: below_wall && left && top_at(&sample, -1, -1),
            lower_right_is_top: below_wall && right && top_at(&sample, 1, -1),
        }
    }

    /// 0 = isolated, 1 = joined right, 2 = joined both sides, 3 = joined left
    fn horizontal(&self) -> usize {
        match (self.left, self.right) {
            (false, false) => 0,
            (false, true) => 1,
            (true, true) => 2,
            (true, false) => 3,
        }
    }
}

/// Frame index in 0..24 for a wall neighbourhood
pub fn wall_frame(n: &WallNeighbors) -> u8 {
    let h = n.horizontal();
    if !n.below {
        return if n.left_is_top {
            FRONT_RISE_LEFT
        } else if n.right_is_top {
            FRONT_RISE_RIGHT
        } else {
            FRONT_FRAMES[h]
        };
    }
    if !n.below_is_top {
        return CAP_FRAMES[h];
    }

    let open_above = usize::from(!n.above);
    let notch_left = n.left && !n.lower_left_is_top;
    let notch_right = n.right && !n.lower_right_is_top;
    match (notch_left, notch_right) {
        (true, false) => NOTCH_FRAMES[0][open_above],
        (false, true) => NOTCH_FRAMES[1][open_above],
        (true, true) => NOTCH_FRAMES[2][open_above],
        (false, false) => BODY_FRAMES[open_above][h],
    }
}

/// Collision footprint for a wall frame
pub fn wall_collision(frame: u8) -> CollisionShape {
    match frame {
        0..=3 => CollisionShape::None,
        18..=23 => CollisionShape::reduced(),
        _ => CollisionShape::Full,
    }
}

/// Tile a wall cell and derive its collision footprint
pub fn autotile_wall<F>(sample: F) -> (WallTile, CollisionShape)
where
    F: Fn(i32, i32) -> Neighbor,
{
    let neighbors = WallNeighbors::sample(&sample);
    let frame = wall_frame(&neighbors);
    let tile = WallTile {
        frame,
        front: !neighbors.below,
    };
    (tile, wall_collision(frame))
}
