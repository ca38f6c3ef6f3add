//! Collision policy for the rectangular playfield
//!
//! Brick contact is resolved on the grid, not on geometry: the cell under
//! the ball decides the hit, and the bounce axis is chosen by probing which
//! neighbor of the previous cell is open. The paddle is a plain rectangle
//! with a strict-inside test.

use glam::Vec2;

use super::grid::BrickGrid;
use super::state::{Metrics, Paddle};

/// Grid cell under a point, via floor division by the brick cell size.
/// Points left of or above the field map to negative cells.
pub fn cell_under(pos: Vec2, metrics: &Metrics) -> (i32, i32) {
    (
        (pos.x / metrics.brick_w).floor() as i32,
        (pos.y / metrics.brick_h).floor() as i32,
    )
}

/// Axes to invert after a brick was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickBounce {
    pub flip_x: bool,
    pub flip_y: bool,
}

/// Decide the bounce for a ball that just cleared the brick at `cur`,
/// having occupied `prev` one tick earlier (call after the hit cell has
/// been deactivated).
///
/// A changed column reflects horizontally only when the cell beside the
/// removed brick is open; a changed row reflects vertically under the same
/// rule. When both probes find the neighbor blocked (a diagonal approach
/// into a corner) both axes invert so the ball cannot pass through. A ball
/// that clears two bricks in one tick can still slip past without full
/// resolution; that quirk is part of the intended feel and is kept.
pub fn brick_bounce(grid: &BrickGrid, prev: (i32, i32), cur: (i32, i32)) -> BrickBounce {
    let mut bounce = BrickBounce {
        flip_x: false,
        flip_y: false,
    };

    if prev.0 != cur.0 && !grid.brick_at(prev.0, cur.1) {
        bounce.flip_x = true;
    }
    if prev.1 != cur.1 && !grid.brick_at(cur.0, prev.1) {
        bounce.flip_y = true;
    }
    if !bounce.flip_x && !bounce.flip_y {
        bounce.flip_x = true;
        bounce.flip_y = true;
    }
    bounce
}

/// Whether a point lies strictly inside the paddle's hit rectangle. The
/// rectangle hangs at the fixed edge offset, `paddle_thickness` tall and
/// `paddle_width` wide around the paddle's x position.
pub fn paddle_hit(paddle: &Paddle, metrics: &Metrics, pos: Vec2) -> bool {
    let top = metrics.height - metrics.paddle_edge_offset;
    let bottom = top + metrics.paddle_thickness;
    let left = paddle.x;
    let right = paddle.x + metrics.paddle_width;

    pos.y > top && pos.y < bottom && pos.x > left && pos.x < right
}
