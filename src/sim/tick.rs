//! Fixed timestep simulation tick
//!
//! One tick advances the ball and resolves wall, brick and paddle contact
//! in a fixed phase order, every period, with no catch-up on late timer
//! fires. Rendering happens elsewhere; this module never touches the
//! surface.

use super::collision::{brick_bounce, cell_under, paddle_hit};
use super::state::GameState;
use crate::tuning::Tuning;

/// Advance the game state by one tick: ball translation and boundary
/// response, then brick handling, then paddle handling.
pub fn tick(state: &mut GameState, tuning: &Tuning) {
    state.time_ticks += 1;
    move_ball(state);
    handle_bricks(state);
    handle_paddle(state, tuning);
}

/// Integrate velocity and respond to the playfield edges. Every boundary
/// check is gated on the velocity sign, so a ball that is still out of
/// bounds on the next tick is not flipped back again.
fn move_ball(state: &mut GameState) {
    let m = state.metrics;
    state.ball.pos += state.ball.vel;

    if state.ball.pos.y > m.height {
        // Fell past the paddle: the miss penalty is a full round reset
        log::debug!(
            "ball exited bottom at x={:.1}, resetting round",
            state.ball.pos.x
        );
        state.reset_ball();
        state.grid.reset();
    }
    if state.ball.pos.y < 0.0 && state.ball.vel.y < 0.0 {
        state.ball.vel.y = -state.ball.vel.y;
    }
    if state.ball.pos.x > m.width && state.ball.vel.x > 0.0 {
        state.ball.vel.x = -state.ball.vel.x;
    }
    if state.ball.pos.x < 0.0 && state.ball.vel.x < 0.0 {
        state.ball.vel.x = -state.ball.vel.x;
    }
}

/// Remove the brick under the ball, if any, and reflect. The bounce axis
/// comes from comparing the previous position's cell against the current
/// one after the hit brick is gone.
fn handle_bricks(state: &mut GameState) {
    let m = state.metrics;
    let cur = cell_under(state.ball.pos, &m);

    if state.grid.clear_at(cur.0, cur.1) {
        let prev = cell_under(state.ball.pos - state.ball.vel, &m);
        let bounce = brick_bounce(&state.grid, prev, cur);
        if bounce.flip_x {
            state.ball.vel.x = -state.ball.vel.x;
        }
        if bounce.flip_y {
            state.ball.vel.y = -state.ball.vel.y;
        }
    }
}

/// Reflect off the paddle with an offset-proportional deflection. When the
/// board was already cleared going into this phase, contact also starts
/// the next round.
fn handle_paddle(state: &mut GameState, tuning: &Tuning) {
    let m = state.metrics;
    let board_cleared = state.grid.remaining() == 0;

    if paddle_hit(&state.paddle, &m, state.ball.pos) {
        state.ball.vel.y = -state.ball.vel.y;

        let paddle_center = state.paddle.x + m.paddle_width / 2.0;
        let offset = state.ball.pos.x - paddle_center;
        state.ball.vel.x = offset * tuning.deflection;

        if board_cleared {
            log::debug!("board cleared, starting next round");
            state.grid.reset();
        }
    }
}
