//! Game state and derived sizing
//!
//! All live simulation state is owned by one `GameState`; the tick and the
//! engine take it by reference. `Metrics` is pure derived state: every size
//! and speed constant recomputed from the viewport on each applied resize,
//! never persisted independently.

use glam::Vec2;

use super::grid::BrickGrid;
use crate::consts::*;
use crate::tuning::Tuning;

/// Size and speed constants derived from the current viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    pub ball_radius: f32,
    /// Ball speed magnitude per tick, applied to both axes on reset
    pub ball_speed: f32,
    pub paddle_width: f32,
    pub paddle_thickness: f32,
    /// Offset of the paddle's top edge from the bottom of the playfield
    pub paddle_edge_offset: f32,
    pub brick_w: f32,
    pub brick_h: f32,
    pub brick_gap: f32,
}

impl Metrics {
    /// Derive every size constant from the viewport dimensions. The
    /// playfield spans the full viewport width; its height is capped both
    /// by the aspect ratio and by the viewport height.
    pub fn from_viewport(viewport_w: f32, viewport_h: f32, tuning: &Tuning) -> Self {
        let width = viewport_w;
        let height = (viewport_w * tuning.aspect).min(viewport_h);

        let paddle_width = width * tuning.paddle_width_frac;
        let brick_w = width * tuning.brick_width_frac;
        let brick_h = brick_w * tuning.brick_aspect;

        Self {
            width,
            height,
            ball_radius: width * tuning.ball_radius_frac,
            ball_speed: width * tuning.ball_speed_frac,
            paddle_width,
            paddle_thickness: paddle_width * tuning.paddle_thickness_frac,
            paddle_edge_offset: (height * tuning.paddle_edge_frac).min(tuning.paddle_edge_max),
            brick_w,
            brick_h,
            brick_gap: brick_h * tuning.brick_gap_frac,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// The player's paddle. Only x is live state; the dimensions and the fixed
/// vertical offset come from `Metrics`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
}

/// Complete game state, exclusively owned by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub metrics: Metrics,
    pub ball: Ball,
    pub paddle: Paddle,
    pub grid: BrickGrid,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Seed a fresh game: fixed spawn point and speed, fully populated
    /// grid, metrics derived from the live viewport. The engine applies an
    /// initial resize on `start`, which re-centers the ball and rescales
    /// the velocity.
    pub fn new(viewport_w: f32, viewport_h: f32, tuning: &Tuning) -> Self {
        let metrics = Metrics::from_viewport(viewport_w, viewport_h, tuning);
        Self {
            metrics,
            ball: Ball {
                pos: Vec2::new(BALL_START_X, BALL_START_Y),
                vel: Vec2::splat(BALL_START_SPEED),
                radius: metrics.ball_radius,
            },
            paddle: Paddle { x: PADDLE_START_X },
            grid: BrickGrid::new(),
            time_ticks: 0,
        }
    }

    /// Re-center the ball at the fixed re-entry point: horizontally
    /// centered, just below the last grid row.
    pub fn reset_ball(&mut self) {
        let m = &self.metrics;
        self.ball.pos = Vec2::new(
            m.width / 2.0,
            BRICK_ROWS as f32 * (m.brick_h + m.brick_gap),
        );
    }

    /// Recompute every derived constant for the new viewport, then reset
    /// the round: ball radius and speed rescale (velocity points down-right
    /// again), the grid repopulates, the ball re-centers.
    pub fn apply_resize(&mut self, viewport_w: f32, viewport_h: f32, tuning: &Tuning) {
        self.metrics = Metrics::from_viewport(viewport_w, viewport_h, tuning);
        self.ball.radius = self.metrics.ball_radius;
        self.ball.vel = Vec2::splat(self.metrics.ball_speed);
        self.grid.reset();
        self.reset_ball();
    }

    /// Paddle center follows the pointer. No clamping: extreme pointer
    /// positions may drive the paddle partly or fully off-screen.
    pub fn pointer_moved(&mut self, x: f32) {
        self.paddle.x = x - self.metrics.paddle_width / 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_classic_viewport() {
        let m = Metrics::from_viewport(800.0, 600.0, &Tuning::default());
        assert_eq!(m.width, 800.0);
        assert_eq!(m.height, 600.0);
        assert_eq!(m.ball_radius, 8.0);
        assert_eq!(m.ball_speed, 8.0);
        assert_eq!(m.paddle_width, 80.0);
        assert_eq!(m.paddle_thickness, 8.0);
        assert_eq!(m.paddle_edge_offset, 60.0);
        assert_eq!(m.brick_w, 80.0);
        assert_eq!(m.brick_h, 20.0);
        assert_eq!(m.brick_gap, 2.0);
    }

    #[test]
    fn test_metrics_height_caps() {
        let tuning = Tuning::default();
        // Wide viewport: aspect wins
        let wide = Metrics::from_viewport(1000.0, 2000.0, &tuning);
        assert_eq!(wide.height, 750.0);
        // Short viewport: viewport height wins
        let short = Metrics::from_viewport(1000.0, 500.0, &tuning);
        assert_eq!(short.height, 500.0);
    }

    #[test]
    fn test_metrics_edge_offset_cap() {
        let tuning = Tuning::default();
        // 10% of a tall playfield would exceed the fixed cap
        let m = Metrics::from_viewport(2000.0, 1500.0, &tuning);
        assert_eq!(m.paddle_edge_offset, 60.0);
        // Small playfield stays proportional
        let small = Metrics::from_viewport(400.0, 300.0, &tuning);
        assert_eq!(small.paddle_edge_offset, 30.0);
    }

    #[test]
    fn test_resize_resets_round() {
        let tuning = Tuning::default();
        let mut state = GameState::new(800.0, 600.0, &tuning);
        state.grid.clear_at(5, 5);
        state.ball.pos = Vec2::new(123.0, 456.0);
        state.ball.vel = Vec2::new(-3.0, -4.0);

        state.apply_resize(400.0, 300.0, &tuning);

        assert_eq!(state.grid.remaining(), 140);
        assert_eq!(state.ball.vel, Vec2::splat(state.metrics.ball_speed));
        assert!(state.ball.vel.x > 0.0 && state.ball.vel.y > 0.0);
        assert_eq!(state.ball.pos.x, 200.0);
        assert_eq!(state.ball.radius, state.metrics.ball_radius);
    }

    #[test]
    fn test_pointer_centers_paddle() {
        let tuning = Tuning::default();
        let mut state = GameState::new(800.0, 600.0, &tuning);

        state.pointer_moved(500.0);
        assert_eq!(state.paddle.x, 460.0);

        // No clamping at the edges
        state.pointer_moved(-10.0);
        assert_eq!(state.paddle.x, -50.0);
    }
}
