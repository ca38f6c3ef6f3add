//! Game loop engine
//!
//! Owns the complete simulation state and the drawing surface, and exposes
//! the three external touchpoints: the fixed-rate tick, the pointer-move
//! handler and the throttled viewport-resize handler. The host attaches a
//! periodic timer and the input listeners exactly once around `start`; a
//! repeated `start` is rejected rather than relied on never to happen.

use thiserror::Error;

use crate::renderer::{DrawSurface, draw_frame};
use crate::sim::{self, GameState};
use crate::throttle::Throttle;
use crate::tuning::Tuning;

/// Fatal engine preconditions.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The drawing surface is missing or the viewport has no area; the
    /// engine cannot render and refuses to construct.
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    /// `start` was called twice. The loop is initialized exactly once.
    #[error("engine already started")]
    AlreadyStarted,
}

pub struct Engine<S: DrawSurface> {
    state: GameState,
    tuning: Tuning,
    surface: S,
    resize_throttle: Throttle<(f32, f32)>,
    started: bool,
}

impl<S: DrawSurface> Engine<S> {
    /// Create an engine over `surface` for the given viewport, failing
    /// fast when there is nothing to render to.
    pub fn new(
        surface: S,
        viewport_w: f32,
        viewport_h: f32,
        tuning: Tuning,
    ) -> Result<Self, EngineError> {
        if !(viewport_w > 0.0 && viewport_h > 0.0) {
            return Err(EngineError::SurfaceUnavailable(format!(
                "viewport is {viewport_w}x{viewport_h}"
            )));
        }

        let resize_throttle = Throttle::new(tuning.resize_cooldown_ms);
        let state = GameState::new(viewport_w, viewport_h, &tuning);
        Ok(Self {
            state,
            tuning,
            surface,
            resize_throttle,
            started: false,
        })
    }

    /// Initialize the loop: derive every metric from the current viewport,
    /// size the surface, populate the grid and center the ball. Rejected
    /// when called a second time.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.started {
            return Err(EngineError::AlreadyStarted);
        }
        self.started = true;

        let (w, h) = (self.state.metrics.width, self.state.metrics.height);
        self.apply_resize(w, h);
        log::info!(
            "engine started: playfield {:.0}x{:.0}, {} bricks",
            self.state.metrics.width,
            self.state.metrics.height,
            self.state.grid.remaining()
        );
        Ok(())
    }

    /// One timer period: apply any resize the throttle deferred, advance
    /// the simulation, draw the frame. Always move-then-draw, never the
    /// reverse, and never more than one step per call.
    pub fn tick(&mut self, now_ms: f64) {
        if let Some((w, h)) = self.resize_throttle.drain(now_ms) {
            self.apply_resize(w, h);
        }
        sim::tick(&mut self.state, &self.tuning);
        draw_frame(&self.state, &mut self.surface);
    }

    /// Pointer-move touchpoint: the paddle center follows the pointer x.
    pub fn pointer_moved(&mut self, x: f32) {
        self.state.pointer_moved(x);
    }

    /// Viewport-resize touchpoint. Returns true when the resize was
    /// applied now rather than deferred by the cool-down window.
    pub fn viewport_resized(&mut self, viewport_w: f32, viewport_h: f32, now_ms: f64) -> bool {
        match self.resize_throttle.submit(now_ms, (viewport_w, viewport_h)) {
            Some((w, h)) => {
                self.apply_resize(w, h);
                true
            }
            None => false,
        }
    }

    fn apply_resize(&mut self, viewport_w: f32, viewport_h: f32) {
        self.state.apply_resize(viewport_w, viewport_h, &self.tuning);
        let m = &self.state.metrics;
        self.surface.set_size(m.width, m.height);
        log::info!("resize applied: playfield {:.0}x{:.0}", m.width, m.height);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the engine and hand the surface back on teardown.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Color, DrawCommand, RecordingSurface};

    fn engine() -> Engine<RecordingSurface> {
        let mut engine = Engine::new(
            RecordingSurface::new(0.0, 0.0),
            800.0,
            900.0,
            Tuning::default(),
        )
        .unwrap();
        engine.start().unwrap();
        engine
    }

    #[test]
    fn test_zero_viewport_is_fatal() {
        let result = Engine::new(RecordingSurface::new(0.0, 0.0), 0.0, 600.0, Tuning::default());
        assert!(matches!(result, Err(EngineError::SurfaceUnavailable(_))));
    }

    #[test]
    fn test_second_start_rejected() {
        let mut engine = engine();
        assert!(matches!(engine.start(), Err(EngineError::AlreadyStarted)));
    }

    #[test]
    fn test_start_sizes_surface_and_populates_grid() {
        let engine = engine();
        // Aspect caps the 900px viewport height at 600
        assert_eq!(engine.surface().width(), 800.0);
        assert_eq!(engine.surface().height(), 600.0);
        assert_eq!(engine.state().grid.remaining(), 140);
    }

    #[test]
    fn test_tick_moves_then_draws() {
        let mut engine = engine();
        let ball_before = engine.state().ball.pos;

        engine.tick(0.0);

        assert_ne!(engine.state().ball.pos, ball_before);
        let commands = &engine.surface().commands;
        assert_eq!(commands[0], DrawCommand::Fill(Color::BACKGROUND));
        assert!(commands.len() > 4);
    }

    #[test]
    fn test_resize_throttled_then_drained_by_tick() {
        let mut engine = engine();

        assert!(engine.viewport_resized(1000.0, 2000.0, 0.0));
        assert_eq!(engine.state().metrics.width, 1000.0);

        // Inside the cool-down: deferred, metrics untouched
        assert!(!engine.viewport_resized(400.0, 300.0, 500.0));
        assert_eq!(engine.state().metrics.width, 1000.0);

        // Still inside the window on this tick
        engine.tick(600.0);
        assert_eq!(engine.state().metrics.width, 1000.0);

        // Window elapsed: the deferred resize lands before the step
        engine.tick(1100.0);
        assert_eq!(engine.state().metrics.width, 400.0);
        assert_eq!(engine.surface().width(), 400.0);
        assert_eq!(engine.state().grid.remaining(), 140);
    }

    #[test]
    fn test_resize_storm_applies_latest() {
        let mut engine = engine();
        engine.viewport_resized(1000.0, 800.0, 0.0);
        for i in 1..10 {
            let w = 1000.0 + i as f32 * 10.0;
            assert!(!engine.viewport_resized(w, 800.0, i as f64 * 50.0));
        }
        engine.tick(1500.0);
        assert_eq!(engine.state().metrics.width, 1090.0);
    }

    #[test]
    fn test_pointer_reaches_paddle() {
        let mut engine = engine();
        engine.pointer_moved(240.0);
        assert_eq!(engine.state().paddle.x, 200.0);
    }
}
