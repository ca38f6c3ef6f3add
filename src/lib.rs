//! Paddle Ball - a viewport-scaled Breakout/Pong hybrid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, brick grid, paddle)
//! - `renderer`: Drawing-surface abstraction and frame rendering
//! - `engine`: Game loop engine tying tick, input and resize together
//! - `throttle`: Coalescing rate limiter for resize handling
//! - `tuning`: Data-driven game balance

pub mod engine;
pub mod renderer;
pub mod sim;
pub mod throttle;
pub mod tuning;

pub use engine::{Engine, EngineError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICKS_PER_SECOND: u32 = 30;
    /// Timer period handed to the platform scheduler
    pub const TICK_INTERVAL_MS: f64 = 1000.0 / TICKS_PER_SECOND as f64;

    /// Brick grid dimensions
    pub const BRICK_COLS: i32 = 10;
    pub const BRICK_ROWS: i32 = 14;
    /// Rows left empty at the top of the grid on reset
    pub const EMPTY_TOP_ROWS: i32 = 3;

    /// Ball spawn point and per-tick speed before the first resize
    pub const BALL_START_X: f32 = 75.0;
    pub const BALL_START_Y: f32 = 75.0;
    pub const BALL_START_SPEED: f32 = 8.0;

    /// Paddle x before the first pointer event
    pub const PADDLE_START_X: f32 = 400.0;
}
