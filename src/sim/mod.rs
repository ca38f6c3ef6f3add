//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No wall-clock reads
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{BrickBounce, brick_bounce, cell_under, paddle_hit};
pub use grid::BrickGrid;
pub use state::{Ball, GameState, Metrics, Paddle};
pub use tick::tick;
