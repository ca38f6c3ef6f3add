//! Data-driven game balance
//!
//! Every size constant the simulation derives from the viewport comes from
//! these fractions; `Default` reproduces the classic feel. Persisted
//! separately from game state in LocalStorage on web.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Playfield height as a fraction of its width (capped at the viewport
    /// height)
    pub aspect: f32,
    /// Ball radius as a fraction of playfield width
    pub ball_radius_frac: f32,
    /// Ball speed per tick as a fraction of playfield width
    pub ball_speed_frac: f32,
    /// Paddle width as a fraction of playfield width
    pub paddle_width_frac: f32,
    /// Paddle thickness as a fraction of paddle width
    pub paddle_thickness_frac: f32,
    /// Paddle offset from the bottom edge as a fraction of playfield height
    pub paddle_edge_frac: f32,
    /// Cap on the paddle edge offset, in pixels
    pub paddle_edge_max: f32,
    /// Brick width as a fraction of playfield width
    pub brick_width_frac: f32,
    /// Brick height as a fraction of brick width
    pub brick_aspect: f32,
    /// Gap between bricks as a fraction of brick height
    pub brick_gap_frac: f32,
    /// Maps paddle-hit horizontal offset to rebound horizontal speed
    pub deflection: f32,
    /// Cool-down between applied resizes, in milliseconds
    pub resize_cooldown_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            aspect: 0.75,
            ball_radius_frac: 0.01,
            ball_speed_frac: 0.01,
            paddle_width_frac: 0.1,
            paddle_thickness_frac: 0.1,
            paddle_edge_frac: 0.1,
            paddle_edge_max: 60.0,
            brick_width_frac: 0.1,
            brick_aspect: 0.25,
            brick_gap_frac: 0.1,
            deflection: 0.35,
            resize_cooldown_ms: 1000.0,
        }
    }
}

impl Tuning {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "paddle_ball_tuning";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded tuning from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
