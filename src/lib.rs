//! Combo Breakout - a brick-breaking arcade game with a money economy
//!
//! Core modules:
//! - `sim`: Simulation (entities, brick field, collisions, economy, game state)
//! - `shop`: Upgrade catalog and purchases
//! - `game_loop`: Adaptive frame pacing and the per-frame driver
//! - `renderer`: Off-screen frame building, particles and the WebGPU presenter
//! - `audio`: Sound cue sinks
//! - `autopilot`: Demo-mode bot
//! - `settings`: Player preferences

pub mod audio;
pub mod autopilot;
pub mod game_loop;
pub mod renderer;
pub mod settings;
pub mod shop;
pub mod sim;

pub use game_loop::{FramePacer, GameLoop};
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Logical playfield size (display scaling happens outside the core)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    pub const PADDLE_Y: f32 = 550.0;
    /// Horizontal speed for key control (px per step)
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Base speed per velocity component (px per step)
    pub const BALL_SPEED: f32 = 7.0;
    pub const BASE_BALL_DAMAGE: f32 = 1.0;

    /// Brick grid
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 25.0;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLUMNS: usize = 10;
    pub const BRICK_GAP: f32 = 5.0;
    pub const BRICK_OFFSET_X: f32 = 35.0;
    pub const BRICK_OFFSET_Y: f32 = 50.0;
    pub const BASE_BRICK_HEALTH: f32 = 3.0;
    /// Brick strength grows by this factor every level
    pub const LEVEL_HEALTH_GROWTH: f32 = 1.2;
    /// Row colors, top to bottom (0xRRGGBB)
    pub const BRICK_COLORS: [u32; BRICK_ROWS] =
        [0xFF6B6B, 0x4ECDC4, 0x45B7D1, 0x96CEB4, 0xFFEEAD];

    /// Missiles
    pub const MISSILE_SPEED: f32 = 7.0;
    pub const MISSILE_WIDTH: f32 = 4.0;
    pub const MISSILE_HEIGHT: f32 = 12.0;
    pub const MISSILE_COOLDOWN_MS: f64 = 500.0;
    pub const MISSILE_AMMO_PER_UPGRADE: u32 = 3;
    pub const MISSILE_EXPLOSION_COLOR: u32 = 0xFF4444;

    /// Economy
    pub const STARTING_LIVES: u32 = 3;
    pub const BRICK_HIT_SCORE: u64 = 100;
    pub const LEVEL_CLEAR_SCORE: u64 = 1000;
    pub const LEVEL_CLEAR_MONEY: u64 = 500;
    /// How long the combo popup stays up after the last hit
    pub const COMBO_DISPLAY_MS: f64 = 2000.0;

    /// Frame pacing bounds (steps per second)
    pub const MIN_TARGET_FPS: u32 = 30;
    pub const MAX_TARGET_FPS: u32 = 60;
}

/// Unpack a 0xRRGGBB color into normalized RGBA
#[inline]
pub fn rgb_to_rgba(color: u32, alpha: f32) -> [f32; 4] {
    let r = ((color >> 16) & 0xFF) as f32 / 255.0;
    let g = ((color >> 8) & 0xFF) as f32 / 255.0;
    let b = (color & 0xFF) as f32 / 255.0;
    [r, g, b, alpha]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_rgba() {
        let [r, g, b, a] = rgb_to_rgba(0xFF0080, 0.5);
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(a, 0.5);
    }
}
