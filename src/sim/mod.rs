//! Simulation module
//!
//! All gameplay logic lives here:
//! - Logical 800x600 playfield, one step per frame
//! - Side effects are queued as `GameEvent`s, never performed directly
//! - No rendering or platform dependencies

pub mod ball;
pub mod bricks;
pub mod collision;
pub mod controls;
pub mod economy;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallEffects};
pub use bricks::{Brick, BrickField, brick_strength};
pub use collision::{Projectile, Rect, WithDamage, hit_fraction};
pub use controls::{Command, apply_command, key_command};
pub use economy::{Combo, Economy, Money};
pub use paddle::{Missile, MoveDir, Paddle, PaddleStats};
pub use state::{GameEvent, GamePhase, GameState, SoundCue};
pub use tick::{resolve_collisions, tick};
