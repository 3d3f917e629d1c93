//! The paddle and the missiles it fires

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Projectile, Rect};
use crate::consts::*;

/// A missile travelling up toward the bricks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Missile {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity, fixed at spawn
    pub vel_y: f32,
    /// Remaining hits before the missile is spent
    pub charge: u32,
    pub destroyed: bool,
}

impl Missile {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(MISSILE_WIDTH, MISSILE_HEIGHT),
            vel_y: -MISSILE_SPEED,
            charge: 1,
            destroyed: false,
        }
    }

    pub fn update(&mut self) {
        self.pos.y += self.vel_y;
    }

    /// Fully above the top of the playfield
    pub fn is_out_of_bounds(&self) -> bool {
        self.pos.y + self.size.y < 0.0
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

impl Projectile for Missile {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    fn damage(&self) -> f32 {
        self.charge as f32
    }
}

/// Launcher state bought in the shop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleStats {
    pub missile_ammo: u32,
    pub has_missile_launcher: bool,
}

/// Direction of a held movement key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDir {
    Left,
    Right,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity from key control
    pub vel_x: f32,
    pub missiles: Vec<Missile>,
    pub stats: PaddleStats,
    /// Timestamp (ms) of the last successful missile launch
    pub last_missile_fire: Option<f64>,
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}

impl Paddle {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new((CANVAS_WIDTH - PADDLE_WIDTH) / 2.0, PADDLE_Y),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            vel_x: 0.0,
            missiles: Vec::new(),
            stats: PaddleStats::default(),
            last_missile_fire: None,
        }
    }

    /// Highest legal x for the left edge
    #[inline]
    fn max_x(&self) -> f32 {
        CANVAS_WIDTH - self.size.x
    }

    pub fn move_left(&mut self) {
        self.vel_x = -PADDLE_SPEED;
    }

    pub fn move_right(&mut self) {
        self.vel_x = PADDLE_SPEED;
    }

    pub fn stop(&mut self) {
        self.vel_x = 0.0;
    }

    /// Key release: only stop if still moving the released way
    pub fn stop_if_moving(&mut self, dir: MoveDir) {
        let moving_that_way = match dir {
            MoveDir::Left => self.vel_x < 0.0,
            MoveDir::Right => self.vel_x > 0.0,
        };
        if moving_that_way {
            self.stop();
        }
    }

    /// Center the paddle under an absolute x (pointer control). Leaves `vel_x` alone.
    pub fn set_position(&mut self, x: f32) {
        self.pos.x = (x - self.size.x / 2.0).clamp(0.0, self.max_x());
    }

    /// Advance one step: move, clamp, fly missiles, drop the ones that left the field
    pub fn update(&mut self) {
        self.pos.x = (self.pos.x + self.vel_x).clamp(0.0, self.max_x());

        for missile in &mut self.missiles {
            missile.update();
        }
        self.missiles.retain(|m| !m.is_out_of_bounds());
    }

    /// Try to fire a missile from the paddle top
    ///
    /// Needs the launcher, ammo, and 500ms since the last successful shot.
    /// `_damage` is accepted for call-site symmetry: missile hits are resolved
    /// with the ball's damage at impact time, not at launch time.
    pub fn fire_missile(&mut self, _damage: f32, now_ms: f64) -> bool {
        if !self.stats.has_missile_launcher || self.stats.missile_ammo == 0 {
            return false;
        }
        if let Some(last) = self.last_missile_fire {
            if now_ms - last < MISSILE_COOLDOWN_MS {
                return false;
            }
        }

        let x = self.pos.x + self.size.x / 2.0 - MISSILE_WIDTH / 2.0;
        self.missiles.push(Missile::new(x, self.pos.y));
        self.last_missile_fire = Some(now_ms);
        self.stats.missile_ammo -= 1;
        log::debug!("Missile fired, {} left", self.stats.missile_ammo);
        true
    }

    pub fn add_missile_ammo(&mut self, amount: u32) {
        self.stats.missile_ammo = self.stats.missile_ammo.saturating_add(amount);
    }

    /// Back to spawn with no launcher, ammo or missiles
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn armed_paddle(ammo: u32) -> Paddle {
        let mut paddle = Paddle::new();
        paddle.stats.has_missile_launcher = true;
        paddle.add_missile_ammo(ammo);
        paddle
    }

    #[test]
    fn test_spawn_centered() {
        let paddle = Paddle::new();
        assert_eq!(paddle.pos, Vec2::new(350.0, 550.0));
    }

    #[test]
    fn test_key_movement_clamps() {
        let mut paddle = Paddle::new();
        paddle.move_left();
        for _ in 0..100 {
            paddle.update();
        }
        assert_eq!(paddle.pos.x, 0.0);

        paddle.move_right();
        for _ in 0..200 {
            paddle.update();
        }
        assert_eq!(paddle.pos.x, CANVAS_WIDTH - PADDLE_WIDTH);
    }

    #[test]
    fn test_set_position_keeps_velocity() {
        let mut paddle = Paddle::new();
        paddle.move_right();
        paddle.set_position(100.0);
        assert_eq!(paddle.pos.x, 50.0);
        assert_eq!(paddle.vel_x, PADDLE_SPEED);
    }

    #[test]
    fn test_stop_if_moving() {
        let mut paddle = Paddle::new();
        paddle.move_right();
        paddle.stop_if_moving(MoveDir::Left);
        assert_eq!(paddle.vel_x, PADDLE_SPEED);
        paddle.stop_if_moving(MoveDir::Right);
        assert_eq!(paddle.vel_x, 0.0);
    }

    #[test]
    fn test_fire_requires_launcher() {
        let mut paddle = Paddle::new();
        paddle.add_missile_ammo(3);
        assert!(!paddle.fire_missile(1.0, 1000.0));
        assert!(paddle.missiles.is_empty());
        assert_eq!(paddle.stats.missile_ammo, 3);
    }

    #[test]
    fn test_fire_requires_ammo() {
        let mut paddle = armed_paddle(0);
        assert!(!paddle.fire_missile(1.0, 1000.0));
        assert!(paddle.last_missile_fire.is_none());
    }

    #[test]
    fn test_fire_cooldown() {
        let mut paddle = armed_paddle(3);
        assert!(paddle.fire_missile(1.0, 1000.0));
        assert!(!paddle.fire_missile(1.0, 1499.0));
        assert!(paddle.fire_missile(1.0, 1500.0));
        assert_eq!(paddle.stats.missile_ammo, 1);
        assert_eq!(paddle.missiles.len(), 2);
    }

    #[test]
    fn test_missile_spawn_and_flight() {
        let mut paddle = armed_paddle(1);
        assert!(paddle.fire_missile(1.0, 0.0));
        let missile = &paddle.missiles[0];
        assert_eq!(missile.center().x, paddle.pos.x + paddle.size.x / 2.0);
        assert_eq!(missile.pos.y, paddle.pos.y);

        // 550 / 7 steps to reach the top, plus its own height to leave
        for _ in 0..82 {
            paddle.update();
        }
        assert_eq!(paddle.missiles.len(), 1);
        paddle.update();
        assert!(paddle.missiles.is_empty());
    }

    #[test]
    fn test_reset_clears_launcher() {
        let mut paddle = armed_paddle(3);
        paddle.fire_missile(1.0, 0.0);
        paddle.move_left();
        paddle.update();
        paddle.reset();
        assert_eq!(paddle.stats, PaddleStats::default());
        assert!(paddle.missiles.is_empty());
        assert!(paddle.last_missile_fire.is_none());
        assert_eq!(paddle.vel_x, 0.0);
    }

    proptest! {
        #[test]
        fn prop_set_position_clamped(x in -1.0e6f32..1.0e6) {
            let mut paddle = Paddle::new();
            paddle.set_position(x);
            prop_assert!(paddle.pos.x >= 0.0);
            prop_assert!(paddle.pos.x <= CANVAS_WIDTH - PADDLE_WIDTH);
        }

        #[test]
        fn prop_update_clamped(start in -1.0e4f32..1.0e4, vel in -1.0e3f32..1.0e3) {
            let mut paddle = Paddle::new();
            paddle.pos.x = start;
            paddle.vel_x = vel;
            paddle.update();
            prop_assert!(paddle.pos.x >= 0.0);
            prop_assert!(paddle.pos.x <= CANVAS_WIDTH - PADDLE_WIDTH);
        }

        #[test]
        fn prop_fire_never_twice_within_cooldown(
            first in 0.0f64..1.0e6,
            gap in 0.0f64..499.99,
        ) {
            let mut paddle = armed_paddle(5);
            prop_assert!(paddle.fire_missile(1.0, first));
            prop_assert!(!paddle.fire_missile(1.0, first + gap));
            prop_assert_eq!(paddle.stats.missile_ammo, 4);
        }
    }
}
