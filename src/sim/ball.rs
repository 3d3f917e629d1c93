//! The ball

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Projectile, Rect};
use super::paddle::Paddle;
use crate::consts::*;

/// Upgrade-driven modifiers (reset whenever the ball is reset)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallEffects {
    pub speed_multiplier: f32,
    pub damage_multiplier: f32,
}

impl Default for BallEffects {
    fn default() -> Self {
        Self {
            speed_multiplier: 1.0,
            damage_multiplier: 1.0,
        }
    }
}

/// A ball entity. Zero velocity means it is resting on the paddle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub effects: BallEffects,
}

impl Ball {
    /// Create a ball resting above a paddle whose top-left is at (anchor_x, anchor_y)
    pub fn new(anchor_x: f32, anchor_y: f32) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            size: Vec2::splat(BALL_RADIUS * 2.0),
            vel: Vec2::ZERO,
            effects: BallEffects::default(),
        };
        ball.reset(anchor_x, anchor_y);
        ball
    }

    /// Put the ball back above the paddle, stopped, with default effects
    pub fn reset(&mut self, anchor_x: f32, anchor_y: f32) {
        self.pos = Vec2::new(
            anchor_x + PADDLE_WIDTH / 2.0 - BALL_RADIUS,
            anchor_y - self.size.y - 2.0,
        );
        self.vel = Vec2::ZERO;
        self.effects = BallEffects::default();
    }

    #[inline]
    pub fn is_launched(&self) -> bool {
        self.vel != Vec2::ZERO
    }

    /// Launch from rest. Returns false (and changes nothing) if already moving.
    pub fn launch(&mut self) -> bool {
        if self.is_launched() {
            return false;
        }
        let speed = self.speed();
        self.vel = Vec2::new(speed, -speed);
        true
    }

    /// Advance one step
    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    /// Keep a resting ball centered on top of the paddle
    pub fn follow_paddle(&mut self, paddle: &Paddle) {
        self.pos.x = paddle.pos.x + paddle.size.x / 2.0 - self.size.x / 2.0;
        self.pos.y = paddle.pos.y - self.size.y;
    }

    pub fn reverse_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn reverse_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Steer off the paddle: center sends it straight up, edges add ±speed sideways
    pub fn set_velocity_from_paddle_hit(&mut self, hit_fraction: f32) {
        let speed = self.speed();
        self.vel.x = speed * (hit_fraction - 0.5) * 2.0;
        self.vel.y = -speed;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        BALL_SPEED * self.effects.speed_multiplier
    }

    #[inline]
    pub fn base_speed(&self) -> f32 {
        BALL_SPEED
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size.x / 2.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

impl Projectile for Ball {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    fn damage(&self) -> f32 {
        BASE_BALL_DAMAGE * self.effects.damage_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resting_ball() -> Ball {
        Ball::new(350.0, PADDLE_Y)
    }

    #[test]
    fn test_reset_position() {
        let ball = resting_ball();
        assert_eq!(ball.pos, Vec2::new(350.0 + 50.0 - 8.0, PADDLE_Y - 16.0 - 2.0));
        assert!(!ball.is_launched());
    }

    #[test]
    fn test_launch_from_rest() {
        let mut ball = resting_ball();
        assert!(ball.launch());
        assert_eq!(ball.vel, Vec2::new(7.0, -7.0));

        // Second launch is rejected and leaves velocity alone
        assert!(!ball.launch());
        assert_eq!(ball.vel, Vec2::new(7.0, -7.0));
    }

    #[test]
    fn test_launch_uses_speed_multiplier() {
        let mut ball = resting_ball();
        ball.effects.speed_multiplier = 0.75;
        assert!(ball.launch());
        assert!((ball.vel.x - 5.25).abs() < 1e-6);
        assert!((ball.vel.y + 5.25).abs() < 1e-6);
    }

    #[test]
    fn test_paddle_hit_steering() {
        let mut ball = resting_ball();
        ball.set_velocity_from_paddle_hit(0.5);
        assert_eq!(ball.vel, Vec2::new(0.0, -7.0));
        ball.set_velocity_from_paddle_hit(0.0);
        assert_eq!(ball.vel, Vec2::new(-7.0, -7.0));
        ball.set_velocity_from_paddle_hit(1.0);
        assert_eq!(ball.vel, Vec2::new(7.0, -7.0));
    }

    #[test]
    fn test_reset_clears_effects() {
        let mut ball = resting_ball();
        ball.effects.damage_multiplier = 3.0;
        ball.launch();
        ball.update();
        ball.reset(0.0, PADDLE_Y);
        assert_eq!(ball.effects, BallEffects::default());
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_damage() {
        let mut ball = resting_ball();
        assert_eq!(ball.damage(), 1.0);
        ball.effects.damage_multiplier += 1.0;
        assert_eq!(ball.damage(), 2.0);
    }

    #[test]
    fn test_follow_paddle() {
        let mut ball = resting_ball();
        let mut paddle = Paddle::new();
        paddle.set_position(200.0);
        ball.follow_paddle(&paddle);
        assert_eq!(ball.center().x, 200.0);
        assert_eq!(ball.pos.y + ball.size.y, paddle.pos.y);
    }
}
