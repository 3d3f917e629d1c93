//! Brick grid lifecycle and per-brick damage

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Projectile, Rect};
use super::state::GameEvent;
use crate::consts::*;

/// A destructible brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub pos: Vec2,
    pub size: Vec2,
    /// 0xRRGGBB row color
    pub color: u32,
    pub strength: f32,
    pub max_strength: f32,
}

impl Brick {
    pub fn new(x: f32, y: f32, color: u32, strength: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            color,
            strength,
            max_strength: strength,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Remaining strength in [0, 1]
    pub fn health_fraction(&self) -> f32 {
        if self.max_strength <= 0.0 {
            return 0.0;
        }
        (self.strength / self.max_strength).clamp(0.0, 1.0)
    }

    pub fn is_destroyed(&self) -> bool {
        self.strength <= 0.0
    }
}

/// Strength of every brick in `row` at `level` (1-based)
///
/// The top row is the toughest: it gets 4 extra points over the bottom row.
pub fn brick_strength(level: u32, row: usize) -> f32 {
    let exponent = level.saturating_sub(1) as i32;
    let base = (BASE_BRICK_HEALTH * LEVEL_HEALTH_GROWTH.powi(exponent)).ceil();
    base + (BRICK_ROWS - 1 - row) as f32
}

/// The brick grid for the current level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickField {
    bricks: Vec<Brick>,
    level: u32,
}

impl Default for BrickField {
    fn default() -> Self {
        Self::new()
    }
}

impl BrickField {
    /// A level 1 field, fully populated
    pub fn new() -> Self {
        let mut field = Self {
            bricks: Vec::with_capacity(BRICK_ROWS * BRICK_COLUMNS),
            level: 1,
        };
        field.init();
        field
    }

    /// Regenerate the grid for the current level (idempotent)
    pub fn init(&mut self) {
        self.bricks.clear();
        for row in 0..BRICK_ROWS {
            let strength = brick_strength(self.level, row);
            for col in 0..BRICK_COLUMNS {
                let x = col as f32 * (BRICK_WIDTH + BRICK_GAP) + BRICK_OFFSET_X;
                let y = row as f32 * (BRICK_HEIGHT + BRICK_GAP) + BRICK_OFFSET_Y;
                self.bricks
                    .push(Brick::new(x, y, BRICK_COLORS[row], strength));
            }
        }
    }

    pub fn next_level(&mut self) {
        self.level += 1;
        log::info!("Generating level {}", self.level);
        self.init();
    }

    /// Back to level 1 for a new game
    pub fn reset(&mut self) {
        self.level = 1;
        self.init();
    }

    /// Apply a projectile to the first brick it overlaps
    ///
    /// Returns true if any brick was hit. A brick whose strength drops to zero
    /// is removed and an explosion is queued at its center.
    pub fn check_collision(
        &mut self,
        projectile: &impl Projectile,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        let bounds = projectile.bounds();
        let Some(index) = self
            .bricks
            .iter()
            .position(|brick| brick.bounds().overlaps(&bounds))
        else {
            return false;
        };

        let brick = &mut self.bricks[index];
        brick.strength -= projectile.damage();
        if brick.is_destroyed() {
            let brick = self.bricks.remove(index);
            log::debug!("Brick destroyed at ({}, {})", brick.pos.x, brick.pos.y);
            events.push(GameEvent::Explosion {
                pos: brick.center(),
                color: brick.color,
                large: false,
            });
        }
        true
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    /// Direct access for scripted setups (tests, demo layouts)
    pub fn bricks_mut(&mut self) -> &mut Vec<Brick> {
        &mut self.bricks
    }
}
