//! Axis-aligned collision geometry
//!
//! Everything in the playfield is a rectangle for collision purposes, including
//! the ball. Overlap tests are inclusive on every edge, so touching counts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Inclusive-edge overlap test
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() >= other.left()
            && self.left() <= other.right()
            && self.bottom() >= other.top()
            && self.top() <= other.bottom()
    }
}

/// Anything that can hit a brick: a bounding box plus the damage it deals
pub trait Projectile {
    fn bounds(&self) -> Rect;
    fn damage(&self) -> f32;

    /// View this projectile with a different damage value
    fn with_damage(&self, damage: f32) -> WithDamage<'_, Self>
    where
        Self: Sized,
    {
        WithDamage {
            inner: self,
            damage,
        }
    }
}

/// Damage override adapter (missiles hit with the ball's current damage)
#[derive(Debug)]
pub struct WithDamage<'a, P> {
    inner: &'a P,
    damage: f32,
}

impl<P: Projectile> Projectile for WithDamage<'_, P> {
    fn bounds(&self) -> Rect {
        self.inner.bounds()
    }

    fn damage(&self) -> f32 {
        self.damage
    }
}

/// Horizontal contact position on a paddle in [0, 1] (0.5 = dead center)
///
/// Not clamped: a ball clipping the paddle corner can report slightly
/// outside the range, which steers it a little harder.
#[inline]
pub fn hit_fraction(ball: &Rect, paddle: &Rect) -> f32 {
    (ball.center().x - paddle.left()) / paddle.size.x
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shot(Rect, f32);

    impl Projectile for Shot {
        fn bounds(&self) -> Rect {
            self.0
        }
        fn damage(&self) -> f32 {
            self.1
        }
    }

    #[test]
    fn test_overlap_touching_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_miss() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.5, 0.0, 5.0, 5.0);
        assert!(!a.overlaps(&b));
        let c = Rect::new(0.0, -6.0, 5.0, 5.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_with_damage_overrides_only_damage() {
        let shot = Shot(Rect::new(1.0, 2.0, 3.0, 4.0), 1.0);
        let boosted = shot.with_damage(4.5);
        assert_eq!(boosted.bounds(), shot.bounds());
        assert_eq!(boosted.damage(), 4.5);
    }

    #[test]
    fn test_hit_fraction() {
        let paddle = Rect::new(100.0, 550.0, 100.0, 15.0);
        let centered = Rect::new(142.0, 534.0, 16.0, 16.0);
        assert!((hit_fraction(&centered, &paddle) - 0.5).abs() < 1e-6);
        let left_edge = Rect::new(92.0, 534.0, 16.0, 16.0);
        assert!(hit_fraction(&left_edge, &paddle).abs() < 1e-6);
    }
}
