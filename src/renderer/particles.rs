//! Explosion particles (visual only, never fed back into the simulation)

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use super::vertex::colors;

const GRAVITY: f32 = 0.1;
const DRAG: f32 = 0.99;

/// A single spark
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// 0xRRGGBB
    pub color: u32,
    /// Frames left
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, color: u32, large: bool) -> Self {
        let max_life = if large { 90 } else { 60 };
        Self {
            pos,
            vel,
            radius: if large { 3.0 } else { 2.0 },
            color,
            life: max_life,
            max_life,
        }
    }

    /// Move, then apply gravity and drag
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.vel.y += GRAVITY;
        self.vel.x *= DRAG;
        self.life = self.life.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Opacity fades linearly with remaining life
    pub fn alpha(&self) -> f32 {
        self.life as f32 / self.max_life as f32
    }
}

/// Owns every live particle and the RNG that scatters them
#[derive(Debug)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: Pcg32,
    cap: usize,
    reduced_motion: bool,
}

impl ParticleSystem {
    pub fn new(seed: u64, cap: usize, reduced_motion: bool) -> Self {
        Self {
            particles: Vec::with_capacity(cap.min(1024)),
            rng: Pcg32::seed_from_u64(seed),
            cap,
            reduced_motion,
        }
    }

    /// Burst of particles spread evenly around `pos`
    ///
    /// Small bursts use the brick color; large ones pick from the fire palette.
    /// Anything past the particle cap is dropped.
    pub fn spawn_explosion(&mut self, pos: Vec2, color: u32, large: bool) {
        let large = large && !self.reduced_motion;
        let count = if large { 12 } else { 6 };
        let speed_scale = if large { 1.5 } else { 1.0 };

        for i in 0..count {
            if self.particles.len() >= self.cap {
                break;
            }
            let angle = TAU * i as f32 / count as f32;
            let speed = self.rng.random_range(2.0..4.0) * speed_scale;
            let vel = Vec2::new(angle.cos(), angle.sin()) * speed;
            let color = if large {
                colors::FIRE[self.rng.random_range(0..colors::FIRE.len())]
            } else {
                color
            };
            self.particles.push(Particle::new(pos, vel, color, large));
        }
    }

    /// Advance every particle one frame and drop the dead ones
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn set_cap(&mut self, cap: usize) {
        self.cap = cap;
        self.particles.truncate(cap);
    }

    /// Applies to bursts spawned from now on
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
    }
}
