//! Off-screen frame building
//!
//! Drawing calls append triangles to a back buffer. `commit` swaps it to the
//! front, where the presenter (if any) picks it up, and feeds the FPS meter.

use glam::Vec2;

use super::RenderSink;
use super::particles::ParticleSystem;
use super::pipeline::Presenter;
use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::rgb_to_rgba;
use crate::settings::Settings;
use crate::sim::{Ball, BrickField, Paddle, Projectile};

/// Digit height of the strength number on each brick
const BRICK_LABEL_HEIGHT: f32 = 11.0;

/// A finished (or in-progress) frame in playfield coordinates
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
    /// The "launch the ball" prompt is part of this frame
    pub launch_prompt: bool,
}

impl Frame {
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.launch_prompt = false;
    }

    pub fn push(&mut self, vertices: &[Vertex]) {
        self.vertices.extend_from_slice(vertices);
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// Frames per second, measured over windows of at least one second
#[derive(Debug, Clone)]
pub struct FpsMeter {
    window_start: Option<f64>,
    frames: u32,
    fps: u32,
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self {
            window_start: None,
            frames: 0,
            fps: MAX_TARGET_FPS,
        }
    }
}

impl FpsMeter {
    /// Count one presented frame
    pub fn record(&mut self, now_ms: f64) {
        let Some(start) = self.window_start else {
            self.window_start = Some(now_ms);
            return;
        };

        self.frames += 1;
        let elapsed = now_ms - start;
        if elapsed >= 1000.0 {
            self.fps = (self.frames as f64 * 1000.0 / elapsed).round() as u32;
            self.frames = 0;
            self.window_start = Some(now_ms);
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// CPU-side render sink with double-buffered frames and particles
pub struct FrameRenderer {
    back: Frame,
    front: Frame,
    particles: ParticleSystem,
    fps: FpsMeter,
    circle_segments: u32,
    presenter: Option<Presenter>,
}

impl FrameRenderer {
    /// Headless renderer (frames are built but never shown)
    pub fn new(settings: &Settings, seed: u64) -> Self {
        Self {
            back: Frame::default(),
            front: Frame::default(),
            particles: ParticleSystem::new(seed, settings.max_particles(), settings.reduced_motion),
            fps: FpsMeter::default(),
            circle_segments: settings.quality.circle_segments(),
            presenter: None,
        }
    }

    /// Renderer that presents every committed frame on the GPU
    pub fn with_presenter(settings: &Settings, seed: u64, presenter: Presenter) -> Self {
        Self {
            presenter: Some(presenter),
            ..Self::new(settings, seed)
        }
    }

    /// The last committed frame
    pub fn front(&self) -> &Frame {
        &self.front
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn presenter_mut(&mut self) -> Option<&mut Presenter> {
        self.presenter.as_mut()
    }
}

impl RenderSink for FrameRenderer {
    fn clear(&mut self) {
        self.back.clear();
        self.back.push(&shapes::rect(
            Vec2::ZERO,
            Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            colors::BACKGROUND,
        ));
    }

    fn draw_bricks(&mut self, bricks: &BrickField) {
        for brick in bricks.bricks() {
            self.back.push(&shapes::rect(
                brick.pos + Vec2::splat(2.0),
                brick.size,
                colors::BRICK_SHADOW,
            ));
            let alpha = 0.3 + 0.7 * brick.health_fraction();
            self.back
                .push(&shapes::rect(brick.pos, brick.size, rgb_to_rgba(brick.color, alpha)));
            self.back.push(&shapes::number(
                brick.strength.ceil() as u32,
                brick.pos + brick.size / 2.0,
                BRICK_LABEL_HEIGHT,
                colors::BRICK_LABEL,
            ));
        }

        // Particles advance once per drawn frame
        self.particles.update();
        for particle in self.particles.particles() {
            let color = rgb_to_rgba(particle.color, particle.alpha());
            self.back.push(&shapes::circle(
                particle.pos,
                particle.radius,
                color,
                self.circle_segments / 2,
            ));
        }
    }

    fn draw_paddle(&mut self, paddle: &Paddle) {
        self.back.push(&shapes::vertical_gradient_rect(
            paddle.pos,
            paddle.size,
            colors::PADDLE_TOP,
            colors::PADDLE_BOTTOM,
        ));

        if paddle.stats.has_missile_launcher {
            let turret = Vec2::new(paddle.pos.x + paddle.size.x / 2.0 - 6.0, paddle.pos.y - 8.0);
            self.back
                .push(&shapes::rect(turret, Vec2::new(12.0, 8.0), colors::LAUNCHER));
        }

        for missile in &paddle.missiles {
            self.back
                .push(&shapes::rect(missile.pos, missile.size, colors::MISSILE));
        }
    }

    fn draw_ball(&mut self, ball: &Ball) {
        let bounds = ball.bounds();
        self.back.push(&shapes::circle(
            bounds.center(),
            ball.radius(),
            colors::BALL,
            self.circle_segments,
        ));
    }

    fn draw_launch_prompt(&mut self) {
        self.back.launch_prompt = true;
        let center = Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
        self.back
            .push(&shapes::chevron(center, 20.0, colors::LAUNCH_PROMPT));
    }

    fn spawn_explosion(&mut self, pos: Vec2, color: u32, large: bool) {
        self.particles.spawn_explosion(pos, color, large);
    }

    fn commit(&mut self, now_ms: f64) {
        std::mem::swap(&mut self.back, &mut self.front);
        self.fps.record(now_ms);

        if let Some(presenter) = &mut self.presenter {
            presenter.present(&self.front);
        }
    }

    fn fps(&self) -> u32 {
        self.fps.fps()
    }

    /// Live particles are kept, trimmed to the new cap
    fn apply_settings(&mut self, settings: &Settings) {
        self.circle_segments = settings.quality.circle_segments();
        self.particles.set_cap(settings.max_particles());
        self.particles.set_reduced_motion(settings.reduced_motion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    fn renderer() -> FrameRenderer {
        FrameRenderer::new(&Settings::default(), 42)
    }

    #[test]
    fn test_fps_meter_window() {
        let mut meter = FpsMeter::default();
        assert_eq!(meter.fps(), 60);
        meter.record(0.0);
        for i in 1..=20 {
            meter.record(i as f64 * 50.0);
        }
        assert_eq!(meter.fps(), 20);
    }

    #[test]
    fn test_fps_meter_waits_for_full_window() {
        let mut meter = FpsMeter::default();
        meter.record(0.0);
        meter.record(500.0);
        assert_eq!(meter.fps(), 60);
        meter.record(1250.0);
        // 2 frames over 1250ms
        assert_eq!(meter.fps(), 2);
    }

    #[test]
    fn test_commit_swaps_buffers() {
        let mut r = renderer();
        let state = GameState::new(false);

        r.clear();
        r.draw_bricks(&state.bricks);
        r.draw_paddle(&state.paddle);
        r.draw_ball(&state.ball);
        r.draw_launch_prompt();
        assert!(r.front().vertices.is_empty());

        r.commit(0.0);
        let frame = r.front();
        assert!(frame.launch_prompt);
        // Background + 50 bricks with shadows + paddle
        assert!(frame.triangle_count() >= 2 + 50 * 4 + 2);

        r.clear();
        r.commit(16.0);
        assert!(!r.front().launch_prompt);
    }

    #[test]
    fn test_brick_alpha_tracks_strength() {
        let mut r = renderer();
        let mut bricks = BrickField::new();
        bricks.bricks_mut().truncate(1);
        bricks.bricks_mut()[0].strength = 3.5;

        r.clear();
        r.draw_bricks(&bricks);
        r.commit(0.0);
        // Background (6) + shadow (6), then the brick itself
        let brick_vertex = r.front().vertices[12];
        assert!((brick_vertex.color[3] - (0.3 + 0.7 * 0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_brick_shows_rounded_up_strength() {
        let mut r = renderer();
        let mut bricks = BrickField::new();
        bricks.bricks_mut().truncate(1);
        bricks.bricks_mut()[0].strength = 3.5;

        r.clear();
        r.draw_bricks(&bricks);
        // Background, shadow and brick, then "4" in four segments
        assert_eq!(r.back.vertices.len(), 6 + 6 + 6 + 4 * 6);
        let label = &r.back.vertices[18..];
        assert!(label.iter().all(|v| v.color == colors::BRICK_LABEL));
    }

    #[test]
    fn test_apply_settings_trims_particles() {
        let mut r = renderer();
        r.spawn_explosion(Vec2::new(50.0, 50.0), 0xFF6B6B, true);
        assert_eq!(r.particles().len(), 12);

        let settings = Settings {
            particles: false,
            ..Settings::default()
        };
        r.apply_settings(&settings);
        assert!(r.particles().is_empty());
        r.spawn_explosion(Vec2::new(50.0, 50.0), 0xFF6B6B, true);
        assert!(r.particles().is_empty());
    }

    #[test]
    fn test_launcher_turret_drawn() {
        let mut r = renderer();
        let mut paddle = Paddle::new();
        r.clear();
        r.draw_paddle(&paddle);
        let plain = r.back.vertices.len();

        paddle.stats.has_missile_launcher = true;
        r.clear();
        r.draw_paddle(&paddle);
        assert_eq!(r.back.vertices.len(), plain + 6);
    }

    #[test]
    fn test_explosions_drawn_until_expired() {
        let mut r = renderer();
        let bricks = BrickField::new();
        r.spawn_explosion(Vec2::new(50.0, 50.0), 0xFF6B6B, false);
        r.clear();
        r.draw_bricks(&bricks);
        assert_eq!(r.particles().len(), 6);
        for _ in 0..60 {
            r.clear();
            r.draw_bricks(&bricks);
        }
        assert!(r.particles().is_empty());
    }
}
