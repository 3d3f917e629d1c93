//! Rendering module
//!
//! Frames are built on the CPU as colored triangles in playfield coordinates
//! and handed to a WebGPU presenter on commit.

pub mod frame;
pub mod particles;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::{FpsMeter, Frame, FrameRenderer};
pub use particles::{Particle, ParticleSystem};
pub use pipeline::{Presenter, surface_to_playfield};
pub use vertex::Vertex;

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{Ball, BrickField, Paddle};

/// Draw target for the loop driver
///
/// A frame is `clear`, any number of draw calls, then `commit`.
pub trait RenderSink {
    fn clear(&mut self);
    /// Bricks, plus one step of particle motion
    fn draw_bricks(&mut self, bricks: &BrickField);
    /// Paddle, launcher turret when equipped, and live missiles
    fn draw_paddle(&mut self, paddle: &Paddle);
    fn draw_ball(&mut self, ball: &Ball);
    fn draw_launch_prompt(&mut self);
    fn spawn_explosion(&mut self, pos: Vec2, color: u32, large: bool);
    /// Present the frame built since the last `clear`
    fn commit(&mut self, now_ms: f64);
    /// Most recent measured frame rate
    fn fps(&self) -> u32;
    /// Pick up changed quality, particle or motion settings
    fn apply_settings(&mut self, _settings: &Settings) {}
}
