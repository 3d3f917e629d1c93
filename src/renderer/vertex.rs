//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// Playfield fill (#1F2937)
    pub const BACKGROUND: [f32; 4] = [0.122, 0.161, 0.216, 1.0];
    /// Letterbox bars outside the playfield
    pub const LETTERBOX: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
    pub const BRICK_SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.2];
    /// Remaining-strength numbers on bricks
    pub const BRICK_LABEL: [f32; 4] = [1.0, 1.0, 1.0, 0.9];
    /// Paddle gradient, top and bottom (#9F7AEA / #805AD5)
    pub const PADDLE_TOP: [f32; 4] = [0.624, 0.478, 0.918, 1.0];
    pub const PADDLE_BOTTOM: [f32; 4] = [0.502, 0.353, 0.835, 1.0];
    /// Launcher turret (#4A5568)
    pub const LAUNCHER: [f32; 4] = [0.290, 0.333, 0.408, 1.0];
    /// Missile body (#F56565)
    pub const MISSILE: [f32; 4] = [0.961, 0.396, 0.396, 1.0];
    /// Ball (#F7FAFC)
    pub const BALL: [f32; 4] = [0.969, 0.980, 0.988, 1.0];
    pub const LAUNCH_PROMPT: [f32; 4] = [0.624, 0.478, 0.918, 0.85];

    /// Large explosion palette (0xRRGGBB)
    pub const FIRE: [u32; 4] = [0xFF4444, 0xFF7777, 0xFFAA44, 0xFFDD44];
}
