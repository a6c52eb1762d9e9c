//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::BlockColor;

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
    use super::BlockColor;

    /// Teal used for both paddle and ball (#4ecca3)
    pub const PADDLE: [f32; 4] = [78.0 / 255.0, 204.0 / 255.0, 163.0 / 255.0, 1.0];
    pub const BALL: [f32; 4] = PADDLE;
    /// Backdrop grid, same teal at 10% opacity
    pub const GRID: [f32; 4] = [78.0 / 255.0, 204.0 / 255.0, 163.0 / 255.0, 0.1];
    pub const BLOCK_OUTLINE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// Veil over the frozen frame once the game ends
    pub const GAME_OVER_VEIL: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];

    pub fn block(color: BlockColor) -> [f32; 4] {
        let [r, g, b] = color.rgb();
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }
}
