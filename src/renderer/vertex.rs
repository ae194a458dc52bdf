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
    /// Tile colour per group: blue, dark blue, orange, purple
    pub const GROUPS: [[f32; 4]; 4] = [
        [0.30, 0.62, 0.95, 1.0],
        [0.13, 0.25, 0.62, 1.0],
        [0.96, 0.56, 0.18, 1.0],
        [0.58, 0.32, 0.80, 1.0],
    ];
    /// Fallback for groups beyond the palette
    pub const UNKNOWN_GROUP: [f32; 4] = [0.6, 0.6, 0.6, 1.0];
    pub const VALUE_TEXT: [f32; 4] = [0.05, 0.05, 0.08, 1.0];
    pub const EFFECT_TEXT: [f32; 4] = [1.0, 0.95, 0.6, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];

    pub fn group(group: u8) -> [f32; 4] {
        GROUPS
            .get(group as usize)
            .copied()
            .unwrap_or(UNKNOWN_GROUP)
    }

    /// Scale RGB, keep alpha
    pub fn shade(color: [f32; 4], factor: f32) -> [f32; 4] {
        [
            (color[0] * factor).min(1.0),
            (color[1] * factor).min(1.0),
            (color[2] * factor).min(1.0),
            color[3],
        ]
    }
}
