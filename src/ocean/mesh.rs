//! Undisplaced water plane grid.

use bytemuck::{Pod, Zeroable};

use crate::params::WaterPlane;

/// Vertex data for the water mesh (position + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Flat XZ grid centred on the origin. Topology never changes after creation;
/// displacement happens in the vertex shader.
pub struct WaterGrid {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    subdivisions: usize,
}

impl WaterGrid {
    /// Build the grid described by `plane`
    pub fn new(plane: &WaterPlane) -> Self {
        let subdivisions = plane.subdivisions.max(1);
        let spacing = plane.size / subdivisions as f32;
        let half_size = plane.size / 2.0;
        let row = subdivisions + 1;

        let mut vertices = Vec::with_capacity(row * row);
        let mut indices = Vec::with_capacity(subdivisions * subdivisions * 6);

        for z in 0..=subdivisions {
            for x in 0..=subdivisions {
                vertices.push(Vertex {
                    position: [
                        x as f32 * spacing - half_size,
                        0.0,
                        z as f32 * spacing - half_size,
                    ],
                    uv: [
                        x as f32 / subdivisions as f32,
                        z as f32 / subdivisions as f32,
                    ],
                });
            }
        }

        // Counter-clockwise seen from +Y
        for z in 0..subdivisions {
            for x in 0..subdivisions {
                let top_left = (z * row + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((z + 1) * row + x) as u32;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        log::debug!(
            "Water grid: {} vertices, {} triangles",
            vertices.len(),
            indices.len() / 3
        );

        Self {
            vertices,
            indices,
            subdivisions,
        }
    }

    /// Quads per side
    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}
