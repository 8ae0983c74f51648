//! Surface mesh produced by iso-surface extraction

use crate::point::*;
use crate::transform::Transform3D;
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Default RGBA color given to every extracted vertex
pub const DEFAULT_VERTEX_COLOR: [f32; 4] = [0.7, 0.7, 0.7, 1.0];

/// A mesh vertex laid out for direct upload into a vertex buffer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct MeshVertex {
    pub position: Point3f,
    /// Unit length once the mesh is finalized
    pub normal: Vector3f,
    /// Equal to `position`; the volume's unit cube doubles as 3D texture space
    pub texcoord: Point3f,
    pub color: [f32; 4],
}

unsafe impl Pod for MeshVertex {}
unsafe impl Zeroable for MeshVertex {}

impl MeshVertex {
    /// Create a vertex whose texture coordinate mirrors its position
    pub fn new(position: Point3f, color: [f32; 4]) -> Self {
        Self {
            position,
            normal: Vector3f::zeros(),
            texcoord: position,
            color,
        }
    }
}

impl Default for MeshVertex {
    fn default() -> Self {
        Self::new(Point3f::origin(), DEFAULT_VERTEX_COLOR)
    }
}

/// An indexed triangle list with per-vertex attributes
///
/// `indices` is a flat buffer of independent triangles: every consecutive
/// triple is one face, with no strip or fan connectivity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    pub model_matrix: Transform3D,
    pub world_matrix: Transform3D,
}

impl SurfaceMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            model_matrix: Transform3D::identity(),
            world_matrix: Transform3D::identity(),
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Iterate over triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Corner positions of triangle `index`, if it exists
    pub fn triangle_positions(&self, index: usize) -> Option<[Point3f; 3]> {
        let tri = self.indices.get(index * 3..index * 3 + 3)?;
        Some([
            self.vertices.get(tri[0] as usize)?.position,
            self.vertices.get(tri[1] as usize)?.position,
            self.vertices.get(tri[2] as usize)?.position,
        ])
    }

    /// Calculate unit face normals following each triangle's winding
    pub fn face_normals(&self) -> Vec<Vector3f> {
        self.triangles()
            .map(|[a, b, c]| {
                let v0 = self.vertices[a as usize].position;
                let v1 = self.vertices[b as usize].position;
                let v2 = self.vertices[c as usize].position;

                (v1 - v0).cross(&(v2 - v0)).normalize()
            })
            .collect()
    }

    /// Vertex positions in buffer order
    pub fn positions(&self) -> Vec<Point3f> {
        self.vertices.iter().map(|v| v.position).collect()
    }
}

impl Default for SurfaceMesh {
    fn default() -> Self {
        Self::new()
    }
}
