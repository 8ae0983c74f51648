//! Shared-vertex mesh assembly
//!
//! Crossing vertices are keyed by the grid edge they lie on, so every
//! tetrahedron touching that edge (in this cell or a neighbouring one) reuses
//! the same vertex. Normals are accumulated per face and normalized once when
//! the assembler is finalized.

use isocrate_core::{
    Error, MeshVertex, Point3f, Result, SurfaceMesh, Transform3D, Vector3f,
    DEFAULT_VERTEX_COLOR,
};
use std::collections::HashMap;

/// Identity of a grid edge: the global indices of its endpoints, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(usize, usize);

impl EdgeKey {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        debug_assert_ne!(a, b, "an edge needs two distinct grid points");
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn endpoints(self) -> (usize, usize) {
        (self.0, self.1)
    }
}

/// Receiver of the vertices and triangles produced by the traversal
pub trait TriangleSink {
    /// Vertex at `position` on the grid edge between global indices `a` and `b`.
    ///
    /// Repeated calls for the same unordered pair return the same index.
    fn add_vertex(&mut self, position: Point3f, a: usize, b: usize) -> Result<u32>;

    /// Append a triangle; the three indices must be pairwise distinct.
    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) -> Result<()>;
}

pub(crate) fn check_distinct(i0: u32, i1: u32, i2: u32) -> Result<()> {
    if i0 == i1 || i0 == i2 || i1 == i2 {
        return Err(Error::DegenerateTriangle { i0, i1, i2 });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssemblerState {
    Accumulating,
    Finalized,
}

/// Builds one [`SurfaceMesh`] over a whole traversal
#[derive(Debug, Clone)]
pub struct MeshAssembler {
    state: AssemblerState,
    edge_to_vertex: HashMap<EdgeKey, u32>,
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
    color: [f32; 4],
    model_matrix: Transform3D,
    world_matrix: Transform3D,
}

impl MeshAssembler {
    /// Create an assembler whose edge cache is sized for `edge_capacity` vertices
    pub fn new(edge_capacity: usize) -> Self {
        Self {
            state: AssemblerState::Accumulating,
            edge_to_vertex: HashMap::with_capacity(edge_capacity),
            vertices: Vec::with_capacity(edge_capacity),
            indices: Vec::new(),
            color: DEFAULT_VERTEX_COLOR,
            model_matrix: Transform3D::identity(),
            world_matrix: Transform3D::identity(),
        }
    }

    /// Set the constant color given to new vertices
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Set the transforms copied onto the finished mesh
    pub fn with_transforms(mut self, model_matrix: Transform3D, world_matrix: Transform3D) -> Self {
        self.model_matrix = model_matrix;
        self.world_matrix = world_matrix;
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_finalized(&self) -> bool {
        self.state == AssemblerState::Finalized
    }

    fn ensure_accumulating(&self) -> Result<()> {
        match self.state {
            AssemblerState::Accumulating => Ok(()),
            AssemblerState::Finalized => Err(Error::MeshFinalized),
        }
    }

    /// Vertex for a canonical edge key, created on first use
    pub fn vertex_for_edge(&mut self, key: EdgeKey, position: Point3f) -> Result<u32> {
        self.ensure_accumulating()?;

        if let Some(&index) = self.edge_to_vertex.get(&key) {
            return Ok(index);
        }

        let index = u32::try_from(self.vertices.len()).map_err(|_| {
            Error::Algorithm("vertex count exceeds the 32-bit index range".to_string())
        })?;
        self.vertices.push(MeshVertex::new(position, self.color));
        self.edge_to_vertex.insert(key, index);
        Ok(index)
    }

    /// Normalize accumulated normals and hand out the finished mesh.
    ///
    /// The assembler is unusable afterwards; every further call returns
    /// [`Error::MeshFinalized`].
    pub fn finalize(&mut self) -> Result<SurfaceMesh> {
        self.ensure_accumulating()?;
        self.state = AssemblerState::Finalized;
        self.edge_to_vertex = HashMap::new();

        let mut vertices = std::mem::take(&mut self.vertices);
        for vertex in &mut vertices {
            vertex.normal = vertex
                .normal
                .try_normalize(f32::EPSILON)
                .unwrap_or_else(Vector3f::zeros);
        }

        Ok(SurfaceMesh {
            vertices,
            indices: std::mem::take(&mut self.indices),
            model_matrix: self.model_matrix,
            world_matrix: self.world_matrix,
        })
    }
}

impl TriangleSink for MeshAssembler {
    fn add_vertex(&mut self, position: Point3f, a: usize, b: usize) -> Result<u32> {
        self.vertex_for_edge(EdgeKey::new(a, b), position)
    }

    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) -> Result<()> {
        self.ensure_accumulating()?;
        check_distinct(i0, i1, i2)?;

        let corner = |i: u32| {
            self.vertices
                .get(i as usize)
                .map(|v| v.position)
                .ok_or_else(|| Error::InvalidData(format!("vertex index {} out of range", i)))
        };
        let (a, b, c) = (corner(i0)?, corner(i1)?, corner(i2)?);

        self.indices.extend_from_slice(&[i0, i1, i2]);

        // Slivers with a zero cross product still count as faces but add no normal.
        let normal = (b - a)
            .cross(&(c - a))
            .try_normalize(0.0)
            .unwrap_or_else(Vector3f::zeros);
        for i in [i0, i1, i2] {
            self.vertices[i as usize].normal += normal;
        }

        Ok(())
    }
}
