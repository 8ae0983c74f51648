//! Marching Tetrahedra algorithm for volumetric surface extraction
//!
//! Every cell of the grid is split into six tetrahedra. Within a tetrahedron
//! the field is treated as affine, so each of the sixteen corner sign patterns
//! has exactly one surface patch of zero, one or two triangles and no
//! ambiguous cases.

use crate::assembler::{MeshAssembler, TriangleSink};
use crate::case_table::{TetraEdge, CASE_TABLE};
use crate::cell::Cell;
use crate::config::{ExtractionConfig, IsoLevel};
use crate::interpolation::interpolate_position;
use crate::parallel;
use crate::tetrahedron::Tetrahedron;
use isocrate_core::{Result, ScalarField, SurfaceMesh};
use itertools::iproduct;
use log::{debug, info, warn};
use std::ops::Range;

/// Marching Tetrahedra implementation
#[derive(Debug, Clone, Default)]
pub struct MarchingTetrahedra {
    config: ExtractionConfig,
}

impl MarchingTetrahedra {
    /// Create a new Marching Tetrahedra instance
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Iso value this extraction uses on `field`
    pub fn resolve_iso<F: ScalarField + ?Sized>(&self, field: &F) -> f32 {
        match self.config.iso_level {
            IsoLevel::Absolute(iso) => iso,
            level => level.resolve(field.value_range()),
        }
    }

    /// Extract the iso-surface of `field` as one shared-vertex mesh.
    ///
    /// The result is a deterministic function of the field and the resolved
    /// iso value; the sharded traversal returns the same mesh as the
    /// sequential one.
    pub fn extract<F: ScalarField + Sync + ?Sized>(&self, field: &F) -> Result<SurfaceMesh> {
        let dims = field.dimensions();
        let iso = self.resolve_iso(field);

        let mut assembler = MeshAssembler::new(self.config.edge_capacity_for(dims))
            .with_color(self.config.vertex_color)
            .with_transforms(field.model_matrix(), field.world_matrix());

        if dims.iter().any(|&d| d < 2) {
            warn!("Grid {:?} has an axis shorter than 2 samples; nothing to extract", dims);
            return assembler.finalize();
        }

        debug!(
            "Extracting iso-surface at {} from {:?} grid ({})",
            iso,
            dims,
            if self.config.parallel.is_some() { "sharded" } else { "sequential" }
        );

        match &self.config.parallel {
            Some(parallel) => {
                parallel::polygonise_sharded(field, iso, parallel, &mut assembler)?;
            }
            None => {
                polygonise_slab(field, iso, 0..dims[2] - 1, &mut assembler)?;
            }
        }

        let mesh = assembler.finalize()?;
        info!(
            "Extracted {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }
}

/// Polygonise every cell whose z origin lies in `z_cells`, in z, y, x order.
///
/// Returns the number of triangles emitted into `sink`.
pub(crate) fn polygonise_slab<F, S>(
    field: &F,
    iso: f32,
    z_cells: Range<usize>,
    sink: &mut S,
) -> Result<usize>
where
    F: ScalarField + ?Sized,
    S: TriangleSink + ?Sized,
{
    let [dx, dy, _] = field.dimensions();
    let mut triangles = 0;

    for (z, y, x) in iproduct!(z_cells, 0..dy - 1, 0..dx - 1) {
        let cell = Cell::gather(field, [x, y, z]);
        for tetra in cell.tetrahedra() {
            triangles += polygonise_tetrahedron(&tetra, iso, sink)?;
        }
    }

    Ok(triangles)
}

/// Emit the triangles of one tetrahedron and return how many there were
pub fn polygonise_tetrahedron<S: TriangleSink + ?Sized>(
    tetra: &Tetrahedron,
    iso: f32,
    sink: &mut S,
) -> Result<usize> {
    let entry = &CASE_TABLE[tetra.case_code(iso)];

    for &[e0, e1, e2] in entry.triangles {
        let v0 = edge_vertex(tetra, e0, iso, sink)?;
        let v1 = edge_vertex(tetra, e1, iso, sink)?;
        let v2 = edge_vertex(tetra, e2, iso, sink)?;

        if entry.inverted {
            sink.add_triangle(v0, v2, v1)?;
        } else {
            sink.add_triangle(v0, v1, v2)?;
        }
    }

    Ok(entry.triangles.len())
}

fn edge_vertex<S: TriangleSink + ?Sized>(
    tetra: &Tetrahedron,
    (a, b): TetraEdge,
    iso: f32,
    sink: &mut S,
) -> Result<u32> {
    let (p, q) = (&tetra.points[a], &tetra.points[b]);
    sink.add_vertex(interpolate_position(p, q, iso), p.global_index, q.global_index)
}

/// Convenience function for a sequential extraction at an absolute iso value
pub fn marching_tetrahedra<F: ScalarField + Sync + ?Sized>(
    field: &F,
    iso: f32,
) -> Result<SurfaceMesh> {
    MarchingTetrahedra::new(ExtractionConfig::absolute(iso)).extract(field)
}
