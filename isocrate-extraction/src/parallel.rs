//! Sharded parallel traversal
//!
//! The grid is cut into slabs of whole cell layers along z. Each slab is
//! polygonised on the rayon pool into its own [`ShardAssembler`], which
//! remembers the edge key of every vertex it creates. Shards are then merged
//! in slab order into a single [`MeshAssembler`], where edges shared across
//! slab boundaries resolve to one vertex. Merging in order reproduces the
//! sequential traversal exactly: same vertex order, index buffer and normals.

use crate::assembler::{check_distinct, EdgeKey, MeshAssembler, TriangleSink};
use crate::config::ParallelConfig;
use crate::marching_tetrahedra::polygonise_slab;
use isocrate_core::{Error, Point3f, Result, ScalarField};
use log::debug;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::collections::HashMap;
use std::ops::Range;

/// Geometry of one slab, indexed locally
#[derive(Debug, Clone, Default)]
pub struct ShardAssembler {
    edge_to_vertex: HashMap<EdgeKey, u32>,
    vertices: Vec<(EdgeKey, Point3f)>,
    triangles: Vec<[u32; 3]>,
}

impl ShardAssembler {
    pub fn new(edge_capacity: usize) -> Self {
        Self {
            edge_to_vertex: HashMap::with_capacity(edge_capacity),
            vertices: Vec::with_capacity(edge_capacity),
            triangles: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Replay this shard into `assembler`, remapping local vertex indices.
    pub fn merge_into(self, assembler: &mut MeshAssembler) -> Result<()> {
        let remap = self
            .vertices
            .iter()
            .map(|&(key, position)| assembler.vertex_for_edge(key, position))
            .collect::<Result<Vec<u32>>>()?;

        for [a, b, c] in self.triangles {
            assembler.add_triangle(remap[a as usize], remap[b as usize], remap[c as usize])?;
        }

        Ok(())
    }
}

impl TriangleSink for ShardAssembler {
    fn add_vertex(&mut self, position: Point3f, a: usize, b: usize) -> Result<u32> {
        let key = EdgeKey::new(a, b);
        if let Some(&index) = self.edge_to_vertex.get(&key) {
            return Ok(index);
        }

        let index = u32::try_from(self.vertices.len()).map_err(|_| {
            Error::Algorithm("shard vertex count exceeds the 32-bit index range".to_string())
        })?;
        self.vertices.push((key, position));
        self.edge_to_vertex.insert(key, index);
        Ok(index)
    }

    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) -> Result<()> {
        check_distinct(i0, i1, i2)?;
        self.triangles.push([i0, i1, i2]);
        Ok(())
    }
}

/// Split `cell_layers` z layers into consecutive slabs of at most `depth` layers
pub fn slab_ranges(cell_layers: usize, depth: usize) -> Vec<Range<usize>> {
    let depth = depth.max(1);
    (0..cell_layers)
        .step_by(depth)
        .map(|start| start..(start + depth).min(cell_layers))
        .collect()
}

/// Polygonise `field` slab by slab in parallel and merge into `assembler`.
///
/// Returns the total number of triangles.
pub(crate) fn polygonise_sharded<F>(
    field: &F,
    iso: f32,
    config: &ParallelConfig,
    assembler: &mut MeshAssembler,
) -> Result<usize>
where
    F: ScalarField + Sync + ?Sized,
{
    let [dx, dy, dz] = field.dimensions();
    let slabs = slab_ranges(dz - 1, config.slab_depth);
    let shard_capacity = 2 * dx * dy;

    let build = || {
        slabs
            .par_iter()
            .map(|slab| {
                let mut shard = ShardAssembler::new(shard_capacity);
                let triangles = polygonise_slab(field, iso, slab.clone(), &mut shard)?;
                debug!(
                    "Shard z {:?}: {} vertices, {} triangles",
                    slab,
                    shard.vertex_count(),
                    triangles
                );
                Ok(shard)
            })
            .collect::<Result<Vec<ShardAssembler>>>()
    };

    let shards = match config.num_threads {
        Some(num_threads) => {
            let pool = ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .thread_name(|index| format!("isocrate-shard-{}", index))
                .build()
                .map_err(|e| Error::Algorithm(format!("Failed to create thread pool: {}", e)))?;
            pool.install(build)?
        }
        None => build()?,
    };

    let mut triangles = 0;
    for shard in shards {
        triangles += shard.triangle_count();
        shard.merge_into(assembler)?;
    }

    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;
    use crate::fields::sphere_volume;
    use crate::marching_tetrahedra::MarchingTetrahedra;

    #[test]
    fn test_slab_ranges() {
        assert_eq!(slab_ranges(10, 4), vec![0..4, 4..8, 8..10]);
        assert_eq!(slab_ranges(3, 0), vec![0..1, 1..2, 2..3]);
        assert!(slab_ranges(0, 4).is_empty());
    }

    #[test]
    fn test_shard_dedups_locally() {
        let mut shard = ShardAssembler::new(4);
        let a = shard.add_vertex(Point3f::new(0.5, 0.0, 0.0), 0, 1).unwrap();
        let b = shard.add_vertex(Point3f::new(0.5, 0.0, 0.0), 1, 0).unwrap();
        let c = shard.add_vertex(Point3f::new(0.0, 0.5, 0.0), 0, 2).unwrap();
        let d = shard.add_vertex(Point3f::new(0.0, 0.0, 0.5), 0, 4).unwrap();

        assert_eq!(a, b);
        assert!(shard.add_triangle(a, b, c).is_err());
        shard.add_triangle(a, c, d).unwrap();
        assert_eq!(shard.vertex_count(), 3);
        assert_eq!(shard.triangle_count(), 1);
    }

    #[test]
    fn test_merge_resolves_shared_edges() {
        let mut first = ShardAssembler::new(4);
        let mut second = ShardAssembler::new(4);
        for shard in [&mut first, &mut second] {
            let a = shard.add_vertex(Point3f::new(0.5, 0.0, 0.0), 0, 1).unwrap();
            let b = shard.add_vertex(Point3f::new(0.0, 0.5, 0.0), 0, 2).unwrap();
            let c = shard.add_vertex(Point3f::new(0.0, 0.0, 0.5), 0, 4).unwrap();
            shard.add_triangle(a, b, c).unwrap();
        }
        let extra = second.add_vertex(Point3f::new(1.0, 0.5, 0.0), 1, 3).unwrap();
        second.add_triangle(extra, 1, 0).unwrap();

        let mut assembler = MeshAssembler::new(8);
        first.merge_into(&mut assembler).unwrap();
        second.merge_into(&mut assembler).unwrap();

        let mesh = assembler.finalize().unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 1, 2, 3, 1, 0]);
    }

    #[test]
    fn test_sharded_matches_sequential() {
        let volume = sphere_volume([9, 9, 13], [0.5, 0.5, 0.5].into(), 0.35);

        let sequential = MarchingTetrahedra::new(ExtractionConfig::absolute(0.0))
            .extract(&volume)
            .unwrap();
        let sharded = MarchingTetrahedra::new(
            ExtractionConfig::absolute(0.0)
                .with_parallel(ParallelConfig::default().with_threads(2).with_slab_depth(3)),
        )
        .extract(&volume)
        .unwrap();

        assert!(!sequential.is_empty());
        assert_eq!(sequential, sharded);
    }
}
