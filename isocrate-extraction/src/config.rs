//! Configuration for marching tetrahedra extraction

use isocrate_core::DEFAULT_VERTEX_COLOR;
use serde::{Deserialize, Serialize};

/// How the iso value is specified
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum IsoLevel {
    /// Used as-is
    Absolute(f32),
    /// Fraction of the field's value range: `min + t * (max - min)`
    Normalized(f32),
}

impl IsoLevel {
    /// Concrete iso value for a field with the given `(min, max)` range.
    ///
    /// A normalized level on a field without finite samples falls back to the
    /// fraction itself.
    pub fn resolve(self, value_range: Option<(f32, f32)>) -> f32 {
        match (self, value_range) {
            (IsoLevel::Absolute(iso), _) => iso,
            (IsoLevel::Normalized(t), Some((min, max))) => min + t * (max - min),
            (IsoLevel::Normalized(t), None) => t,
        }
    }
}

impl Default for IsoLevel {
    fn default() -> Self {
        IsoLevel::Absolute(0.5)
    }
}

/// Sharded traversal settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// Number of threads to use (None = global rayon pool)
    pub num_threads: Option<usize>,
    /// Cell layers along z handled by one shard
    pub slab_depth: usize,
}

impl ParallelConfig {
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    pub fn with_slab_depth(mut self, slab_depth: usize) -> Self {
        self.slab_depth = slab_depth.max(1);
        self
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_threads: None,
            slab_depth: 4,
        }
    }
}

/// Configuration for the marching tetrahedra extraction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Level set to extract
    pub iso_level: IsoLevel,
    /// Constant color written to every vertex
    pub vertex_color: [f32; 4],
    /// Edge cache size hint (None = estimated from the grid dimensions)
    pub edge_capacity: Option<usize>,
    /// Run the sharded traversal instead of the sequential one
    pub parallel: Option<ParallelConfig>,
}

impl ExtractionConfig {
    /// Extract the surface where the field equals `iso`
    pub fn absolute(iso: f32) -> Self {
        Self {
            iso_level: IsoLevel::Absolute(iso),
            ..Default::default()
        }
    }

    /// Extract at fraction `t` of the field's value range
    pub fn normalized(t: f32) -> Self {
        Self {
            iso_level: IsoLevel::Normalized(t),
            ..Default::default()
        }
    }

    pub fn with_vertex_color(mut self, color: [f32; 4]) -> Self {
        self.vertex_color = color;
        self
    }

    pub fn with_edge_capacity(mut self, capacity: usize) -> Self {
        self.edge_capacity = Some(capacity);
        self
    }

    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Edge cache size for a grid of `dims`: the explicit hint, or two
    /// vertices per sample of the grid's three axis-aligned cross-sections.
    pub fn edge_capacity_for(&self, dims: [usize; 3]) -> usize {
        self.edge_capacity
            .unwrap_or_else(|| 2 * (dims[0] * dims[1] + dims[1] * dims[2] + dims[0] * dims[2]))
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            iso_level: IsoLevel::default(),
            vertex_color: DEFAULT_VERTEX_COLOR,
            edge_capacity: None,
            parallel: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_config_default() {
        let config = ExtractionConfig::default();
        assert_eq!(config.iso_level, IsoLevel::Absolute(0.5));
        assert_eq!(config.vertex_color, [0.7, 0.7, 0.7, 1.0]);
        assert!(config.edge_capacity.is_none());
        assert!(config.parallel.is_none());
    }

    #[test]
    fn test_iso_level_resolution() {
        assert_eq!(IsoLevel::Absolute(3.0).resolve(Some((0.0, 1.0))), 3.0);
        assert_eq!(IsoLevel::Normalized(0.25).resolve(Some((2.0, 6.0))), 3.0);
        assert_eq!(IsoLevel::Normalized(0.25).resolve(None), 0.25);
    }

    #[test]
    fn test_edge_capacity() {
        let config = ExtractionConfig::absolute(0.0);
        assert_eq!(config.edge_capacity_for([4, 4, 4]), 96);
        assert_eq!(config.with_edge_capacity(10).edge_capacity_for([4, 4, 4]), 10);
    }

    #[test]
    fn test_parallel_config_builders() {
        let parallel = ParallelConfig::default().with_threads(3).with_slab_depth(0);
        assert_eq!(parallel.num_threads, Some(3));
        assert_eq!(parallel.slab_depth, 1);

        let config = ExtractionConfig::normalized(0.5).with_parallel(parallel);
        assert_eq!(config.parallel, Some(parallel));
    }
}
