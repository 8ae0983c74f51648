//! # isocrate Extraction
//!
//! Iso-surface extraction from scalar volumes.
//!
//! The grid is decomposed into cubes and every cube into six tetrahedra. Each
//! tetrahedron is classified against the iso value, looked up in a sixteen
//! entry case table and turned into at most two triangles. Triangles from all
//! tetrahedra are welded into one indexed mesh with smooth per-vertex normals.
//!
//! ```no_run
//! use isocrate_extraction::{fields::HydrogenOrbital, ExtractionConfig, MarchingTetrahedra};
//!
//! let orbital = HydrogenOrbital::new(64)?.generate();
//! let mesh = MarchingTetrahedra::new(ExtractionConfig::normalized(0.05)).extract(&orbital)?;
//! println!("{} triangles", mesh.triangle_count());
//! # Ok::<(), isocrate_core::Error>(())
//! ```

pub mod assembler;
pub mod case_table;
pub mod cell;
pub mod config;
pub mod corner;
pub mod fields;
pub mod interpolation;
pub mod marching_tetrahedra;
pub mod parallel;
pub mod tetrahedron;
pub mod volume;

// Re-export commonly used items
pub use assembler::{EdgeKey, MeshAssembler, TriangleSink};
pub use cell::{Cell, DataPoint};
pub use config::{ExtractionConfig, IsoLevel, ParallelConfig};
pub use marching_tetrahedra::{marching_tetrahedra, polygonise_tetrahedron, MarchingTetrahedra};
pub use parallel::ShardAssembler;
pub use tetrahedron::Tetrahedron;
pub use volume::Volume;
