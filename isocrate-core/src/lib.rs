//! Core data structures and traits for isocrate
//!
//! This crate provides the types shared by the extraction pipeline and its
//! collaborators: points and vectors, the spatial transform carried from a
//! volume onto its mesh, the produced surface mesh, and the scalar field trait.

pub mod point;
pub mod mesh;
pub mod traits;
pub mod transform;
pub mod error;

pub use point::*;
pub use mesh::*;
pub use traits::*;
pub use transform::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Matrix4};
