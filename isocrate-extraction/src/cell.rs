//! Cell decomposition: gathering the eight corner samples of one voxel

use crate::corner::CORNER_OFFSETS;
use isocrate_core::{linear_index, GridCoord, Point3f, ScalarField};

/// One grid sample as seen by the extraction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    /// Lattice coordinate scaled into the unit cube
    pub position: Point3f,
    pub value: f32,
    /// Row-major index of the sample in the whole grid; identifies edges
    pub global_index: usize,
}

/// The eight corners of one cubic cell, indexed by local corner index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub points: [DataPoint; 8],
}

impl Cell {
    /// Gather the corners of the cell whose lowest corner is `origin`.
    ///
    /// `origin` must lie in `[0, dims - 2]` on every axis, so each axis has at
    /// least two samples and the normalization below never divides by zero.
    pub fn gather<F: ScalarField + ?Sized>(field: &F, origin: GridCoord) -> Self {
        let dims = field.dimensions();
        let extent = [
            (dims[0] - 1) as f32,
            (dims[1] - 1) as f32,
            (dims[2] - 1) as f32,
        ];

        let points = CORNER_OFFSETS.map(|offset| {
            let coord = [
                origin[0] + offset.x,
                origin[1] + offset.y,
                origin[2] + offset.z,
            ];

            DataPoint {
                position: Point3f::new(
                    coord[0] as f32 / extent[0],
                    coord[1] as f32 / extent[1],
                    coord[2] as f32 / extent[2],
                ),
                value: field.sample(coord),
                global_index: linear_index(coord, dims),
            }
        });

        Self { points }
    }
}
