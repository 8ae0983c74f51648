//! Point and vector aliases

use nalgebra::{Point3, Vector3};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// Integer lattice coordinate `[x, y, z]` into a scalar grid
pub type GridCoord = [usize; 3];

/// Linear row-major index of `coord` in a grid of `dims`, `x` varying fastest.
#[inline]
pub fn linear_index(coord: GridCoord, dims: [usize; 3]) -> usize {
    coord[0] + dims[0] * (coord[1] + dims[1] * coord[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_index_is_row_major() {
        let dims = [4, 3, 2];
        assert_eq!(linear_index([0, 0, 0], dims), 0);
        assert_eq!(linear_index([1, 0, 0], dims), 1);
        assert_eq!(linear_index([0, 1, 0], dims), 4);
        assert_eq!(linear_index([0, 0, 1], dims), 12);
        assert_eq!(linear_index([3, 2, 1], dims), 23);
    }
}
