//! Dense in-memory scalar volume

use isocrate_core::{linear_index, Error, GridCoord, Result, ScalarField, Transform3D};
use ndarray::Array3;

/// Scalar samples on a regular grid, stored `[z][y][x]` so the memory order
/// matches the row-major global index used for edge identity.
#[derive(Debug, Clone)]
pub struct Volume {
    data: Array3<f32>,
    model_matrix: Transform3D,
    world_matrix: Transform3D,
}

impl Volume {
    /// Create a zero-filled volume with `dims = [x, y, z]` samples
    pub fn new(dims: [usize; 3]) -> Self {
        Self::from_array(Array3::zeros((dims[2], dims[1], dims[0])))
    }

    /// Create a volume by evaluating `f` at every lattice coordinate
    pub fn from_fn<F>(dims: [usize; 3], f: F) -> Self
    where
        F: Fn(GridCoord) -> f32,
    {
        let data = Array3::from_shape_fn((dims[2], dims[1], dims[0]), |(z, y, x)| f([x, y, z]));
        Self::from_array(data)
    }

    /// Create a volume from samples in row-major order, `x` varying fastest
    pub fn from_values(dims: [usize; 3], values: Vec<f32>) -> Result<Self> {
        let expected = dims[0] * dims[1] * dims[2];
        if values.len() != expected {
            return Err(Error::InvalidData(format!(
                "Volume of dimensions {:?} needs {} samples, got {}",
                dims,
                expected,
                values.len()
            )));
        }

        let data = Array3::from_shape_vec((dims[2], dims[1], dims[0]), values)
            .map_err(|e| Error::InvalidData(format!("Invalid volume shape: {}", e)))?;
        Ok(Self::from_array(data))
    }

    fn from_array(data: Array3<f32>) -> Self {
        Self {
            data,
            model_matrix: Transform3D::identity(),
            world_matrix: Transform3D::identity(),
        }
    }

    pub fn with_model_matrix(mut self, model_matrix: Transform3D) -> Self {
        self.model_matrix = model_matrix;
        self
    }

    pub fn with_world_matrix(mut self, world_matrix: Transform3D) -> Self {
        self.world_matrix = world_matrix;
        self
    }

    /// Get scalar value at grid coordinates (with bounds checking)
    pub fn get(&self, coord: GridCoord) -> Option<f32> {
        self.data.get((coord[2], coord[1], coord[0])).copied()
    }

    /// Set scalar value at grid coordinates
    pub fn set(&mut self, coord: GridCoord, value: f32) -> Result<()> {
        let dims = self.dimensions();
        match self.data.get_mut((coord[2], coord[1], coord[0])) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::InvalidData(format!(
                "Grid coordinates {:?} out of bounds for dimensions {:?}",
                coord, dims
            ))),
        }
    }

    /// Row-major index of `coord` in this volume
    pub fn linear_index(&self, coord: GridCoord) -> usize {
        linear_index(coord, self.dimensions())
    }

    /// Samples in row-major order
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.data.iter().copied()
    }
}

impl ScalarField for Volume {
    fn dimensions(&self) -> [usize; 3] {
        let (z, y, x) = self.data.dim();
        [x, y, z]
    }

    fn sample(&self, coord: GridCoord) -> f32 {
        self.data[(coord[2], coord[1], coord[0])]
    }

    fn model_matrix(&self) -> Transform3D {
        self.model_matrix
    }

    fn world_matrix(&self) -> Transform3D {
        self.world_matrix
    }

    fn value_range(&self) -> Option<(f32, f32)> {
        self.values()
            .filter(|v| v.is_finite())
            .fold(None, |range, v| match range {
                Some((min, max)) => Some((v.min(min), v.max(max))),
                None => Some((v, v)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isocrate_core::Vector3;

    #[test]
    fn test_volume_creation() {
        let volume = Volume::new([4, 3, 2]);
        assert_eq!(volume.dimensions(), [4, 3, 2]);
        assert_eq!(volume.values().count(), 24);
        assert_eq!(volume.value_range(), Some((0.0, 0.0)));
    }

    #[test]
    fn test_memory_order_matches_linear_index() {
        let dims = [3, 4, 5];
        let volume = Volume::from_fn(dims, |coord| linear_index(coord, dims) as f32);

        for (i, value) in volume.values().enumerate() {
            assert_eq!(value, i as f32);
        }
        assert_eq!(volume.linear_index([2, 3, 4]), 59);
        assert_eq!(volume.sample([2, 3, 4]), 59.0);
    }

    #[test]
    fn test_from_values_checks_length() {
        assert!(Volume::from_values([2, 2, 2], vec![0.0; 7]).is_err());

        let volume = Volume::from_values([2, 1, 1], vec![1.0, 2.0]).unwrap();
        assert_eq!(volume.get([1, 0, 0]), Some(2.0));
    }

    #[test]
    fn test_value_operations() {
        let mut volume = Volume::new([3, 3, 3]);

        assert!(volume.set([1, 1, 1], 5.0).is_ok());
        assert_eq!(volume.get([1, 1, 1]), Some(5.0));
        assert_eq!(volume.value_range(), Some((0.0, 5.0)));

        assert!(volume.set([3, 0, 0], 1.0).is_err());
        assert_eq!(volume.get([0, 3, 0]), None);
    }

    #[test]
    fn test_transforms_are_carried() {
        let model = Transform3D::scaling(Vector3::new(2.0, 2.0, 2.0));
        let volume = Volume::new([2, 2, 2]).with_model_matrix(model);
        assert_eq!(volume.model_matrix(), model);
        assert!(volume.world_matrix().is_identity(1e-6));
    }
}
