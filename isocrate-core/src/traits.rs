//! Core traits for isocrate

use crate::{mesh::*, point::*, transform::Transform3D};

/// A regular 3D lattice of scalar samples
///
/// Extraction reads the field only through this trait. `sample` must be
/// defined for every coordinate in `[0, dims - 1]` on each axis; samples are
/// not validated, so non-finite values propagate into the output geometry.
pub trait ScalarField {
    /// Number of samples along x, y and z
    fn dimensions(&self) -> [usize; 3];

    /// Sample at an integer lattice coordinate
    fn sample(&self, coord: GridCoord) -> f32;

    /// Model transform copied onto the extracted mesh
    fn model_matrix(&self) -> Transform3D {
        Transform3D::identity()
    }

    /// World transform copied onto the extracted mesh
    fn world_matrix(&self) -> Transform3D {
        Transform3D::identity()
    }

    /// Smallest and largest finite sample, `None` if there are none
    fn value_range(&self) -> Option<(f32, f32)> {
        let [dx, dy, dz] = self.dimensions();
        let mut range: Option<(f32, f32)> = None;

        for z in 0..dz {
            for y in 0..dy {
                for x in 0..dx {
                    let value = self.sample([x, y, z]);
                    if !value.is_finite() {
                        continue;
                    }
                    range = Some(match range {
                        Some((min, max)) => (min.min(value), max.max(value)),
                        None => (value, value),
                    });
                }
            }
        }

        range
    }
}

impl<T: ScalarField + ?Sized> ScalarField for &T {
    fn dimensions(&self) -> [usize; 3] {
        (**self).dimensions()
    }

    fn sample(&self, coord: GridCoord) -> f32 {
        (**self).sample(coord)
    }

    fn model_matrix(&self) -> Transform3D {
        (**self).model_matrix()
    }

    fn world_matrix(&self) -> Transform3D {
        (**self).world_matrix()
    }

    fn value_range(&self) -> Option<(f32, f32)> {
        (**self).value_range()
    }
}

/// Trait for drawable/renderable objects
pub trait Drawable {
    /// Get the bounding box of the object
    fn bounding_box(&self) -> (Point3f, Point3f);

    /// Get the center point of the object
    fn center(&self) -> Point3f {
        let (min, max) = self.bounding_box();
        nalgebra::center(&min, &max)
    }
}

impl Drawable for SurfaceMesh {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        let Some(first) = self.vertices.first() else {
            return (Point3f::origin(), Point3f::origin());
        };

        let mut min = first.position;
        let mut max = first.position;

        for vertex in &self.vertices {
            let p = vertex.position;
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);

            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ramp {
        dims: [usize; 3],
    }

    impl ScalarField for Ramp {
        fn dimensions(&self) -> [usize; 3] {
            self.dims
        }

        fn sample(&self, coord: GridCoord) -> f32 {
            if coord == [1, 1, 1] {
                f32::NAN
            } else {
                (coord[0] + coord[1] + coord[2]) as f32
            }
        }
    }

    #[test]
    fn test_value_range_skips_non_finite() {
        let field = Ramp { dims: [3, 2, 2] };
        assert_eq!(field.value_range(), Some((0.0, 4.0)));
        assert!(field.model_matrix().is_identity(1e-6));
    }

    #[test]
    fn test_value_range_of_empty_field() {
        let field = Ramp { dims: [0, 4, 4] };
        assert_eq!(field.value_range(), None);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = SurfaceMesh::new();
        for p in [
            Point3f::new(0.0, 2.0, -1.0),
            Point3f::new(1.0, -2.0, 0.5),
            Point3f::new(0.5, 0.0, 3.0),
        ] {
            mesh.vertices.push(MeshVertex::new(p, DEFAULT_VERTEX_COLOR));
        }

        let (min, max) = mesh.bounding_box();
        assert_eq!(min, Point3f::new(0.0, -2.0, -1.0));
        assert_eq!(max, Point3f::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.center(), Point3f::new(0.5, 0.0, 1.0));
    }
}
