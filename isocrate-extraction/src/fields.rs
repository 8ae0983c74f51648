//! Synthetic scalar fields for demos, tests and benchmarks

use crate::volume::Volume;
use isocrate_core::{Error, GridCoord, Point3f, Result, ScalarField, Vector3f};
use std::f64::consts::PI;

/// Half extent of the cube the orbital is sampled on, in Bohr radii
const ORBITAL_HALF_EXTENT: f32 = 18.0;

/// Probability density of the hydrogen 3d_z² orbital (Z = 1, a0 = 1).
///
/// Sampled on a `size³` lattice spanning `[-18, 18]` on every axis. The field
/// is procedural: `sample` evaluates the wave function directly, while
/// [`HydrogenOrbital::generate`] bakes it into a [`Volume`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydrogenOrbital {
    size: usize,
}

impl HydrogenOrbital {
    pub const MIN_SIZE: usize = 4;
    pub const MAX_SIZE: usize = 256;

    pub fn new(size: usize) -> Result<Self> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(Error::InvalidData(format!(
                "Orbital grid size must be within {}..={}, got {}",
                Self::MIN_SIZE,
                Self::MAX_SIZE,
                size
            )));
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cartesian position of a lattice coordinate
    pub fn grid_to_cartesian(&self, coord: GridCoord) -> Point3f {
        let scale = 2.0 * ORBITAL_HALF_EXTENT / (self.size - 1) as f32;
        Point3f::new(
            coord[0] as f32 * scale - ORBITAL_HALF_EXTENT,
            coord[1] as f32 * scale - ORBITAL_HALF_EXTENT,
            coord[2] as f32 * scale - ORBITAL_HALF_EXTENT,
        )
    }

    /// `(r, θ, φ)` with θ the polar angle from +z; the origin maps to zero.
    pub fn cartesian_to_spherical(p: Point3f) -> Vector3f {
        let r = p.coords.norm();
        if r < f32::EPSILON {
            return Vector3f::zeros();
        }
        Vector3f::new(r, (p.z / r).acos(), p.y.atan2(p.x))
    }

    /// `|ψ|²` at a cartesian position
    pub fn eval(p: Point3f) -> f64 {
        let spherical = Self::cartesian_to_spherical(p);
        let r = spherical.x as f64;
        let theta = spherical.y as f64;

        let normalization = 1.0 / (81.0 * (6.0 * PI).sqrt());
        let psi = normalization * r * r * (-r / 3.0).exp() * (3.0 * theta.cos().powi(2) - 1.0);
        psi * psi
    }

    /// Sample the orbital into a dense volume
    pub fn generate(&self) -> Volume {
        Volume::from_fn(self.dimensions(), |coord| self.sample(coord))
    }
}

impl ScalarField for HydrogenOrbital {
    fn dimensions(&self) -> [usize; 3] {
        [self.size; 3]
    }

    fn sample(&self, coord: GridCoord) -> f32 {
        Self::eval(self.grid_to_cartesian(coord)) as f32
    }
}

/// Signed distance to a sphere, negative inside.
///
/// `center` and `radius` are in the normalized unit cube the grid spans.
pub fn sphere_volume(dims: [usize; 3], center: Point3f, radius: f32) -> Volume {
    let extent = dims.map(|d| d.saturating_sub(1).max(1) as f32);
    Volume::from_fn(dims, |[x, y, z]| {
        let p = Point3f::new(
            x as f32 / extent[0],
            y as f32 / extent[1],
            z as f32 / extent[2],
        );
        (p - center).norm() - radius
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_size_bounds() {
        assert!(HydrogenOrbital::new(3).is_err());
        assert!(HydrogenOrbital::new(257).is_err());
        assert_eq!(HydrogenOrbital::new(4).unwrap().size(), 4);
        assert_eq!(HydrogenOrbital::new(256).unwrap().dimensions(), [256; 3]);
    }

    #[test]
    fn test_grid_spans_cube() {
        let orbital = HydrogenOrbital::new(5).unwrap();
        assert_relative_eq!(orbital.grid_to_cartesian([0, 0, 0]), Point3f::new(-18.0, -18.0, -18.0));
        assert_relative_eq!(orbital.grid_to_cartesian([2, 2, 2]), Point3f::origin());
        assert_relative_eq!(orbital.grid_to_cartesian([4, 0, 2]), Point3f::new(18.0, -18.0, 0.0));
    }

    #[test]
    fn test_spherical_coordinates() {
        assert_eq!(HydrogenOrbital::cartesian_to_spherical(Point3f::origin()), Vector3f::zeros());

        let on_z = HydrogenOrbital::cartesian_to_spherical(Point3f::new(0.0, 0.0, 2.0));
        assert_relative_eq!(on_z, Vector3f::new(2.0, 0.0, 0.0));

        let on_y = HydrogenOrbital::cartesian_to_spherical(Point3f::new(0.0, 3.0, 0.0));
        assert_relative_eq!(on_y.x, 3.0);
        assert_relative_eq!(on_y.y, std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(on_y.z, std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn test_orbital_density() {
        assert_eq!(HydrogenOrbital::eval(Point3f::origin()), 0.0);

        // Node of 3cos²θ - 1 at the magic angle
        let theta = (1.0f32 / 3.0).sqrt().acos();
        let on_node = Point3f::new(6.0 * theta.sin(), 0.0, 6.0 * theta.cos());
        assert!(HydrogenOrbital::eval(on_node) < 1e-12);

        // r = 6 on the z axis: ψ = 36·e^-2·2 / (81·√(6π))
        let expected_psi = 72.0 * (-2.0f64).exp() / (81.0 * (6.0 * PI).sqrt());
        assert_relative_eq!(
            HydrogenOrbital::eval(Point3f::new(0.0, 0.0, 6.0)),
            expected_psi * expected_psi,
            max_relative = 1e-5
        );
        assert!(HydrogenOrbital::eval(Point3f::new(0.0, 0.0, 6.0)) > HydrogenOrbital::eval(Point3f::new(6.0, 0.0, 0.0)));
    }

    #[test]
    fn test_generate_matches_procedural_samples() {
        let orbital = HydrogenOrbital::new(6).unwrap();
        let volume = orbital.generate();
        assert_eq!(volume.dimensions(), [6, 6, 6]);
        assert_eq!(volume.get([1, 4, 2]), Some(orbital.sample([1, 4, 2])));

        let (min, max) = volume.value_range().unwrap();
        assert!(min >= 0.0);
        assert!(max > min);
    }

    #[test]
    fn test_sphere_volume_sign() {
        let volume = sphere_volume([5, 5, 5], Point3f::new(0.5, 0.5, 0.5), 0.25);
        assert_relative_eq!(volume.get([2, 2, 2]).unwrap(), -0.25);
        assert_relative_eq!(volume.get([4, 2, 2]).unwrap(), 0.25);
        assert!(volume.get([0, 0, 0]).unwrap() > 0.0);
    }
}
