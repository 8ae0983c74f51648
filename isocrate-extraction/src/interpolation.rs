//! Crossing point of the iso-surface along a tetrahedron edge

use crate::cell::DataPoint;
use isocrate_core::Point3f;

/// Position where the field, taken as affine along the edge, equals `iso`.
///
/// An endpoint whose value is exactly `iso` is returned as-is; this also
/// guards the division, because a crossed edge cannot have two equal values
/// unless one of them is `iso`.
#[inline]
pub fn interpolate_position(dp1: &DataPoint, dp2: &DataPoint, iso: f32) -> Point3f {
    if dp1.value == iso {
        return dp1.position;
    }
    if dp2.value == iso {
        return dp2.position;
    }

    dp1.position + (dp2.position - dp1.position) * (iso - dp1.value) / (dp2.value - dp1.value)
}
