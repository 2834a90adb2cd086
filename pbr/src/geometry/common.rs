//! Common geometric functions

use super::*;
use crate::pbrt::*;

/// Create a new coordinate system from a single unit vector and return
/// the two remaining vectors.
///
/// * `v1` - The first unit vector to form part of the coordinate system.
pub fn coordinate_system(v1: &Vector3f) -> (Vector3f, Vector3f) {
    let v2 = if abs(v1.x) > abs(v1.y) {
        Vector3f::new(-v1.z, 0.0, v1.x) / (v1.x * v1.x + v1.z * v1.z).sqrt()
    } else {
        Vector3f::new(0.0, v1.z, -v1.y) / (v1.y * v1.y + v1.z * v1.z).sqrt()
    };
    let v3 = v1.cross(&v2);
    (v2, v3)
}

/// Returns a direction from spherical coordinates.
///
/// * `sin_theta` - Sine of polar angle.
/// * `cos_theta` - Cosine of polar angle.
/// * `phi`       - Azimuth angle.
#[inline(always)]
pub fn spherical_direction(sin_theta: Float, cos_theta: Float, phi: Float) -> Vector3f {
    Vector3f::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    #[test]
    fn coordinate_system_is_orthonormal() {
        let v1 = Vector3f::new(1.0, 2.0, 3.0).normalize();
        let (v2, v3) = coordinate_system(&v1);
        assert!(approx_eq!(Float, v1.dot(&v2), 0.0, epsilon = 1e-6));
        assert!(approx_eq!(Float, v1.dot(&v3), 0.0, epsilon = 1e-6));
        assert!(approx_eq!(Float, v2.dot(&v3), 0.0, epsilon = 1e-6));
        assert!(approx_eq!(Float, v3.length(), 1.0, epsilon = 1e-5));
    }
}
