//! Pinhole Camera

use pbr::geometry::*;
use pbr::pbrt::*;

/// Generates primary rays through a pinhole looking at a target.
#[derive(Copy, Clone, Debug)]
pub struct PinholeCamera {
    /// Camera position.
    origin: Point3f,

    /// Direction towards the right edge of the image.
    right: Vector3f,

    /// Direction towards the top edge of the image.
    up: Vector3f,

    /// Viewing direction.
    forward: Vector3f,

    /// Half extent of the image plane at unit distance along `up`.
    tan_half_fov: Float,

    /// Width divided by height.
    aspect: Float,

    /// Image resolution.
    resolution: Point2f,
}

impl PinholeCamera {
    /// Create a camera.
    ///
    /// * `from`       - Camera position.
    /// * `to`         - Point the camera looks at.
    /// * `up`         - Approximate up direction.
    /// * `fov`        - Vertical field of view in degrees.
    /// * `resolution` - Image width and height in pixels.
    pub fn look_at(
        from: Point3f,
        to: Point3f,
        up: Vector3f,
        fov: Float,
        resolution: (usize, usize),
    ) -> Self {
        let forward = (to - from).normalize();
        let right = forward.cross(&up).normalize();
        let up = right.cross(&forward);
        let (width, height) = (resolution.0 as Float, resolution.1 as Float);

        Self {
            origin: from,
            right,
            up,
            forward,
            tan_half_fov: (radians(fov) / 2.0).tan(),
            aspect: width / height,
            resolution: Point2f::new(width, height),
        }
    }

    /// Returns the ray through a position on the film given in raster
    /// coordinates.
    ///
    /// * `p_film` - Position on the film.
    pub fn generate_ray(&self, p_film: &Point2f) -> Ray {
        let x = (2.0 * p_film.x / self.resolution.x - 1.0) * self.aspect * self.tan_half_fov;
        let y = (1.0 - 2.0 * p_film.y / self.resolution.y) * self.tan_half_fov;
        let d = self.forward + self.right * x + self.up * y;
        Ray::new(self.origin, d.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    fn camera() -> PinholeCamera {
        PinholeCamera::look_at(
            Point3f::new(0.0, 0.0, 5.0),
            Point3f::new(0.0, 0.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
            90.0,
            (200, 100),
        )
    }

    #[test]
    fn centre_of_film_looks_at_target() {
        let ray = camera().generate_ray(&Point2f::new(100.0, 50.0));
        assert!(approx_eq!(Float, ray.d.z, -1.0, epsilon = 1e-6));
        assert_eq!(ray.o, Point3f::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn top_edge_follows_field_of_view() {
        let ray = camera().generate_ray(&Point2f::new(100.0, 0.0));
        // 45 degrees above the viewing direction.
        assert!(approx_eq!(Float, ray.d.y, -ray.d.z, epsilon = 1e-5));
        assert!(ray.d.y > 0.0);
    }

    #[test]
    fn left_edge_is_left() {
        let ray = camera().generate_ray(&Point2f::new(0.0, 50.0));
        assert!(ray.d.x < 0.0);
    }
}
