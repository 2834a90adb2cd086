//! Spheres

use pbr::geometry::*;
use pbr::interaction::*;
use pbr::pbrt::*;
use pbr::sampling::*;

/// A full sphere.
#[derive(Clone, Debug)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3f,

    /// Radius of the sphere.
    pub radius: Float,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// * `center` - Center of the sphere.
    /// * `radius` - Radius of the sphere.
    pub fn new(center: Point3f, radius: Float) -> Self {
        debug!("Sphere at {:?} with radius {}", center, radius);
        Self { center, radius }
    }

    /// Returns the closest parametric distance within the ray's range where
    /// it meets the sphere.
    ///
    /// * `r` - The ray.
    fn hit_t(&self, r: &Ray) -> Option<Float> {
        // Compute quadratic sphere coefficients.
        let oc = r.o - self.center;
        let a = r.d.length_squared();
        let b = 2.0 * oc.dot(&r.d);
        let c = oc.length_squared() - self.radius * self.radius;

        // Solve quadratic equation for `t` values.
        let discrim = b * b - 4.0 * a * c;
        if discrim < 0.0 || a == 0.0 {
            return None;
        }
        let root = discrim.sqrt();
        let q = if b < 0.0 {
            -0.5 * (b - root)
        } else {
            -0.5 * (b + root)
        };
        let (mut t0, mut t1) = (q / a, c / q);
        if q == 0.0 {
            t0 = 0.0;
            t1 = 0.0;
        }
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        // Check quadric shape `t0` and `t1` for nearest intersection.
        if r.contains(t0) {
            Some(t0)
        } else if r.contains(t1) {
            Some(t1)
        } else {
            None
        }
    }
}

impl Shape for Sphere {
    /// Returns the shape type. Usually these are behind ArcShape and harder to
    /// debug. So this will be helpful.
    fn get_type(&self) -> &'static str {
        "sphere"
    }

    /// Returns geometric details if a ray intersects the shape intersection.
    /// If there is no intersection, `None` is returned.
    ///
    /// * `r` - The ray.
    fn intersect(&self, r: &Ray) -> Option<Intersection> {
        let t_shape_hit = self.hit_t(r)?;

        // Refine the hit point onto the surface.
        let p_local = r.at(t_shape_hit) - self.center;
        let p_local = p_local * (self.radius / p_local.length());
        let p_hit = self.center + p_local;

        // Find parametric representation of sphere hit.
        let mut phi = p_local.y.atan2(p_local.x);
        if phi < 0.0 {
            phi += TWO_PI;
        }
        let u = phi * INV_TWO_PI;
        let v = safe_acos(p_local.z / self.radius) * INV_PI;
        let dpdu = Vector3f::new(-TWO_PI * p_local.y, TWO_PI * p_local.x, 0.0);

        let n = Normal3f::from(p_local / self.radius);
        let si = SurfaceInteraction::new(p_hit, Point2f::new(u, v), -r.d, n, dpdu);
        Some(Intersection::new(t_shape_hit, si))
    }

    /// Returns `true` if a ray-shape intersection succeeds; otherwise `false`.
    ///
    /// * `r` - The ray.
    fn intersect_p(&self, r: &Ray) -> bool {
        self.hit_t(r).is_some()
    }

    /// Returns the surface area of the shape.
    fn area(&self) -> Float {
        FOUR_PI * self.radius * self.radius
    }

    /// Sample a point on the surface and return the PDF with respect to area on
    /// the surface.
    ///
    /// * `u` - Sample value to use.
    fn sample_area(&self, u: &Point2f) -> (Hit, Float) {
        let dir = uniform_sample_sphere(u);
        let p = self.center + dir * self.radius;
        let it = Hit {
            n: Normal3f::from(dir),
            ..Hit::new_minimal(p)
        };
        (it, 1.0 / self.area())
    }
}
