//! Disks

use pbr::geometry::*;
use pbr::interaction::*;
use pbr::pbrt::*;
use pbr::sampling::*;

/// A one-sided disk facing along its normal.
#[derive(Clone, Debug)]
pub struct Disk {
    /// Center of disk.
    pub center: Point3f,

    /// Unit normal of disk.
    pub normal: Normal3f,

    /// Radius of disk.
    pub radius: Float,

    /// First tangent of the disk plane.
    s: Vector3f,

    /// Second tangent of the disk plane.
    t: Vector3f,
}

impl Disk {
    /// Create a new disk.
    ///
    /// * `center` - Center of disk.
    /// * `normal` - Normal of disk. It is normalized.
    /// * `radius` - Radius of disk.
    pub fn new(center: Point3f, normal: Normal3f, radius: Float) -> Self {
        let normal = normal.normalize();
        let (s, t) = coordinate_system(&Vector3f::from(normal));
        debug!(
            "Disk at {:?} facing {:?} with radius {}",
            center, normal, radius
        );
        Self {
            center,
            normal,
            radius,
            s,
            t,
        }
    }

    /// Returns the parametric distance and the hit point in disk plane
    /// coordinates.
    ///
    /// * `r` - The ray.
    fn hit_t(&self, r: &Ray) -> Option<(Float, Float, Float)> {
        // Reject disk intersections for rays parallel to the disk's plane.
        let denom = self.normal.dot(&r.d);
        if denom == 0.0 {
            return None;
        }
        let t_shape_hit = self.normal.dot(&(self.center - r.o)) / denom;
        if !r.contains(t_shape_hit) {
            return None;
        }

        // See if hit point is inside disk radius.
        let offset = r.at(t_shape_hit) - self.center;
        let x = offset.dot(&self.s);
        let y = offset.dot(&self.t);
        if x * x + y * y > self.radius * self.radius {
            return None;
        }

        Some((t_shape_hit, x, y))
    }
}

impl Shape for Disk {
    /// Returns the shape type. Usually these are behind ArcShape and harder to
    /// debug. So this will be helpful.
    fn get_type(&self) -> &'static str {
        "disk"
    }

    /// Returns geometric details if a ray intersects the shape intersection.
    /// If there is no intersection, `None` is returned.
    ///
    /// * `r` - The ray.
    fn intersect(&self, r: &Ray) -> Option<Intersection> {
        let (t_shape_hit, x, y) = self.hit_t(r)?;

        // Find parametric representation of disk hit.
        let mut phi = y.atan2(x);
        if phi < 0.0 {
            phi += TWO_PI;
        }
        let r_hit = (x * x + y * y).sqrt();
        let u = phi * INV_TWO_PI;
        let v = (self.radius - r_hit) / self.radius;
        let dpdu = self.s * (-TWO_PI * y) + self.t * (TWO_PI * x);

        let p_hit = self.center + self.s * x + self.t * y;
        let si = SurfaceInteraction::new(p_hit, Point2f::new(u, v), -r.d, self.normal, dpdu);
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
        PI * self.radius * self.radius
    }

    /// Sample a point on the surface and return the PDF with respect to area on
    /// the surface.
    ///
    /// * `u` - Sample value to use.
    fn sample_area(&self, u: &Point2f) -> (Hit, Float) {
        let pd = concentric_sample_disk(u);
        let p = self.center + self.s * (pd.x * self.radius) + self.t * (pd.y * self.radius);
        let it = Hit {
            n: self.normal,
            ..Hit::new_minimal(p)
        };
        (it, 1.0 / self.area())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    fn ceiling_disk() -> Disk {
        Disk::new(
            Point3f::new(0.0, 0.0, 2.0),
            Normal3f::new(0.0, 0.0, -1.0),
            1.0,
        )
    }

    #[test]
    fn hits_inside_radius_only() {
        let d = ceiling_disk();
        let up = Vector3f::new(0.0, 0.0, 1.0);
        let it = d.intersect(&Ray::new(Point3f::new(0.5, 0.0, 0.0), up)).unwrap();
        assert!(approx_eq!(Float, it.t, 2.0, epsilon = 1e-5));
        assert_eq!(it.isect.hit.n, d.normal);
        assert!(!d.intersect_p(&Ray::new(Point3f::new(1.5, 0.0, 0.0), up)));
    }

    #[test]
    fn parallel_rays_miss() {
        let d = ceiling_disk();
        let ray = Ray::new(Point3f::new(0.0, 0.0, 2.0), Vector3f::new(1.0, 0.0, 0.0));
        assert!(d.intersect(&ray).is_none());
    }

    #[test]
    fn area_of_disk() {
        let d = Disk::new(
            Point3f::new(0.0, 0.0, 0.0),
            Normal3f::new(0.0, 1.0, 0.0),
            1.0 / PI.sqrt(),
        );
        assert!(approx_eq!(Float, d.area(), 1.0, epsilon = 1e-5));
    }

    #[test]
    fn solid_angle_pdf_directly_below() {
        let d = ceiling_disk();
        let hit = Hit::new(
            Point3f::new(0.0, 0.0, 0.0),
            Vector3f::new(0.0, 0.0, 1.0),
            Normal3f::new(0.0, 0.0, 1.0),
        );
        let pdf = d.pdf_solid_angle(&hit, &Vector3f::new(0.0, 0.0, 1.0));
        assert!(approx_eq!(Float, pdf, 4.0 / PI, epsilon = 1e-3));
    }

    #[test]
    fn emitted_rays_leave_the_front_side() {
        let d = ceiling_disk();
        let (ray, n, pdf) = d.sample_ray(&Point2f::new(0.3, 0.6), &Point2f::new(0.4, 0.2));
        assert!(n.dot(&ray.d) >= 0.0);
        assert!(approx_eq!(Float, pdf, INV_TWO_PI, epsilon = 1e-6));
    }

    proptest! {
        #[test]
        fn sampled_points_lie_on_disk(u0 in 0.0..1.0f32, u1 in 0.0..1.0f32) {
            let d = ceiling_disk();
            let (it, _) = d.sample_area(&Point2f::new(u0, u1));
            prop_assert!(approx_eq!(Float, it.p.z, 2.0, epsilon = 1e-5));
            prop_assert!(it.p.distance(d.center) <= 1.0 + 1e-4);
        }
    }
}
