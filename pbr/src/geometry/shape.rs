//! Shapes

use super::*;
use crate::interaction::*;
use crate::pbrt::*;
use crate::sampling::*;
use std::sync::Arc;

/// Shape common functions
pub trait Shape {
    /// Returns the shape type. Usually these are behind ArcShape and harder to
    /// debug. So this will be helpful.
    fn get_type(&self) -> &'static str;

    /// Returns geometric details if a ray intersects the shape intersection.
    /// If there is no intersection, `None` is returned.
    ///
    /// * `r` - The ray.
    fn intersect(&self, r: &Ray) -> Option<Intersection>;

    /// Returns `true` if a ray-shape intersection succeeds; otherwise `false`.
    ///
    /// * `r` - The ray.
    fn intersect_p(&self, r: &Ray) -> bool {
        self.intersect(r).is_some()
    }

    /// Returns the surface area of the shape.
    fn area(&self) -> Float;

    /// Sample a point on the surface and return the PDF with respect to area on
    /// the surface.
    ///
    /// NOTE: The returned `Hit` value will have `wo` = Vector3f::ZERO.
    ///
    /// * `u` - Sample value to use.
    fn sample_area(&self, u: &Point2f) -> (Hit, Float);

    /// Sample a point on the shape given a reference point and return the PDF
    /// with respect to the solid angle from ref.
    ///
    /// * `hit` - Reference point.
    /// * `u`   - Sample value to use.
    fn sample_solid_angle(&self, hit: &Hit, u: &Point2f) -> (Hit, Float) {
        let (intr, mut pdf) = self.sample_area(u);
        let mut wi = intr.p - hit.p;

        if wi.length_squared() == 0.0 {
            pdf = 0.0;
        } else {
            wi = wi.normalize();
            // Convert from area measure, as returned by the sample_area() call
            // above, to solid angle measure.
            pdf *= hit.p.distance_squared(intr.p) / intr.n.abs_dot(&(-wi));
            if pdf.is_infinite() {
                pdf = 0.0;
            }
        }

        (intr, pdf)
    }

    /// Returns the PDF with respect to solid angle.
    ///
    /// * `hit` - The reference point.
    /// * `wi`  - The incident direction.
    fn pdf_solid_angle(&self, hit: &Hit, wi: &Vector3f) -> Float {
        // Intersect sample ray with area light geometry.
        let ray = hit.spawn_ray(wi);

        if let Some(Intersection { isect: isect_light, .. }) = self.intersect(&ray) {
            // Convert light sample weight to solid angle measure.
            let pdf = hit.p.distance_squared(isect_light.hit.p)
                / (isect_light.hit.n.abs_dot(&(-*wi)) * self.area());
            if pdf.is_infinite() {
                0.0
            } else {
                pdf
            }
        } else {
            0.0
        }
    }

    /// Samples a ray leaving the surface. The origin is drawn uniformly by
    /// area and the direction uniformly over the hemisphere about the surface
    /// normal. Returns the ray, the normal at its origin and the direction PDF.
    ///
    /// * `u1` - Sample value for the position.
    /// * `u2` - Sample value for the direction.
    fn sample_ray(&self, u1: &Point2f, u2: &Point2f) -> (Ray, Normal3f, Float) {
        let (p_shape, _) = self.sample_area(u1);
        let n = Vector3f::from(p_shape.n);
        let (s, t) = coordinate_system(&n);
        let local = uniform_sample_hemisphere(u2);
        let d = s * local.x + t * local.y + n * local.z;
        (Ray::new(p_shape.p, d), p_shape.n, uniform_hemisphere_pdf())
    }
}

/// Atomic reference counted `Shape`.
pub type ArcShape = Arc<dyn Shape + Send + Sync>;
