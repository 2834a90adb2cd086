//! Diffuse Area Light Source

use pbr::geometry::*;
use pbr::interaction::*;
use pbr::light::*;
use pbr::pbrt::*;
use pbr::sampling::*;
use pbr::spectrum::*;

/// Implements a one-sided area light source with a constant intensity over
/// its surface.
#[derive(Clone)]
pub struct DiffuseAreaLight {
    /// Light source type.
    pub light_type: LightType,

    /// Emitted radiance.
    pub intensity: Spectrum,

    /// Shape describing surface of the light source.
    pub shape: ArcShape,

    /// Surface area of the shape.
    pub area: Float,
}

impl DiffuseAreaLight {
    /// Returns a new `DiffuseAreaLight`.
    ///
    /// * `shape`     - Shape describing surface of the light source.
    /// * `intensity` - Emitted radiance.
    pub fn new(shape: ArcShape, intensity: Spectrum) -> Self {
        let area = shape.area();
        debug!(
            "Area light on {} with area {} and intensity {}",
            shape.get_type(),
            area,
            intensity
        );
        Self {
            light_type: LightType::AREA_LIGHT,
            intensity,
            shape,
            area,
        }
    }
}

impl Light for DiffuseAreaLight {
    /// Returns the type of light.
    fn get_type(&self) -> LightType {
        self.light_type
    }

    /// Return the radiance arriving at an interaction point.
    ///
    /// * `hit` - The interaction hit point.
    /// * `u`   - Sample value for Monte Carlo integration.
    fn sample_li(&self, hit: &Hit, u: &Point2f) -> Li {
        let (p_shape_hit, pdf) = self.shape.sample_solid_angle(hit, u);

        let delta = p_shape_hit.p - hit.p;
        let distance = delta.length();
        if pdf == 0.0 || distance == 0.0 {
            return Li {
                distance,
                ..Li::default()
            };
        }

        let wi = delta / distance;
        let visibility =
            VisibilityTester::new(hit.spawn_ray_to_point(&p_shape_hit.p, VISIBILITY_EPSILON));
        Li {
            wi,
            pdf,
            distance,
            emission_pdf: uniform_hemisphere_pdf() / self.area,
            cos_at_light: p_shape_hit.n.dot(&(-wi)),
            visibility: Some(visibility),
            value: self.intensity,
        }
    }

    /// Returns a sampled light-carrying ray leaving the light source.
    ///
    /// * `u1` - Sample values for Monte Carlo.
    /// * `u2` - Sample values for Monte Carlo.
    fn sample_le(&self, u1: &Point2f, u2: &Point2f) -> Le {
        let (mut ray, n_light, pdf_dir) = self.shape.sample_ray(u1, u2);

        // Avoid self intersection.
        ray.t_min = VISIBILITY_EPSILON;

        Le {
            ray,
            n_light,
            pdf_pos: 1.0 / self.area,
            pdf_dir,
            cos_at_light: max(0.0, n_light.dot(&ray.d)),
            value: self.intensity,
        }
    }

    /// Returns the probability density with respect to solid angle for the light’s
    /// `sample_li()`.
    ///
    /// * `hit` - The interaction hit point.
    /// * `wi`  - The incident direction.
    fn pdf_li(&self, hit: &Hit, wi: &Vector3f) -> Float {
        self.shape.pdf_solid_angle(hit, wi)
    }

    /// Return the total emitted power.
    fn power(&self) -> Spectrum {
        self.intensity * (self.area * TWO_PI)
    }
}

impl AreaLight for DiffuseAreaLight {
    /// Returns the area light's emitted radiance in a given outgoing direction.
    ///
    /// * `hit` - Point on the light's surface.
    /// * `w`   - Outgoing direction.
    fn l(&self, hit: &Hit, w: &Vector3f) -> LightRadiance {
        let cos = max(0.0, hit.n.dot(w));
        if cos == 0.0 {
            return LightRadiance::default();
        }

        LightRadiance {
            value: self.intensity,
            direct_pdf_a: 1.0 / self.area,
            emission_pdf: uniform_hemisphere_pdf() / self.area,
        }
    }

    /// Intersects a ray with the light's shape and returns the hit together
    /// with the radiance leaving the light towards the ray origin.
    ///
    /// * `ray` - The ray.
    fn intersect_le(&self, ray: &Ray) -> Option<(SurfaceInteraction, Spectrum)> {
        let Intersection { isect, .. } = self.shape.intersect(ray)?;
        let radiance = self.l(&isect.hit, &(-ray.d)).value;
        Some((isect, radiance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use shapes::*;
    use std::sync::Arc;

    fn unit_area_disk() -> DiffuseAreaLight {
        let disk = Disk::new(
            Point3f::new(0.0, 0.0, 2.0),
            Normal3f::new(0.0, 0.0, -1.0),
            1.0 / PI.sqrt(),
        );
        DiffuseAreaLight::new(Arc::new(disk), Spectrum::ONE)
    }

    fn floor_hit() -> Hit {
        Hit::new(
            Point3f::new(0.0, 0.0, 0.0),
            Vector3f::new(0.0, 0.0, 1.0),
            Normal3f::new(0.0, 0.0, 1.0),
        )
    }

    #[test]
    fn power_is_area_times_intensity_times_two_pi() {
        let light = unit_area_disk();
        assert!(approx_eq!(Float, light.power()[0], 6.2832, epsilon = 1e-3));
        assert!(!light.is_delta_light());
    }

    #[test]
    fn sample_towards_light_has_solid_angle_pdf() {
        let light = unit_area_disk();
        let li = light.sample_li(&floor_hit(), &Point2f::new(0.5, 0.5));

        // The center of the disk is straight above at distance 2.
        assert!(approx_eq!(Float, li.distance, 2.0, epsilon = 1e-4));
        assert!(approx_eq!(Float, li.pdf, 4.0, epsilon = 1e-3));
        assert!(approx_eq!(Float, li.cos_at_light, 1.0, epsilon = 1e-5));
        assert!(approx_eq!(Float, li.emission_pdf, INV_TWO_PI, epsilon = 1e-4));
        assert_eq!(li.value, Spectrum::ONE);

        let ray = li.visibility.unwrap().ray;
        assert!(approx_eq!(Float, ray.t_min, 0.01, epsilon = 1e-6));
        assert!(approx_eq!(Float, ray.t_max, 1.99, epsilon = 1e-4));
    }

    #[test]
    fn zero_pdf_gives_black_value() {
        // Reference point lies in the plane of the disk so the light is seen
        // edge on and the solid angle conversion diverges.
        let light = unit_area_disk();
        let hit = Hit::new(
            Point3f::new(5.0, 0.0, 2.0),
            Vector3f::new(0.0, 0.0, 1.0),
            Normal3f::new(0.0, 0.0, 1.0),
        );
        let li = light.sample_li(&hit, &Point2f::new(0.5, 0.5));
        assert_eq!(li.pdf, 0.0);
        assert!(li.value.is_black());
        assert!(li.visibility.is_none());
    }

    #[test]
    fn back_side_emits_nothing() {
        let light = unit_area_disk();
        let on_light = Hit::new(
            Point3f::new(0.0, 0.0, 2.0),
            Vector3f::new(0.0, 0.0, -1.0),
            Normal3f::new(0.0, 0.0, -1.0),
        );
        let front = light.l(&on_light, &Vector3f::new(0.0, 0.0, -1.0));
        assert_eq!(front.value, Spectrum::ONE);
        assert!(approx_eq!(Float, front.direct_pdf_a, 1.0, epsilon = 1e-4));

        let back = light.l(&on_light, &Vector3f::new(0.0, 0.0, 1.0));
        assert!(back.value.is_black());
        assert_eq!(back.direct_pdf_a, 0.0);
    }

    #[test]
    fn emitted_rays_skip_their_origin() {
        let light = unit_area_disk();
        let le = light.sample_le(&Point2f::new(0.2, 0.8), &Point2f::new(0.6, 0.3));
        assert_eq!(le.ray.t_min, 0.01);
        assert!(approx_eq!(Float, le.pdf_pos, 1.0, epsilon = 1e-4));
        assert!(le.cos_at_light >= 0.0);
    }

    #[test]
    fn intersect_le_sees_the_front() {
        let light = unit_area_disk();
        let ray = Ray::new(Point3f::new(0.0, 0.0, 0.0), Vector3f::new(0.0, 0.0, 1.0));
        let (isect, radiance) = light.intersect_le(&ray).unwrap();
        assert!(approx_eq!(Float, isect.hit.p.z, 2.0, epsilon = 1e-5));
        assert_eq!(radiance, Spectrum::ONE);

        let from_above = Ray::new(Point3f::new(0.0, 0.0, 4.0), Vector3f::new(0.0, 0.0, -1.0));
        let (_, radiance) = light.intersect_le(&from_above).unwrap();
        assert!(radiance.is_black());
    }
}
