//! Distant Light Source

use pbr::geometry::*;
use pbr::interaction::*;
use pbr::light::*;
use pbr::pbrt::*;
use pbr::sampling::*;
use pbr::spectrum::*;

/// Implements a directional light source that deposits illumination from the
/// same direction at every point in space.
#[derive(Clone, Debug)]
pub struct DistantLight {
    /// Light source type.
    pub light_type: LightType,

    /// Emitted radiance.
    pub emitted_radiance: Spectrum,

    /// Unit direction towards the light.
    pub w_light: Vector3f,

    /// Radius of a sphere bounding the scene.
    pub world_radius: Float,
}

impl DistantLight {
    /// Returns a new `DistantLight`.
    ///
    /// * `emitted_radiance` - Emitted radiance.
    /// * `w_light`          - Direction towards the light. It is normalized.
    /// * `world_radius`     - Radius of a sphere bounding the scene.
    pub fn new(emitted_radiance: Spectrum, w_light: Vector3f, world_radius: Float) -> Self {
        debug!(
            "Distant light from {} with radiance {}",
            w_light, emitted_radiance
        );
        Self {
            light_type: LightType::DELTA_DIRECTION_LIGHT,
            emitted_radiance,
            w_light: w_light.normalize(),
            world_radius,
        }
    }
}

impl Light for DistantLight {
    /// Returns the type of light.
    fn get_type(&self) -> LightType {
        self.light_type
    }

    /// Return the radiance arriving at an interaction point.
    ///
    /// * `hit` - The interaction hit point.
    /// * `_u`  - Sample value for Monte Carlo integration.
    fn sample_li(&self, hit: &Hit, _u: &Point2f) -> Li {
        let distance = 2.0 * self.world_radius;
        let p_outside = hit.p + self.w_light * distance;
        let visibility =
            VisibilityTester::new(hit.spawn_ray_to_point(&p_outside, VISIBILITY_EPSILON));
        Li {
            wi: self.w_light,
            pdf: 1.0,
            distance,
            emission_pdf: 1.0 / (PI * self.world_radius * self.world_radius),
            cos_at_light: 1.0,
            visibility: Some(visibility),
            value: self.emitted_radiance,
        }
    }

    /// Returns a sampled light-carrying ray leaving the light source. The
    /// ray starts on a disk facing the light outside the scene bounds.
    ///
    /// * `u1`  - Sample values for Monte Carlo.
    /// * `_u2` - Sample values for Monte Carlo.
    fn sample_le(&self, u1: &Point2f, _u2: &Point2f) -> Le {
        // Choose point on disk oriented toward infinite light direction.
        let (v1, v2) = coordinate_system(&self.w_light);
        let cd = concentric_sample_disk(u1);
        let p_disk = Point3f::default() + (v1 * cd.x + v2 * cd.y) * self.world_radius;

        // Set ray origin and direction for infinite light ray.
        let dir = -self.w_light;
        Le {
            ray: Ray::new(p_disk + self.w_light * self.world_radius, dir),
            n_light: Normal3f::from(dir),
            pdf_pos: 1.0 / (PI * self.world_radius * self.world_radius),
            pdf_dir: 1.0,
            cos_at_light: 1.0,
            value: self.emitted_radiance,
        }
    }

    /// Returns the probability density with respect to solid angle for the light’s
    /// `sample_li()`.
    ///
    /// * `_hit` - The interaction hit point.
    /// * `_wi`  - The incident direction.
    fn pdf_li(&self, _hit: &Hit, _wi: &Vector3f) -> Float {
        0.0
    }

    /// Return the total emitted power.
    fn power(&self) -> Spectrum {
        self.emitted_radiance * PI * self.world_radius * self.world_radius
    }
}
