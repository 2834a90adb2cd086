//! Point Light Source

use pbr::geometry::*;
use pbr::interaction::*;
use pbr::light::*;
use pbr::pbrt::*;
use pbr::sampling::*;
use pbr::spectrum::*;

/// Implements an isotropic point light source that emits the same amount of
/// light in all directions.
#[derive(Clone, Debug)]
pub struct PointLight {
    /// Light source type.
    pub light_type: LightType,

    /// Position.
    pub p_light: Point3f,

    /// Intensity.
    pub intensity: Spectrum,
}

impl PointLight {
    /// Returns a new `PointLight`.
    ///
    /// * `p_light`   - Position.
    /// * `intensity` - Intensity.
    pub fn new(p_light: Point3f, intensity: Spectrum) -> Self {
        debug!("Point light at {:?} with intensity {}", p_light, intensity);
        Self {
            light_type: LightType::DELTA_POSITION_LIGHT,
            p_light,
            intensity,
        }
    }
}

impl Light for PointLight {
    /// Returns the type of light.
    fn get_type(&self) -> LightType {
        self.light_type
    }

    /// Return the radiance arriving at an interaction point.
    ///
    /// * `hit` - The interaction hit point.
    /// * `_u`  - Sample value for Monte Carlo integration.
    fn sample_li(&self, hit: &Hit, _u: &Point2f) -> Li {
        let delta = self.p_light - hit.p;
        let distance = delta.length();
        if distance == 0.0 {
            return Li::default();
        }

        let visibility =
            VisibilityTester::new(hit.spawn_ray_to_point(&self.p_light, VISIBILITY_EPSILON));
        Li {
            wi: delta / distance,
            pdf: 1.0,
            distance,
            emission_pdf: uniform_sphere_pdf(),
            cos_at_light: 1.0,
            visibility: Some(visibility),
            value: self.intensity / (distance * distance),
        }
    }

    /// Returns a sampled light-carrying ray leaving the light source.
    ///
    /// * `u1`  - Sample values for Monte Carlo.
    /// * `_u2` - Sample values for Monte Carlo.
    fn sample_le(&self, u1: &Point2f, _u2: &Point2f) -> Le {
        let dir = uniform_sample_sphere(u1);
        Le {
            ray: Ray::new(self.p_light, dir),
            n_light: Normal3f::from(dir),
            pdf_pos: 1.0,
            pdf_dir: uniform_sphere_pdf(),
            cos_at_light: 1.0,
            value: self.intensity,
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
        FOUR_PI * self.intensity
    }
}
