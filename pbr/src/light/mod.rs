//! Light

#![allow(dead_code)]
use crate::geometry::*;
use crate::interaction::*;
use crate::pbrt::*;
use crate::spectrum::*;
use std::sync::Arc;

mod light_type;
mod visibility_tester;

/// Distance excluded at both ends of the shadow rays and at the start of the
/// emitted rays of lights.
pub const VISIBILITY_EPSILON: Float = 0.01;

/// Return value for `Light::sample_li()`.
#[derive(Clone, Debug, Default)]
pub struct Li {
    /// Incident direction.
    pub wi: Vector3f,

    /// PDF with respect to solid angle.
    pub pdf: Float,

    /// Distance between the intersection point and the sampled point.
    pub distance: Float,

    /// PDF of emitting a ray from the sampled point with respect to area.
    pub emission_pdf: Float,

    /// Cosine between the light's normal and the direction towards the
    /// intersection point.
    pub cos_at_light: Float,

    /// Visibility tester.
    pub visibility: Option<VisibilityTester>,

    /// Radiance arriving at intersection point.
    pub value: Spectrum,
}

/// Return value for `Light::sample_le()`.
#[derive(Clone, Debug)]
pub struct Le {
    /// Ray leaving the light source.
    pub ray: Ray,

    /// Surface normal at the point on the light source.
    pub n_light: Normal3f,

    /// The ray origin's probability density with respect to surface area on the
    /// light.
    pub pdf_pos: Float,

    /// The ray directions's probability density with respect to solid angle.
    pub pdf_dir: Float,

    /// Cosine between the light's normal and the ray direction.
    pub cos_at_light: Float,

    /// Emitted radiance value.
    pub value: Spectrum,
}

/// Return value for `AreaLight::l()`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LightRadiance {
    /// Emitted radiance.
    pub value: Spectrum,

    /// PDF of picking the point directly with respect to area.
    pub direct_pdf_a: Float,

    /// PDF of emitting from the point with respect to area.
    pub emission_pdf: Float,
}

/// Light trait provides common behavior.
pub trait Light {
    /// Returns the type of light.
    fn get_type(&self) -> LightType;

    /// Return the radiance arriving at an interaction point.
    ///
    /// * `hit` - The interaction hit point.
    /// * `u`   - Sample value for Monte Carlo integration.
    fn sample_li(&self, hit: &Hit, u: &Point2f) -> Li;

    /// Returns a sampled light-carrying ray leaving the light source.
    ///
    /// * `u1` - Sample values for Monte Carlo.
    /// * `u2` - Sample values for Monte Carlo.
    fn sample_le(&self, u1: &Point2f, u2: &Point2f) -> Le;

    /// Returns the probability density with respect to solid angle for the light’s
    /// `sample_li()`.
    ///
    /// * `hit` - The interaction hit point.
    /// * `wi`  - The incident direction.
    fn pdf_li(&self, hit: &Hit, wi: &Vector3f) -> Float;

    /// Return the total emitted power.
    fn power(&self) -> Spectrum;

    /// Returns whether light source is a delta light.
    fn is_delta_light(&self) -> bool {
        self.get_type().is_delta_light()
    }
}

/// Atomic reference counted `Light`.
pub type ArcLight = Arc<dyn Light + Send + Sync>;

/// AreaLight trait provides common behavior for area lights.
pub trait AreaLight: Light {
    /// Returns the area light's emitted radiance in a given outgoing direction.
    ///
    /// * `hit` - Point on the light's surface.
    /// * `w`   - Outgoing direction.
    fn l(&self, hit: &Hit, w: &Vector3f) -> LightRadiance;

    /// Intersects a ray with the light's shape and returns the hit together
    /// with the radiance leaving the light towards the ray origin.
    ///
    /// * `ray` - The ray.
    fn intersect_le(&self, ray: &Ray) -> Option<(SurfaceInteraction, Spectrum)>;
}

/// Atomic reference counted `AreaLight`.
pub type ArcAreaLight = Arc<dyn AreaLight + Send + Sync>;

// Re-export
pub use light_type::*;
pub use visibility_tester::*;
