//! Integrator

use crate::geometry::*;
use crate::sampler::*;
use crate::scene::*;
use crate::spectrum::*;

/// Integrator computes the radiance arriving along camera rays.
pub trait Integrator {
    /// Returns the incident radiance at the origin of a given ray.
    ///
    /// * `ray`    - The ray. Its t_max is updated on intersection.
    /// * `scene`  - The scene.
    /// * `sample` - Sample values for the ray.
    /// * `depth`  - The recursion depth.
    fn li(&self, ray: &mut Ray, scene: &Scene, sample: &PixelSample, depth: usize) -> Spectrum;
}
