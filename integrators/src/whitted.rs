//! Whitted Integrator

use pbr::geometry::*;
use pbr::integrator::*;
use pbr::light::*;
use pbr::reflection::*;
use pbr::sampler::*;
use pbr::scene::*;
use pbr::spectrum::*;

/// Computes direct lighting from delta light sources at the first surface a
/// ray hits.
///
/// NOTES:
///
/// Area lights only contribute when a ray hits them directly. They are not
/// sampled for direct lighting.
#[derive(Copy, Clone, Debug)]
pub struct WhittedIntegrator {
    /// Maximum recursion depth.
    max_depth: usize,
}

impl WhittedIntegrator {
    /// Create a new `WhittedIntegrator`.
    ///
    /// * `max_depth` - Maximum recursion depth.
    pub fn new(max_depth: usize) -> Self {
        info!("Whitted integrator with max depth {}", max_depth);
        Self { max_depth }
    }

    /// Returns the maximum recursion depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Integrator for WhittedIntegrator {
    /// Returns the incident radiance at the origin of a given ray.
    ///
    /// * `ray`    - The ray.
    /// * `scene`  - The scene.
    /// * `sample` - Sample values for the ray.
    /// * `depth`  - The recursion depth.
    fn li(&self, ray: &mut Ray, scene: &Scene, sample: &PixelSample, depth: usize) -> Spectrum {
        if depth > self.max_depth {
            return Spectrum::ZERO;
        }

        // Find closest ray intersection or return background radiance.
        let isect = match scene.intersect(ray) {
            Some(isect) => isect,
            None => return scene.le(ray),
        };

        let wo = isect.hit.wo;
        let ns = isect.shading.n;

        // Compute emitted light if ray hit an area light source.
        let mut l = isect.le(&wo);

        // Surfaces without a material only mark a boundary so keep going.
        let bsdf = match isect.compute_scattering_functions() {
            Some(bsdf) => bsdf,
            None => {
                let mut next = isect.hit.spawn_ray(&ray.d);
                return l + self.li(&mut next, scene, sample, depth + 1);
            }
        };

        // Add contribution of each delta light source.
        for light in scene.lights.iter().filter(|light| light.is_delta_light()) {
            let Li {
                wi,
                pdf,
                visibility,
                value: li,
                ..
            } = light.sample_li(&isect.hit, &sample.light_sample);

            if li.is_black() || pdf == 0.0 {
                continue;
            }

            let f = bsdf.f(&wo, &wi, BxDFType::BSDF_ALL);
            if f.is_black() {
                continue;
            }

            // If no visiblity tester, then unoccluded = true.
            if visibility.map_or(true, |vis| vis.unoccluded(scene)) {
                l += li * f * ns.abs_dot(&wi) / pdf;
            }
        }

        l
    }
}
