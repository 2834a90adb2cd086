//! Scene

use crate::geometry::*;
use crate::interaction::*;
use crate::light::*;
use crate::primitive::*;
use crate::spectrum::*;

/// Scene.
#[derive(Clone)]
pub struct Scene {
    /// An aggregate of all primitives in the scene.
    pub aggregate: ArcPrimitive,

    /// All light sources in the scene.
    pub lights: Vec<ArcLight>,

    /// Radiance arriving along rays that escape the scene.
    pub background: Spectrum,
}

impl Scene {
    /// Creates a new `Scene`.
    ///
    /// * `aggregate`  - An aggregate of all primitives in the scene.
    /// * `lights`     - All light sources in the scene.
    /// * `background` - Radiance arriving along rays that escape the scene.
    pub fn new(aggregate: ArcPrimitive, lights: Vec<ArcLight>, background: Spectrum) -> Self {
        let delta_lights = lights.iter().filter(|l| l.is_delta_light()).count();
        info!(
            "Scene created with {} lights ({} delta)",
            lights.len(),
            delta_lights
        );

        Self {
            aggregate,
            lights,
            background,
        }
    }

    /// Traces the ray into the scene and returns the `SurfaceInteraction` if
    /// an intersection occurred.
    ///
    /// * `ray` - The ray to trace.
    pub fn intersect(&self, ray: &mut Ray) -> Option<SurfaceInteraction> {
        self.aggregate.intersect(ray)
    }

    /// Traces the ray into the scene and returns whether or not an intersection
    /// occurred.
    ///
    /// * `ray` - The ray to trace.
    pub fn intersect_p(&self, ray: &Ray) -> bool {
        self.aggregate.intersect_p(ray)
    }

    /// Returns the environment radiance for a ray that escapes the scene.
    ///
    /// * `_ray` - The escaping ray.
    pub fn le(&self, _ray: &Ray) -> Spectrum {
        self.background
    }
}
