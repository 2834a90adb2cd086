//! Visibility Tester

use crate::geometry::*;
use crate::scene::*;

/// VisibilityTester allows lights to return a radiance value under the
/// assumption that the reference point and light source are mutually
/// visible. The shadow ray segment already excludes a small distance at both
/// ends so neither end point occludes itself.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityTester {
    /// The shadow ray.
    pub ray: Ray,
}

impl VisibilityTester {
    /// Create a new `VisibilityTester` for a shadow ray.
    ///
    /// * `ray` - The shadow ray.
    pub fn new(ray: Ray) -> Self {
        Self { ray }
    }

    /// Traces the shadow ray through the scene and returns true if nothing
    /// lies within its `[t_min, t_max]` range.
    ///
    /// * `scene` - The scene.
    pub fn unoccluded(&self, scene: &Scene) -> bool {
        !scene.intersect_p(&self.ray)
    }
}
