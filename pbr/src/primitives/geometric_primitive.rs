//! Geometric Primitives

use crate::geometry::*;
use crate::interaction::*;
use crate::light::*;
use crate::material::*;
use crate::primitive::*;

/// GeometricPrimitive represents a single shape in a scene.
#[derive(Clone)]
pub struct GeometricPrimitive {
    /// The shape.
    pub shape: ArcShape,

    /// The material. Without one, hits produce no BSDF.
    pub material: Option<ArcMaterial>,

    /// Optional area light that describes emmission characterisitics if it
    /// emits light.
    pub area_light: Option<ArcAreaLight>,
}

impl GeometricPrimitive {
    /// Create a new geometric primitive.
    ///
    /// * `shape`      - The shape.
    /// * `material`   - The material.
    /// * `area_light` - Optional area light that describes emmission
    ///                  characterisitics if it emits light.
    pub fn new(
        shape: ArcShape,
        material: Option<ArcMaterial>,
        area_light: Option<ArcAreaLight>,
    ) -> Self {
        Self {
            shape,
            material,
            area_light,
        }
    }
}

impl Primitive for GeometricPrimitive {
    /// Returns geometric details if a ray intersects the primitive and updates
    /// the t_max parameter of the ray. If there is no intersection, `None` is
    /// returned.
    ///
    /// * `r` - The ray.
    fn intersect(&self, r: &mut Ray) -> Option<SurfaceInteraction> {
        let Intersection { t, mut isect } = self.shape.intersect(r)?;
        r.t_max = t;
        isect.material = self.material.clone();
        isect.area_light = self.area_light.clone();
        Some(isect)
    }

    /// Returns `true` if a ray-primitive intersection succeeds; otherwise `false`.
    ///
    /// * `r` - The ray.
    fn intersect_p(&self, r: &Ray) -> bool {
        self.shape.intersect_p(r)
    }
}
