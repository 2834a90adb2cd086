//! Surface Interactions

use super::Hit;
use crate::geometry::*;
use crate::light::*;
use crate::material::*;
use crate::reflection::*;
use crate::spectrum::*;

/// Shading geometry used for perturbed values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Shading {
    /// Shading normal.
    pub n: Normal3f,

    /// Tangent used to orient the shading frame.
    pub dpdu: Vector3f,
}

/// SurfaceInteraction represents geometry of a particular point on a surface.
#[derive(Clone)]
pub struct SurfaceInteraction {
    /// The common interaction data.
    pub hit: Hit,

    /// The uv coordinates from surface parametrization.
    pub uv: Point2f,

    /// Parametric partial derivative of the point ∂p/∂u.
    pub dpdu: Vector3f,

    /// Shading geometry used for perturbed values.
    pub shading: Shading,

    /// Material of the primitive that was hit.
    pub material: Option<ArcMaterial>,

    /// Area light attached to the primitive that was hit.
    pub area_light: Option<ArcAreaLight>,
}

impl SurfaceInteraction {
    /// Create a new surface interaction. The shading frame starts out equal to
    /// the geometric frame.
    ///
    /// * `p`    - Point of interaction.
    /// * `uv`   - The uv coordinates from surface parametrization.
    /// * `wo`   - The negative ray direction.
    /// * `n`    - Geometric normal.
    /// * `dpdu` - Parametric partial derivative of the point ∂p/∂u.
    pub fn new(p: Point3f, uv: Point2f, wo: Vector3f, n: Normal3f, dpdu: Vector3f) -> Self {
        Self {
            hit: Hit::new(p, wo, n),
            uv,
            dpdu,
            shading: Shading { n, dpdu },
            material: None,
            area_light: None,
        }
    }

    /// Returns the BSDF at the intersection or `None` when the primitive has no
    /// material.
    pub fn compute_scattering_functions(&self) -> Option<BSDF> {
        self.material
            .as_ref()
            .map(|material| material.compute_scattering_functions(self))
    }

    /// Returns the emitted radiance at a surface point intersected by a ray.
    ///
    /// * `w` - The outgoing direction.
    pub fn le(&self, w: &Vector3f) -> Spectrum {
        self.area_light
            .as_ref()
            .map_or(Spectrum::ZERO, |area| area.l(&self.hit, w).value)
    }
}
