//! Material

use crate::interaction::*;
use crate::reflection::*;
use std::sync::Arc;

/// Material trait provides common behavior.
pub trait Material {
    /// Builds the BSDF describing the light-scattering properties of the
    /// material at the intersection point on the surface.
    ///
    /// * `si` - The surface interaction at the intersection.
    fn compute_scattering_functions(&self, si: &SurfaceInteraction) -> BSDF;
}

/// Atomic reference counted `Material`.
pub type ArcMaterial = Arc<dyn Material + Send + Sync>;
