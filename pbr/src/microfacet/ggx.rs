//! GGX Distribution

use crate::geometry::*;
use crate::pbrt::*;
use crate::reflection::*;

/// Isotropic GGX (Trowbridge-Reitz) distribution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GGXDistribution {
    /// Roughness parameter value.
    pub roughness: Float,

    /// Width of the distribution.
    alpha: Float,
}

impl GGXDistribution {
    /// Create a new `GGXDistribution`.
    ///
    /// * `roughness` - Roughness parameter value.
    pub fn new(roughness: Float) -> Self {
        Self {
            roughness,
            alpha: super::roughness_to_alpha(roughness),
        }
    }

    /// Return the differential area of microfacets oriented with the surface
    /// normal `wh`.
    ///
    /// * `wh` - A sample normal from the distrubition of normal vectors.
    pub fn d(&self, wh: &Vector3f) -> Float {
        let alpha2 = self.alpha * self.alpha;
        let t = cos_2_theta(wh) * (alpha2 - 1.0) + 1.0;
        alpha2 / (PI * t * t)
    }

    /// Returns a sample in the upper hemisphere.
    ///
    /// * `u` - The 2D uniform random values.
    pub fn sample_wh(&self, u: &Point2f) -> Vector3f {
        let tan_2_theta = self.alpha * self.alpha * u[0] / (1.0 - u[0]);
        let cos_theta = 1.0 / (1.0 + tan_2_theta).sqrt();
        let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
        spherical_direction(sin_theta, cos_theta, TWO_PI * u[1])
    }
}
