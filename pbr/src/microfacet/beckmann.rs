//! Beckmann Distribution

use crate::geometry::*;
use crate::pbrt::*;
use crate::reflection::*;

/// Isotropic Beckmann–Spizzichino distribution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BeckmannDistribution {
    /// Roughness parameter value.
    pub roughness: Float,

    /// α = sqrt(2) * σ where σ is the RMS slope of microfacets.
    alpha: Float,
}

impl BeckmannDistribution {
    /// Create a new `BeckmannDistribution`.
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
        let tan_2_theta = tan_2_theta(wh);
        if tan_2_theta.is_infinite() {
            return 0.0;
        }

        let alpha2 = self.alpha * self.alpha;
        let cos_4_theta = cos_2_theta(wh) * cos_2_theta(wh);
        (-tan_2_theta / alpha2).exp() / (PI * alpha2 * cos_4_theta)
    }

    /// Returns a sample in the upper hemisphere.
    ///
    /// * `u` - The 2D uniform random values.
    pub fn sample_wh(&self, u: &Point2f) -> Vector3f {
        let log_sample = (1.0 - u[0]).ln();
        let tan_2_theta = -self.alpha * self.alpha * log_sample;
        let cos_theta = 1.0 / (1.0 + tan_2_theta).sqrt();
        let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
        spherical_direction(sin_theta, cos_theta, TWO_PI * u[1])
    }
}
