//! Blinn Distribution

use crate::geometry::*;
use crate::pbrt::*;
use crate::reflection::*;

/// Normalized Blinn-Phong distribution with exponent `2 / α² - 2`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlinnDistribution {
    /// Roughness parameter value.
    pub roughness: Float,

    /// Blinn-Phong exponent.
    exponent: Float,
}

impl BlinnDistribution {
    /// Create a new `BlinnDistribution`.
    ///
    /// * `roughness` - Roughness parameter value.
    pub fn new(roughness: Float) -> Self {
        let alpha = super::roughness_to_alpha(roughness);
        Self {
            roughness,
            exponent: 2.0 / (alpha * alpha) - 2.0,
        }
    }

    /// Return the differential area of microfacets oriented with the surface
    /// normal `wh`.
    ///
    /// * `wh` - A sample normal from the distrubition of normal vectors.
    pub fn d(&self, wh: &Vector3f) -> Float {
        let cos_theta_h = abs_cos_theta(wh);
        (self.exponent + 2.0) * INV_TWO_PI * cos_theta_h.powf(self.exponent)
    }

    /// Returns a sample in the upper hemisphere.
    ///
    /// * `u` - The 2D uniform random values.
    pub fn sample_wh(&self, u: &Point2f) -> Vector3f {
        let cos_theta = u[0].powf(1.0 / (self.exponent + 2.0));
        let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
        spherical_direction(sin_theta, cos_theta, TWO_PI * u[1])
    }
}
