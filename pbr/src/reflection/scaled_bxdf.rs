//! Scaled BxDF

use super::*;

/// A `BxDF` together with the scalar weight it contributes with inside a
/// `BSDF`. The weight is multiplied into every evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledBxDF {
    /// The BxDF to scale.
    pub bxdf: BxDF,

    /// Scaling value.
    pub weight: Float,
}

impl ScaledBxDF {
    /// Create a new instance of `ScaledBxDF`.
    ///
    /// * `bxdf`   - The BxDF to scale.
    /// * `weight` - Scaling value.
    pub fn new(bxdf: BxDF, weight: Float) -> Self {
        Self { bxdf, weight }
    }

    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        self.bxdf.get_type()
    }

    /// Returns true if the reflection models match.
    ///
    /// * `t` - The reflection model to compare.
    pub fn matches_flags(&self, t: BxDFType) -> bool {
        self.bxdf.matches_flags(t)
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        self.bxdf.f(wo, wi) * self.weight
    }

    /// Returns the value of the BxDF given the outgpoing direction.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, u: &Point2f) -> BxDFSample {
        let mut sample = self.bxdf.sample_f(wo, u);
        sample.f *= self.weight;
        sample
    }

    /// Evaluates the PDF for the sampling method.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        self.bxdf.pdf(wo, wi)
    }

    /// Computes the hemispherical-directional reflectance function ρ.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - Samples used by Monte Carlo algorithm.
    pub fn rho_hd(&self, wo: &Vector3f, u: &[Point2f]) -> Spectrum {
        self.bxdf.rho_hd(wo, u) * self.weight
    }
}
