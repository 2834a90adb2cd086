//! Reflection and surface scattering models

#![allow(dead_code)]
use crate::geometry::*;
use crate::pbrt::*;
use crate::sampling::*;
use crate::spectrum::*;

mod bsdf;
mod bsdf_reader;
mod bxdf_sample;
mod bxdf_type;
mod common;
mod fourier_bsdf;
mod fourier_bsdf_table;
mod fresnel;
mod lambertian_reflection;
mod merl;
mod microfacet_reflection;
mod microfacet_transmission;
mod oren_nayar;
mod scaled_bxdf;

// Re-export
pub use bsdf::*;
pub use bsdf_reader::*;
pub use bxdf_sample::*;
pub use bxdf_type::*;
pub use common::*;
pub use fourier_bsdf::*;
pub use fourier_bsdf_table::*;
pub use fresnel::*;
pub use lambertian_reflection::*;
pub use merl::*;
pub use microfacet_reflection::*;
pub use microfacet_transmission::*;
pub use oren_nayar::*;
pub use scaled_bxdf::*;

/// BxDF for BRDFs and BTDFs.
///
/// NOTES:
///
/// The set of lobes is closed so they are enumerated directly instead of
/// going through trait objects. Lobes that don't provide their own sampling
/// use cosine-weighted hemisphere sampling.
#[derive(Clone, Debug, PartialEq)]
pub enum BxDF {
    FourierBSDF(FourierBSDF),
    LambertianReflection(LambertianReflection),
    Merl(MerlBRDF),
    MicrofacetReflection(MicrofacetReflection),
    MicrofacetTransmission(MicrofacetTransmission),
    OrenNayar(OrenNayar),
}

impl BxDF {
    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        match self {
            BxDF::FourierBSDF(bxdf) => bxdf.get_type(),
            BxDF::LambertianReflection(bxdf) => bxdf.get_type(),
            BxDF::Merl(bxdf) => bxdf.get_type(),
            BxDF::MicrofacetReflection(bxdf) => bxdf.get_type(),
            BxDF::MicrofacetTransmission(bxdf) => bxdf.get_type(),
            BxDF::OrenNayar(bxdf) => bxdf.get_type(),
        }
    }

    /// Returns true if the reflection models match.
    ///
    /// * `t` - The reflection model to compare.
    pub fn matches_flags(&self, t: BxDFType) -> bool {
        t.contains(self.get_type())
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        match self {
            BxDF::FourierBSDF(bxdf) => bxdf.f(wo, wi),
            BxDF::LambertianReflection(bxdf) => bxdf.f(wo, wi),
            BxDF::Merl(bxdf) => bxdf.f(wo, wi),
            BxDF::MicrofacetReflection(bxdf) => bxdf.f(wo, wi),
            BxDF::MicrofacetTransmission(bxdf) => bxdf.f(wo, wi),
            BxDF::OrenNayar(bxdf) => bxdf.f(wo, wi),
        }
    }

    /// Returns the value of the BxDF given the outgpoing direction.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, u: &Point2f) -> BxDFSample {
        match self {
            BxDF::MicrofacetReflection(bxdf) => bxdf.sample_f(wo, u),
            BxDF::MicrofacetTransmission(bxdf) => bxdf.sample_f(wo, u),
            _ => {
                // Cosine-sample the hemisphere, flipping the direction if necessary.
                let mut wi = cosine_sample_hemisphere(u);
                if wo.z < 0.0 {
                    wi.z *= -1.0;
                }
                let pdf = self.pdf(wo, &wi);
                BxDFSample::new(self.f(wo, &wi), pdf, wi, self.get_type())
            }
        }
    }

    /// Evaluates the PDF for the sampling method. Default is based on the
    /// cosine-weighted sampling in `BxDF::sample_f()` default implementation.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        match self {
            BxDF::MicrofacetReflection(bxdf) => bxdf.pdf(wo, wi),
            BxDF::MicrofacetTransmission(bxdf) => bxdf.pdf(wo, wi),
            _ => {
                if same_hemisphere(wo, wi) {
                    abs_cos_theta(wi) * INV_PI
                } else {
                    0.0
                }
            }
        }
    }

    /// Computes the hemispherical-directional reflectance function ρ.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - Samples used by Monte Carlo algorithm.
    pub fn rho_hd(&self, wo: &Vector3f, u: &[Point2f]) -> Spectrum {
        match self {
            BxDF::LambertianReflection(bxdf) => bxdf.rho_hd(wo, u),
            _ => {
                if u.is_empty() {
                    return Spectrum::ZERO;
                }

                let mut r = Spectrum::ZERO;
                for s in u {
                    // Estimate one term of `rho_hd`.
                    let sample = self.sample_f(wo, s);
                    if sample.pdf > 0.0 {
                        r += sample.f * abs_cos_theta(&sample.wi) / sample.pdf;
                    }
                }
                r / u.len() as Float
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    fn stratified(n: usize) -> Vec<Point2f> {
        let mut u = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                u.push(Point2f::new(
                    (i as Float + 0.5) / n as Float,
                    (j as Float + 0.5) / n as Float,
                ));
            }
        }
        u
    }

    #[test]
    fn flags_must_cover_the_lobe_type() {
        let lambert = BxDF::from(LambertianReflection::new(Spectrum::ONE));
        assert!(lambert.matches_flags(BxDFType::BSDF_ALL));
        assert!(lambert.matches_flags(BxDFType::BSDF_REFLECTION | BxDFType::BSDF_DIFFUSE));
        assert!(!lambert.matches_flags(BxDFType::BSDF_REFLECTION));
        assert!(!lambert.matches_flags(BxDFType::BSDF_TRANSMISSION | BxDFType::BSDF_DIFFUSE));
    }

    #[test]
    fn default_sampling_follows_wo_hemisphere() {
        let on = BxDF::from(OrenNayar::new(Spectrum::ONE, 0.3));
        let wo = Vector3f::new(0.0, 0.0, -1.0);
        let sample = on.sample_f(&wo, &Point2f::new(0.3, 0.7));
        assert!(sample.wi.z < 0.0);
        assert!(approx_eq!(Float, sample.pdf, abs_cos_theta(&sample.wi) * INV_PI, epsilon = 1e-6));
    }

    #[test]
    fn monte_carlo_rho_matches_closed_form() {
        // Oren-Nayar with σ = 0 is Lambertian so the estimate must match `r`.
        let on = BxDF::from(OrenNayar::new(Spectrum::new(0.5), 0.0));
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let rho = on.rho_hd(&wo, &stratified(16));
        assert!(approx_eq!(Float, rho[0], 0.5, epsilon = 1e-3));
    }

    #[test]
    fn rho_with_no_samples_is_black() {
        let on = BxDF::from(OrenNayar::new(Spectrum::new(0.5), 0.2));
        assert!(on.rho_hd(&Vector3f::new(0.0, 0.0, 1.0), &[]).is_black());
    }
}
