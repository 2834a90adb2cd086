//! Torrance-Sparrow Microfacet Reflection Model

use super::*;
use crate::microfacet::*;

/// Minimum roughness accepted by `MicrofacetReflection`.
pub const MIN_REFLECTION_ROUGHNESS: Float = 0.001;

/// BRDF for modeling glossy surfaces using a microfacet distribution.
#[derive(Clone, Debug, PartialEq)]
pub struct MicrofacetReflection {
    /// BxDF type.
    bxdf_type: BxDFType,

    /// Reflectance spectrum which gives the fraction of incident light that
    /// is scattered.
    r: Spectrum,

    /// The microfacet distribution model.
    distribution: MicrofacetDistribution,

    /// Shadowing-masking term.
    visibility: VisibilityTerm,

    /// Fresnel interface for dielectrics and conductors.
    fresnel: Fresnel,
}

impl MicrofacetReflection {
    /// Create a new instance of `MicrofacetReflection`.
    ///
    /// * `r`            - Reflectance spectrum.
    /// * `distribution` - Microfacet distribution.
    /// * `visibility`   - Shadowing-masking term.
    /// * `fresnel`      - Fresnel interface for dielectrics and conductors.
    pub fn new(
        r: Spectrum,
        distribution: MicrofacetDistribution,
        visibility: VisibilityTerm,
        fresnel: Fresnel,
    ) -> Self {
        Self {
            bxdf_type: BxDFType::BSDF_REFLECTION | BxDFType::BSDF_GLOSSY,
            r,
            distribution,
            visibility,
            fresnel,
        }
    }

    /// Creates the lobe from names the way a material graph describes it. The
    /// roughness is clamped to `[0.001, 1]` and a conductor Fresnel term is
    /// used.
    ///
    /// * `r`            - Reflectance spectrum.
    /// * `distribution` - Distribution name.
    /// * `visibility`   - Visibility term name.
    /// * `roughness`    - Roughness parameter value.
    /// * `eta`          - Index of refraction of the conductor.
    /// * `k`            - Absorption coefficient.
    pub fn from_names(
        r: Spectrum,
        distribution: &str,
        visibility: &str,
        roughness: Float,
        eta: Spectrum,
        k: Spectrum,
    ) -> Self {
        let roughness = clamp(roughness, MIN_REFLECTION_ROUGHNESS, 1.0);
        Self::new(
            r,
            MicrofacetDistribution::from_name(distribution, roughness),
            VisibilityTerm::from_name(visibility, roughness),
            FresnelConductor::new(eta, k).into(),
        )
    }

    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        self.bxdf_type
    }

    /// Returns the microfacet distribution.
    pub fn distribution(&self) -> &MicrofacetDistribution {
        &self.distribution
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        if !same_hemisphere(wo, wi) {
            return Spectrum::ZERO;
        }

        let cos_theta_o = abs_cos_theta(wo);
        let cos_theta_i = abs_cos_theta(wi);
        let wh = *wi + *wo;

        // Handle degenerate cases for microfacet reflection.
        if cos_theta_i == 0.0 || cos_theta_o == 0.0 {
            Spectrum::ZERO
        } else if wh.x == 0.0 && wh.y == 0.0 && wh.z == 0.0 {
            Spectrum::ZERO
        } else {
            let wh = wh.normalize();
            let f = self.fresnel.evaluate(wi.dot(&wh), wo.dot(&wh));
            self.r * self.distribution.d(&wh) * self.visibility.g(wo, wi, &wh) * f
                / (4.0 * cos_theta_i * cos_theta_o)
        }
    }

    /// Returns the value of the BxDF given the outgpoing direction.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, u: &Point2f) -> BxDFSample {
        // Sample microfacet orientation `wh` and reflected direction `wi`.
        if wo.z == 0.0 {
            return BxDFSample::from(self.bxdf_type);
        }

        let wh = self.distribution.sample_wh(wo, u);
        if wo.dot(&wh) < 0.0 {
            // Should be rare.
            return BxDFSample::from(self.bxdf_type);
        }

        let wi = reflect(wo, &wh);
        if !same_hemisphere(wo, &wi) {
            BxDFSample::new(Spectrum::ZERO, 0.0, wi, self.bxdf_type)
        } else {
            // Compute PDF of `wi` for microfacet reflection.
            let pdf = self.distribution.pdf(wo, &wh) / (4.0 * wo.dot(&wh));
            BxDFSample::new(self.f(wo, &wi), pdf, wi, self.bxdf_type)
        }
    }

    /// Evaluates the PDF for the sampling method.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        if same_hemisphere(wo, wi) {
            let wh = (*wo + *wi).normalize();
            self.distribution.pdf(wo, &wh) / (4.0 * wo.abs_dot(&wh))
        } else {
            0.0
        }
    }
}

impl From<MicrofacetReflection> for BxDF {
    fn from(bxdf: MicrofacetReflection) -> Self {
        Self::MicrofacetReflection(bxdf)
    }
}
