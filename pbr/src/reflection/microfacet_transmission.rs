//! Microfacet Transmission Model

use super::*;
use crate::microfacet::*;

/// Minimum roughness accepted by `MicrofacetTransmission`.
pub const MIN_REFRACTION_ROUGHNESS: Float = 0.05;

/// BTDF for modeling glossy transmission using a microfacet distribution.
#[derive(Clone, Debug, PartialEq)]
pub struct MicrofacetTransmission {
    /// BxDF type.
    bxdf_type: BxDFType,

    /// Spectrum used to scale the transmitted colour.
    t: Spectrum,

    /// The microfacet distribution model.
    distribution: MicrofacetDistribution,

    /// Shadowing-masking term.
    visibility: VisibilityTerm,

    /// Fresnel interface for dielectrics.
    fresnel: Fresnel,

    /// Index of refraction above the surface (same side as surface normal).
    eta_a: Float,

    /// Index of refraction below the surface (opposite side as surface normal).
    eta_b: Float,
}

impl MicrofacetTransmission {
    /// Create a new instance of `MicrofacetTransmission`.
    ///
    /// * `t`            - Spectrum used to scale the transmitted colour.
    /// * `distribution` - Microfacet distribution.
    /// * `visibility`   - Shadowing-masking term.
    /// * `eta_a`        - Index of refraction above the surface.
    /// * `eta_b`        - Index of refraction below the surface.
    pub fn new(
        t: Spectrum,
        distribution: MicrofacetDistribution,
        visibility: VisibilityTerm,
        eta_a: Float,
        eta_b: Float,
    ) -> Self {
        Self {
            bxdf_type: BxDFType::BSDF_TRANSMISSION | BxDFType::BSDF_GLOSSY,
            t,
            distribution,
            visibility,
            fresnel: FresnelDielectric::new(eta_b, eta_a).into(),
            eta_a,
            eta_b,
        }
    }

    /// Creates the lobe from names the way a material graph describes it. The
    /// roughness is clamped to `[0.05, 1]`.
    ///
    /// * `t`            - Transmittance.
    /// * `distribution` - Distribution name.
    /// * `visibility`   - Visibility term name.
    /// * `roughness`    - Roughness parameter value.
    /// * `in_ior`       - Index of refraction inside the surface.
    /// * `ext_ior`      - Index of refraction outside the surface.
    pub fn from_names(
        t: Spectrum,
        distribution: &str,
        visibility: &str,
        roughness: Float,
        in_ior: Float,
        ext_ior: Float,
    ) -> Self {
        let roughness = clamp(roughness, MIN_REFRACTION_ROUGHNESS, 1.0);
        Self::new(
            t,
            MicrofacetDistribution::from_name(distribution, roughness),
            VisibilityTerm::from_name(visibility, roughness),
            ext_ior,
            in_ior,
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

    /// Returns the ratio η_t / η_i for light arriving along `wo`.
    fn eta(&self, wo: &Vector3f) -> Float {
        if cos_theta(wo) > 0.0 {
            self.eta_b / self.eta_a
        } else {
            self.eta_a / self.eta_b
        }
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        if same_hemisphere(wo, wi) {
            return Spectrum::ZERO; // transmission only
        }

        let cos_theta_o = cos_theta(wo);
        let cos_theta_i = cos_theta(wi);
        if cos_theta_i == 0.0 || cos_theta_o == 0.0 {
            return Spectrum::ZERO;
        }

        // Compute `wh` from `wo` and `wi` for microfacet transmission.
        let eta = self.eta(wo);
        let mut wh = (*wo + *wi * eta).normalize();
        if wh.z < 0.0 {
            wh = -wh;
        }

        // Same side?
        if wo.dot(&wh) * wi.dot(&wh) > 0.0 {
            return Spectrum::ZERO;
        }

        let f = self.fresnel.evaluate(wo.dot(&wh), wi.dot(&wh));
        let sqrt_denom = wo.dot(&wh) + eta * wi.dot(&wh);
        let factor = 1.0 / eta;
        let g = self.visibility.g(wo, wi, &wh);

        (Spectrum::ONE - f)
            * self.t
            * abs(self.distribution.d(&wh)
                * g
                * eta
                * eta
                * wi.abs_dot(&wh)
                * wo.abs_dot(&wh)
                * factor
                * factor
                / (cos_theta_i * cos_theta_o * sqrt_denom * sqrt_denom))
    }

    /// Returns the value of the BxDF given the outgpoing direction.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, u: &Point2f) -> BxDFSample {
        if wo.z == 0.0 {
            return BxDFSample::from(self.bxdf_type);
        }

        let wh = self.distribution.sample_wh(wo, u);
        if wo.dot(&wh) < 0.0 {
            // Should be rare.
            return BxDFSample::from(self.bxdf_type);
        }

        match refract(wo, &wh, 1.0 / self.eta(wo)) {
            Some(wi) => {
                let pdf = self.pdf(wo, &wi);
                BxDFSample::new(self.f(wo, &wi), pdf, wi, self.bxdf_type)
            }
            None => BxDFSample::from(self.bxdf_type),
        }
    }

    /// Evaluates the PDF for the sampling method.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        if same_hemisphere(wo, wi) {
            return 0.0;
        }

        // Compute `wh` from `wo` and `wi` for microfacet transmission.
        let eta = self.eta(wo);
        let wh = (*wo + *wi * eta).normalize();
        if wo.dot(&wh) * wi.dot(&wh) > 0.0 {
            0.0
        } else {
            // Compute change of variables dwh\dwi for microfacet transmission.
            let sqrt_denom = wo.dot(&wh) + eta * wi.dot(&wh);
            let dwh_dwi = abs((eta * eta * wi.dot(&wh)) / (sqrt_denom * sqrt_denom));
            self.distribution.pdf(wo, &wh) * dwh_dwi
        }
    }
}

impl From<MicrofacetTransmission> for BxDF {
    fn from(bxdf: MicrofacetTransmission) -> Self {
        Self::MicrofacetTransmission(bxdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glass(roughness: Float) -> MicrofacetTransmission {
        MicrofacetTransmission::from_names(Spectrum::ONE, "GGX", "Smith", roughness, 1.5, 1.0)
    }

    #[test]
    fn roughness_is_clamped() {
        assert_eq!(glass(0.001).distribution().roughness(), MIN_REFRACTION_ROUGHNESS);
    }

    #[test]
    fn reflection_directions_are_black() {
        let m = glass(0.3);
        let wo = Vector3f::new(0.0, 0.6, 0.8);
        let wi = Vector3f::new(0.0, -0.6, 0.8);
        assert!(m.f(&wo, &wi).is_black());
        assert_eq!(m.pdf(&wo, &wi), 0.0);
    }

    #[test]
    fn transmits_through_the_surface() {
        let m = glass(0.3);
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let sample = m.sample_f(&wo, &Point2f::new(0.2, 0.7));
        assert!(sample.wi.z < 0.0);
        assert!(sample.pdf > 0.0);
        assert!(!sample.f.is_black());
        assert!(!sample.f.has_nans());
    }
}
