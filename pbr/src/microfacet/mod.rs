//! Microfacet Distribution Models

#![allow(dead_code)]

use crate::geometry::*;
use crate::pbrt::*;
use crate::reflection::*;

mod beckmann;
mod blinn;
mod ggx;
mod visibility;

// Re-exports
pub use beckmann::*;
pub use blinn::*;
pub use ggx::*;
pub use visibility::*;

/// Converts a user facing roughness in [0, 1] to the distribution parameter α.
///
/// * `roughness` - Roughness parameter value.
#[inline]
pub fn roughness_to_alpha(roughness: Float) -> Float {
    roughness * roughness
}

/// Microfacet normal distribution models.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MicrofacetDistribution {
    Blinn(BlinnDistribution),
    Beckmann(BeckmannDistribution),
    GGX(GGXDistribution),
}

impl MicrofacetDistribution {
    /// Returns the distribution for a name. Unrecognized names fall back to
    /// `GGX`.
    ///
    /// * `name`      - Distribution name (`Blinn`, `Beckmann` or `GGX`).
    /// * `roughness` - Roughness parameter value; clamped by the caller.
    pub fn from_name(name: &str, roughness: Float) -> Self {
        match name {
            "Blinn" => Self::Blinn(BlinnDistribution::new(roughness)),
            "Beckmann" => Self::Beckmann(BeckmannDistribution::new(roughness)),
            "GGX" => Self::GGX(GGXDistribution::new(roughness)),
            _ => {
                debug!("Unknown microfacet distribution '{}'; using GGX", name);
                Self::GGX(GGXDistribution::new(roughness))
            }
        }
    }

    /// Returns the roughness parameter the distribution was built with.
    pub fn roughness(&self) -> Float {
        match self {
            Self::Blinn(d) => d.roughness,
            Self::Beckmann(d) => d.roughness,
            Self::GGX(d) => d.roughness,
        }
    }

    /// Return the differential area of microfacets oriented with the surface
    /// normal `wh`.
    ///
    /// * `wh` - A sample normal from the distrubition of normal vectors.
    pub fn d(&self, wh: &Vector3f) -> Float {
        match self {
            Self::Blinn(d) => d.d(wh),
            Self::Beckmann(d) => d.d(wh),
            Self::GGX(d) => d.d(wh),
        }
    }

    /// Returns a sample from the distribution of normal vectors, in the same
    /// hemisphere as `wo`.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_wh(&self, wo: &Vector3f, u: &Point2f) -> Vector3f {
        let wh = match self {
            Self::Blinn(d) => d.sample_wh(u),
            Self::Beckmann(d) => d.sample_wh(u),
            Self::GGX(d) => d.sample_wh(u),
        };
        if same_hemisphere(wo, &wh) {
            wh
        } else {
            -wh
        }
    }

    /// Evaluates the PDF for the given outgoing direction and sampled surface
    /// normal.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wh` - A sample normal from the distrubition of normal vectors.
    pub fn pdf(&self, _wo: &Vector3f, wh: &Vector3f) -> Float {
        self.d(wh) * abs_cos_theta(wh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RNG;
    use float_cmp::*;

    fn projected_area(distribution: &MicrofacetDistribution) -> Float {
        // ∫ D(wh) cos(θh) dωh over the hemisphere must be 1.
        let mut rng = RNG::new(11);
        let n = 200_000;
        let mut sum = 0.0;
        for _ in 0..n {
            let u = rng.uniform_point2f();
            let z = u[0];
            let r = (1.0 - z * z).max(0.0).sqrt();
            let phi = TWO_PI * u[1];
            let wh = Vector3f::new(r * phi.cos(), r * phi.sin(), z);
            sum += distribution.d(&wh) * z * TWO_PI;
        }
        sum / n as Float
    }

    #[test]
    fn unknown_name_falls_back_to_ggx() {
        assert!(matches!(
            MicrofacetDistribution::from_name("Phong", 0.5),
            MicrofacetDistribution::GGX(_)
        ));
    }

    #[test]
    fn distributions_are_normalized() {
        for name in ["Blinn", "Beckmann", "GGX"] {
            let d = MicrofacetDistribution::from_name(name, 0.8);
            let area = projected_area(&d);
            assert!(
                approx_eq!(Float, area, 1.0, epsilon = 0.05),
                "{} integrates to {}",
                name,
                area
            );
        }
    }

    #[test]
    fn off_normal_densities_match_closed_forms() {
        // cos θh = 0.96 and roughness 0.7, i.e. α = 0.49.
        let wh = Vector3f::new(0.28, 0.0, 0.96);
        for (name, expected) in [
            ("Blinn", 1.023_852_3),
            ("Beckmann", 1.095_213_7),
            ("GGX", 0.851_016_3),
        ] {
            let d = MicrofacetDistribution::from_name(name, 0.7).d(&wh);
            assert!(
                approx_eq!(Float, d, expected, epsilon = 1e-4),
                "{} = {}, expected {}",
                name,
                d,
                expected
            );
        }
    }

    #[test]
    fn sampled_normals_follow_wo() {
        let d = MicrofacetDistribution::from_name("GGX", 0.3);
        let wo = Vector3f::new(0.0, 0.3, -1.0).normalize();
        let wh = d.sample_wh(&wo, &Point2f::new(0.3, 0.6));
        assert!(wh.z < 0.0);
    }
}
