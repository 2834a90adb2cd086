//! Microfacet shadowing and masking terms

use crate::geometry::*;
use crate::pbrt::*;
use crate::reflection::*;

/// Geometric visibility term `G(wo, wi)` paired with a microfacet
/// distribution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum VisibilityTerm {
    /// `G = cos θi cos θo`.
    Implicit,

    /// Neumann-Neumann.
    Neumann,

    /// Kelemen and Szirmay-Kalos.
    Kelemen,

    /// Schlick's approximation with `k = α / 2`.
    Schlick { k: Float },

    /// Separable Smith for GGX.
    Smith { alpha: Float },

    /// Height-correlated Smith approximation.
    SmithJointApprox { alpha: Float },

    /// Cook-Torrance V-cavity.
    CookTorrance,
}

impl VisibilityTerm {
    /// Returns the visibility term for a name. Unrecognized names fall back to
    /// `Implicit`.
    ///
    /// * `name`      - Term name.
    /// * `roughness` - Roughness parameter value.
    pub fn from_name(name: &str, roughness: Float) -> Self {
        let alpha = super::roughness_to_alpha(roughness);
        match name {
            "Implicit" => Self::Implicit,
            "Neumann" => Self::Neumann,
            "Kelemen" => Self::Kelemen,
            "Schlick" => Self::Schlick { k: alpha * 0.5 },
            "Smith" => Self::Smith { alpha },
            "SmithJointApprox" => Self::SmithJointApprox { alpha },
            "CookTorrance" => Self::CookTorrance,
            _ => {
                debug!("Unknown visibility term '{}'; using Implicit", name);
                Self::Implicit
            }
        }
    }

    /// Returns the fraction of microfacets visible from both directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    /// * `wh` - Half vector.
    pub fn g(&self, wo: &Vector3f, wi: &Vector3f, wh: &Vector3f) -> Float {
        let n_o_l = abs_cos_theta(wi);
        let n_o_v = abs_cos_theta(wo);
        match self {
            Self::Implicit => n_o_l * n_o_v,
            Self::Neumann => n_o_l * n_o_v / max(n_o_l, n_o_v),
            Self::Kelemen => {
                let v_o_h = wo.abs_dot(wh);
                n_o_l * n_o_v / (v_o_h * v_o_h)
            }
            Self::Schlick { k } => {
                let g1 = |c: Float| c / (c * (1.0 - k) + k);
                g1(n_o_l) * g1(n_o_v)
            }
            Self::Smith { alpha } => {
                let a2 = alpha * alpha;
                let g1 = |c: Float| 2.0 * c / (c + (a2 + (1.0 - a2) * c * c).sqrt());
                g1(n_o_l) * g1(n_o_v)
            }
            Self::SmithJointApprox { alpha } => {
                let a = *alpha;
                let v = 0.5 / (n_o_l * (n_o_v * (1.0 - a) + a) + n_o_v * (n_o_l * (1.0 - a) + a));
                4.0 * n_o_l * n_o_v * v
            }
            Self::CookTorrance => {
                let n_o_h = abs_cos_theta(wh);
                let v_o_h = wo.abs_dot(wh);
                min(
                    1.0,
                    min(2.0 * n_o_h * n_o_v / v_o_h, 2.0 * n_o_h * n_o_l / v_o_h),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    const NAMES: [&str; 7] = [
        "Implicit",
        "Neumann",
        "Kelemen",
        "Schlick",
        "Smith",
        "SmithJointApprox",
        "CookTorrance",
    ];

    #[test]
    fn unknown_name_falls_back_to_implicit() {
        assert_eq!(VisibilityTerm::from_name("Walter", 0.4), VisibilityTerm::Implicit);
    }

    #[test]
    fn normal_incidence_values() {
        let n = Vector3f::new(0.0, 0.0, 1.0);
        for name in NAMES {
            let g = VisibilityTerm::from_name(name, 0.5).g(&n, &n, &n);
            assert!(approx_eq!(Float, g, 1.0, epsilon = 1e-5), "{} = {}", name, g);
        }
    }

    #[test]
    fn off_normal_values_match_closed_forms() {
        // cos θo = 0.28, cos θi = 0.8 and roughness 0.5, i.e. α = 0.25.
        let wo = Vector3f::new(0.96, 0.0, 0.28);
        let wi = Vector3f::new(0.0, 0.6, 0.8);
        let wh = (wo + wi).normalize();
        let expected: [Float; 7] = [
            0.224,
            0.28,
            0.366_013_07,
            0.733_824_7,
            0.855_700_3,
            0.739_273_9,
            0.494_117_65,
        ];
        for (name, expected) in NAMES.iter().zip(expected) {
            let g = VisibilityTerm::from_name(name, 0.5).g(&wo, &wi, &wh);
            assert!(
                approx_eq!(Float, g, expected, epsilon = 1e-5),
                "{} = {}, expected {}",
                name,
                g,
                expected
            );
        }
    }

    proptest! {
        #[test]
        fn terms_are_non_negative(
            name in 0..NAMES.len(),
            roughness in 0.05..1.0f32,
            ox in -0.9..0.9f32,
            ix in -0.9..0.9f32,
        ) {
            let wo = Vector3f::new(ox, 0.1, 1.0).normalize();
            let wi = Vector3f::new(ix, -0.2, 1.0).normalize();
            let wh = (wo + wi).normalize();
            let g = VisibilityTerm::from_name(NAMES[name], roughness).g(&wo, &wi, &wh);
            prop_assert!(g >= 0.0);
        }
    }
}
