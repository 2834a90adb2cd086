//! BxDF Nodes

use crate::tabulated::*;
use crate::value::*;
use pbr::reflection::*;

/// Distribution used when a microfacet node doesn't name one.
pub const DEFAULT_DISTRIBUTION: &str = "GGX";

/// Visibility term used when a microfacet node doesn't name one.
pub const DEFAULT_VISIBILITY: &str = "Implicit";

/// Nodes that turn their inputs into a single reflectance lobe.
#[derive(Clone, Debug, PartialEq)]
pub enum BxdfNode {
    Lambert {
        base_color: Input,
    },
    OrenNayar {
        base_color: Input,
        /// Standard deviation of the microfacet angle in radians.
        roughness: Input,
    },
    MicrofacetReflection {
        base_color: Input,
        distribution: String,
        visibility: String,
        roughness: Input,
        eta: Input,
        k: Input,
    },
    MicrofacetRefraction {
        base_color: Input,
        distribution: String,
        visibility: String,
        roughness: Input,
        in_ior: Input,
        ext_ior: Input,
    },
    Merl(TabulatedTable<MerlTable>),
    Fourier(TabulatedTable<FourierBSDFTable>),
}

impl BxdfNode {
    /// Create a Lambertian node.
    ///
    /// * `base_color` - Diffuse reflectance.
    pub fn lambert(base_color: Input) -> Self {
        Self::Lambert { base_color }
    }

    /// Create an Oren-Nayar node.
    ///
    /// * `base_color` - Diffuse reflectance.
    /// * `roughness`  - Standard deviation of the microfacet angle in radians.
    pub fn oren_nayar(base_color: Input, roughness: Input) -> Self {
        Self::OrenNayar {
            base_color,
            roughness,
        }
    }

    /// Create a microfacet reflection node with the default distribution and
    /// visibility term. Use struct syntax to pick others by name.
    ///
    /// * `base_color` - Reflectance.
    /// * `roughness`  - Roughness.
    /// * `eta`        - Index of refraction of the conductor.
    /// * `k`          - Absorption coefficient of the conductor.
    pub fn microfacet_reflection(
        base_color: Input,
        roughness: Input,
        eta: Input,
        k: Input,
    ) -> Self {
        Self::MicrofacetReflection {
            base_color,
            distribution: String::from(DEFAULT_DISTRIBUTION),
            visibility: String::from(DEFAULT_VISIBILITY),
            roughness,
            eta,
            k,
        }
    }

    /// Create a microfacet refraction node with the default distribution and
    /// visibility term.
    ///
    /// * `base_color` - Transmittance.
    /// * `roughness`  - Roughness.
    /// * `in_ior`     - Index of refraction inside the surface.
    /// * `ext_ior`    - Index of refraction outside the surface.
    pub fn microfacet_refraction(
        base_color: Input,
        roughness: Input,
        in_ior: Input,
        ext_ior: Input,
    ) -> Self {
        Self::MicrofacetRefraction {
            base_color,
            distribution: String::from(DEFAULT_DISTRIBUTION),
            visibility: String::from(DEFAULT_VISIBILITY),
            roughness,
            in_ior,
            ext_ior,
        }
    }

    /// Create a node for a measured MERL BRDF.
    ///
    /// * `path` - Path to the binary MERL file.
    pub fn merl(path: &str) -> Self {
        Self::Merl(TabulatedTable::new(path))
    }

    /// Create a node for a tabulated Fourier BSDF.
    ///
    /// * `path` - Path to the Fourier BSDF file.
    pub fn fourier(path: &str) -> Self {
        Self::Fourier(TabulatedTable::new(path))
    }

    /// Returns the input slots.
    pub fn inputs(&self) -> Vec<Input> {
        match self {
            Self::Lambert { base_color } => vec![*base_color],
            Self::OrenNayar {
                base_color,
                roughness,
            } => vec![*base_color, *roughness],
            Self::MicrofacetReflection {
                base_color,
                roughness,
                eta,
                k,
                ..
            } => vec![*base_color, *roughness, *eta, *k],
            Self::MicrofacetRefraction {
                base_color,
                roughness,
                in_ior,
                ext_ior,
                ..
            } => vec![*base_color, *roughness, *in_ior, *ext_ior],
            Self::Merl(_) | Self::Fourier(_) => vec![],
        }
    }

    /// Loads tabulated data once.
    pub fn post_process(&mut self) {
        match self {
            Self::Merl(table) => table.post_process(),
            Self::Fourier(table) => table.post_process(),
            _ => (),
        }
    }

    /// Builds the lobe from the evaluated inputs. Tabulated nodes without
    /// loaded data produce nothing.
    ///
    /// * `eval` - Resolves an input slot to its value.
    pub fn bxdf<F>(&self, eval: F) -> Option<BxDF>
    where
        F: Fn(&Input) -> NodeValue,
    {
        match self {
            Self::Lambert { base_color } => {
                Some(LambertianReflection::new(eval(base_color).to_spectrum()).into())
            }
            Self::OrenNayar {
                base_color,
                roughness,
            } => Some(
                OrenNayar::new(
                    eval(base_color).to_spectrum(),
                    eval(roughness).to_scalar(),
                )
                .into(),
            ),
            Self::MicrofacetReflection {
                base_color,
                distribution,
                visibility,
                roughness,
                eta,
                k,
            } => Some(
                MicrofacetReflection::from_names(
                    eval(base_color).to_spectrum(),
                    distribution,
                    visibility,
                    eval(roughness).to_scalar(),
                    eval(eta).to_spectrum(),
                    eval(k).to_spectrum(),
                )
                .into(),
            ),
            Self::MicrofacetRefraction {
                base_color,
                distribution,
                visibility,
                roughness,
                in_ior,
                ext_ior,
            } => Some(
                MicrofacetTransmission::from_names(
                    eval(base_color).to_spectrum(),
                    distribution,
                    visibility,
                    eval(roughness).to_scalar(),
                    eval(in_ior).to_scalar(),
                    eval(ext_ior).to_scalar(),
                )
                .into(),
            ),
            Self::Merl(table) => table.table().map(|t| MerlBRDF::new(t).into()),
            Self::Fourier(table) => table.table().map(|t| FourierBSDF::new(t).into()),
        }
    }
}
