//! MERL Measured BRDF

use super::bsdf_reader::*;
use super::*;
use std::sync::Arc;

/// Number of half-angle θ samples.
pub const MERL_SAMPLING_RES_THETA_H: usize = 90;

/// Number of difference-angle θ samples.
pub const MERL_SAMPLING_RES_THETA_D: usize = 90;

/// Number of difference-angle ϕ samples. Reciprocity halves the stored range.
pub const MERL_SAMPLING_RES_PHI_D: usize = 360;

/// Number of samples per color channel.
pub const MERL_SAMPLES: usize =
    MERL_SAMPLING_RES_THETA_H * MERL_SAMPLING_RES_THETA_D * MERL_SAMPLING_RES_PHI_D / 2;

const RED_SCALE: Float = 1.0 / 1500.0;
const GREEN_SCALE: Float = 1.15 / 1500.0;
const BLUE_SCALE: Float = 1.66 / 1500.0;

/// Stores the measured MERL isotropic BRDF samples for 3 channels.
#[derive(Clone, Debug, PartialEq)]
pub struct MerlTable {
    samples: Vec<Float>,
}

impl MerlTable {
    /// Loads a MERL binary file. The file starts with 3 32-bit integers
    /// holding the resolution, followed by 3 channels of 64-bit samples.
    ///
    /// * `path` - The path to the MERL binary file.
    pub fn from_file(path: &str) -> TableResult<Self> {
        let mut file = open_file(path)?;

        let dims = [file.read_size()?, file.read_size()?, file.read_size()?];
        let found = table_size(&dims)?;
        if found != MERL_SAMPLES {
            return Err(TableError::SizeMismatch {
                expected: MERL_SAMPLES,
                found,
            });
        }

        let samples = file
            .read_doubles(3 * MERL_SAMPLES)?
            .into_iter()
            .map(|v| v as Float)
            .collect();

        Ok(Self { samples })
    }

    /// Returns the RGB value stored for the half/difference angles.
    ///
    /// * `theta_half` - Half-angle θ.
    /// * `theta_diff` - Difference-angle θ.
    /// * `phi_diff`   - Difference-angle ϕ.
    pub fn lookup(&self, theta_half: Float, theta_diff: Float, phi_diff: Float) -> Spectrum {
        let index = phi_diff_index(phi_diff)
            + theta_diff_index(theta_diff) * MERL_SAMPLING_RES_PHI_D / 2
            + theta_half_index(theta_half)
                * MERL_SAMPLING_RES_PHI_D
                / 2
                * MERL_SAMPLING_RES_THETA_D;

        Spectrum::from_rgb([
            self.samples[index] * RED_SCALE,
            self.samples[index + MERL_SAMPLES] * GREEN_SCALE,
            self.samples[index + 2 * MERL_SAMPLES] * BLUE_SCALE,
        ])
        .clamp_default()
    }
}

/// Maps half-angle θ to an index with a square root warp that concentrates
/// samples near the specular peak.
fn theta_half_index(theta_half: Float) -> usize {
    if theta_half <= 0.0 {
        return 0;
    }
    let t = (theta_half / PI_OVER_TWO).sqrt() * MERL_SAMPLING_RES_THETA_H as Float;
    clamp(t as usize, 0, MERL_SAMPLING_RES_THETA_H - 1)
}

fn theta_diff_index(theta_diff: Float) -> usize {
    let t = max(0.0, theta_diff / PI_OVER_TWO * MERL_SAMPLING_RES_THETA_D as Float);
    clamp(t as usize, 0, MERL_SAMPLING_RES_THETA_D - 1)
}

fn phi_diff_index(phi_diff: Float) -> usize {
    // Reciprocity: the BRDF is unchanged by ϕd -> ϕd + π.
    let phi_diff = if phi_diff < 0.0 { phi_diff + PI } else { phi_diff };
    let t = max(0.0, phi_diff / PI * (MERL_SAMPLING_RES_PHI_D / 2) as Float);
    clamp(t as usize, 0, MERL_SAMPLING_RES_PHI_D / 2 - 1)
}

/// Rotates a vector about a unit axis.
fn rotate(v: &Vector3f, axis: &Vector3f, angle: Float) -> Vector3f {
    let (sin, cos) = angle.sin_cos();
    *v * cos + *axis * (axis.dot(v) * (1.0 - cos)) + axis.cross(v) * sin
}

/// Converts a pair of directions to the half/difference parameterization
/// `(θh, θd, ϕd)`.
fn half_diff_angles(wo: &Vector3f, wi: &Vector3f) -> (Float, Float, Float) {
    let wh = (*wo + *wi).normalize();
    let theta_half = safe_acos(wh.z);
    let phi_half = wh.y.atan2(wh.x);

    let z_axis = Vector3f::new(0.0, 0.0, 1.0);
    let y_axis = Vector3f::new(0.0, 1.0, 0.0);
    let tmp = rotate(wi, &z_axis, -phi_half);
    let diff = rotate(&tmp, &y_axis, -theta_half);

    (theta_half, safe_acos(diff.z), diff.y.atan2(diff.x))
}

/// BRDF backed by measured MERL data.
#[derive(Clone, Debug, PartialEq)]
pub struct MerlBRDF {
    /// BxDF type.
    bxdf_type: BxDFType,

    /// The measured data.
    table: Arc<MerlTable>,
}

impl MerlBRDF {
    /// Create a new instance of `MerlBRDF`.
    ///
    /// * `table` - The measured data.
    pub fn new(table: Arc<MerlTable>) -> Self {
        Self {
            bxdf_type: BxDFType::BSDF_REFLECTION | BxDFType::BSDF_GLOSSY,
            table,
        }
    }

    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        self.bxdf_type
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        if !same_hemisphere(wo, wi) || cos_theta(wo) <= 0.0 || cos_theta(wi) <= 0.0 {
            return Spectrum::ZERO;
        }

        let (theta_half, theta_diff, phi_diff) = half_diff_angles(wo, wi);
        self.table.lookup(theta_half, theta_diff, phi_diff)
    }
}

impl From<MerlBRDF> for BxDF {
    fn from(bxdf: MerlBRDF) -> Self {
        Self::Merl(bxdf)
    }
}
