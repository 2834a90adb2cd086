//! Fourier Basis BSDF Model

use super::*;
use crate::interpolation::*;
use std::sync::Arc;

/// BSDF for modeling materials like metals with smooth or rough coatings and
/// fabrics which are often partially retro-reflective.
#[derive(Clone, Debug, PartialEq)]
pub struct FourierBSDF {
    /// BxDF type.
    bxdf_type: BxDFType,

    /// The BSDF data.
    bsdf_table: Arc<FourierBSDFTable>,
}

impl FourierBSDF {
    /// Creates a new instance of `FourierBSDF`.
    ///
    /// * `bsdf_table` - The BSDF data.
    pub fn new(bsdf_table: Arc<FourierBSDFTable>) -> Self {
        Self {
            bxdf_type: BxDFType::BSDF_REFLECTION
                | BxDFType::BSDF_TRANSMISSION
                | BxDFType::BSDF_GLOSSY,
            bsdf_table,
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
        let table = &self.bsdf_table;

        // Find the zenith angle cosines and azimuth difference angle.
        let mu_i = cos_theta(&(-*wi));
        let mu_o = cos_theta(wo);
        let cos_phi = cos_d_phi(&(-*wi), wo) as f64;

        // Determine offsets and weights for `(μi, μo)`.
        let (weights_i, offset_i) = match table.get_weights_and_offset(mu_i) {
            Some(v) => v,
            None => return Spectrum::ZERO,
        };
        let (weights_o, offset_o) = match table.get_weights_and_offset(mu_o) {
            Some(v) => v,
            None => return Spectrum::ZERO,
        };

        // Accumulate weighted sums of nearby `ak` coefficients.
        let mut ak = vec![0.0; table.m_max * table.n_channels];
        let mut m_max = 0;
        for (b, wtob) in weights_o.iter().enumerate() {
            for (a, wtia) in weights_i.iter().enumerate() {
                // Add contribution of `(a, b)` to `ak` values.
                let weight = wtia * wtob;
                if weight != 0.0 {
                    let (m, ap) = table.get_ak(
                        (offset_i + a as isize) as usize,
                        (offset_o + b as isize) as usize,
                    );
                    m_max = max(m_max, m);
                    for c in 0..table.n_channels {
                        for k in 0..m {
                            ak[c * table.m_max + k] += weight * ap[c * m + k];
                        }
                    }
                }
            }
        }

        // Evaluate Fourier expansion for angle ϕ.
        let y = max(0.0, fourier(&ak[0..m_max], cos_phi));
        let mut scale = if mu_i != 0.0 { 1.0 / abs(mu_i) } else { 0.0 };

        // Account for the radiance scaling across the interface.
        if mu_i * mu_o > 0.0 {
            let eta = if mu_i > 0.0 { 1.0 / table.eta } else { table.eta };
            scale *= eta * eta;
        }

        if table.n_channels == 1 {
            Spectrum::new(y * scale)
        } else {
            // Compute and return RGB colors for tabulated BSDF.
            let rs = table.m_max;
            let r = fourier(&ak[rs..rs + m_max], cos_phi);
            let bs = 2 * table.m_max;
            let b = fourier(&ak[bs..bs + m_max], cos_phi);
            let g = 1.39829 * y - 0.100913 * b - 0.297375 * r;
            Spectrum::from_rgb([r * scale, g * scale, b * scale]).clamp_default()
        }
    }
}

impl From<FourierBSDF> for BxDF {
    fn from(bxdf: FourierBSDF) -> Self {
        Self::FourierBSDF(bxdf)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fourier_bsdf_table::tests::write_constant_table;
    use super::*;
    use float_cmp::*;

    #[test]
    fn constant_table_gives_scaled_value() {
        let path = write_constant_table("fourier-eval", 0.4);
        let table = FourierBSDFTable::from_file(path.to_str().unwrap()).unwrap();
        let bxdf = FourierBSDF::new(Arc::new(table));

        // Transmission straight through: μi = μo = 1 so no eta scaling.
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let wi = Vector3f::new(0.0, 0.0, -1.0);
        let f = bxdf.f(&wo, &wi);
        assert!(approx_eq!(Float, f[0], 0.4, epsilon = 1e-5));
    }
}
