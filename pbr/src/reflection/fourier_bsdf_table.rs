//! Fourier BSDF Table

use super::bsdf_reader::*;
use crate::interpolation::*;
use crate::pbrt::*;

/// The first 8 bytes of a Fourier BSDF file are the header `SCATFUN`
/// terminated with char `0x01`.
pub const FOURIER_HEADER: [u8; 8] = [b'S', b'C', b'A', b'T', b'F', b'U', b'N', b'\x01'];

/// Stores the measured Fourier BSDF data.
#[derive(Clone, Debug, PartialEq)]
pub struct FourierBSDFTable {
    /// Relative index of refraction over the surface boundary between two media.
    pub eta: Float,

    /// Maximum order `m` for any pair of μi, μj directions used to allocate
    /// ak coefficients.
    pub m_max: usize,

    /// Number of spectral channels available:
    /// 1: Monochromatic BSDF
    /// 3: BSDF with RGB colors (stored as luminence, red, blue values)
    pub n_channels: usize,

    /// Zenith angles stored in sorted order from low to high.
    pub mu: Vec<Float>,

    /// The order `m` of the Fourier representation for each pair of zenith
    /// angle cosines μi, μo; a `mu.len() x mu.len()` matrix.
    pub m: Vec<usize>,

    /// The coefficients for all pairs of discretized direction `mu`.
    pub a: Vec<Float>,

    /// Offsets into `a`. For the 3 color channel case, the first `m`
    /// coefficients after `a[offset]` encode luminance, the next `m` the red
    /// channel and then blue follows.
    pub a_offset: Vec<usize>,

    /// First coefficient a0.
    pub a0: Vec<Float>,

    /// CDF values.
    pub cdf: Vec<Float>,
}

impl FourierBSDFTable {
    /// Loads a `FourierBSDFTable` from a binary file.
    ///
    /// * `path` - The path to the BSDF binary file.
    pub fn from_file(path: &str) -> TableResult<Self> {
        let mut file = open_file(path)?;
        file.check_header(&FOURIER_HEADER)?;

        let flags = file.read_i32_le()?;
        let n_mu = file.read_size()?;
        let n_coeffs = file.read_size()?;
        let m_max = file.read_size()?;
        let n_channels = file.read_size()?;
        let n_bases = file.read_size()?;
        let _unused = file.read_ints(3)?;
        let eta = file.read_f32_le()?;
        let _unused = file.read_ints(4)?;

        // Only monochromatic and RGB files with uniform (i.e. non-textured)
        // material properties are supported.
        if flags != 1 || (n_channels != 1 && n_channels != 3) || n_bases != 1 {
            return Err(TableError::Unsupported(format!(
                "flags={}, channels={}, bases={}",
                flags, n_channels, n_bases
            )));
        }

        let n_pairs = table_size(&[n_mu, n_mu])?;
        let mu = file.read_floats(n_mu)?;
        let cdf = file.read_floats(n_pairs)?;
        let offset_and_length = file.read_ints(table_size(&[n_pairs, 2])?)?;
        let a = file.read_floats(n_coeffs)?;

        let mut a0 = vec![0.0; n_pairs];
        let mut a_offset = vec![0_usize; n_pairs];
        let mut m = vec![0_usize; n_pairs];
        let mut m_used = 0;
        for i in 0..n_pairs {
            let offset = usize::try_from(offset_and_length[2 * i]).ok();
            let length = usize::try_from(offset_and_length[2 * i + 1]).ok();
            let (offset, length) = match (offset, length) {
                (Some(offset), Some(length)) => (offset, length),
                _ => {
                    return Err(TableError::Unsupported(format!(
                        "negative coefficient range for pair {}",
                        i
                    )))
                }
            };
            length
                .checked_mul(n_channels)
                .and_then(|n| n.checked_add(offset))
                .filter(|&end| length <= m_max && end <= n_coeffs)
                .ok_or(TableError::SizeMismatch {
                    expected: n_coeffs,
                    found: offset.saturating_add(length.saturating_mul(n_channels)),
                })?;

            a_offset[i] = offset;
            m[i] = length;
            m_used = max(m_used, length);
            a0[i] = if length > 0 { a[offset] } else { 0.0 };
        }

        // Evaluation allocates `m_max * n_channels` coefficients, so keep the
        // largest order actually stored rather than the declared one.
        let m_max = m_used;

        Ok(Self {
            eta,
            m_max,
            n_channels,
            mu,
            m,
            a,
            a_offset,
            a0,
            cdf,
        })
    }

    /// For offsets into the `mu` array for incident and outgoing direction
    /// cosines, returns the order `m` of coefficients for them and their
    /// coefficients in `a`.
    ///
    /// * `offset_i` - Offset for incident direction.
    /// * `offset_o` - Offset for outgoing direction.
    pub fn get_ak(&self, offset_i: usize, offset_o: usize) -> (usize, &[Float]) {
        let offset = offset_o * self.mu.len() + offset_i;
        (self.m[offset], &self.a[self.a_offset[offset]..])
    }

    /// Returns Catmull-Rom weights and index offset for a given zenith angle.
    ///
    /// * `cos_theta` - The zenith angle to interpolate from `mu`.
    pub fn get_weights_and_offset(&self, cos_theta: Float) -> Option<([Float; 4], isize)> {
        catmull_rom_weights(&self.mu, cos_theta)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    /// Writes a monochrome table where every (μi, μo) pair has the single
    /// coefficient `a0`.
    pub fn write_constant_table(name: &str, a0: f32) -> PathBuf {
        let mu: [f32; 3] = [-1.0, 0.0, 1.0];
        let n_mu = mu.len();
        let n = n_mu * n_mu;

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&FOURIER_HEADER);
        let header_ints: [i32; 6] = [1, n_mu as i32, n as i32, 1, 1, 1];
        for v in header_ints {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        for _ in 0..3 {
            bytes.extend_from_slice(&0_i32.to_le_bytes());
        }
        bytes.extend_from_slice(&1.0_f32.to_le_bytes());
        for _ in 0..4 {
            bytes.extend_from_slice(&0_i32.to_le_bytes());
        }
        for v in mu {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        for _ in 0..n {
            bytes.extend_from_slice(&0.0_f32.to_le_bytes());
        }
        for i in 0..n {
            bytes.extend_from_slice(&(i as i32).to_le_bytes());
            bytes.extend_from_slice(&1_i32.to_le_bytes());
        }
        for _ in 0..n {
            bytes.extend_from_slice(&a0.to_le_bytes());
        }

        let path = std::env::temp_dir().join(format!("{}-{}.bsdf", name, std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&bytes).unwrap();
        path
    }

    #[test]
    fn loads_a_constant_table() {
        let path = write_constant_table("fourier-load", 0.5);
        let table = FourierBSDFTable::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(table.mu.len(), 3);
        assert_eq!(table.m_max, 1);
        assert_eq!(table.n_channels, 1);
        assert!(table.a0.iter().all(|&a| a == 0.5));
    }

    /// Writes a Fourier file with the given header values and nothing else.
    fn write_header_only(name: &str, header_ints: [i32; 6]) -> PathBuf {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&FOURIER_HEADER);
        for v in header_ints {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        bytes.extend_from_slice(&[0_u8; 32]);

        let path = std::env::temp_dir().join(format!("{}-{}.bsdf", name, std::process::id()));
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn negative_mu_count_is_unsupported() {
        let path = write_header_only("fourier-negative-mu", [1, -1, 4, 1, 1, 1]);
        assert!(matches!(
            FourierBSDFTable::from_file(path.to_str().unwrap()),
            Err(TableError::Unsupported(_))
        ));
    }

    #[test]
    fn huge_counts_fail_without_allocating() {
        let path = write_header_only("fourier-huge", [1, i32::MAX, i32::MAX, i32::MAX, 3, 1]);
        assert!(matches!(
            FourierBSDFTable::from_file(path.to_str().unwrap()),
            Err(TableError::Io(_))
        ));
    }

    #[test]
    fn declared_order_is_tightened_to_stored_order() {
        let path = write_constant_table("fourier-order", 0.25);
        let table = FourierBSDFTable::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(table.m_max, *table.m.iter().max().unwrap());
    }

    #[test]
    fn rejects_wrong_header() {
        let path = std::env::temp_dir().join(format!("fourier-bad-{}.bsdf", std::process::id()));
        std::fs::write(&path, b"NOTABSDF-and-some-more-bytes").unwrap();
        assert!(matches!(
            FourierBSDFTable::from_file(path.to_str().unwrap()),
            Err(TableError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        assert!(matches!(
            FourierBSDFTable::from_file("/no/such/file.bsdf"),
            Err(TableError::Open { .. })
        ));
    }
}
