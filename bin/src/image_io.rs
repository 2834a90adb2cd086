//! Image output

use image::{ImageBuffer, Rgb, RgbImage};
use pbr::pbrt::*;

/// Writes the image in an 8-bit image format chosen by the file extension.
///
/// * `path`  - Output file path.
/// * `rgb`   - Floating point RGB pixel data.
/// * `res_x` - X resolution.
/// * `res_y` - Y resolution.
pub fn write_8_bit(path: &str, rgb: &[Float], res_x: u32, res_y: u32) -> Result<(), String> {
    info!("Writing image {path} with resolution {res_x}x{res_y}");

    let mut imgbuf: RgbImage = ImageBuffer::new(res_x, res_y);
    for (offset, (_x, _y, pixel)) in imgbuf.enumerate_pixels_mut().enumerate() {
        let o = 3 * offset;
        *pixel = Rgb(apply_gamma(&[rgb[o], rgb[o + 1], rgb[o + 2]]));
    }

    imgbuf
        .save(path)
        .map_err(|err| format!("Error saving output image {path}: {err}."))
}

/// Apply gamma correction and convert to 8-bit values.
///
/// * `rgb` - Floating point RGB values.
fn apply_gamma(rgb: &[Float; 3]) -> [u8; 3] {
    [clamp_byte(rgb[0]), clamp_byte(rgb[1]), clamp_byte(rgb[2])]
}

/// Clamp floating point value to 8-bit range [0, 255].
///
/// * `v` - Value to clamp.
#[inline]
fn clamp_byte(v: Float) -> u8 {
    clamp(255.0 * gamma_correct(v) + 0.5, 0.0, 255.0) as u8
}
