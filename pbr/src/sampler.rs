//! Sampler

use crate::geometry::*;
use crate::pbrt::*;
use crate::rng::*;

/// Sample values used while computing radiance along one camera ray.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PixelSample {
    /// Position on the film.
    pub p_film: Point2f,

    /// 2D sample used when sampling lights.
    pub light_sample: Point2f,
}

impl PixelSample {
    /// Creates a pixel sample jittered within the pixel.
    ///
    /// * `pixel` - Pixel coordinates.
    /// * `rng`   - Random number generator.
    pub fn jittered(pixel: (usize, usize), rng: &mut RNG) -> Self {
        let jitter = rng.uniform_point2f();
        Self {
            p_film: Point2f::new(pixel.0 as Float + jitter.x, pixel.1 as Float + jitter.y),
            light_sample: rng.uniform_point2f(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jittered_sample_stays_in_pixel() {
        let mut rng = RNG::new(3);
        for _ in 0..64 {
            let s = PixelSample::jittered((4, 7), &mut rng);
            assert!(s.p_film.x >= 4.0 && s.p_film.x <= 5.0);
            assert!(s.p_film.y >= 7.0 && s.p_film.y <= 8.0);
            assert!(s.light_sample.x >= 0.0 && s.light_sample.x < 1.0);
        }
    }
}
