//! RGB Spectrum.

#![allow(dead_code)]

use crate::pbrt::*;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Number of spectral samples to use for `RGBSpectrum`.
pub const RGB_SAMPLES: usize = 3;

/// RGBSpectrum represents an spectral power distribution (SPD) with
/// a weighted sum of red, green and blue components.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RGBSpectrum {
    /// The sampled spectral values.
    c: [Float; RGB_SAMPLES],
}

impl RGBSpectrum {
    /// Black.
    pub const ZERO: Self = Self { c: [0.0; RGB_SAMPLES] };

    /// White.
    pub const ONE: Self = Self { c: [1.0; RGB_SAMPLES] };

    /// Create a new `RGBSpectrum` with a constant value across all
    /// wavelengths.
    ///
    /// * `v` - Constant value.
    pub fn new(v: Float) -> Self {
        Self { c: [v; RGB_SAMPLES] }
    }

    /// Create a new `RGBSpectrum` from red, green and blue values.
    ///
    /// * `rgb` - RGB value.
    pub fn from_rgb(rgb: [Float; RGB_SAMPLES]) -> Self {
        Self { c: rgb }
    }

    /// Convert the SPD to RGB cooefficients.
    pub fn to_rgb(&self) -> [Float; RGB_SAMPLES] {
        self.c
    }

    /// Returns true if all sample values are zero.
    pub fn is_black(&self) -> bool {
        self.c.iter().all(|&v| v == 0.0)
    }

    /// Returns true if any sample value is NaN.
    pub fn has_nans(&self) -> bool {
        self.c.iter().any(|v| v.is_nan())
    }

    /// Returns true if any sample value is infinite.
    pub fn has_infs(&self) -> bool {
        self.c.iter().any(|v| v.is_infinite())
    }

    /// Returns the y-coefficient of XYZ colour.
    pub fn y(&self) -> Float {
        0.212671 * self.c[0] + 0.715160 * self.c[1] + 0.072169 * self.c[2]
    }

    /// Returns the maximum sample value.
    pub fn max_component_value(&self) -> Float {
        max(self.c[0], max(self.c[1], self.c[2]))
    }

    /// Takes the square root of all sample values.
    pub fn sqrt(&self) -> Self {
        Self {
            c: [self.c[0].sqrt(), self.c[1].sqrt(), self.c[2].sqrt()],
        }
    }

    /// Applies a function to each sample value.
    ///
    /// * `f` - The function.
    pub fn map<F: Fn(Float) -> Float>(&self, f: F) -> Self {
        Self {
            c: [f(self.c[0]), f(self.c[1]), f(self.c[2])],
        }
    }
}

impl Add for RGBSpectrum {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            c: [self.c[0] + other.c[0], self.c[1] + other.c[1], self.c[2] + other.c[2]],
        }
    }
}

impl AddAssign for RGBSpectrum {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for RGBSpectrum {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self {
            c: [self.c[0] - other.c[0], self.c[1] - other.c[1], self.c[2] - other.c[2]],
        }
    }
}

impl SubAssign for RGBSpectrum {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul for RGBSpectrum {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Self {
            c: [self.c[0] * other.c[0], self.c[1] * other.c[1], self.c[2] * other.c[2]],
        }
    }
}

impl Mul<Float> for RGBSpectrum {
    type Output = Self;

    fn mul(self, f: Float) -> Self::Output {
        self.map(|v| v * f)
    }
}

impl Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;

    fn mul(self, s: RGBSpectrum) -> Self::Output {
        s * self
    }
}

impl MulAssign for RGBSpectrum {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl MulAssign<Float> for RGBSpectrum {
    fn mul_assign(&mut self, f: Float) {
        *self = *self * f;
    }
}

impl Div for RGBSpectrum {
    type Output = Self;

    fn div(self, other: Self) -> Self::Output {
        Self {
            c: [self.c[0] / other.c[0], self.c[1] / other.c[1], self.c[2] / other.c[2]],
        }
    }
}

impl Div<Float> for RGBSpectrum {
    type Output = Self;

    fn div(self, f: Float) -> Self::Output {
        debug_assert!(f != 0.0);
        let inv = 1.0 / f;
        self * inv
    }
}

impl DivAssign<Float> for RGBSpectrum {
    fn div_assign(&mut self, f: Float) {
        *self = *self / f;
    }
}

impl Neg for RGBSpectrum {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

impl Index<usize> for RGBSpectrum {
    type Output = Float;

    /// Return the sample value at given index.
    ///
    /// * `i` - The index.
    fn index(&self, i: usize) -> &Self::Output {
        &self.c[i]
    }
}

impl IndexMut<usize> for RGBSpectrum {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.c[i]
    }
}

impl Clamp<Float> for RGBSpectrum {
    /// Clamps the sample values.
    ///
    /// * `low`  - Low value.
    /// * `high` - High value.
    fn clamp(&self, low: Float, high: Float) -> Self {
        self.map(|v| clamp(v, low, high))
    }

    /// Clamps the values to [0.0, INFINITY].
    fn clamp_default(&self) -> Self {
        Clamp::clamp(self, 0.0, INFINITY)
    }
}

impl fmt::Display for RGBSpectrum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.c[0], self.c[1], self.c[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_detection() {
        assert!(RGBSpectrum::ZERO.is_black());
        assert!(!RGBSpectrum::from_rgb([0.0, 0.1, 0.0]).is_black());
    }

    #[test]
    fn arithmetic_is_per_channel() {
        let a = RGBSpectrum::from_rgb([1.0, 2.0, 3.0]);
        let b = RGBSpectrum::from_rgb([2.0, 2.0, 2.0]);
        assert_eq!(a * b, RGBSpectrum::from_rgb([2.0, 4.0, 6.0]));
        assert_eq!(a + b, RGBSpectrum::from_rgb([3.0, 4.0, 5.0]));
        assert_eq!(a / 2.0, RGBSpectrum::from_rgb([0.5, 1.0, 1.5]));
        assert_eq!(a.max_component_value(), 3.0);
    }

    #[test]
    fn clamp_default_removes_negatives() {
        let s = RGBSpectrum::from_rgb([-1.0, 0.5, 2.0]).clamp_default();
        assert_eq!(s, RGBSpectrum::from_rgb([0.0, 0.5, 2.0]));
    }
}
