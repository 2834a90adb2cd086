//! 3-D normals

use super::vector3::*;
use crate::pbrt::*;
use num_traits::Num;
use std::ops::{Mul, Neg};

/// A 3-D normal containing numeric values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Normal3<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,

    /// Z-coordinate.
    pub z: T,
}

/// 3-D normal containing `Float` values.
pub type Normal3f = Normal3<Float>;

impl Normal3f {
    /// Zero normal.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
}

impl<T: Num + Copy> Normal3<T> {
    /// Creates a new 3-D normal.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Returns the dot product with a vector.
    ///
    /// * `v` - The vector.
    pub fn dot(&self, v: &Vector3<T>) -> T {
        self.x * v.x + self.y * v.y + self.z * v.z
    }
}

impl<T: num_traits::Float> Normal3<T> {
    /// Returns the absolute value of the dot product with a vector.
    ///
    /// * `v` - The vector.
    pub fn abs_dot(&self, v: &Vector3<T>) -> T {
        self.dot(v).abs()
    }

    /// Returns the normal's length.
    pub fn length(&self) -> T {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns the unit normal.
    pub fn normalize(&self) -> Self {
        let l = self.length();
        Self::new(self.x / l, self.y / l, self.z / l)
    }

    /// Flips the normal so it lies in the same hemisphere as a vector.
    ///
    /// * `v` - The vector.
    pub fn face_forward(&self, v: &Vector3<T>) -> Self {
        if self.dot(v) < T::zero() {
            Self::new(-self.x, -self.y, -self.z)
        } else {
            *self
        }
    }
}

impl<T: Num + Neg<Output = T>> Neg for Normal3<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: Num + Copy> Mul<T> for Normal3<T> {
    type Output = Self;

    fn mul(self, f: T) -> Self::Output {
        Self::new(self.x * f, self.y * f, self.z * f)
    }
}

impl<T> From<Vector3<T>> for Normal3<T> {
    fn from(v: Vector3<T>) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

impl<T> From<Normal3<T>> for Vector3<T> {
    fn from(n: Normal3<T>) -> Self {
        Self { x: n.x, y: n.y, z: n.z }
    }
}
