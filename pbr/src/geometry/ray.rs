//! Rays

use super::*;
use crate::pbrt::*;

/// A semi-infinite line specified by its origin and direction, valid over
/// the parametric range `[t_min, t_max]`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Ray {
    /// Origin.
    pub o: Point3f,

    /// Direction.
    pub d: Vector3f,

    /// Minimum extent of the ray.
    pub t_min: Float,

    /// Maximum extent of the ray.
    pub t_max: Float,
}

impl Ray {
    /// Returns a ray starting at its origin and extending to infinity.
    ///
    /// * `o` - Origin.
    /// * `d` - Direction.
    pub fn new(o: Point3f, d: Vector3f) -> Self {
        Self {
            o,
            d,
            t_min: 0.0,
            t_max: INFINITY,
        }
    }

    /// Returns a ray restricted to `[t_min, t_max]`.
    ///
    /// * `o`     - Origin.
    /// * `d`     - Direction.
    /// * `t_min` - Minimum extent of the ray.
    /// * `t_max` - Maximum extent of the ray.
    pub fn segment(o: Point3f, d: Vector3f, t_min: Float, t_max: Float) -> Self {
        Self { o, d, t_min, t_max }
    }

    /// Returns the position along the ray at a given parameter.
    ///
    /// * `t` - The parameter.
    pub fn at(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }

    /// Returns true if `t` lies in the ray's valid range.
    ///
    /// * `t` - The parameter.
    pub fn contains(&self, t: Float) -> bool {
        t > self.t_min && t < self.t_max
    }
}
