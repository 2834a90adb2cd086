//! Interactions

#![allow(dead_code)]

use crate::geometry::*;
use crate::pbrt::*;

mod surface_interaction;

pub use surface_interaction::*;

/// Offset applied to the start of rays spawned from a surface point.
pub const RAY_EPSILON: Float = 1e-4;

/// Hit provides common data shared by surface points and light sample points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Hit {
    /// Point of interaction.
    pub p: Point3f,

    /// The negative ray direction (outgoing direction used when computing
    /// lighting at points).
    pub wo: Vector3f,

    /// Surface normal at the point `p`.
    pub n: Normal3f,
}

impl Hit {
    /// Create a new hit.
    ///
    /// NOTE: If you need to contruct a new `Hit` without `wo` and `n` use
    /// `Hit::new_minimal()`. This function calls `wo.normalize()` and will
    /// generate weird values for zero vectors.
    ///
    /// `p`  - Point of interaction.
    /// `wo` - The negative ray direction.
    /// `n`  - Surface normal at the point `p`.
    pub fn new(p: Point3f, wo: Vector3f, n: Normal3f) -> Self {
        Self {
            p,
            wo: wo.normalize(),
            n,
        }
    }

    /// Create a new hit from a point only.
    ///
    /// `p` - Point of interaction.
    pub fn new_minimal(p: Point3f) -> Self {
        Self {
            p,
            wo: Vector3f::ZERO,
            n: Normal3f::ZERO,
        }
    }

    /// Returns `true` if this is a surface interaction.
    pub fn is_surface_interaction(&self) -> bool {
        self.n != Normal3f::ZERO
    }

    /// Spawn's a new ray in the given direction.
    ///
    /// * `d` - The new direction.
    pub fn spawn_ray(&self, d: &Vector3f) -> Ray {
        Ray::segment(self.p, *d, RAY_EPSILON, INFINITY)
    }

    /// Spawn's a unit direction ray towards another point. The segment stops
    /// `epsilon` short of both end points.
    ///
    /// * `p`       - The target point.
    /// * `epsilon` - Distance excluded at both ends of the segment.
    pub fn spawn_ray_to_point(&self, p: &Point3f, epsilon: Float) -> Ray {
        let d = *p - self.p;
        let dist = d.length();
        Ray::segment(self.p, d / dist, epsilon, dist - epsilon)
    }
}

/// Stores the intersection of a ray with a shape.
#[derive(Clone)]
pub struct Intersection {
    /// Parametric distance along the ray to the intersection.
    pub t: Float,

    /// The surface interaction at the intersection.
    pub isect: SurfaceInteraction,
}

impl Intersection {
    /// Create a new intersection.
    ///
    /// * `t`     - Parametric distance along the ray.
    /// * `isect` - The surface interaction.
    pub fn new(t: Float, isect: SurfaceInteraction) -> Self {
        Self { t, isect }
    }
}
