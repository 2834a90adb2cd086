//! Primitive List

use crate::geometry::*;
use crate::interaction::*;
use crate::primitive::*;

/// Aggregate that tests every primitive in turn. Each hit shortens the ray
/// so the closest intersection wins.
#[derive(Clone, Default)]
pub struct PrimitiveList {
    /// The primitives.
    pub primitives: Vec<ArcPrimitive>,
}

impl PrimitiveList {
    /// Create a new `PrimitiveList`.
    ///
    /// * `primitives` - The primitives.
    pub fn new(primitives: Vec<ArcPrimitive>) -> Self {
        debug!("Building primitive list with {} primitives", primitives.len());
        Self { primitives }
    }
}

impl Primitive for PrimitiveList {
    /// Returns the closest intersection along the ray and updates its t_max.
    ///
    /// * `r` - The ray.
    fn intersect(&self, r: &mut Ray) -> Option<SurfaceInteraction> {
        let mut closest = None;
        for primitive in self.primitives.iter() {
            if let Some(isect) = primitive.intersect(r) {
                closest = Some(isect);
            }
        }
        closest
    }

    /// Returns `true` if any primitive intersects the ray.
    ///
    /// * `r` - The ray.
    fn intersect_p(&self, r: &Ray) -> bool {
        self.primitives.iter().any(|p| p.intersect_p(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pbrt::*;
    use crate::primitives::*;
    use std::sync::Arc;

    /// Plane `z = height` facing +z.
    struct Plane {
        height: Float,
    }

    impl Shape for Plane {
        fn get_type(&self) -> &'static str {
            "plane"
        }

        fn intersect(&self, r: &Ray) -> Option<Intersection> {
            if r.d.z == 0.0 {
                return None;
            }
            let t = (self.height - r.o.z) / r.d.z;
            if !r.contains(t) {
                return None;
            }
            let isect = SurfaceInteraction::new(
                r.at(t),
                Point2f::ZERO,
                -r.d,
                Normal3f::new(0.0, 0.0, 1.0),
                Vector3f::new(1.0, 0.0, 0.0),
            );
            Some(Intersection::new(t, isect))
        }

        fn area(&self) -> Float {
            INFINITY
        }

        fn sample_area(&self, _u: &Point2f) -> (Hit, Float) {
            (Hit::default(), 0.0)
        }
    }

    fn plane(height: Float) -> ArcPrimitive {
        Arc::new(GeometricPrimitive::new(
            Arc::new(Plane { height }),
            None,
            None,
        ))
    }

    #[test]
    fn closest_hit_wins_regardless_of_order() {
        let list = PrimitiveList::new(vec![plane(1.0), plane(3.0), plane(2.0)]);
        let mut ray = Ray::new(Point3f::new(0.0, 0.0, 5.0), Vector3f::new(0.0, 0.0, -1.0));
        let isect = list.intersect(&mut ray).unwrap();
        assert_eq!(isect.hit.p.z, 3.0);
        assert_eq!(ray.t_max, 2.0);
    }

    #[test]
    fn segment_range_limits_hits() {
        let list = PrimitiveList::new(vec![plane(0.0)]);
        let short = Ray::segment(
            Point3f::new(0.0, 0.0, 5.0),
            Vector3f::new(0.0, 0.0, -1.0),
            0.0,
            4.0,
        );
        assert!(!list.intersect_p(&short));

        let long = Ray::segment(short.o, short.d, 0.0, 6.0);
        assert!(list.intersect_p(&long));
    }

    #[test]
    fn empty_list_misses() {
        let list = PrimitiveList::default();
        let mut ray = Ray::new(Point3f::new(0.0, 0.0, 0.0), Vector3f::new(0.0, 0.0, 1.0));
        assert!(list.intersect(&mut ray).is_none());
    }
}
