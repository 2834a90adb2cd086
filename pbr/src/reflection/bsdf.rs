//! BSDF

use super::*;
use crate::interaction::*;
use crate::rng::*;

/// BSDF interface represents a collection of weighted BRDFs and BTDFs.
#[derive(Clone, Debug)]
pub struct BSDF {
    /// The shading normal given by per-vertex normals and/or bump mapping.
    /// It is the first axis in the orthonormal coordinate system and also
    /// used to define hemispheres for integrating incident illumincation for
    /// surface reflection.
    pub ns: Normal3f,

    /// The geometric normal defined by surface geometry.
    pub ng: Normal3f,

    /// Second axis for the orthonormal coordinate system.
    pub ss: Vector3f,

    /// Third axis for the orthonormal coordinate system.
    pub ts: Vector3f,

    /// The weighted `BxDFs` in the order they were added.
    pub bxdfs: Vec<ScaledBxDF>,
}

impl BSDF {
    /// Creates a new `BSDF` with no lobes. The shading frame is built from
    /// the shading normal and `∂p/∂u`; a degenerate tangent is replaced with an
    /// arbitrary one perpendicular to the normal.
    ///
    /// * `si` - The differential geometry at the point on a surface.
    pub fn new(si: &SurfaceInteraction) -> Self {
        let ns = si.shading.n;
        let n = Vector3f::from(ns);
        let dpdu = si.shading.dpdu;
        let tangent = dpdu - n * n.dot(&dpdu);

        let ss = if tangent.length_squared() > 0.0 {
            tangent.normalize()
        } else {
            coordinate_system(&n).0
        };

        Self {
            ns,
            ng: si.hit.n,
            ss,
            ts: n.cross(&ss),
            bxdfs: vec![],
        }
    }

    /// Add a weighted `BxDF`.
    ///
    /// * `bxdf`   - The `BxDF`.
    /// * `weight` - Weight multiplied into every evaluation of the lobe.
    pub fn add(&mut self, bxdf: BxDF, weight: Float) {
        self.bxdfs.push(ScaledBxDF::new(bxdf, weight));
    }

    /// Returns the number of `BxDF`s that match the given type.
    ///
    /// * `bxdf_type` - The `BxdFType` to match.
    pub fn num_components(&self, bxdf_type: BxDFType) -> usize {
        self.bxdfs
            .iter()
            .filter(|b| b.matches_flags(bxdf_type))
            .count()
    }

    /// Transforms a vector from world space to local space.
    ///
    /// * `v` - The vector to transform.
    pub fn world_to_local(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.ss), v.dot(&self.ts), self.ns.dot(v))
    }

    /// Transforms a vector from local space to world space.
    ///
    /// * `v` - The vector to transform.
    pub fn local_to_world(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(
            self.ss.x * v.x + self.ts.x * v.y + self.ns.x * v.z,
            self.ss.y * v.x + self.ts.y * v.y + self.ns.y * v.z,
            self.ss.z * v.x + self.ts.z * v.y + self.ns.z * v.z,
        )
    }

    /// Sums the matching lobes that scatter from `wo` into `wi`. Reflection
    /// lobes only contribute when both directions lie on the same side of the
    /// geometric normal, transmission lobes only when they don't.
    fn sum_f(
        &self,
        wo_w: &Vector3f,
        wi_w: &Vector3f,
        wo: &Vector3f,
        wi: &Vector3f,
        bxdf_type: BxDFType,
    ) -> Spectrum {
        let reflect = self.ng.dot(wi_w) * self.ng.dot(wo_w) > 0.0;
        let mut f = Spectrum::ZERO;
        for bxdf in self.bxdfs.iter() {
            let t = bxdf.get_type();
            if bxdf.matches_flags(bxdf_type)
                && ((reflect && t.contains(BxDFType::BSDF_REFLECTION))
                    || (!reflect && t.contains(BxDFType::BSDF_TRANSMISSION)))
            {
                f += bxdf.f(wo, wi);
            }
        }
        f
    }

    /// Returns the BSDF evaluated for a pair of directions.
    ///
    /// * `wo_w`      - Outgoing direction in world-space.
    /// * `wi_w`      - Incident direction in world-space.
    /// * `bxdf_type` - The `BxdFType` to evaluate.
    pub fn f(&self, wo_w: &Vector3f, wi_w: &Vector3f, bxdf_type: BxDFType) -> Spectrum {
        let wi = self.world_to_local(wi_w);
        let wo = self.world_to_local(wo_w);
        if wo.z == 0.0 {
            Spectrum::ZERO
        } else {
            self.sum_f(wo_w, wi_w, &wo, &wi, bxdf_type)
        }
    }

    /// Returns the value of the BSDF given the outgpoing direction.
    ///
    /// * `wo_w`      - Outgoing direction in world-space.
    /// * `u`         - The 2D uniform random values.
    /// * `bxdf_type` - The `BxdFType` to evaluate.
    pub fn sample_f(&self, wo_w: &Vector3f, u: &Point2f, bxdf_type: BxDFType) -> BxDFSample {
        // Choose which `BxDF` to sample.
        let matching_comps = self.num_components(bxdf_type);
        if matching_comps == 0 {
            return BxDFSample::default();
        }
        let comp = min(
            (u[0] * matching_comps as Float).floor() as usize,
            matching_comps - 1,
        );

        // Get BxDF for chosen component.
        let chosen = self
            .bxdfs
            .iter()
            .enumerate()
            .filter(|(_, b)| b.matches_flags(bxdf_type))
            .nth(comp);
        let (chosen_index, bxdf) = match chosen {
            Some(c) => c,
            None => return BxDFSample::default(),
        };

        // Remap BxDF sample `u` to `[0,1)^2`.
        let u_remapped = Point2f::new(
            min(
                u[0] * matching_comps as Float - comp as Float,
                ONE_MINUS_EPSILON,
            ),
            u[1],
        );

        // Sample chosen `BxDF`.
        let wo = self.world_to_local(wo_w);
        if wo.z == 0.0 {
            return BxDFSample::default();
        }

        let sampled_type = bxdf.get_type();
        let sample = bxdf.sample_f(&wo, &u_remapped);
        let mut pdf = sample.pdf;
        if pdf == 0.0 {
            return BxDFSample::from(sampled_type);
        }
        let wi_world = self.local_to_world(&sample.wi);

        // Compute overall PDF with all matching BxDFs.
        if matching_comps > 1 {
            for (i, b) in self.bxdfs.iter().enumerate() {
                if i != chosen_index && b.matches_flags(bxdf_type) {
                    pdf += b.pdf(&wo, &sample.wi);
                }
            }
            pdf /= matching_comps as Float;
        }

        // Compute value of BSDF for sampled direction.
        let f = self.sum_f(wo_w, &wi_world, &wo, &sample.wi, bxdf_type);
        BxDFSample::new(f, pdf, wi_world, sampled_type)
    }

    /// Computes the hemispherical-directional reflectance function ρ.
    ///
    /// * `wo_w`      - Outgoing direction in world-space.
    /// * `u`         - Samples used by Monte Carlo algorithm.
    /// * `bxdf_type` - The `BxdFType` to evaluate.
    pub fn rho_hd(&self, wo_w: &Vector3f, u: &[Point2f], bxdf_type: BxDFType) -> Spectrum {
        let wo = self.world_to_local(wo_w);

        let mut l = Spectrum::ZERO;
        for bxdf in self.bxdfs.iter() {
            if bxdf.matches_flags(bxdf_type) {
                l += bxdf.rho_hd(&wo, u);
            }
        }
        l
    }

    /// Evaluates the PDF for the sampling method.
    ///
    /// * `wo_w`      - Outgoing direction in world-space.
    /// * `wi_w`      - Incident direction in world-space.
    /// * `bxdf_type` - The `BxdFType` to evaluate.
    pub fn pdf(&self, wo_w: &Vector3f, wi_w: &Vector3f, bxdf_type: BxDFType) -> Float {
        if self.bxdfs.is_empty() {
            return 0.0;
        }

        let wo = self.world_to_local(wo_w);
        let wi = self.world_to_local(wi_w);
        if wo.z == 0.0 {
            return 0.0;
        }

        let mut matching_comps = 0;
        let mut pdf = 0.0;
        for bxdf in self.bxdfs.iter() {
            if bxdf.matches_flags(bxdf_type) {
                matching_comps += 1;
                pdf += bxdf.pdf(&wo, &wi);
            }
        }
        if matching_comps > 0 {
            pdf / matching_comps as Float
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    fn flat_bsdf() -> BSDF {
        let si = SurfaceInteraction::new(
            Point3f::new(0.0, 0.0, 0.0),
            Point2f::new(0.5, 0.5),
            Vector3f::new(0.0, 0.0, 1.0),
            Normal3f::new(0.0, 0.0, 1.0),
            Vector3f::new(1.0, 0.0, 0.0),
        );
        BSDF::new(&si)
    }

    #[test]
    fn frame_is_orthonormal_for_skewed_tangent() {
        let si = SurfaceInteraction::new(
            Point3f::new(0.0, 0.0, 0.0),
            Point2f::new(0.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
            Normal3f::new(0.0, 1.0, 0.0),
            Vector3f::new(1.0, 1.0, 0.0),
        );
        let bsdf = BSDF::new(&si);
        let n = Vector3f::from(bsdf.ns);
        assert!(approx_eq!(Float, bsdf.ss.dot(&n), 0.0, epsilon = 1e-6));
        assert!(approx_eq!(Float, bsdf.ts.dot(&n), 0.0, epsilon = 1e-6));
        assert!(approx_eq!(Float, bsdf.ss.dot(&bsdf.ts), 0.0, epsilon = 1e-6));
        assert!(approx_eq!(Float, bsdf.ss.length(), 1.0, epsilon = 1e-6));

        let local = bsdf.world_to_local(&n);
        assert!(approx_eq!(Float, local.z, 1.0, epsilon = 1e-6));
    }

    #[test]
    fn degenerate_tangent_still_builds_a_frame() {
        let si = SurfaceInteraction::new(
            Point3f::new(0.0, 0.0, 0.0),
            Point2f::new(0.0, 0.0),
            Vector3f::new(0.0, 0.0, 1.0),
            Normal3f::new(0.0, 0.0, 1.0),
            Vector3f::ZERO,
        );
        let bsdf = BSDF::new(&si);
        assert!(approx_eq!(Float, bsdf.ss.length(), 1.0, epsilon = 1e-6));
        assert!(approx_eq!(Float, bsdf.ts.length(), 1.0, epsilon = 1e-6));
    }

    #[test]
    fn weights_scale_each_lobe() {
        let mut bsdf = flat_bsdf();
        bsdf.add(LambertianReflection::new(Spectrum::ONE).into(), 0.25);
        bsdf.add(LambertianReflection::new(Spectrum::ONE).into(), 0.5);

        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let wi = Vector3f::new(0.6, 0.0, 0.8);
        let f = bsdf.f(&wo, &wi, BxDFType::BSDF_ALL);
        assert!(approx_eq!(Float, f[0], 0.75 * INV_PI, epsilon = 1e-6));
    }

    #[test]
    fn reflection_lobes_ignore_transmitted_directions() {
        let mut bsdf = flat_bsdf();
        bsdf.add(LambertianReflection::new(Spectrum::ONE).into(), 1.0);

        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let wi = Vector3f::new(0.0, 0.6, -0.8);
        assert!(bsdf.f(&wo, &wi, BxDFType::BSDF_ALL).is_black());
    }

    #[test]
    fn unmatched_flags_have_no_components() {
        let mut bsdf = flat_bsdf();
        bsdf.add(LambertianReflection::new(Spectrum::ONE).into(), 1.0);
        assert_eq!(bsdf.num_components(BxDFType::BSDF_ALL), 1);
        assert_eq!(
            bsdf.num_components(BxDFType::BSDF_REFLECTION | BxDFType::BSDF_GLOSSY),
            0
        );

        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let sample = bsdf.sample_f(&wo, &Point2f::new(0.5, 0.5), BxDFType::BSDF_GLOSSY);
        assert_eq!(sample.pdf, 0.0);
    }

    #[test]
    fn sampled_pdf_matches_evaluated_pdf() {
        let mut bsdf = flat_bsdf();
        bsdf.add(LambertianReflection::new(Spectrum::ONE).into(), 1.0);
        bsdf.add(OrenNayar::new(Spectrum::new(0.5), 0.3).into(), 0.5);

        let wo = Vector3f::new(0.3, 0.0, 0.9).normalize();
        let sample = bsdf.sample_f(&wo, &Point2f::new(0.7, 0.2), BxDFType::BSDF_ALL);
        assert!(sample.pdf > 0.0);
        let pdf = bsdf.pdf(&wo, &sample.wi, BxDFType::BSDF_ALL);
        assert!(approx_eq!(Float, sample.pdf, pdf, epsilon = 1e-5));
    }

    #[test]
    fn empty_bsdf_is_black() {
        let bsdf = flat_bsdf();
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        assert!(bsdf.f(&wo, &wo, BxDFType::BSDF_ALL).is_black());
        assert_eq!(bsdf.pdf(&wo, &wo, BxDFType::BSDF_ALL), 0.0);
    }
}
