//! Fresnel Dielectrics and Conductors

#![allow(dead_code)]

use super::*;

/// Models for computing Fresnel reflection coefficients.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Fresnel {
    NoOp(FresnelNoOp),
    Dielectric(FresnelDielectric),
    Conductor(FresnelConductor),
}

impl Fresnel {
    /// Returns the amount of light reflected by the surface.
    ///
    /// * `cos_theta_i` - Cosine of the incident angle.
    /// * `cos_theta_o` - Cosine of the outgoing (transmitted) angle.
    pub fn evaluate(&self, cos_theta_i: Float, cos_theta_o: Float) -> Spectrum {
        match self {
            Self::NoOp(f) => f.evaluate(cos_theta_i, cos_theta_o),
            Self::Dielectric(f) => f.evaluate(cos_theta_i, cos_theta_o),
            Self::Conductor(f) => f.evaluate(cos_theta_i, cos_theta_o),
        }
    }
}

/// Implements `Fresnel` for materials that reflect 100% of all incoming light.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FresnelNoOp {}

impl FresnelNoOp {
    /// Returns the amount of light reflected by the surface.
    pub fn evaluate(&self, _cos_theta_i: Float, _cos_theta_o: Float) -> Spectrum {
        Spectrum::ONE
    }
}

impl From<FresnelNoOp> for Fresnel {
    fn from(f: FresnelNoOp) -> Self {
        Self::NoOp(f)
    }
}

/// Implements `Fresnel` for conductors.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FresnelConductor {
    /// Index of refraction of the conductor.
    eta: Spectrum,

    /// Absorption coefficient.
    k: Spectrum,
}

impl FresnelConductor {
    /// Create a new `FresnelConductor`.
    ///
    /// * `eta` - Index of refraction of the conductor.
    /// * `k`   - Absorption coefficient.
    pub fn new(eta: Spectrum, k: Spectrum) -> Self {
        Self { eta, k }
    }

    /// Returns the amount of light reflected by the surface. Only the incident
    /// angle is used; it is measured on either side of the normal.
    ///
    /// * `cos_theta_i` - Cosine of the incident angle.
    pub fn evaluate(&self, cos_theta_i: Float, _cos_theta_o: Float) -> Spectrum {
        let abs_cos = abs(cos_theta_i);
        let sq_cos = abs_cos * abs_cos;
        let one = Spectrum::ONE;

        let t = self.eta * (2.0 * abs_cos);
        let tmp_f = self.eta * self.eta + self.k * self.k;
        let tmp = tmp_f * sq_cos;

        let r_parl = (tmp - t + one) / (tmp + t + one);
        let r_perp = (tmp_f - t + Spectrum::new(sq_cos)) / (tmp_f + t + Spectrum::new(sq_cos));

        (r_parl + r_perp) * 0.5
    }
}

impl From<FresnelConductor> for Fresnel {
    fn from(f: FresnelConductor) -> Self {
        Self::Conductor(f)
    }
}

/// Implements `Fresnel` for dielectric materials.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FresnelDielectric {
    /// Index of refraction for the incident side of the surface.
    eta_i: Float,

    /// Index of refraction for the transmitted side of the surface.
    eta_t: Float,
}

impl FresnelDielectric {
    /// Create a new `FresnelDielectric`.
    ///
    /// * `eta_i` - Index of refraction for the incident side.
    /// * `eta_t` - Index of refraction for the transmitted side.
    pub fn new(eta_i: Float, eta_t: Float) -> Self {
        Self { eta_i, eta_t }
    }

    /// Returns the amount of light reflected by the surface. The result is
    /// NaN when both cosines are zero.
    ///
    /// * `cos_theta_i` - Cosine of the incident angle.
    /// * `cos_theta_o` - Cosine of the transmitted angle.
    pub fn evaluate(&self, cos_theta_i: Float, cos_theta_o: Float) -> Spectrum {
        let cos_i = abs(cos_theta_i);
        let cos_o = abs(cos_theta_o);
        let t0 = self.eta_t * cos_i;
        let t1 = self.eta_i * cos_o;
        let t2 = self.eta_i * cos_i;
        let t3 = self.eta_t * cos_o;

        let r_parl = (t0 - t1) / (t0 + t1);
        let r_perp = (t2 - t3) / (t2 + t3);

        Spectrum::new((r_parl * r_parl + r_perp * r_perp) * 0.5)
    }
}

impl From<FresnelDielectric> for Fresnel {
    fn from(f: FresnelDielectric) -> Self {
        Self::Dielectric(f)
    }
}
