//! Interpolation

use crate::pbrt::*;

/// Returns the Catmull-Rom spline weights for the four nodes around `x`, and
/// the index of the first of those nodes. The first index is -1 when `x` lies
/// in the first interval; its weight is then zero. Returns `None` if `x` lies
/// outside the node range.
///
/// * `nodes` - Sorted spline nodes.
/// * `x`     - Position to evaluate.
pub fn catmull_rom_weights(nodes: &[Float], x: Float) -> Option<([Float; 4], isize)> {
    // Return None if `x` is out of bounds.
    let size = nodes.len();
    if size < 2 || !(x >= nodes[0] && x <= nodes[size - 1]) {
        return None;
    }

    // Search for the interval `idx` containing `x`.
    let idx = find_interval(size, |i| nodes[i] <= x);
    let offset = idx as isize - 1;
    let x0 = nodes[idx];
    let x1 = nodes[idx + 1];

    // Compute the `t` parameter and powers.
    let t = (x - x0) / (x1 - x0);
    let t2 = t * t;
    let t3 = t2 * t;

    // Compute initial node weights `w_1` and `w_2`.
    let mut weights = [0.0; 4];
    weights[1] = 2.0 * t3 - 3.0 * t2 + 1.0;
    weights[2] = -2.0 * t3 + 3.0 * t2;

    // Compute first node weight `w_0`.
    if idx > 0 {
        let w0 = (t3 - 2.0 * t2 + t) * (x1 - x0) / (x1 - nodes[idx - 1]);
        weights[0] = -w0;
        weights[2] += w0;
    } else {
        let w0 = t3 - 2.0 * t2 + t;
        weights[0] = 0.0;
        weights[1] -= w0;
        weights[2] += w0;
    }

    // Compute last node weight `w_3`.
    if idx + 2 < size {
        let w3 = (t3 - t2) * (x1 - x0) / (nodes[idx + 2] - x0);
        weights[1] -= w3;
        weights[3] = w3;
    } else {
        let w3 = t3 - t2;
        weights[1] -= w3;
        weights[2] += w3;
        weights[3] = 0.0;
    }

    Some((weights, offset))
}

/// Evaluates a Fourier cosine series `Σ a_k cos(kϕ)` using the cosine
/// recurrence in double precision.
///
/// * `a`       - Coefficients.
/// * `cos_phi` - cos(ϕ).
pub fn fourier(a: &[Float], cos_phi: f64) -> Float {
    let mut value = 0.0_f64;

    // Initialize cosine iterates.
    let mut cos_k_minus_one_phi = cos_phi;
    let mut cos_k_phi = 1.0_f64;
    for ak in a {
        // Add the current summand and update the cosine iterates.
        value += (*ak as f64) * cos_k_phi;
        let cos_k_plus_one_phi = 2.0_f64 * cos_phi * cos_k_phi - cos_k_minus_one_phi;
        cos_k_minus_one_phi = cos_k_phi;
        cos_k_phi = cos_k_plus_one_phi;
    }

    value as Float
}
