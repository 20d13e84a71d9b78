//! The per-sample metrics engine
//!
//! A strict left-to-right fold over the input samples. The only state is the
//! previous metric sample, needed for the activity delta; everything else is
//! a pure function of the current matrix. All branches are total: degenerate
//! matrices are floored, never rejected, and an empty input yields an empty
//! series.

use crate::eigen::{hermitian_eigenvalues, hermitian_product};
use crate::phase::wrap_angle;
use crate::types::{MetricSample, MetricSeries};
use jones_core::utils::floor_at;
use jones_core::{JonesMatrix, JonesSample};

/// Floor applied to eigenvalues, determinant magnitudes and relative-delta
/// denominators before logs, square roots and ratios.
pub const METRIC_EPS: f64 = 1e-12;

// Fixed fusion weights for the activity score. Heuristic constants chosen to
// bring the four indicators onto one comparable scale.
const W_DET: f64 = 1.0;
const W_PHASE: f64 = 0.5;
const W_FROB: f64 = 0.5;
const W_COND: f64 = 0.2;

/// Frobenius norm: Euclidean norm of the four component moduli.
///
/// Chained `hypot` keeps the reduction stable for extreme magnitudes.
pub fn frobenius_norm(j: &JonesMatrix) -> f64 {
    j.a.modulus()
        .hypot(j.b.modulus())
        .hypot(j.c.modulus())
        .hypot(j.d.modulus())
}

/// Condition number: sqrt of the floored Hermitian-product eigenvalue ratio.
///
/// Flooring both eigenvalues at [`METRIC_EPS`] before the ratio keeps the
/// result finite and >= 1 on near-singular and near-degenerate input.
pub fn condition_number(j: &JonesMatrix) -> f64 {
    let h = hermitian_product(j);
    let (lmax, lmin) = hermitian_eigenvalues(&h);
    floor_at(lmax, METRIC_EPS).sqrt() / floor_at(lmin, METRIC_EPS).sqrt()
}

/// Determinant magnitude, floored at [`METRIC_EPS`] so its log stays finite.
pub fn determinant_magnitude(j: &JonesMatrix) -> f64 {
    floor_at(j.det().modulus(), METRIC_EPS)
}

/// Determinant phase: raw principal value in (-pi, pi], not unwrapped.
pub fn determinant_phase(j: &JonesMatrix) -> f64 {
    j.det().arg()
}

/// Derive the full metric sequence for an ordered sample sequence.
///
/// Output has the same length and order as the input. The first sample's
/// activity is 0 by definition; every later activity depends only on the
/// current and immediately preceding metric sample.
pub fn compute_metrics(samples: &[JonesSample]) -> MetricSeries {
    let mut out = Vec::with_capacity(samples.len());
    let mut prev: Option<MetricSample> = None;

    for s in samples {
        let det_mag = determinant_magnitude(&s.matrix);
        let det_phase = determinant_phase(&s.matrix);
        let frob_norm = frobenius_norm(&s.matrix);
        let cond = condition_number(&s.matrix);

        let activity = match prev {
            None => 0.0,
            Some(p) => {
                let d_det = (det_mag.ln() - p.det_mag.ln()).abs();
                let d_phi = wrap_angle(det_phase - p.det_phase);
                let d_frob = (frob_norm - p.frob_norm).abs() / floor_at(p.frob_norm, METRIC_EPS);
                let d_cond = (cond.ln() - p.cond.ln()).abs();
                W_DET * d_det + W_PHASE * d_phi.abs() + W_FROB * d_frob + W_COND * d_cond
            }
        };

        let m = MetricSample {
            t: s.t,
            det_mag,
            det_phase,
            frob_norm,
            cond,
            activity,
        };
        out.push(m);
        prev = Some(m);
    }

    MetricSeries::new(out)
}
