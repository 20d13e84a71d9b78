//! Metric sample and series types

use crate::phase::unwrap_phases;
use std::fmt;

/// The five derived scalars for one Jones-matrix sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSample {
    /// Timestamp carried over from the input sample.
    pub t: f64,
    /// Determinant magnitude, floored to a small positive value.
    pub det_mag: f64,
    /// Determinant phase, raw principal value in (-pi, pi].
    pub det_phase: f64,
    /// Frobenius norm of the matrix.
    pub frob_norm: f64,
    /// Condition number derived from the Hermitian-product eigenvalues.
    pub cond: f64,
    /// Change-activity score relative to the previous sample (0 for the first).
    pub activity: f64,
}

impl fmt::Display for MetricSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={:.4} |det|={:.4e} arg(det)={:.4} ||J||F={:.4} cond={:.4} activity={:.4}",
            self.t, self.det_mag, self.det_phase, self.frob_norm, self.cond, self.activity
        )
    }
}

/// A per-sample metric sequence, aligned with its input sample sequence.
///
/// Column accessors return aligned series suitable for direct plotting; the
/// display-oriented columns ([`log_det_mag`](Self::log_det_mag),
/// [`unwrapped_det_phase`](Self::unwrapped_det_phase)) apply the same
/// transformations the monitoring front-end charts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricSeries {
    samples: Vec<MetricSample>,
}

impl MetricSeries {
    pub(crate) fn new(samples: Vec<MetricSample>) -> Self {
        Self { samples }
    }

    /// The underlying metric samples, in input order.
    pub fn samples(&self) -> &[MetricSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Timestamp column.
    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.t).collect()
    }

    /// Determinant magnitude column.
    pub fn det_mag(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.det_mag).collect()
    }

    /// Natural log of the determinant magnitude column. Total because the
    /// magnitudes are floored at a positive value on computation.
    pub fn log_det_mag(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.det_mag.ln()).collect()
    }

    /// Raw (wrapped) determinant phase column.
    pub fn det_phase(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.det_phase).collect()
    }

    /// Determinant phase column unwrapped cumulatively across the whole run.
    ///
    /// This is the continuous display track; it is not the per-pair wrap used
    /// inside the activity metric.
    pub fn unwrapped_det_phase(&self) -> Vec<f64> {
        let raw = self.det_phase();
        unwrap_phases(&raw)
    }

    /// Frobenius norm column.
    pub fn frob_norm(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.frob_norm).collect()
    }

    /// Condition number column.
    pub fn cond(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.cond).collect()
    }

    /// Activity column, the event detector's input.
    pub fn activity(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.activity).collect()
    }
}

impl<'a> IntoIterator for &'a MetricSeries {
    type Item = &'a MetricSample;
    type IntoIter = std::slice::Iter<'a, MetricSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
