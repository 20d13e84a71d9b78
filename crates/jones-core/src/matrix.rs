//! Jones matrix and sample types
//!
//! A Jones matrix is a 2x2 complex matrix describing a linear transformation
//! of a two-component polarization state. No algebraic invariant is enforced
//! here: matrices need not be unitary or invertible, and downstream code must
//! tolerate near-singular values.

use crate::complex::{det2x2, Complex};
use std::fmt;

/// A 2x2 complex matrix [[a, b], [c, d]], row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JonesMatrix {
    pub a: Complex,
    pub b: Complex,
    pub c: Complex,
    pub d: Complex,
}

impl JonesMatrix {
    /// Create a matrix from its row-major entries.
    #[inline]
    pub const fn new(a: Complex, b: Complex, c: Complex, d: Complex) -> Self {
        Self { a, b, c, d }
    }

    /// The identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self {
            a: Complex::one(),
            b: Complex::zero(),
            c: Complex::zero(),
            d: Complex::one(),
        }
    }

    /// Determinant `a*d - b*c`.
    #[inline]
    pub fn det(&self) -> Complex {
        det2x2(self.a, self.b, self.c, self.d)
    }
}

impl fmt::Display for JonesMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[[{}, {}], [{}, {}]]", self.a, self.b, self.c, self.d)
    }
}

/// One timestamped Jones matrix observation.
///
/// Sequences of samples are kept in input order; ordering is the producer's
/// responsibility, but causal consumers assume non-decreasing timestamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JonesSample {
    /// Timestamp (seconds, or whatever unit the acquisition uses).
    pub t: f64,
    /// The observed transfer matrix.
    pub matrix: JonesMatrix,
}

impl JonesSample {
    /// Create a new sample.
    #[inline]
    pub const fn new(t: f64, matrix: JonesMatrix) -> Self {
        Self { t, matrix }
    }
}
