//! Closed-form eigenvalues of the 2x2 Hermitian product
//!
//! The condition number of a Jones matrix J is derived from the eigenvalues
//! of H = J^H * J (conjugate transpose times J). H is Hermitian positive
//! semi-definite by construction, so its eigenvalues are real and
//! non-negative up to round-off, and the 2x2 case has a closed form with no
//! need for an iterative solver.

use jones_core::{Complex, JonesMatrix};

/// The Hermitian product H = J^H * J as row-major entries [h11, h12, h21, h22].
///
/// h11 and h22 are real-valued by construction and h21 == conj(h12).
pub fn hermitian_product(j: &JonesMatrix) -> [Complex; 4] {
    let (a, b, c, d) = (j.a, j.b, j.c, j.d);
    let (ah, bh, ch, dh) = (a.conj(), b.conj(), c.conj(), d.conj());
    [
        ah * a + ch * c,
        ah * b + ch * d,
        bh * a + dh * c,
        bh * b + dh * d,
    ]
}

/// Eigenvalues of a 2x2 Hermitian matrix, returned as (largest, smallest).
///
/// Only the real diagonal and the off-diagonal modulus enter the formula.
/// The max/min is taken explicitly rather than trusting the +/- branches of
/// the quadratic.
pub fn hermitian_eigenvalues(h: &[Complex; 4]) -> (f64, f64) {
    let a = h[0].re;
    let d = h[3].re;
    let off = h[1].modulus();

    let trace = a + d;
    let diff = a - d;
    let disc = (diff * diff + 4.0 * off * off).sqrt();

    let l1 = 0.5 * (trace + disc);
    let l2 = 0.5 * (trace - disc);
    (l1.max(l2), l1.min(l2))
}
