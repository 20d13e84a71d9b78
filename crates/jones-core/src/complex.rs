//! Complex number primitives
//!
//! A small value type for double-precision complex arithmetic. All operations
//! return new values; nothing here allocates or errors. Division follows a
//! graceful-degradation policy: an exactly-zero denominator is replaced by a
//! tiny positive epsilon so the pipeline stays total on near-singular input.
//! Callers must not rely on precision near such singularities.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Substituted for a denominator whose squared modulus is exactly zero.
pub const DIV_EPS: f64 = 1e-18;

/// A complex number as an ordered pair of finite f64 values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    /// Create a complex number from real and imaginary parts.
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// The additive identity.
    #[inline]
    pub const fn zero() -> Self {
        Self { re: 0.0, im: 0.0 }
    }

    /// The multiplicative identity.
    #[inline]
    pub const fn one() -> Self {
        Self { re: 1.0, im: 0.0 }
    }

    /// Complex conjugate.
    #[inline]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Euclidean norm |z|, via `hypot` to avoid overflow/underflow.
    #[inline]
    pub fn modulus(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Squared norm |z|^2.
    #[inline]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Principal argument in (-pi, pi], with `arg(0, 0) == 0`.
    #[inline]
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }
}

impl Add for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Div for Complex {
    type Output = Complex;

    /// Division with epsilon substitution: a denominator of exactly zero
    /// squared modulus is replaced by [`DIV_EPS`] instead of producing
    /// inf/NaN.
    #[inline]
    fn div(self, rhs: Complex) -> Complex {
        let mut denom = rhs.norm_sqr();
        if denom == 0.0 {
            denom = DIV_EPS;
        }
        Complex::new(
            (self.re * rhs.re + self.im * rhs.im) / denom,
            (self.im * rhs.re - self.re * rhs.im) / denom,
        )
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im >= 0.0 {
            write!(f, "{}+{}j", self.re, self.im)
        } else {
            write!(f, "{}{}j", self.re, self.im)
        }
    }
}

/// Determinant of the row-major 2x2 matrix [[a, b], [c, d]]: `a*d - b*c`.
#[inline]
pub fn det2x2(a: Complex, b: Complex, c: Complex, d: Complex) -> Complex {
    a * d - b * c
}
