//! Core types for Jones-matrix channel analysis
//!
//! This crate provides the foundation shared by the jones-* crates:
//!
//! - [`Complex`]: double-precision complex arithmetic with a total
//!   (epsilon-substituting) division
//! - [`JonesMatrix`] / [`JonesSample`]: 2x2 polarization transfer matrices
//!   and their timestamped observations
//! - [`Error`] / [`Result`]: the unified error type for the workspace
//! - [`utils::floor_at`]: the clamp primitive used at numerically sensitive
//!   sites
//!
//! # Example
//!
//! ```rust
//! use jones_core::{Complex, JonesMatrix};
//!
//! let m = JonesMatrix::new(
//!     Complex::new(0.999, 0.01),
//!     Complex::new(0.005, -0.002),
//!     Complex::new(-0.003, 0.004),
//!     Complex::new(0.998, 0.02),
//! );
//! assert!(m.det().modulus() > 0.9);
//! ```

pub mod complex;
pub mod error;
pub mod matrix;
pub mod utils;

pub use complex::{det2x2, Complex, DIV_EPS};
pub use error::{Error, Result};
pub use matrix::{JonesMatrix, JonesSample};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::complex::{det2x2, Complex};
    pub use crate::error::{Error, Result};
    pub use crate::matrix::{JonesMatrix, JonesSample};
    pub use crate::utils::floor_at;
}
