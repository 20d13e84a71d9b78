//! Scalar diagnostics for Jones-matrix time series
//!
//! For each timestamped 2x2 complex matrix this crate derives five scalars:
//!
//! - determinant magnitude (floored) and raw determinant phase
//! - Frobenius norm
//! - condition number, from the closed-form eigenvalues of J^H * J
//! - an activity score fusing the deltas of the other four against the
//!   previous sample
//!
//! The activity series is the input contract of the event detector: any
//! producer of a real-valued timestamped series can drive it.
//!
//! # Example
//!
//! ```rust
//! use jones_core::{JonesMatrix, JonesSample};
//! use jones_metrics::compute_metrics;
//!
//! let samples = vec![JonesSample::new(0.0, JonesMatrix::identity())];
//! let metrics = compute_metrics(&samples);
//! assert_eq!(metrics.samples()[0].activity, 0.0);
//! ```

pub mod eigen;
pub mod engine;
pub mod phase;
pub mod types;

pub use eigen::{hermitian_eigenvalues, hermitian_product};
pub use engine::{
    compute_metrics, condition_number, determinant_magnitude, determinant_phase, frobenius_norm,
    METRIC_EPS,
};
pub use phase::{unwrap_phases, wrap_angle};
pub use types::{MetricSample, MetricSeries};
