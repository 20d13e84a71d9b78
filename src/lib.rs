//! Jones-matrix channel diagnostics with STA/LTA event detection
//!
//! This crate re-exports the `jones-*` workspace members as one surface:
//!
//! - [`jones_core`]: complex arithmetic and Jones-matrix types
//! - [`jones_ingest`]: delimited-text sample ingestion
//! - [`jones_metrics`]: per-sample scalar diagnostics
//! - [`jones_detect`]: STA/LTA event detection over the activity series
//!
//! # Pipeline
//!
//! Raw text rows become ordered samples, samples become per-sample metrics,
//! and the activity metric drives the event detector:
//!
//! ```rust
//! use jones_monitor::{compute_metrics, parse_jones_csv, StaLtaDetector};
//!
//! let text = "t,a_re,a_im,b_re,b_im,c_re,c_im,d_re,d_im\n\
//!             0.00,1,0,0,0,0,0,1,0\n\
//!             0.01,0.999,0.01,0.005,-0.002,-0.003,0.004,0.998,0.02";
//!
//! let samples = parse_jones_csv(text);
//! let metrics = compute_metrics(&samples);
//! let result = StaLtaDetector::new(5, 50, 3.0)
//!     .detect(&metrics.activity(), &metrics.times());
//!
//! assert_eq!(result.ratios().len(), samples.len());
//! ```

pub use jones_core;
pub use jones_detect;
pub use jones_ingest;
pub use jones_metrics;

// Common entry points, flattened for convenience.
pub use jones_core::{Complex, Error, JonesMatrix, JonesSample, Result};
pub use jones_detect::{
    DetectionEvent, DetectionResult, OnlineStaLta, StaLtaDetector, StaLtaParameters,
};
pub use jones_ingest::{parse_jones_csv, read_jones_csv};
pub use jones_metrics::{compute_metrics, MetricSample, MetricSeries};
