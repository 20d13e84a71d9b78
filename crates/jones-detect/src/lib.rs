//! STA/LTA event detection over activity series
//!
//! This crate segments a real-valued activity series (paired with
//! timestamps) into discrete events using the classic short-term-average /
//! long-term-average ratio. It is decoupled from the metrics engine through
//! the activity contract: any producer of a timestamped real series can
//! drive it.
//!
//! # Usage
//!
//! ```rust
//! use jones_detect::StaLtaDetector;
//!
//! // A burst on a quiet background.
//! let mut activity = vec![0.0; 200];
//! for x in activity.iter_mut().skip(60) {
//!     *x = 100.0;
//! }
//! let times: Vec<f64> = (0..200).map(|i| i as f64 * 0.01).collect();
//!
//! let detector = StaLtaDetector::new(5, 50, 3.0);
//! let result = detector.detect(&activity, &times);
//!
//! assert_eq!(result.count(), 1);
//! assert!(result.events()[0].is_ongoing());
//! ```

pub mod stalta;
pub mod traits;
pub mod types;
pub mod visualization;
pub mod window;

pub use stalta::{OnlineStaLta, StaLtaDetector, StaLtaParameters};
pub use traits::{ConfigurableDetector, EventDetectorProperties};
pub use types::{DetectionEvent, DetectionResult};
pub use visualization::{DetectionVisualizer, NullDetectionVisualizer};
pub use window::MeanWindow;
